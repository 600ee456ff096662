//! Knock out the white background of an icon
//!
//! Reads `public/icons/shopee.jpg`, clears every near-white pixel to
//! transparent, inverts the rest and writes `public/icons/shopee.png`.
//! The paths can be overridden by an `icon-knockout.toml` in the working
//! directory.

mod config;

use anyhow::Result;
use clap::Parser;
use config::Config;
use icon_effect::{WhiteKnockout, io};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "icon-knockout",
    version,
    about = "Remove the white background of an icon and invert it onto a transparent PNG"
)]
struct Cli {
    /// TOML file overriding the input and output paths
    #[arg(short, long, value_name = "FILE", default_value = config::CONFIG_FILE)]
    config: PathBuf,
}

fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

/// Decode, knock out and encode. Returns the written path.
fn run(config: &Config) -> Result<PathBuf> {
    config.validate()?;
    let output_path = config.output_path();

    let mut img = io::decode(&config.input)?;
    let stats = WhiteKnockout::new().run(&mut img);
    log::info!(
        "Cleared {} background pixels, inverted {} of {}",
        stats.cleared,
        stats.inverted,
        stats.total()
    );

    io::encode(&img, &output_path, io::OUTPUT_FORMAT)?;
    Ok(output_path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger();

    let config = config::load(&cli.config)?;
    let output_path = run(&config)?;

    println!("[SUCCESS] Processed icon saved to: {}", output_path.display());
    println!("  - Background removed (white -> transparent)");
    println!("  - Logo inverted (black -> white)");
    println!("  - Format: PNG with alpha channel");

    Ok(())
}
