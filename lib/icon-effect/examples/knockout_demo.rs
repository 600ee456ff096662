//! White knockout demo
//! Draws a dark badge on a white canvas, then knocks the canvas out

use anyhow::Result;
use icon_effect::{Effect, WhiteKnockout, io};
use image::{Rgba, RgbaImage};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let (width, height) = (256u32, 256u32);
    let (cx, cy, radius) = (128i64, 128i64, 96i64);

    let img = RgbaImage::from_fn(width, height, |x, y| {
        let (dx, dy) = (x as i64 - cx, y as i64 - cy);
        if dx * dx + dy * dy <= radius * radius {
            Rgba([(x / 4) as u8, 16, (y / 4) as u8, 255])
        } else {
            Rgba([250, 250, 250, 255])
        }
    });

    let input_path = output_dir.join("knockout_input.png");
    io::encode(&img, &input_path, io::OUTPUT_FORMAT)?;

    let mut img = io::decode(&input_path)?;
    WhiteKnockout.apply(&mut img)?;

    let output_path = output_dir.join("knockout_effect.png");
    io::encode(&img, &output_path, io::OUTPUT_FORMAT)?;

    println!("✓ White knockout applied successfully!");
    println!("  Original: {}", input_path.display());
    println!("  Effect:   {}", output_path.display());

    Ok(())
}
