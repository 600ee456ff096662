use anyhow::{Context, Result, bail};
use derivative::Derivative;
use log::{debug, info};
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub const CONFIG_FILE: &str = "icon-knockout.toml";
pub const DEFAULT_INPUT: &str = "public/icons/shopee.jpg";

#[derive(Deserialize, Debug, Clone, PartialEq, Derivative)]
#[derivative(Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[derivative(Default(value = "PathBuf::from(DEFAULT_INPUT)"))]
    pub input: PathBuf,

    // None: next to the input, same name, `.png`
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("png"))
    }

    /// The output must be a new file, never the input itself.
    pub fn validate(&self) -> Result<()> {
        let output = self.output_path();
        if output == self.input {
            bail!(
                "output {} would overwrite the input, set `output` to another path",
                output.display()
            );
        }

        Ok(())
    }
}

/// Load the config at `path`. A missing file yields the defaults.
pub fn load(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(text) => {
            let config = toml::from_str::<Config>(&text)
                .with_context(|| format!("parse config {} failed", path.display()))?;
            config
                .validate()
                .with_context(|| format!("invalid config {}", path.display()))?;
            info!("Loaded config from: {}", path.display());
            Ok(config)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e).with_context(|| format!("read config {} failed", path.display())),
    }
}
