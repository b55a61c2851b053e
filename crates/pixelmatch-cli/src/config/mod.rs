pub mod diff;
pub mod resolve;
pub mod template;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

pub use self::diff::DiffConfig;
pub use self::resolve::resolve;
pub use self::template::{config_file_exists, write_template};

pub(crate) const CONFIG_FILE: &str = "pixelmatch.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub diff: DiffConfig,
}

pub fn validate_threshold(v: f64) -> Result<f64, String> {
    if !(0.0..=1.0).contains(&v) {
        return Err(format!("threshold must be between 0.0 and 1.0, got {v}"));
    }
    Ok(v)
}

pub fn validate_alpha(v: f64) -> Result<f64, String> {
    if !(0.0..=1.0).contains(&v) {
        return Err(format!("alpha must be between 0.0 and 1.0, got {v}"));
    }
    Ok(v)
}

impl Config {
    /// Validate ranges that serde cannot express.
    fn validate(&self) -> Result<()> {
        if let Some(t) = self.diff.threshold {
            validate_threshold(t).map_err(|e| anyhow::anyhow!("diff.{e}"))?;
        }
        if let Some(a) = self.diff.alpha {
            validate_alpha(a).map_err(|e| anyhow::anyhow!("diff.{e}"))?;
        }
        Ok(())
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let config: Config =
            toml::from_str(content).with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Load the config file.
///
/// An explicit `path` must exist. Without one, `./pixelmatch.toml` is read
/// when present and defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p,
        None if config_file_exists() => Path::new(CONFIG_FILE),
        None => return Ok(Config::default()),
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Config::parse(&content, path)
}
