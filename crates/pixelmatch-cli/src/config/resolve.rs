use std::path::Path;

use anyhow::{Context, Result};
use pixelmatch::Options;
use tracing::debug;

use super::diff::DiffConfig;
use super::{load, validate_threshold};

const THRESHOLD_ENV: &str = "PIXELMATCH_THRESHOLD";

/// Resolve comparison options with CLI > env > file > defaults precedence.
pub fn resolve(cli: &DiffConfig, config_path: Option<&Path>) -> Result<Options> {
    // 1. File layer
    let file = load(config_path)?.diff;

    // 2. Env layer
    let env_threshold: Option<f64> = std::env::var(THRESHOLD_ENV)
        .ok()
        .map(|v| v.parse::<f64>())
        .transpose()
        .with_context(|| format!("{THRESHOLD_ENV} must be a valid float"))?;

    // 3. CLI on top
    let options = merge_layers(file, env_threshold, cli)?;
    debug!(?options, "resolved comparison options");
    Ok(options)
}

fn merge_layers(file: DiffConfig, env_threshold: Option<f64>, cli: &DiffConfig) -> Result<Options> {
    let mut merged = file;
    merged.merge(&DiffConfig {
        threshold: env_threshold,
        ..Default::default()
    });
    merged.merge(cli);

    if let Some(t) = merged.threshold {
        validate_threshold(t).map_err(|e| anyhow::anyhow!("{e}"))?;
    }
    Ok(merged.to_options())
}

#[cfg(test)]
mod tests {
    use pixelmatch::Color;

    use super::*;

    #[test]
    fn cli_beats_env_beats_file() {
        let file = DiffConfig {
            threshold: Some(0.3),
            alpha: Some(0.5),
            ..Default::default()
        };
        let cli = DiffConfig {
            threshold: Some(0.05),
            ..Default::default()
        };

        let options = merge_layers(file.clone(), Some(0.2), &cli).unwrap();
        assert_eq!(options.threshold, 0.05);
        assert_eq!(options.alpha, 0.5);

        let options = merge_layers(file.clone(), Some(0.2), &DiffConfig::default()).unwrap();
        assert_eq!(options.threshold, 0.2);

        let options = merge_layers(file, None, &DiffConfig::default()).unwrap();
        assert_eq!(options.threshold, 0.3);
    }

    #[test]
    fn unset_layers_fall_back_to_defaults() {
        let cli = DiffConfig {
            diff_color: Some(Color::rgb(255, 0, 255)),
            ..Default::default()
        };
        let options = merge_layers(DiffConfig::default(), None, &cli).unwrap();
        assert_eq!(
            options,
            Options {
                diff_color: Color::rgb(255, 0, 255),
                ..Options::default()
            }
        );
    }

    #[test]
    fn env_threshold_is_validated() {
        let err = merge_layers(DiffConfig::default(), Some(2.0), &DiffConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("threshold must be between"));
    }
}
