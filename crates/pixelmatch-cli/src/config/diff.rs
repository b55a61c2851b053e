use pixelmatch::{Color, Options};
use serde::Deserialize;

use super::{validate_alpha, validate_threshold};

fn parse_threshold(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    validate_threshold(v)
}

fn parse_alpha(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    validate_alpha(v)
}

/// Comparison settings.
///
/// Every field is `Option`: `None` means "use the next layer down".
/// Serves both TOML deserialization (`[diff]`) and CLI argument parsing.
#[derive(Clone, Debug, Default, PartialEq, clap::Args, Deserialize)]
pub struct DiffConfig {
    /// Matching threshold (0.0-1.0); smaller is more sensitive
    #[arg(long, short = 't', value_parser = parse_threshold)]
    #[serde(default)]
    pub threshold: Option<f64>,

    /// Count anti-aliased pixels as differences
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    #[serde(default)]
    pub include_aa: Option<bool>,

    /// Opacity of the original image in the diff output (0.0-1.0)
    #[arg(long, value_parser = parse_alpha)]
    #[serde(default)]
    pub alpha: Option<f64>,

    /// Color of anti-aliased pixels (#rrggbb, #rrggbbaa or r,g,b[,a])
    #[arg(long)]
    #[serde(default)]
    pub aa_color: Option<Color>,

    /// Color of differing pixels
    #[arg(long)]
    #[serde(default)]
    pub diff_color: Option<Color>,

    /// Color of pixels that get darker in the second image
    #[arg(long)]
    #[serde(default)]
    pub diff_color_alt: Option<Color>,

    /// Draw the diff over a transparent background
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    #[serde(default)]
    pub diff_mask: Option<bool>,
}

impl DiffConfig {
    /// Overlay non-None fields from `other` onto self.
    pub fn merge(&mut self, other: &DiffConfig) {
        if other.threshold.is_some() {
            self.threshold = other.threshold;
        }
        if other.include_aa.is_some() {
            self.include_aa = other.include_aa;
        }
        if other.alpha.is_some() {
            self.alpha = other.alpha;
        }
        if other.aa_color.is_some() {
            self.aa_color = other.aa_color;
        }
        if other.diff_color.is_some() {
            self.diff_color = other.diff_color;
        }
        if other.diff_color_alt.is_some() {
            self.diff_color_alt = other.diff_color_alt;
        }
        if other.diff_mask.is_some() {
            self.diff_mask = other.diff_mask;
        }
    }

    /// Fill unset fields from [`Options::default`].
    pub fn to_options(&self) -> Options {
        let d = Options::default();
        Options {
            threshold: self.threshold.unwrap_or(d.threshold),
            include_aa: self.include_aa.unwrap_or(d.include_aa),
            alpha: self.alpha.unwrap_or(d.alpha),
            aa_color: self.aa_color.unwrap_or(d.aa_color),
            diff_color: self.diff_color.unwrap_or(d.diff_color),
            diff_color_alt: self.diff_color_alt.or(d.diff_color_alt),
            diff_mask: self.diff_mask.unwrap_or(d.diff_mask),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overlays_set_fields() {
        let mut base = DiffConfig {
            threshold: Some(0.2),
            alpha: Some(0.5),
            ..Default::default()
        };
        base.merge(&DiffConfig {
            threshold: Some(0.05),
            diff_mask: Some(true),
            ..Default::default()
        });
        assert_eq!(base.threshold, Some(0.05));
        assert_eq!(base.alpha, Some(0.5));
        assert_eq!(base.diff_mask, Some(true));
    }

    #[test]
    fn empty_config_gives_default_options() {
        assert_eq!(DiffConfig::default().to_options(), Options::default());
    }

    #[test]
    fn parsers_validate_range() {
        assert_eq!(parse_threshold("0.05"), Ok(0.05));
        assert!(parse_threshold("1.1").is_err());
        assert!(parse_threshold("abc").is_err());
        assert!(parse_alpha("-0.1").is_err());
    }
}
