use std::path::Path;

use anyhow::{Context, Result};

use super::CONFIG_FILE;

/// Hand-written template so users can see every knob without looking up names.
const CONFIG_TEMPLATE: &str = r##"# ─────────────────────────────────────────────────────────
# Comparison settings. All fields optional.
# ─────────────────────────────────────────────────────────
[diff]
# threshold = 0.1                   # 0.0-1.0, smaller is more sensitive
# include_aa = false                # count anti-aliased pixels as differences
# alpha = 0.1                       # opacity of the original image in the diff
# aa_color = "#ffff00"              # anti-aliased pixels
# diff_color = "#ff0000"            # differing pixels
# diff_color_alt = "#00ff00"        # pixels that get darker (default: diff_color)
# diff_mask = false                 # transparent background instead of the original
"##;

pub fn config_file_exists() -> bool {
    Path::new(CONFIG_FILE).exists()
}

/// Write the template to `dir/pixelmatch.toml`.
pub fn write_template(dir: &Path) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    std::fs::write(&path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn template_parses_to_defaults() {
        let config: Config = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.diff, Default::default());
    }

    #[test]
    fn writes_into_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path()).unwrap();
        assert!(dir.path().join(CONFIG_FILE).exists());
    }
}
