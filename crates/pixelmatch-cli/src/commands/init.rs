use std::path::Path;

use anyhow::{Result, bail};

use crate::config;

/// `pixelmatch init` — create pixelmatch.toml in the working directory.
pub fn init(force: bool) -> Result<()> {
    if !force && config::config_file_exists() {
        bail!("pixelmatch.toml already exists (use --force to overwrite)");
    }

    config::write_template(Path::new("."))?;

    let verb = if force { "Regenerated" } else { "Created" };
    println!("{verb} pixelmatch.toml");
    Ok(())
}
