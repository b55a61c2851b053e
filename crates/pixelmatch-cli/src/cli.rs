use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DiffConfig;

#[derive(Parser)]
#[command(
    name = "pixelmatch",
    about = "Perceptual pixel-level image comparison"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two images and report mismatched pixels (exit 0/1)
    Compare {
        /// First / reference image
        image1: PathBuf,
        /// Second / current image
        image2: PathBuf,
        /// Where to write the diff image (PNG)
        diff: Option<PathBuf>,
        /// Config file (default: ./pixelmatch.toml when present)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
        #[command(flatten)]
        diff_config: DiffConfig,
    },

    /// Create pixelmatch.toml with the default settings commented out
    Init {
        /// Overwrite an existing config
        #[arg(long, short = 'f')]
        force: bool,
    },
}
