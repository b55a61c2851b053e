mod cli;
mod commands;
mod config;
mod report;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pixelmatch=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Compare {
            image1,
            image2,
            diff,
            config,
            diff_config,
        } => {
            let options = config::resolve(&diff_config, config.as_deref())?;
            let code = commands::compare(&image1, &image2, diff.as_deref(), &options)?;
            std::process::exit(code);
        }
        cli::Command::Init { force } => {
            commands::init(force)?;
        }
    }

    Ok(())
}
