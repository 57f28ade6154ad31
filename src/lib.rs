pub mod config;
pub mod resources;

#[cfg(test)]
mod test_log;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;

pub use config::HostConfig;
pub use resources::{FileSystem, NativeFileSystem, OpenMode, ReadTarget, ResourceError, Resources};

#[derive(Debug, Parser)]
#[command(name = "resource-host")]
#[command(about = "Load a bundled resource file and write it to stdout")]
#[command(version)]
pub struct Cli {
    #[arg(long, help = "JSON host config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Resources directory, overrides the config and RESOURCES_DIR")]
    pub resources_dir: Option<PathBuf>,

    #[arg(long, help = "Load the resource as text")]
    pub text: bool,

    #[arg(short, long, help = "Verbose output")]
    pub verbose: bool,

    /// Resource filename, relative to the resources directory.
    pub filename: PathBuf,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut stdout = io::stdout().lock();
    run_with(cli, &mut stdout)
}

/// Loads the resource `cli` names and writes it to `out`. The resources
/// directory comes from `--resources-dir`, then `RESOURCES_DIR`, then the
/// config file.
pub fn run_with(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::default(),
    }
    .with_env_overrides();
    if let Some(dir) = cli.resources_dir {
        config.resources_dir = dir;
    }
    log::info!("Resources directory: {}", config.resources_dir.display());

    let resources = config.resources();
    let contents = if cli.text {
        resources
            .read_string(&cli.filename)
            .map(String::into_bytes)
    } else {
        resources.read_binary(&cli.filename)
    }
    .with_context(|| format!("Resource '{}' is unavailable", cli.filename.display()))?;

    out.write_all(&contents)?;
    out.flush()?;

    Ok(())
}
