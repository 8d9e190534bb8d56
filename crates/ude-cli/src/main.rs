mod config;
mod scan;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

const DEFAULT_CONFIG: &str = "udetect.toml";

#[derive(Parser, Debug)]
#[command(name = "udetect")]
#[command(about = "Guess the character encoding of files", long_about = None)]
struct Args {
    /// Configuration file (defaults to ./udetect.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read at most this many bytes of each file
    #[arg(long)]
    max_bytes: Option<u64>,

    /// Files detected concurrently
    #[arg(long)]
    workers: Option<usize>,

    /// Files to detect
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

fn load_config(args: &Args) -> Result<CliConfig, ude_core::UdeError> {
    let mut config = match &args.config {
        Some(path) => CliConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG).is_file() => CliConfig::load(Path::new(DEFAULT_CONFIG))?,
        None => CliConfig::default(),
    };
    if let Some(max_bytes) = args.max_bytes {
        config.scan.max_bytes = Some(max_bytes);
    }
    if let Some(workers) = args.workers {
        config.scan.workers = workers;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("udetect: {}", e);
            return ExitCode::from(2);
        }
    };
    tracing::info!(
        "scanning {} files with {} workers",
        args.paths.len(),
        config.scan.workers
    );

    let outcomes = scan::scan(
        args.paths,
        config.detector,
        config.scan.max_bytes,
        config.scan.workers,
    )
    .await;

    let mut failed = false;
    for (path, outcome) in &outcomes {
        let line = scan::render(path, outcome);
        if outcome.is_err() {
            failed = true;
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_the_file() {
        let args = Args::parse_from(["udetect", "--max-bytes", "64", "--workers", "2", "a.txt", "b.txt"]);
        assert_eq!(args.paths.len(), 2);
        let config = load_config(&args).unwrap();
        assert_eq!(config.scan.max_bytes, Some(64));
        assert_eq!(config.scan.workers, 2);
    }

    #[test]
    fn paths_are_required() {
        assert!(Args::try_parse_from(["udetect"]).is_err());
    }

    #[test]
    fn zero_workers_is_a_config_error() {
        let args = Args::parse_from(["udetect", "--workers", "0", "a.txt"]);
        assert!(load_config(&args).is_err());
    }
}
