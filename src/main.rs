use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use lyrics_finder::app::cli::Args;
use lyrics_finder::app::config::Config;
use lyrics_finder::app::runner;

/// File logging only: anything on stderr would end up over the TUI.
fn init_logging(config: &Config) -> Result<Option<WorkerGuard>> {
    let Some(path) = &config.log_file else {
        return Ok(None);
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("invalid --log-level {:?}", config.log_level))?;

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install log subscriber")?;

    Ok(Some(guard))
}

async fn try_main(args: Args) -> Result<()> {
    let config = Config::from_args(&args)?;
    let _guard = init_logging(&config)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "lyrics-finder starting");

    runner::run(&config).await.inspect_err(|e| {
        tracing::error!(error = %e, "session failed");
    })?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    human_panic::setup_panic!();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match try_main(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
