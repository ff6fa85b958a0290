//! agentdemo: command-line entry point.

mod cli;
mod commands;
mod render;
mod state;

use anyhow::Context;
use clap::Parser;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("agentdemo error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    if !commands::needs_state(&cli.command) {
        return commands::dispatch(cli, None).await;
    }

    let data_dir = state::resolve_data_dir(cli.data_dir.as_deref());
    let app_state = state::AppState::open(&data_dir)
        .context("failed to initialize agentdemo state")?;
    tracing::debug!(data_dir = %data_dir.display(), "state ready");

    commands::dispatch(cli, Some(&app_state)).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AGENTDEMO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
