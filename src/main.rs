mod cli;

use anyhow::{Context, Result};
use celebdesk::{AppConfig, Cli, Session, load_or_empty, source_for};
use clap::Parser;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_cli_and_env(Cli::parse())
        .context("failed to load application configuration")?;

    init_tracing(&config)?;
    info!(source = %config.source, "celebdesk starting");

    let source = source_for(&config.source);
    let profiles = load_or_empty(source.as_ref()).await;

    let mut session = Session::default().with_notice_ttl(config.notice_ttl);
    session.load(profiles);

    let mut app = App::new(session);
    app.run().await.context("terminal UI failed")?;
    Ok(())
}

/// Logs go to a file; stdout belongs to the terminal UI.
fn init_tracing(config: &AppConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("failed to open log file {}", config.log_file.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("celebdesk=info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}
