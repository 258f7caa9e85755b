use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use leavedesk::api::ApiClient;
use leavedesk::auth::SessionStore;
use leavedesk::config::Config;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("invalid configuration")?;

    // Daily rolling log; the guard flushes on exit
    let _guard = init_logging(&config)?;

    info!(api = %config.api_base_url, "leavedesk starting");

    let session = SessionStore::from_file(&config.session_file).with_context(|| {
        format!(
            "could not read session from {}",
            config.session_file.display()
        )
    })?;
    let api = ApiClient::from_config(&config, Arc::new(session))
        .context("could not build HTTP client")?;

    cli::run(cli.command, api).await
}

fn init_logging(config: &Config) -> Result<WorkerGuard> {
    fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("could not create {}", config.log_dir.display()))?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("leavedesk")
        .filename_suffix("log")
        .build(&config.log_dir)
        .context("could not open log file")?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("could not install log subscriber: {e}"))?;

    Ok(guard)
}
