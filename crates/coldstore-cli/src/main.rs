//! Coldstore CLI
//!
//! Terminal interface for the cold-storage back-office API.

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use coldstore_cli::cli::{self, Cli};
use coldstore_client::{ApiClient, ClientConfig};
use coldstore_core::config::load_config;
use coldstore_core::tracing_init::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);

    init_tracing(&cli::log_filter(&config.log.level), config.log.json);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        api = %config.api.base_url,
        "Starting coldstore CLI"
    );

    let client =
        ApiClient::new(&ClientConfig::from(&config)).context("Failed to create API client")?;
    let mut out = io::stdout().lock();
    cli::run(&client, cli.command, &mut out).await
}
