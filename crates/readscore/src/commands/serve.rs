//! Serve command: MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use readscore_core::{Config, Readability};

use crate::server::ReadscoreServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Run the MCP server until the client disconnects.
///
/// Stdout carries the protocol; logs go to stderr and the log file.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    info!(
        locale = config.locale.as_str(),
        max_input_bytes = ?max_input_bytes,
        "starting MCP server on stdio"
    );

    let server = ReadscoreServer::new(Readability::from_config(&config))
        .with_input_limit(max_input_bytes)
        .with_default_max_grade(config.max_grade);
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    let reason = service
        .waiting()
        .await
        .context("MCP server task failed")?;

    info!(?reason, "MCP server stopped");
    Ok(())
}
