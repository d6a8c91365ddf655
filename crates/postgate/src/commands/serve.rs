//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use postgate_core::{Classifier, Config};

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // stdio is the only transport
}

/// Serve screening tools over MCP until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    let classifier =
        Classifier::from_config(&config).context("failed to build classifier from configuration")?;
    let server = ProjectServer::with_classifier(classifier, max_input_bytes);

    info!("starting MCP server on stdio");
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server terminated abnormally")?;
    info!("MCP server stopped");
    Ok(())
}
