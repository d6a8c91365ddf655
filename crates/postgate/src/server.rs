//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes input screening over MCP so an assistant can check a topic,
//! audience or edit instruction before it asks a model to write anything.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer: it wraps the same core library
//! the CLI commands use. Each `#[tool]` method delegates to `postgate_core`
//! and serializes the result as JSON text content. A blocking verdict is a
//! successful tool call whose payload says so; only malformed or oversized
//! parameters produce protocol errors.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use postgate_core::{Channel, Classifier, Verdict, catalog, engagement};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `classify_input` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ClassifyInputParams {
    /// Field the text belongs to: "topic", "audience" or "edit_instruction".
    pub channel: Channel,
    /// The raw user input.
    pub text: String,
}

/// Parameters for the `describe_verdict` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DescribeVerdictParams {
    /// Verdict to describe, e.g. "off_topic".
    pub verdict: Verdict,
    /// Field the verdict was reported on. Defaults to "topic".
    #[serde(default = "default_channel")]
    pub channel: Channel,
}

const fn default_channel() -> Channel {
    Channel::Topic
}

/// Parameters for the `check_submission` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckSubmissionParams {
    /// Post topic.
    pub topic: String,
    /// Target audience.
    pub audience: String,
}

/// Parameters for the `score_post` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScorePostParams {
    /// Finished post text.
    pub text: String,
}

/// MCP server exposing screening tools to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    classifier: Arc<Classifier>,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ProjectServer {
    /// Create a server with the built-in classifier and no input limit.
    pub fn new() -> Self {
        Self::with_classifier(Classifier::default(), None)
    }

    /// Create a server around a configured classifier.
    pub fn with_classifier(classifier: Classifier, max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            classifier: Arc::new(classifier),
            max_input_bytes,
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let text = if params.format == "json" {
            to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            }))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Classify one input.
    #[tool(
        description = "Classify user input for a channel (topic, audience, edit_instruction). Returns the verdict, length band and, for blocking verdicts, the message to show."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", channel = %params.channel))]
    fn classify_input(
        &self,
        Parameters(params): Parameters<ClassifyInputParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let assessment = self.classifier.assess(params.channel, &params.text);
        tracing::info!(tool = "classify_input", verdict = %assessment.verdict, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(&assessment)?)]))
    }

    /// Describe a verdict.
    #[tool(description = "Get the title, message, icon and three suggestions shown for a verdict on a channel.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn describe_verdict(
        &self,
        Parameters(params): Parameters<DescribeVerdictParams>,
    ) -> Result<CallToolResult, McpError> {
        let descriptor = catalog::describe(params.verdict, params.channel);
        Ok(CallToolResult::success(vec![Content::text(to_json(&descriptor)?)]))
    }

    /// Screen a generation request.
    #[tool(
        description = "Screen a topic and audience pair before generation. Audience is checked first; returns pass and the first rejection."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_submission(
        &self,
        Parameters(params): Parameters<CheckSubmissionParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.topic)?;
        self.check_size(&params.audience)?;

        let rejection = self
            .classifier
            .check_submission(&params.topic, &params.audience)
            .err();
        let json = to_json(&serde_json::json!({
            "pass": rejection.is_none(),
            "rejection": rejection,
        }))?;
        tracing::info!(tool = "check_submission", pass = rejection.is_none(), "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Score a finished post.
    #[tool(description = "Score a finished post for engagement (0-100) with word count, read time, emoji, hashtags and paragraph length.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_post(
        &self,
        Parameters(params): Parameters<ScorePostParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        let report = engagement::score_post(&params.text);
        tracing::info!(tool = "score_post", score = report.score, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(&report)?)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Call classify_input or check_submission before asking a model to write or edit a post; only proceed when the verdict is safe.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
