//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the readability engine over MCP on stdio. Tools are thin wrappers
//! around [`Readability`]; scoring logic lives in `readscore-core`.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use readscore_core::{Formula, Readability};

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

/// Parameters for the `score_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreTextParams {
    /// The text to score.
    pub text: String,
    /// Maximum acceptable grade, compared against the consensus median.
    pub max_grade: Option<f64>,
    /// Whether to strip markdown formatting before scoring.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `score_formula` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreFormulaParams {
    /// The text to score.
    pub text: String,
    /// Formula name, e.g. "flesch-kincaid-grade" or "gunning-fog".
    pub formula: String,
}

/// Parameters for the `text_standard` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextStandardParams {
    /// The text to grade.
    pub text: String,
    /// Return the winning grade as a number instead of a label.
    #[serde(default)]
    pub float_output: bool,
}

/// Parameters for the `text_median` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextMedianParams {
    /// The text to grade.
    pub text: String,
}

/// MCP server exposing the readability engine.
#[derive(Clone)]
pub struct ReadscoreServer {
    engine: Readability,
    max_input_bytes: Option<usize>,
    default_max_grade: Option<f64>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ReadscoreServer {
    fn default() -> Self {
        Self::new(Readability::default())
    }
}

fn check_input(text: &str, max_bytes: Option<usize>) -> Result<(), McpError> {
    match max_bytes {
        Some(max) if text.len() > max => Err(McpError::invalid_params(
            format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
            None,
        )),
        _ => Ok(()),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ReadscoreServer {
    /// Create a server around `engine` with no input limit or default gate.
    pub fn new(engine: Readability) -> Self {
        Self {
            engine,
            max_input_bytes: None,
            default_max_grade: None,
            tool_router: Self::tool_router(),
        }
    }

    /// Reject tool inputs larger than `max_bytes`.
    #[must_use]
    pub const fn with_input_limit(mut self, max_bytes: Option<usize>) -> Self {
        self.max_input_bytes = max_bytes;
        self
    }

    /// Gate `score_text` on this grade when the caller passes none.
    #[must_use]
    pub const fn with_default_max_grade(mut self, max_grade: Option<f64>) -> Self {
        self.default_max_grade = max_grade;
        self
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "formulas": Formula::ALL.map(Formula::name),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Full readability report.
    #[tool(
        description = "Score text with every readability formula. Returns counts, each formula's score, the consensus grade and the median grade."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_text(
        &self,
        Parameters(params): Parameters<ScoreTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "score_text",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        check_input(&params.text, self.max_input_bytes)?;

        let max_grade = params.max_grade.or(self.default_max_grade);
        let report = self
            .engine
            .report(&params.text, params.strip_markdown, max_grade);
        let json = to_json(&report)?;

        tracing::info!(
            tool = "score_text",
            text_median = report.text_median,
            over_max = report.over_max,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// One formula by name.
    #[tool(
        description = "Score text with one readability formula, e.g. flesch-reading-ease, flesch-kincaid-grade, smog-index, gunning-fog, lix."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", formula = %params.formula))]
    fn score_formula(
        &self,
        Parameters(params): Parameters<ScoreFormulaParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "score_formula", "executing MCP tool");
        check_input(&params.text, self.max_input_bytes)?;

        let formula: Formula = params
            .formula
            .parse()
            .map_err(|e: readscore_core::AnalysisError| McpError::invalid_params(e.to_string(), None))?;
        let score = self.engine.score(formula, &params.text);
        let json = to_json(&serde_json::json!({
            "formula": formula,
            "score": score,
        }))?;

        tracing::info!(tool = "score_formula", score, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Consensus grade by vote.
    #[tool(
        description = "Consensus grade level: eight formulas vote and the most common grade wins. Returns a label like \"7th and 8th grade\" or a number with float_output."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn text_standard(
        &self,
        Parameters(params): Parameters<TextStandardParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "text_standard",
            float_output = params.float_output,
            "executing MCP tool"
        );
        check_input(&params.text, self.max_input_bytes)?;

        let standard = self.engine.text_standard(&params.text, params.float_output);

        tracing::info!(tool = "text_standard", %standard, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(
            standard.to_string(),
        )]))
    }

    /// Median grade.
    #[tool(description = "Median grade level across the eight consensus formulas.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn text_median(
        &self,
        Parameters(params): Parameters<TextMedianParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "text_median", "executing MCP tool");
        check_input(&params.text, self.max_input_bytes)?;

        let median = self.engine.text_median(&params.text);

        tracing::info!(tool = "text_median", median, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(
            median.to_string(),
        )]))
    }
}

#[tool_handler]
impl ServerHandler for ReadscoreServer {
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
                "{} MCP server. Use score_text for a full readability report, \
                 score_formula for a single formula, and text_standard or \
                 text_median for a consensus grade level.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
