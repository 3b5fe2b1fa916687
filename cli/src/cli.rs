//! Command-line definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use feedback_dashboard_shared::{
    config::{DEFAULT_API_BASE, DEFAULT_API_KEY},
    ApiConfig, FeedbackStatus, StatusFilter,
};

/// How `list` prints records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns.
    Table,
    /// Pretty JSON array.
    Json,
}

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(name = "feedback-cli", version, about = "Feedback API command-line client")]
pub struct Cli {
    /// Connection settings shared by every subcommand.
    #[command(flatten)]
    pub connection: ConnectionArgs,
    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the API lives and how to reach it.
#[derive(Debug, Clone, Args)]
pub struct ConnectionArgs {
    /// Feedback API base URL.
    #[arg(long, env = "FEEDBACK_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    pub base_url: String,
    /// Value sent in the `x-api-key` header.
    #[arg(long, env = "FEEDBACK_API_KEY", default_value = DEFAULT_API_KEY, global = true, hide_env_values = true)]
    pub api_key: String,
    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout_secs: u64,
}

impl ConnectionArgs {
    /// API config built from the flags.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.base_url.clone(), self.api_key.clone())
    }
}

/// Subcommands, one per dashboard action.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// GET /feedbacks, optionally filtered by status.
    List {
        /// `all`, `pending`, `resolved` or `archived`.
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        status: StatusFilter,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table, ignore_case = true)]
        format: OutputFormat,
    },
    /// POST /feedbacks/add
    Add {
        /// Submitter name.
        #[arg(long)]
        name: String,
        /// Submitter email.
        #[arg(long)]
        email: String,
        /// Message body.
        #[arg(long)]
        message: String,
        /// Initial status.
        #[arg(long, default_value = "pending", value_parser = parse_status)]
        status: FeedbackStatus,
    },
    /// PATCH /feedbacks/:id/status
    SetStatus {
        /// Feedback id.
        id: i64,
        /// New status.
        #[arg(value_parser = parse_status)]
        status: FeedbackStatus,
    },
    /// POST /feedbacks/summary for a stored record or an ad-hoc message.
    Summary {
        /// Feedback id whose message is summarized.
        #[arg(required_unless_present = "message", conflicts_with = "message")]
        id: Option<i64>,
        /// Summarize this text instead of a stored record.
        #[arg(long)]
        message: Option<String>,
    },
}

fn parse_status(value: &str) -> Result<FeedbackStatus, String> {
    value.parse().map_err(|err: feedback_dashboard_shared::ParseStatusError| err.to_string())
}

fn parse_filter(value: &str) -> Result<StatusFilter, String> {
    if value.trim().eq_ignore_ascii_case(feedback_dashboard_shared::filter::ALL_VALUE) {
        return Ok(StatusFilter::All);
    }
    parse_status(value).map(StatusFilter::Only)
}
