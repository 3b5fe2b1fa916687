//! `set-status`: PATCH /feedbacks/{id}/status.

use anyhow::{Context, Result};
use feedback_dashboard_shared::{dashboard::UPDATE_SUCCESS, FeedbackStatus};

use crate::client::FeedbackClient;

/// Moves record `id` to `status`.
pub async fn run(client: &FeedbackClient, id: i64, status: FeedbackStatus) -> Result<String> {
    let updated = client
        .update_status(id, status)
        .await
        .with_context(|| format!("Failed to update feedback {id}"))?;
    tracing::info!(id, status = status.as_str(), "{UPDATE_SUCCESS}");
    Ok(serde_json::to_string_pretty(&updated)?)
}
