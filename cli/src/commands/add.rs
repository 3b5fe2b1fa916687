//! `add`: POST /feedbacks/add.

use anyhow::{Context, Result};
use feedback_dashboard_shared::{dashboard::CREATE_SUCCESS, FeedbackStatus, NewFeedback};

use crate::client::FeedbackClient;

/// Creates one record and reports the service's echo.
pub async fn run(
    client: &FeedbackClient,
    name: String,
    email: String,
    message: String,
    status: FeedbackStatus,
) -> Result<String> {
    let request = NewFeedback {
        name,
        email,
        message,
        status,
    };
    let created = client
        .create(&request)
        .await
        .context("Failed to create feedback")?;
    tracing::info!("{CREATE_SUCCESS}");
    Ok(serde_json::to_string_pretty(&created)?)
}
