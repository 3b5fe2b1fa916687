//! `list`: GET /feedbacks with a client-side status filter.

use anyhow::{Context, Result};
use feedback_dashboard_shared::StatusFilter;

use crate::{
    cli::OutputFormat,
    client::FeedbackClient,
    output::{render_table, to_json},
};

/// Fetches every record, filters them and renders the result.
pub async fn run(client: &FeedbackClient, filter: StatusFilter, format: OutputFormat) -> Result<String> {
    let feedbacks = client
        .list()
        .await
        .context("Error fetching feedbacks")?;
    let visible = filter.apply(&feedbacks);
    tracing::info!(
        total = feedbacks.len(),
        shown = visible.len(),
        filter = filter.as_select_value(),
        "fetched feedbacks"
    );

    match format {
        OutputFormat::Table => Ok(render_table(&visible, filter)),
        OutputFormat::Json => to_json(&visible),
    }
}
