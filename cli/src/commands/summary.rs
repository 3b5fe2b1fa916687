//! `summary`: POST /feedbacks/summary.

use anyhow::{bail, Context, Result};

use crate::client::FeedbackClient;

/// Summarizes record `id`'s message, or `message` when given.
///
/// The text is sent as is, empty or not. Service failures do not fail the
/// command; they produce the same fallback text the dashboard shows.
pub async fn run(client: &FeedbackClient, id: Option<i64>, message: Option<String>) -> Result<String> {
    let text = match (id, message) {
        (_, Some(message)) => message,
        (Some(id), None) => {
            let feedback = client
                .find(id)
                .await
                .context("Error fetching feedbacks")?
                .with_context(|| format!("feedback not found: {id}"))?;
            feedback.message
        },
        (None, None) => bail!("either a feedback id or --message is required"),
    };

    Ok(client.summarize(&text).await)
}
