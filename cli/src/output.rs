//! Terminal rendering of feedback records.

use anyhow::Result;
use feedback_dashboard_shared::{Feedback, StatusFilter};
use serde::Serialize;

const MESSAGE_WIDTH: usize = 48;

/// Pretty-printed JSON of `value`.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Shortens `text` to `width` characters, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= width {
        return single_line;
    }
    let kept: String = single_line.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Aligned table with the same columns as the dashboard, headed by the
/// filtered count.
pub fn render_table(feedbacks: &[Feedback], filter: StatusFilter) -> String {
    let mut out = String::new();
    out.push_str(&format!("Feedback List ({} items)\n", feedbacks.len()));
    if feedbacks.is_empty() {
        out.push_str(&format!("{}\n", filter.empty_message()));
        return out;
    }

    let rows: Vec<[String; 5]> = feedbacks
        .iter()
        .map(|feedback| {
            [
                feedback.id.to_string(),
                feedback.name.clone(),
                feedback.email.clone(),
                truncate(&feedback.message, MESSAGE_WIDTH),
                feedback.status.label().to_string(),
            ]
        })
        .collect();
    let header = ["ID", "NAME", "EMAIL", "MESSAGE", "STATUS"];

    let mut widths = header.map(|title| title.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    push_row(&mut out, &header.map(str::to_string), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&format!("{}\n", line.trim_end()));
}
