//! Interpreting the reply of `POST /feedbacks/summary`.
//!
//! The service does not pin down its reply shape, so anything meaningful is
//! turned into display text and the rest falls back to a fixed message.

use serde_json::Value;

/// Shown when the service replied but had nothing to say.
pub const SUMMARY_UNAVAILABLE: &str = "Unable to generate summary at this time.";

/// Shown when the call itself failed.
pub const SUMMARY_FAILED: &str = "Error generating summary. Please try again.";

/// Placeholder while the reply is outstanding.
pub const SUMMARY_LOADING: &str = "Loading analysis...";

const TEXT_KEYS: [&str; 3] = ["summary", "result", "analysis"];

/// Display text carried by a summary reply, if any.
///
/// Accepts a bare string, an object with a `summary`/`result`/`analysis`
/// string field, or any other non-empty value rendered as compact JSON.
pub fn summary_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) => non_blank(text),
        Value::Object(map) => {
            if map.is_empty() {
                return None;
            }
            TEXT_KEYS
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str).and_then(non_blank))
                .or_else(|| Some(value.to_string()))
        },
        Value::Array(items) if items.is_empty() => None,
        other => Some(other.to_string()),
    }
}

/// Text to display for a successful reply: the summary or
/// [`SUMMARY_UNAVAILABLE`].
pub fn summary_or_unavailable(value: &Value) -> String {
    summary_text(value).unwrap_or_else(|| SUMMARY_UNAVAILABLE.to_string())
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn bare_string_reply_is_used_verbatim() {
        assert_eq!(
            summary_text(&json!("  Customer is happy with delivery speed. ")).as_deref(),
            Some("Customer is happy with delivery speed.")
        );
    }

    #[test]
    fn object_reply_prefers_known_text_fields() {
        assert_eq!(
            summary_text(&json!({ "summary": "Short summary", "model": "x" })).as_deref(),
            Some("Short summary")
        );
        assert_eq!(
            summary_text(&json!({ "result": "From result" })).as_deref(),
            Some("From result")
        );
    }

    #[test]
    fn unknown_object_reply_is_rendered_as_json() {
        assert_eq!(
            summary_text(&json!({ "sentiment": "negative" })).as_deref(),
            Some(r#"{"sentiment":"negative"}"#)
        );
    }

    #[test]
    fn empty_replies_fall_back_to_unavailable() {
        for value in [json!(null), json!(false), json!(""), json!({}), json!([])] {
            assert_eq!(summary_or_unavailable(&value), SUMMARY_UNAVAILABLE);
        }
    }
}
