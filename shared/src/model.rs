//! Feedback records and the request bodies of the feedback API.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::ApiError;

/// Review state of a feedback record. Serialized lowercase on the wire,
/// deserialized through [`FromStr`] so casing and padding are tolerated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum FeedbackStatus {
    /// Not looked at yet.
    #[default]
    Pending,
    /// Handled.
    Resolved,
    /// Kept for reference only.
    Archived,
}

impl FeedbackStatus {
    /// All statuses in display order.
    pub const ALL: [FeedbackStatus; 3] =
        [FeedbackStatus::Pending, FeedbackStatus::Resolved, FeedbackStatus::Archived];

    /// Wire representation, also used as `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackStatus::Pending => "pending",
            FeedbackStatus::Resolved => "resolved",
            FeedbackStatus::Archived => "archived",
        }
    }

    /// Capitalized label for badges and select options.
    pub fn label(self) -> &'static str {
        match self {
            FeedbackStatus::Pending => "Pending",
            FeedbackStatus::Resolved => "Resolved",
            FeedbackStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known statuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown feedback status `{0}` (expected pending, resolved or archived)")]
pub struct ParseStatusError(pub String);

impl FromStr for FeedbackStatus {
    type Err = ParseStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(FeedbackStatus::Pending),
            "resolved" => Ok(FeedbackStatus::Resolved),
            "archived" => Ok(FeedbackStatus::Archived),
            _ => Err(ParseStatusError(value.to_string())),
        }
    }
}

impl TryFrom<String> for FeedbackStatus {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One feedback record as stored by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Server-assigned identifier.
    pub id: i64,
    /// Submitter name.
    pub name: String,
    /// Submitter email.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Current status.
    pub status: FeedbackStatus,
}

/// A `GET /feedbacks` body decoded record by record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackList {
    /// Records that decoded, in server order.
    pub feedbacks: Vec<Feedback>,
    /// One reason per record that did not decode and was left out.
    pub skipped: Vec<String>,
}

impl FeedbackList {
    /// Decodes a list body. `null` is an empty list; any other non-array
    /// body is a [`ApiError::Parse`]. A malformed record is skipped so one
    /// bad row never hides the rest.
    pub fn decode(body: Value) -> Result<Self, ApiError> {
        let items = match body {
            Value::Null => return Ok(Self::default()),
            Value::Array(items) => items,
            other => {
                return Err(ApiError::Parse(format!(
                    "expected a feedback array, got {}",
                    json_kind(&other)
                )));
            },
        };

        let mut list = Self::default();
        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<Feedback>(item) {
                Ok(feedback) => list.feedbacks.push(feedback),
                Err(err) => list.skipped.push(format!("record #{index}: {err}")),
            }
        }
        Ok(list)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Body of `POST /feedbacks/add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeedback {
    /// Submitter name.
    pub name: String,
    /// Submitter email.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Initial status.
    pub status: FeedbackStatus,
}

/// Body of `PATCH /feedbacks/{id}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// Target status.
    pub status: FeedbackStatus,
}

/// Body of `POST /feedbacks/summary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Message text to summarize.
    pub feedback: String,
}
