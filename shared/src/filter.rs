//! Status filter of the feedback table.

use crate::model::{Feedback, FeedbackStatus};

/// Value of the "all" option in the status `<select>`.
pub const ALL_VALUE: &str = "all";

/// Status filter applied to the feedback table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// No filtering.
    #[default]
    All,
    /// Keep only records with this status.
    Only(FeedbackStatus),
}

impl StatusFilter {
    /// Parses a `<select>` value. Anything unrecognized means [`StatusFilter::All`].
    pub fn from_select_value(value: &str) -> Self {
        value.parse().map(StatusFilter::Only).unwrap_or(StatusFilter::All)
    }

    /// Inverse of [`StatusFilter::from_select_value`].
    pub fn as_select_value(self) -> &'static str {
        match self {
            StatusFilter::All => ALL_VALUE,
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// Label shown in the `<select>`.
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All Status",
            StatusFilter::Only(status) => status.label(),
        }
    }

    /// Every selectable filter in display order.
    pub fn options() -> [StatusFilter; 4] {
        [
            StatusFilter::All,
            StatusFilter::Only(FeedbackStatus::Pending),
            StatusFilter::Only(FeedbackStatus::Resolved),
            StatusFilter::Only(FeedbackStatus::Archived),
        ]
    }

    /// Whether `feedback` passes the filter.
    pub fn matches(self, feedback: &Feedback) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => feedback.status == status,
        }
    }

    /// Records passing the filter, in their original order.
    pub fn apply(self, feedbacks: &[Feedback]) -> Vec<Feedback> {
        feedbacks
            .iter()
            .filter(|feedback| self.matches(feedback))
            .cloned()
            .collect()
    }

    /// Placeholder shown when nothing passes the filter.
    pub fn empty_message(self) -> &'static str {
        "No feedback found for the selected status."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(id: i64, status: FeedbackStatus) -> Feedback {
        Feedback {
            id,
            name: format!("user-{id}"),
            email: format!("user-{id}@example.com"),
            message: "message".to_string(),
            status,
        }
    }

    fn sample() -> Vec<Feedback> {
        vec![
            feedback(3, FeedbackStatus::Resolved),
            feedback(1, FeedbackStatus::Pending),
            feedback(2, FeedbackStatus::Archived),
            feedback(5, FeedbackStatus::Pending),
        ]
    }

    #[test]
    fn all_keeps_every_record_in_order() {
        let ids: Vec<_> = StatusFilter::All.apply(&sample()).iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 5]);
    }

    #[test]
    fn only_keeps_matching_status_in_server_order() {
        let pending = StatusFilter::Only(FeedbackStatus::Pending).apply(&sample());
        let ids: Vec<_> = pending.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert!(pending.iter().all(|f| f.status == FeedbackStatus::Pending));
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        let records = vec![feedback(1, FeedbackStatus::Pending)];
        assert!(StatusFilter::Only(FeedbackStatus::Archived).apply(&records).is_empty());
    }

    #[test]
    fn select_values_round_trip_and_unknown_falls_back_to_all() {
        for option in StatusFilter::options() {
            assert_eq!(StatusFilter::from_select_value(option.as_select_value()), option);
        }
        assert_eq!(StatusFilter::from_select_value("spam"), StatusFilter::All);
        assert_eq!(StatusFilter::from_select_value(""), StatusFilter::All);
    }
}
