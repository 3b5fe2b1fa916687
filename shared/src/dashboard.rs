//! Page state of the feedback dashboard as a plain reducer.
//!
//! The frontend wraps [`DashboardState`] in a Yew reducer; keeping the
//! transitions here lets them be tested without a browser.

use crate::{
    filter::StatusFilter,
    form::{FeedbackForm, FormField},
    model::Feedback,
    summary::SUMMARY_LOADING,
};

/// Toast shown after a successful create.
pub const CREATE_SUCCESS: &str = "Feedback Submitted..";
/// Toast shown after a failed create.
pub const CREATE_FAILED: &str = "Failed to create feedback. Please try again.";
/// Toast shown after a successful status update.
pub const UPDATE_SUCCESS: &str = "Feedback Updated Successfully..";
/// Toast shown after a failed status update.
pub const UPDATE_FAILED: &str = "Failed to update feedback. Please try again.";

/// Which dialog is open. At most one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Modal {
    /// No dialog.
    #[default]
    None,
    /// "Create New Feedback".
    Create,
    /// "Edit Feedback".
    Edit,
    /// "AI Feedback Analysis".
    Summary,
}

/// Tone of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Green.
    Success,
    /// Red.
    Error,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Increments per toast so repeated identical messages still re-render.
    pub id: u64,
    /// Tone.
    pub kind: ToastKind,
    /// Text.
    pub message: String,
}

/// Everything the dashboard page renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    /// Records as last returned by the service.
    pub feedbacks: Vec<Feedback>,
    /// A list fetch is in flight.
    pub loading: bool,
    /// At least one list fetch has completed, successfully or not.
    pub loaded_once: bool,
    /// Current table filter.
    pub status_filter: StatusFilter,
    /// Dialog form values.
    pub form: FeedbackForm,
    /// Open dialog.
    pub modal: Modal,
    /// Record being edited.
    pub editing: Option<Feedback>,
    /// Record whose summary is shown.
    pub selected: Option<Feedback>,
    /// Summary text once it arrived.
    pub summary: Option<String>,
    /// Sequence of the latest summary request; older replies are dropped.
    pub summary_request: u64,
    /// Visible toast.
    pub toast: Option<Toast>,
    toast_seq: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            feedbacks: Vec::new(),
            loading: true,
            loaded_once: false,
            status_filter: StatusFilter::All,
            form: FeedbackForm::default(),
            modal: Modal::None,
            editing: None,
            selected: None,
            summary: None,
            summary_request: 0,
            toast: None,
            toast_seq: 0,
        }
    }
}

/// State transitions of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    /// A list fetch started.
    FetchStarted,
    /// A list fetch returned records.
    FetchSucceeded(Vec<Feedback>),
    /// A list fetch failed; the table is cleared.
    FetchFailed,
    /// The filter `<select>` changed.
    SetFilter(StatusFilter),
    /// "Add Feedback" clicked.
    OpenCreate,
    /// "Edit" clicked on a row.
    OpenEdit(Feedback),
    /// "AI Summary" clicked on a row; `request` tags the reply to expect.
    OpenSummary {
        /// Record to summarize.
        feedback: Feedback,
        /// Caller-issued sequence number, strictly increasing.
        request: u64,
    },
    /// A summary reply arrived for request `request`.
    SummaryReady {
        /// Value of `summary_request` when the call was issued.
        request: u64,
        /// Display text (already resolved against fallbacks).
        text: String,
    },
    /// A form input changed.
    UpdateForm(FormField, String),
    /// Cancel, Close or the × button.
    CloseModal,
    /// Create call succeeded.
    CreateSucceeded,
    /// Create call failed.
    CreateFailed,
    /// Status update call succeeded.
    UpdateSucceeded,
    /// Status update call failed.
    UpdateFailed,
    /// Toast `id` closed by the user or its timer.
    DismissToast(u64),
}

impl DashboardState {
    /// Applies one action in place.
    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::FetchStarted => {
                self.loading = true;
            },
            DashboardAction::FetchSucceeded(feedbacks) => {
                self.feedbacks = feedbacks;
                self.loading = false;
                self.loaded_once = true;
            },
            DashboardAction::FetchFailed => {
                self.feedbacks.clear();
                self.loading = false;
                self.loaded_once = true;
            },
            DashboardAction::SetFilter(filter) => {
                self.status_filter = filter;
            },
            DashboardAction::OpenCreate => {
                self.form.reset();
                self.editing = None;
                self.modal = Modal::Create;
            },
            DashboardAction::OpenEdit(feedback) => {
                self.form = FeedbackForm::from_feedback(&feedback);
                self.editing = Some(feedback);
                self.modal = Modal::Edit;
            },
            DashboardAction::OpenSummary {
                feedback,
                request,
            } => {
                self.selected = Some(feedback);
                self.summary = None;
                self.summary_request = request;
                self.modal = Modal::Summary;
            },
            DashboardAction::SummaryReady {
                request,
                text,
            } => {
                if request == self.summary_request {
                    self.summary = Some(text);
                }
            },
            DashboardAction::UpdateForm(field, value) => {
                self.form.set_field(field, value);
            },
            DashboardAction::CloseModal => self.close_modal(),
            DashboardAction::CreateSucceeded => {
                self.push_toast(ToastKind::Success, CREATE_SUCCESS);
                self.close_modal();
            },
            DashboardAction::CreateFailed => {
                self.push_toast(ToastKind::Error, CREATE_FAILED);
            },
            DashboardAction::UpdateSucceeded => {
                self.push_toast(ToastKind::Success, UPDATE_SUCCESS);
                self.close_modal();
            },
            DashboardAction::UpdateFailed => {
                self.push_toast(ToastKind::Error, UPDATE_FAILED);
            },
            DashboardAction::DismissToast(id) => {
                if self.toast.as_ref().is_some_and(|toast| toast.id == id) {
                    self.toast = None;
                }
            },
        }
    }

    /// Records passing the current filter.
    pub fn visible(&self) -> Vec<Feedback> {
        self.status_filter.apply(&self.feedbacks)
    }

    /// Number of records passing the current filter.
    pub fn visible_count(&self) -> usize {
        self.feedbacks
            .iter()
            .filter(|feedback| self.status_filter.matches(feedback))
            .count()
    }

    /// Summary text, or the loading placeholder while the reply is pending.
    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or(SUMMARY_LOADING)
    }

    /// Full-page spinner only before the first list arrives.
    pub fn show_initial_loader(&self) -> bool {
        self.loading && !self.loaded_once
    }

    fn close_modal(&mut self) {
        self.modal = Modal::None;
        self.editing = None;
        self.form.reset();
    }

    fn push_toast(&mut self, kind: ToastKind, message: &str) {
        self.toast_seq += 1;
        self.toast = Some(Toast {
            id: self.toast_seq,
            kind,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FeedbackStatus;

    fn feedback(id: i64, status: FeedbackStatus) -> Feedback {
        Feedback {
            id,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: format!("message {id}"),
            status,
        }
    }

    fn loaded() -> DashboardState {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::FetchSucceeded(vec![
            feedback(1, FeedbackStatus::Pending),
            feedback(2, FeedbackStatus::Resolved),
            feedback(3, FeedbackStatus::Pending),
        ]));
        state
    }

    #[test]
    fn starts_loading_and_shows_initial_loader_only_once() {
        let mut state = DashboardState::default();
        assert!(state.show_initial_loader());
        state.apply(DashboardAction::FetchSucceeded(vec![]));
        assert!(!state.loading);
        state.apply(DashboardAction::FetchStarted);
        assert!(state.loading);
        assert!(!state.show_initial_loader());
    }

    #[test]
    fn failed_fetch_clears_records() {
        let mut state = loaded();
        state.apply(DashboardAction::FetchStarted);
        state.apply(DashboardAction::FetchFailed);
        assert!(state.feedbacks.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn filter_changes_visible_rows_and_count() {
        let mut state = loaded();
        assert_eq!(state.visible_count(), 3);
        state.apply(DashboardAction::SetFilter(StatusFilter::Only(FeedbackStatus::Pending)));
        let ids: Vec<_> = state.visible().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(state.visible_count(), 2);
        state.apply(DashboardAction::SetFilter(StatusFilter::Only(FeedbackStatus::Archived)));
        assert!(state.visible().is_empty());
    }

    #[test]
    fn closing_any_modal_resets_the_form() {
        let mut state = loaded();
        state.apply(DashboardAction::OpenCreate);
        state.apply(DashboardAction::UpdateForm(FormField::Name, "Typed".to_string()));
        state.apply(DashboardAction::CloseModal);
        assert_eq!(state.modal, Modal::None);
        assert_eq!(state.form, FeedbackForm::default());

        state.apply(DashboardAction::OpenEdit(feedback(2, FeedbackStatus::Resolved)));
        assert_eq!(state.form.status, FeedbackStatus::Resolved);
        assert_eq!(state.editing.as_ref().map(|f| f.id), Some(2));
        state.apply(DashboardAction::CloseModal);
        assert_eq!(state.form, FeedbackForm::default());
        assert!(state.editing.is_none());
    }

    #[test]
    fn open_create_starts_from_an_empty_form() {
        let mut state = loaded();
        state.apply(DashboardAction::OpenEdit(feedback(1, FeedbackStatus::Pending)));
        state.apply(DashboardAction::OpenCreate);
        assert_eq!(state.form, FeedbackForm::default());
        assert!(state.editing.is_none());
    }

    #[test]
    fn create_success_toasts_and_closes() {
        let mut state = loaded();
        state.apply(DashboardAction::OpenCreate);
        state.apply(DashboardAction::UpdateForm(FormField::Message, "hi".to_string()));
        state.apply(DashboardAction::CreateSucceeded);
        assert_eq!(state.modal, Modal::None);
        assert_eq!(state.form, FeedbackForm::default());
        let toast = state.toast.clone().expect("toast shown");
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, CREATE_SUCCESS);
    }

    #[test]
    fn update_failure_keeps_dialog_and_form() {
        let mut state = loaded();
        state.apply(DashboardAction::OpenEdit(feedback(1, FeedbackStatus::Pending)));
        state.apply(DashboardAction::UpdateForm(FormField::Status, "archived".to_string()));
        state.apply(DashboardAction::UpdateFailed);
        assert_eq!(state.modal, Modal::Edit);
        assert_eq!(state.form.status, FeedbackStatus::Archived);
        let toast = state.toast.clone().expect("toast shown");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, UPDATE_FAILED);
    }

    #[test]
    fn repeated_toasts_get_fresh_ids() {
        let mut state = loaded();
        state.apply(DashboardAction::CreateFailed);
        let first = state.toast.clone().expect("first toast");
        state.apply(DashboardAction::CreateFailed);
        let second = state.toast.clone().expect("second toast");
        assert_ne!(first.id, second.id);

        // A timer left over from the first toast must not hide the second.
        state.apply(DashboardAction::DismissToast(first.id));
        assert_eq!(state.toast.as_ref(), Some(&second));
        state.apply(DashboardAction::DismissToast(second.id));
        assert!(state.toast.is_none());
    }

    #[test]
    fn stale_summary_reply_is_ignored() {
        let mut state = loaded();
        let first_request = 1;
        state.apply(DashboardAction::OpenSummary {
            feedback: feedback(1, FeedbackStatus::Pending),
            request: first_request,
        });
        assert_eq!(state.summary_text(), SUMMARY_LOADING);

        state.apply(DashboardAction::CloseModal);
        let second_request = 2;
        state.apply(DashboardAction::OpenSummary {
            feedback: feedback(2, FeedbackStatus::Resolved),
            request: second_request,
        });

        state.apply(DashboardAction::SummaryReady {
            request: first_request,
            text: "about record 1".to_string(),
        });
        assert_eq!(state.summary_text(), SUMMARY_LOADING);

        state.apply(DashboardAction::SummaryReady {
            request: second_request,
            text: "about record 2".to_string(),
        });
        assert_eq!(state.summary_text(), "about record 2");
        assert_eq!(state.selected.as_ref().map(|f| f.id), Some(2));
    }
}
