//! Dialog form state.

use crate::model::{Feedback, FeedbackStatus, NewFeedback};

/// Input of the create/edit dialogs, keyed by the element `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// `name="name"`
    Name,
    /// `name="email"`
    Email,
    /// `name="message"`
    Message,
    /// `name="status"`
    Status,
}

impl FormField {
    /// Maps an element `name` attribute to a field.
    pub fn from_input_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(FormField::Name),
            "email" => Some(FormField::Email),
            "message" => Some(FormField::Message),
            "status" => Some(FormField::Status),
            _ => None,
        }
    }

    /// Element `name` attribute.
    pub fn input_name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
            FormField::Status => "status",
        }
    }
}

/// Values currently typed into the dialog form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    /// Submitter name.
    pub name: String,
    /// Submitter email.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Selected status.
    pub status: FeedbackStatus,
}

impl FeedbackForm {
    /// Form pre-filled from an existing record, used by the edit dialog.
    pub fn from_feedback(feedback: &Feedback) -> Self {
        Self {
            name: feedback.name.clone(),
            email: feedback.email.clone(),
            message: feedback.message.clone(),
            status: feedback.status,
        }
    }

    /// Stores `value` in `field`. A status that does not parse is ignored.
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
            FormField::Status => {
                if let Ok(status) = value.parse() {
                    self.status = status;
                }
            },
        }
    }

    /// Back to empty fields and `pending`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Create-call body built from the current values.
    pub fn to_new_feedback(&self) -> NewFeedback {
        NewFeedback {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_is_empty_and_pending() {
        let form = FeedbackForm::default();
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
        assert_eq!(form.status, FeedbackStatus::Pending);
    }

    #[test]
    fn set_field_routes_by_input_name() {
        let mut form = FeedbackForm::default();
        for (name, value) in [
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("message", "Love it"),
            ("status", "resolved"),
        ] {
            let field = FormField::from_input_name(name).expect("known input name");
            form.set_field(field, value.to_string());
        }
        assert_eq!(form.to_new_feedback(), NewFeedback {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Love it".to_string(),
            status: FeedbackStatus::Resolved,
        });
        assert_eq!(FormField::from_input_name("phone"), None);
    }

    #[test]
    fn invalid_status_keeps_previous_value() {
        let mut form = FeedbackForm::default();
        form.set_field(FormField::Status, "archived".to_string());
        form.set_field(FormField::Status, "bogus".to_string());
        assert_eq!(form.status, FeedbackStatus::Archived);
    }

    #[test]
    fn reset_clears_prefilled_values() {
        let mut form = FeedbackForm::from_feedback(&Feedback {
            id: 9,
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            message: "Crash on login".to_string(),
            status: FeedbackStatus::Resolved,
        });
        assert_eq!(form.name, "Bob");
        form.reset();
        assert_eq!(form, FeedbackForm::default());
    }
}
