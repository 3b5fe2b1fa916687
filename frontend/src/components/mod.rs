// Reusable components live here.

pub mod feedback_form;
pub mod feedback_table;
pub mod loading_spinner;
pub mod modal;
pub mod status_badge;
pub mod toast;
