//! Shared types and UI state for the feedback dashboard.
//!
//! Everything here is transport-agnostic so it compiles both for the wasm
//! frontend and for the native CLI.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod form;
pub mod model;
pub mod summary;

pub use config::ApiConfig;
pub use error::ApiError;
pub use filter::StatusFilter;
pub use form::{FeedbackForm, FormField};
pub use model::{
    Feedback, FeedbackList, FeedbackStatus, NewFeedback, ParseStatusError, SummaryRequest, UpdateStatusRequest,
};
