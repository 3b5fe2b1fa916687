//! Terminal client for the feedback API.
//!
//! Mirrors what the dashboard does (list, filter, create, update status,
//! summarize) so the remote service can be scripted and debugged without a
//! browser.

pub mod cli;
pub mod client;
pub mod commands;
pub mod output;
