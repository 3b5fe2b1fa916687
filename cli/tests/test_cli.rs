//! Integration tests for CLI argument parsing.

use clap::Parser;
use feedback_cli::{
    cli::{Cli, Commands, OutputFormat},
    output::{render_table, truncate},
};
use feedback_dashboard_shared::{config::DEFAULT_API_BASE, Feedback, FeedbackStatus, StatusFilter};

fn feedback(id: i64, status: FeedbackStatus, message: &str) -> Feedback {
    Feedback {
        id,
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: message.to_string(),
        status,
    }
}

#[test]
fn list_defaults_to_all_statuses_as_table() {
    let cli = Cli::try_parse_from(["feedback-cli", "list"]).expect("parse list");
    match cli.command {
        Commands::List {
            status,
            format,
        } => {
            assert_eq!(status, StatusFilter::All);
            assert_eq!(format, OutputFormat::Table);
        },
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn list_accepts_status_filter_case_insensitively() {
    let cli = Cli::try_parse_from(["feedback-cli", "list", "--status", "Resolved", "--format", "json"])
        .expect("parse list");
    match cli.command {
        Commands::List {
            status,
            format,
        } => {
            assert_eq!(status, StatusFilter::Only(FeedbackStatus::Resolved));
            assert_eq!(format, OutputFormat::Json);
        },
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn unknown_status_is_rejected() {
    assert!(Cli::try_parse_from(["feedback-cli", "set-status", "4", "done"]).is_err());
    assert!(Cli::try_parse_from(["feedback-cli", "list", "--status", "open"]).is_err());
}

#[test]
fn global_connection_flags_work_after_the_subcommand() {
    let cli = Cli::try_parse_from([
        "feedback-cli",
        "set-status",
        "4",
        "archived",
        "--base-url",
        "http://localhost:9000/",
        "--api-key",
        "secret",
    ])
    .expect("parse set-status");
    let config = cli.connection.api_config();
    assert_eq!(config.status_url(4), "http://localhost:9000/feedbacks/4/status");
    assert_eq!(config.api_key, "secret");
}

#[test]
fn summary_requires_id_or_message_but_not_both() {
    assert!(Cli::try_parse_from(["feedback-cli", "summary"]).is_err());
    assert!(Cli::try_parse_from(["feedback-cli", "summary", "3", "--message", "hi"]).is_err());
    assert!(Cli::try_parse_from(["feedback-cli", "summary", "3"]).is_ok());
    assert!(Cli::try_parse_from(["feedback-cli", "summary", "--message", "hi"]).is_ok());
}

#[test]
fn add_defaults_to_pending() {
    let cli = Cli::try_parse_from([
        "feedback-cli",
        "add",
        "--name",
        "Ada",
        "--email",
        "ada@example.com",
        "--message",
        "Nice",
    ])
    .expect("parse add");
    match cli.command {
        Commands::Add {
            status, ..
        } => assert_eq!(status, FeedbackStatus::Pending),
        other => panic!("unexpected command: {other:?}"),
    }
    if std::env::var_os("FEEDBACK_API_BASE").is_none() {
        assert_eq!(cli.connection.base_url, DEFAULT_API_BASE);
    }
}

#[test]
fn table_shows_filtered_count_and_labels() {
    let rows = vec![
        feedback(1, FeedbackStatus::Pending, "Checkout is slow"),
        feedback(12, FeedbackStatus::Resolved, "Love it"),
    ];
    let table = render_table(&rows, StatusFilter::All);
    let lines: Vec<_> = table.lines().collect();
    assert_eq!(lines[0], "Feedback List (2 items)");
    assert!(lines[1].starts_with("ID"));
    assert!(lines[2].contains("Pending"));
    assert!(lines[3].starts_with("12"));
    assert!(lines[3].contains("Resolved"));
}

#[test]
fn empty_table_shows_filter_message() {
    let table = render_table(&[], StatusFilter::Only(FeedbackStatus::Archived));
    assert!(table.contains("Feedback List (0 items)"));
    assert!(table.contains("No feedback found for the selected status."));
}

#[test]
fn truncate_collapses_whitespace_and_marks_cut() {
    assert_eq!(truncate("short\nmessage", 20), "short message");
    assert_eq!(truncate("abcdefghij", 5), "abcd…");
}
