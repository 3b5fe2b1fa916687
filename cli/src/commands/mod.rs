//! One module per subcommand.

pub mod add;
pub mod list;
pub mod set_status;
pub mod summary;

use std::time::Duration;

use anyhow::{Context, Result};

use crate::{
    cli::{Cli, Commands},
    client::FeedbackClient,
};

/// Executes the parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.connection.api_config();
    tracing::debug!(base_url = %config.base_url, "using feedback api");
    let client = FeedbackClient::new(config, Duration::from_secs(cli.connection.timeout_secs))
        .context("failed to build feedback api client")?;

    let output = match cli.command {
        Commands::List {
            status,
            format,
        } => list::run(&client, status, format).await?,
        Commands::Add {
            name,
            email,
            message,
            status,
        } => add::run(&client, name, email, message, status).await?,
        Commands::SetStatus {
            id,
            status,
        } => set_status::run(&client, id, status).await?,
        Commands::Summary {
            id,
            message,
        } => summary::run(&client, id, message).await?,
    };
    println!("{output}");
    Ok(())
}
