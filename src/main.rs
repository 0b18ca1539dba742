//! Contact Book - Main entry point
//!
//! Reads one command per line from stdin and prints one reply per command.
//! Logs go to stderr so they never mix with replies.

use anyhow::{Context, Result};
use contact_book::cli;
use contact_book::{CommandHandler, Config, ContactService};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting contact book (birthday window: {} days)",
        config.birthday_window_days
    );

    let mut handler = CommandHandler::new(ContactService::from_config(&config));

    cli::run(
        &mut handler,
        &config.prompt,
        io::stdin().lock(),
        io::stdout().lock(),
    )
    .context("Console session failed")?;

    info!(
        "Contact book shutdown complete ({} contacts discarded)",
        handler.service().book().len()
    );
    Ok(())
}
