//! Library root for `jira-bridge`.
//!
//! Jira-bridge listens for Slack message events and files Jira issues from
//! messages written as:
//!
//! ```text
//! Issue: Fix login bug
//! Priority: High
//! Reporter: alice
//! ```
//!
//! The outcome (the new issue key, or what was missing) is posted back to
//! the channel. Slack, Jira, and the dedup store each sit behind a trait so
//! the event flow can be exercised without either service.

pub mod base;
pub mod interaction;
pub mod prelude;
pub mod runtime;
pub mod server;
pub mod service;

use base::{config::Config, types::Void};
use rustls::crypto;
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the jira-bridge runtime:
/// - Initializes the crypto provider
/// - Creates the runtime context with tracker, chat, and dedup services
/// - Serves the Slack events webhook
pub async fn start(config: Config) -> Void {
    info!("Starting jira-bridge ...");

    // Start the crypto provider.
    crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("A rustls crypto provider is already installed."))?;

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config)?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
