//! Message handling for jira-bridge.
//!
//! This module provides functionality for acting on chat messages:
//! - Extracting issue fields from message text
//! - Coordinating issue creation and the reply to the channel

pub mod fields;
pub mod issue_request;
