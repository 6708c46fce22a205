//! Service integrations for external APIs and shared stores.
//!
//! This module contains implementations for the services used by the jira-bridge:
//! - Chat services (e.g., Slack)
//! - Issue trackers (e.g., Jira)
//! - Event dedup stores (e.g., in-memory with a TTL)
//!
//! Each service module defines both a generic trait and a concrete implementation,
//! allowing for extensibility and easy testing.

pub mod chat;
pub mod dedup;
pub mod tracker;
