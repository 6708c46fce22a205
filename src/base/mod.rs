//! Core components, types, and utilities for the jira-bridge.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Wire types for inbound events and tracker responses.
//! - Common result aliases.

pub mod config;
pub mod types;
