//! Common imports for code built on the jira-bridge library.

pub use crate::base::{
    config::Config,
    types::{Err, Res, Void},
};
pub use crate::runtime::Runtime;
pub use anyhow::anyhow;
pub use tracing::{debug, error, info, instrument, warn};
