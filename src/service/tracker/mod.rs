//! Issue tracker integration.
//!
//! The bridge only ever creates issues, so the trait is a single call. Jira
//! is the concrete implementation.

pub mod jira;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{CreatedIssue, IssueFields, Res};

// Traits.

/// Generic issue tracker trait that clients must implement.
#[async_trait]
pub trait GenericTrackerClient: Send + Sync + 'static {
    /// Create one issue from validated fields.
    ///
    /// Makes exactly one attempt. Any non-success answer from the tracker is
    /// an error carrying the tracker's status and body.
    async fn create_issue(&self, fields: &IssueFields) -> Res<CreatedIssue>;
}

// Structs.

/// Tracker client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct TrackerClient {
    inner: Arc<dyn GenericTrackerClient>,
}

impl Deref for TrackerClient {
    type Target = dyn GenericTrackerClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl TrackerClient {
    pub fn new(inner: Arc<dyn GenericTrackerClient>) -> Self {
        Self { inner }
    }
}
