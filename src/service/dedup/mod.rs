//! Suppression of duplicate event deliveries.
//!
//! Slack redelivers an event when it does not see a timely acknowledgement,
//! so the receiver records each event id before acting on it.

pub mod memory;

use std::{ops::Deref, sync::Arc};

// Traits.

/// Store of event ids that have already been handled.
pub trait GenericDedupStore: Send + Sync + 'static {
    /// Records `id` and returns `true` if it was not already present.
    ///
    /// This must be a single atomic step: of several concurrent callers
    /// with the same id, exactly one sees `true`.
    fn insert_if_absent(&self, id: &str) -> bool;

    /// Drops entries that no longer suppress redeliveries.
    fn prune(&self);

    /// Number of ids currently held.
    fn len(&self) -> usize;
}

// Structs.

/// Dedup store for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct DedupStore {
    inner: Arc<dyn GenericDedupStore>,
}

impl Deref for DedupStore {
    type Target = dyn GenericDedupStore;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl DedupStore {
    pub fn new(inner: Arc<dyn GenericDedupStore>) -> Self {
        Self { inner }
    }
}
