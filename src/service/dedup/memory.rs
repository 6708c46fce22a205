//! In-memory, TTL-bounded dedup store.

use std::{sync::Arc, time::Duration};

use dashmap::{DashMap, mapref::entry::Entry};
use tokio::time::Instant;
use tracing::debug;

use super::{DedupStore, GenericDedupStore};

// Extra methods on `DedupStore` applied by the memory implementation.

impl DedupStore {
    /// Creates an in-memory store whose entries expire after `ttl`.
    pub fn memory(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(MemoryDedupStore::new(ttl)),
        }
    }
}

/// Event ids keyed to the instant they were first seen.
///
/// An entry older than the TTL no longer counts as seen, whether or not it
/// has been pruned yet.
pub struct MemoryDedupStore {
    seen: DashMap<String, Instant>,
    ttl: Duration,
}

impl MemoryDedupStore {
    pub fn new(ttl: Duration) -> Self {
        Self { seen: DashMap::new(), ttl }
    }
}

impl GenericDedupStore for MemoryDedupStore {
    fn insert_if_absent(&self, id: &str) -> bool {
        let now = Instant::now();

        // The entry guard holds the shard lock for the whole check-and-set.
        match self.seen.entry(id.to_string()) {
            Entry::Occupied(mut entry) => {
                if now.duration_since(*entry.get()) < self.ttl {
                    return false;
                }

                entry.insert(now);
                true
            }
            Entry::Vacant(entry) => {
                entry.insert(now);
                true
            }
        }
    }

    fn prune(&self) {
        let now = Instant::now();
        let before = self.seen.len();

        self.seen.retain(|_, seen_at| now.duration_since(*seen_at) < self.ttl);

        debug!("Pruned {} expired event ids.", before.saturating_sub(self.seen.len()));
    }

    fn len(&self) -> usize {
        self.seen.len()
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_insert_wins() {
        let store = MemoryDedupStore::new(Duration::from_secs(60));

        assert!(store.insert_if_absent("1700000000.000100"));
        assert!(!store.insert_if_absent("1700000000.000100"));
        assert!(store.insert_if_absent("1700000000.000200"));
        assert_eq!(store.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn expired_ids_are_accepted_again() {
        let store = MemoryDedupStore::new(Duration::from_secs(60));

        assert!(store.insert_if_absent("ts-1"));

        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(!store.insert_if_absent("ts-1"));

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(store.insert_if_absent("ts-1"));
        assert!(!store.insert_if_absent("ts-1"));
    }

    #[tokio::test(start_paused = true)]
    async fn prune_drops_only_expired_entries() {
        let store = MemoryDedupStore::new(Duration::from_secs(60));

        store.insert_if_absent("old");
        tokio::time::advance(Duration::from_secs(45)).await;
        store.insert_if_absent("new");
        tokio::time::advance(Duration::from_secs(30)).await;

        store.prune();

        assert_eq!(store.len(), 1);
        assert!(store.insert_if_absent("old"));
        assert!(!store.insert_if_absent("new"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_duplicates_admit_exactly_one() {
        let store = DedupStore::memory(Duration::from_secs(60));

        let handles = (0..32)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.insert_if_absent("same-event") })
            })
            .collect::<Vec<_>>();

        let mut admitted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                admitted += 1;
            }
        }

        assert_eq!(admitted, 1);
        assert_eq!(store.len(), 1);
    }
}
