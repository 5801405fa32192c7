//! TTL cache for directory collections.
//!
//! Directory reads are interactive (every keystroke re-filters), so the
//! filter engine must run against memory, not the database. Each directory
//! keeps its full collection behind this cache; a fetch happens at most
//! once per staleness window. On a failed refresh the previous snapshot is
//! served instead, so a backend blip doesn't blank out list pages that were
//! working a second earlier.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::RwLock;

struct CacheEntry<T> {
    fetched_at: Instant,
    records: Arc<Vec<T>>,
}

/// A single-collection cache with a fixed staleness window.
pub struct CollectionCache<T> {
    ttl: Duration,
    inner: RwLock<Option<CacheEntry<T>>>,
}

impl<T> CollectionCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: RwLock::new(None),
        }
    }

    /// Return the cached collection, refreshing through `fetch` when the
    /// snapshot is older than the TTL (or absent).
    ///
    /// # Errors
    ///
    /// Propagates the fetch error only when there is no previous snapshot
    /// to fall back on.
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<Arc<Vec<T>>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        {
            let guard = self.inner.read().await;
            if let Some(entry) = guard.as_ref() {
                if entry.fetched_at.elapsed() < self.ttl {
                    return Ok(entry.records.clone());
                }
            }
        }

        let mut guard = self.inner.write().await;
        // Another task may have refreshed while we waited for the lock.
        if let Some(entry) = guard.as_ref() {
            if entry.fetched_at.elapsed() < self.ttl {
                return Ok(entry.records.clone());
            }
        }

        match fetch().await {
            Ok(records) => {
                let records = Arc::new(records);
                *guard = Some(CacheEntry {
                    fetched_at: Instant::now(),
                    records: records.clone(),
                });
                Ok(records)
            }
            Err(error) => match guard.as_ref() {
                Some(stale) => {
                    tracing::warn!(error = %error, "refresh failed, serving stale snapshot");
                    Ok(stale.records.clone())
                }
                None => Err(error),
            },
        }
    }

    /// Drop the cached snapshot, forcing the next read to fetch.
    pub async fn invalidate(&self) {
        *self.inner.write().await = None;
    }
}
