use std::time::Duration;

use moka::future::Cache;
use tracing::error;

use crate::boundary::Envelope;

/// Key-indexed response cache sitting between the views and the service
/// boundary. Keys are prefixed with the resource scope so a mutation can
/// drop every cached read of that resource in one signal.
pub struct ResponseCache {
    inner: Cache<String, Envelope>,
}

impl ResponseCache {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .support_invalidation_closures()
            .build();
        Self { inner }
    }

    pub async fn get(&self, key: &str) -> Option<Envelope> {
        self.inner.get(key).await
    }

    pub async fn insert(&self, key: String, envelope: Envelope) {
        self.inner.insert(key, envelope).await;
    }

    /// Invalidation-on-mutation: drops every entry whose key belongs to
    /// the given scope.
    pub fn invalidate_scope(&self, scope: &str) {
        let prefix = format!("{scope}:");
        if let Err(e) = self
            .inner
            .invalidate_entries_if(move |key, _| key.starts_with(&prefix))
        {
            error!(scope, error = %e, "cache invalidation failed");
        }
    }

    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}
