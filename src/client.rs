//! The surface the views talk to: verbs over the mock boundary with a
//! read-through response cache in front. GETs are cached under a stable
//! key; every successful mutation invalidates the mutated scope plus the
//! derived reports scope.

use std::time::Duration;

use http::Method;
use serde_json::{Value, json};
use tracing::debug;

use crate::auth::session::Principal;
use crate::boundary::{Envelope, MockApi};
use crate::config::Config;
use crate::store::ResourceStore;
use crate::utils::response_cache::ResponseCache;

pub struct ApiClient {
    api: MockApi,
    cache: ResponseCache,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self::with_store(ResourceStore::seeded(), config)
    }

    pub fn with_store(store: ResourceStore, config: Config) -> Self {
        let cache = ResponseCache::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_ttl_secs),
        );
        Self {
            api: MockApi::with_store(store, config),
            cache,
        }
    }

    pub async fn get(&mut self, path: &str, query: &[(&str, &str)]) -> Envelope {
        let key = cache_key(&Method::GET, path, query);
        if let Some(hit) = self.cache.get(&key).await {
            debug!(key, "cache hit");
            return hit;
        }

        let envelope = self.api.request(Method::GET, path, query, None).await;
        if envelope.success {
            self.cache.insert(key, envelope.clone()).await;
        }
        envelope
    }

    pub async fn post(&mut self, path: &str, body: Value) -> Envelope {
        self.mutate(Method::POST, path, Some(body)).await
    }

    pub async fn put(&mut self, path: &str, body: Value) -> Envelope {
        self.mutate(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&mut self, path: &str) -> Envelope {
        self.mutate(Method::DELETE, path, None).await
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Envelope {
        self.post("/auth/login", json!({ "email": email, "password": password }))
            .await
    }

    pub async fn logout(&mut self) -> Envelope {
        self.post("/auth/logout", json!({})).await
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.api.principal()
    }

    pub fn store(&self) -> &ResourceStore {
        self.api.store()
    }

    async fn mutate(&mut self, method: Method, path: &str, body: Option<Value>) -> Envelope {
        let envelope = self.api.request(method, path, &[], body).await;
        if envelope.success {
            let scope = scope_of(path).to_string();
            self.cache.invalidate_scope(&scope);
            // Dashboard counters derive from several collections.
            self.cache.invalidate_scope("reports");
        }
        envelope
    }
}

/// Stable cache key: scope prefix, then method, path and the query in
/// sorted order so parameter order never splits an entry.
pub fn cache_key(method: &Method, path: &str, query: &[(&str, &str)]) -> String {
    let mut pairs: Vec<(&str, &str)> = query.to_vec();
    pairs.sort();
    let qs = pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    if qs.is_empty() {
        format!("{}:{} {}", scope_of(path), method, path)
    } else {
        format!("{}:{} {}?{}", scope_of(path), method, path, qs)
    }
}

fn scope_of(path: &str) -> &str {
    path.trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_key_is_stable_under_query_order() {
        let a = cache_key(
            &Method::GET,
            "/employees",
            &[("status", "Active"), ("department", "Engineering")],
        );
        let b = cache_key(
            &Method::GET,
            "/employees",
            &[("department", "Engineering"), ("status", "Active")],
        );
        assert_eq!(a, b);
        assert!(a.starts_with("employees:"));
    }

    #[test]
    fn scope_is_the_first_path_segment() {
        assert_eq!(scope_of("/payroll/structure/EMP004"), "payroll");
        assert_eq!(scope_of("/employees"), "employees");
    }
}
