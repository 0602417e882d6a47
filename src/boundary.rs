//! The in-process service boundary: a fixed route table dispatched over
//! the in-memory store, with simulated latency and a uniform response
//! envelope. The latency pause is the only suspension point; handler work
//! runs synchronously to completion once resumed.

use std::time::Duration;

use http::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::sleep;
use tracing::debug;

use crate::auth::session::{Principal, Session};
use crate::config::Config;
use crate::error::ServiceError;
use crate::routes;
use crate::store::ResourceStore;

/// Uniform wrapper around every boundary response, carried with an
/// HTTP-like status code. Callers branch on `success`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip)]
    pub status: StatusCode,
}

impl Envelope {
    /// Deserializes the `data` field, if present and well-shaped.
    pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        self.data
            .clone()
            .and_then(|v| serde_json::from_value(v).ok())
    }
}

/// What a handler produces before the boundary wraps it into an envelope.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub data: Option<Value>,
    pub message: Option<String>,
    pub total: Option<usize>,
}

impl Reply {
    pub fn ok<T: Serialize>(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            data: Some(serde_json::to_value(data).expect("serializable response data")),
            message: None,
            total: None,
        }
    }

    pub fn created<T: Serialize>(data: T, message: &str) -> Self {
        Self {
            status: StatusCode::CREATED,
            data: Some(serde_json::to_value(data).expect("serializable response data")),
            message: Some(message.to_string()),
            total: None,
        }
    }

    /// Success with a message and no payload.
    pub fn message(message: &str) -> Self {
        Self {
            status: StatusCode::OK,
            data: None,
            message: Some(message.to_string()),
            total: None,
        }
    }

    /// Bare success.
    pub fn empty() -> Self {
        Self {
            status: StatusCode::OK,
            data: None,
            message: None,
            total: None,
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }
}

/// Query-string parameters as the client supplied them.
#[derive(Debug, Default)]
pub struct Query(Vec<(String, String)>);

impl Query {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// One boundary call as seen by a handler.
#[derive(Debug)]
pub struct Request {
    pub param: Option<String>,
    pub query: Query,
    pub body: Option<Value>,
}

impl Request {
    /// The captured `:param` segment. Routes without one never read this.
    pub fn param(&self) -> &str {
        self.param.as_deref().unwrap_or_default()
    }

    pub fn payload<T: DeserializeOwned>(&self) -> Result<T, ServiceError> {
        let body = self
            .body
            .clone()
            .ok_or_else(|| ServiceError::validation("Request body required"))?;
        serde_json::from_value(body)
            .map_err(|e| ServiceError::validation(format!("Invalid request body: {e}")))
    }
}

/// Shared state a handler runs against. The store and the session slot are
/// owned here and mutated nowhere else.
pub struct Backend {
    pub store: ResourceStore,
    pub session: Session,
    pub config: Config,
}

pub type Handler = fn(&mut Backend, Request) -> Result<Reply, ServiceError>;

enum Segment {
    Literal(&'static str),
    Param,
}

struct Route {
    method: Method,
    pattern: &'static str,
    segments: Vec<Segment>,
    handler: Handler,
}

/// The fixed (method, path-template) table. Templates support one
/// positional `:param` segment. The table is fully enumerated at startup;
/// a miss at dispatch time is a configuration error and panics rather
/// than producing a failure envelope.
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&mut self, method: Method, pattern: &'static str, handler: Handler) {
        if self
            .routes
            .iter()
            .any(|r| r.method == method && r.pattern == pattern)
        {
            panic!("duplicate route registered: {method} {pattern}");
        }

        let segments: Vec<Segment> = pattern
            .trim_matches('/')
            .split('/')
            .map(|s| match s.strip_prefix(':') {
                Some(_) => Segment::Param,
                None => Segment::Literal(s),
            })
            .collect();
        let params = segments
            .iter()
            .filter(|s| matches!(s, Segment::Param))
            .count();
        if params > 1 {
            panic!("route {pattern} has more than one parameter segment");
        }

        self.routes.push(Route {
            method,
            pattern,
            segments,
            handler,
        });
    }

    /// First registered match wins, so literal routes are listed before
    /// their parameterized siblings.
    fn resolve(&self, method: &Method, path: &str) -> Option<(Handler, Option<String>)> {
        let parts: Vec<&str> = path.trim_matches('/').split('/').collect();

        'routes: for route in &self.routes {
            if route.method != *method || route.segments.len() != parts.len() {
                continue;
            }
            let mut captured = None;
            for (segment, part) in route.segments.iter().zip(&parts) {
                match segment {
                    Segment::Literal(lit) => {
                        if lit != part {
                            continue 'routes;
                        }
                    }
                    Segment::Param => captured = Some(part.to_string()),
                }
            }
            return Some((route.handler, captured));
        }
        None
    }
}

/// The mock backend the application talks to instead of a real server.
pub struct MockApi {
    router: Router,
    backend: Backend,
    latency: Duration,
}

impl MockApi {
    pub fn new(config: Config) -> Self {
        Self::with_store(ResourceStore::seeded(), config)
    }

    pub fn with_store(store: ResourceStore, config: Config) -> Self {
        // The pause models network delay; it is never instantaneous.
        let latency = Duration::from_millis(config.latency_ms.max(1));
        Self {
            router: routes::table(),
            backend: Backend {
                store,
                session: Session::default(),
                config,
            },
            latency,
        }
    }

    /// Dispatches one call: pause for the simulated latency, run the
    /// matched handler synchronously, wrap the outcome. Every issued call
    /// resolves to a well-formed envelope; there is no cancellation.
    pub async fn request(
        &mut self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Envelope {
        sleep(self.latency).await;

        let (handler, param) = self
            .router
            .resolve(&method, path)
            .unwrap_or_else(|| panic!("no route registered for {method} {path}"));

        debug!(%method, path, "dispatching");
        let request = Request {
            param,
            query: Query::from_pairs(query),
            body,
        };

        match handler(&mut self.backend, request) {
            Ok(reply) => Envelope {
                success: true,
                data: reply.data,
                message: reply.message,
                total: reply.total,
                status: reply.status,
            },
            Err(e) => {
                debug!(%method, path, error = %e, "request failed");
                Envelope {
                    success: false,
                    data: None,
                    message: Some(e.to_string()),
                    total: None,
                    status: e.status(),
                }
            }
        }
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.backend.session.current()
    }

    pub fn store(&self) -> &ResourceStore {
        &self.backend.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::employee;

    #[test]
    fn literal_routes_win_over_param_routes() {
        let mut router = Router::new();
        router.route(Method::GET, "/employees/new", employee::list);
        router.route(Method::GET, "/employees/:id", employee::get);

        let (_, param) = router.resolve(&Method::GET, "/employees/new").unwrap();
        assert_eq!(param, None);

        let (_, param) = router.resolve(&Method::GET, "/employees/EMP001").unwrap();
        assert_eq!(param.as_deref(), Some("EMP001"));
    }

    #[test]
    #[should_panic(expected = "duplicate route registered")]
    fn duplicate_registration_is_fatal() {
        let mut router = Router::new();
        router.route(Method::GET, "/employees", employee::list);
        router.route(Method::GET, "/employees", employee::list);
    }

    #[test]
    fn unmatched_method_does_not_resolve() {
        let mut router = Router::new();
        router.route(Method::GET, "/employees", employee::list);
        assert!(router.resolve(&Method::POST, "/employees").is_none());
    }
}
