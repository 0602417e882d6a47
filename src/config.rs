use dotenvy::dotenv;
use std::env;

/// Runtime knobs for the mock boundary. Everything is defaulted so the
/// crate runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Simulated network delay injected on every boundary call.
    pub latency_ms: u64,
    /// The one password accepted for every roster account.
    pub shared_password: String,
    pub cache_ttl_secs: u64,
    pub cache_capacity: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            latency_ms: env::var("SIM_LATENCY_MS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .unwrap(),
            shared_password: env::var("SHARED_PASSWORD")
                .unwrap_or_else(|_| "password123".to_string()),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .unwrap(),
            cache_capacity: env::var("CACHE_CAPACITY")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .unwrap(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            latency_ms: 300,
            shared_password: "password123".to_string(),
            cache_ttl_secs: 300,
            cache_capacity: 10_000,
        }
    }
}
