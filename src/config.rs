//! Server configuration

/// Server configuration loaded from environment variables
pub struct Config {
    pub http_address: String,
    pub http_port: u16,
    pub metrics_port: u16,
    pub metric_name: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// stock defaults (app on 8000, metrics on 8080).
    pub fn from_env() -> Self {
        Self {
            http_address: std::env::var("HTTP_ADDRESS").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: env_port("HTTP_PORT", 8000),
            metrics_port: env_port("METRICS_PORT", 8080),
            metric_name: std::env::var("METRIC_NAME")
                .unwrap_or_else(|_| "http_foxes_count".into()),
        }
    }
}

/// Parse a port from the environment; unset or malformed values fall back
/// to the default.
fn env_port(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
