use std::env;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Startup-time settings. Loaded once from the environment and passed to
/// handlers as application data; immutable for the life of the process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Thunderforest tile API key. `None` when the variable is unset or empty.
    pub api_key: Option<String>,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("THUNDERFOREST_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}
