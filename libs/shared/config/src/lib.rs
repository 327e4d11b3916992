use std::env;
use tracing::warn;

/// Fallback backend address when neither the internal nor the public base is
/// configured. Matches the backend's default local port.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_internal: Option<String>,
    pub api_base_public: Option<String>,
    pub production: bool,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_base_internal: env::var("API_BASE_INTERNAL").ok(),
            api_base_public: env::var("API_BASE_PUBLIC").ok(),
            production: env::var("APP_ENV")
                .map(|v| v == "production")
                .unwrap_or(false),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        };

        if config.api_base_internal.is_none() && config.api_base_public.is_none() {
            warn!(
                "API_BASE_INTERNAL/API_BASE_PUBLIC not set, falling back to {}",
                DEFAULT_API_BASE
            );
        }

        config
    }

    /// Backend base address for server-side calls. The internal address wins
    /// so rendering inside the deployment network never leaves it; the public
    /// address is the browser-visible fallback.
    pub fn api_base(&self) -> &str {
        self.api_base_internal
            .as_deref()
            .or(self.api_base_public.as_deref())
            .unwrap_or(DEFAULT_API_BASE)
    }

    /// The session cookie carries `Secure` only when serving production
    /// traffic, so local plain-HTTP development keeps working.
    pub fn cookie_secure(&self) -> bool {
        self.production
    }
}
