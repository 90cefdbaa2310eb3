//! Environment-derived configuration.

use vaultfit_commerce::GHL_API_BASE;

const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration, read once at startup.
///
/// A missing upstream credential is not a startup failure; the proxy
/// endpoint reports it per request instead.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub ghl_api_key: Option<String>,
    /// Upstream base URL; fixed in production, overridden by tests.
    pub ghl_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("PORT is not a valid port number; using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        Self {
            port,
            ghl_api_key: std::env::var("GHL_API_KEY").ok(),
            ghl_base_url: GHL_API_BASE.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            ghl_api_key: None,
            ghl_base_url: GHL_API_BASE.to_string(),
        }
    }
}
