use serde::Deserialize;
use thiserror::Error;

/// Base URL of the upstream commerce API.
pub const GHL_API_BASE: &str = "https://rest.gohighlevel.com/v1";

/// Failure modes of the one proxied call.
///
/// None of these are retried; each is terminal for the current request. The
/// HTTP layer decides how every variant maps onto a response.
#[derive(Debug, Error)]
pub enum CommerceError {
    /// The upstream credential is not configured. Surfaced per request, the
    /// process still starts without it.
    #[error("API key is not configured")]
    MissingApiKey,

    /// The upstream answered with a non-success status. The status is
    /// forwarded to the caller; the body is only logged.
    #[error("upstream returned {status} {status_text}")]
    Upstream { status: u16, status_text: String },

    /// Anything unexpected: connection failure, malformed JSON, a broken
    /// client build. Collapsed to a generic server error at the boundary.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Upstream response wrapper. A missing `products` field degrades to an
/// empty list rather than an error; callers cannot distinguish that from a
/// genuinely empty catalog.
#[derive(Debug, Deserialize)]
struct ProductsEnvelope {
    #[serde(default)]
    products: Vec<serde_json::Value>,
}

/// Client for the upstream commerce API.
///
/// One best-effort forward per request: no retry, no caching, no rate
/// limiting, no pagination. Timeouts are whatever the underlying HTTP client
/// defaults to.
#[derive(Debug, Clone)]
pub struct CommerceClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl CommerceClient {
    /// Client against the production upstream.
    pub fn new(api_key: Option<String>) -> Result<Self, CommerceError> {
        Self::with_base_url(api_key, GHL_API_BASE)
    }

    /// Client against an explicit upstream base URL (tests point this at a
    /// local mock).
    pub fn with_base_url(
        api_key: Option<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, CommerceError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch the upstream product list, unwrapping the response envelope.
    pub async fn fetch_products(&self) -> Result<Vec<serde_json::Value>, CommerceError> {
        let api_key = self.api_key.as_ref().ok_or(CommerceError::MissingApiKey)?;

        let response = self
            .http
            .get(format!("{}/products", self.base_url))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .bearer_auth(api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %body, "GHL API error");
            return Err(CommerceError::Upstream {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let envelope: ProductsEnvelope = response.json().await?;
        Ok(envelope.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_unwraps_the_products_field() {
        let envelope: ProductsEnvelope =
            serde_json::from_str(r#"{"products":[{"id":"x"}],"total":1}"#).unwrap();
        assert_eq!(envelope.products.len(), 1);
        assert_eq!(envelope.products[0]["id"], "x");
    }

    #[test]
    fn envelope_without_products_degrades_to_empty() {
        let envelope: ProductsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.products.is_empty());
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_network_call() {
        // Unroutable base URL: reaching the network would fail differently.
        let client = CommerceClient::with_base_url(None, "http://127.0.0.1:0").unwrap();
        let err = client.fetch_products().await.unwrap_err();
        assert!(matches!(err, CommerceError::MissingApiKey));
        assert_eq!(err.to_string(), "API key is not configured");
    }
}
