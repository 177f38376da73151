use serde_json::Value;

/// Base address used when none is supplied, matching the default backend
/// binding (`HOST`/`PORT` fall back to `0.0.0.0:8000`).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/";

/// Client for the Sage HTTP API.
///
/// The base address is fixed at construction. Relative API paths are resolved
/// by concatenation, so the base address must end with a trailing slash.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the banks collection from `{base_url}banks/`.
    ///
    /// The payload is returned exactly as the server encoded it, without
    /// validation or reshaping. Non-success statuses, network failures and
    /// decode failures all surface as the underlying [`reqwest::Error`].
    pub async fn get_banks(&self) -> Result<Value, reqwest::Error> {
        let res = self
            .http
            .get(format!("{}banks/", self.base_url))
            .send()
            .await?;

        res.error_for_status()?.json().await
    }
}
