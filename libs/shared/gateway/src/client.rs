use std::time::Duration;

use reqwest::{Client, Method};
use serde_json::{json, Value};
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_models::error::AppError;

/// A hung backend call surfaces as a failed aggregation instead of an
/// unbounded wait.
const BACKEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Successful backend outcome: the status and the body, passed through
/// unchanged. Bodies that are not JSON (e.g. a 204) degrade to an empty
/// object.
#[derive(Debug, Clone)]
pub struct BackendResponse {
    pub status: u16,
    pub body: Value,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_base_url(config.api_base())
    }

    /// Construct against an explicit base address (tests inject a mock
    /// server URI here).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Call an endpoint that needs no credential.
    pub async fn public(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<BackendResponse, AppError> {
        self.request(method, path, None, body).await
    }

    /// Call a bearer-protected endpoint. Without a token the call is never
    /// attempted; the caller gets an unauthenticated result with no network
    /// round-trip.
    pub async fn authed(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<BackendResponse, AppError> {
        let token = token.ok_or(AppError::Unauthenticated)?;
        self.request(method, path, Some(token), body).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<BackendResponse, AppError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Calling backend {} {}", method, url);

        let mut req = self.client.request(method, &url).timeout(BACKEND_TIMEOUT);

        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req
            .send()
            .await
            .map_err(|e| AppError::BackendUnavailable(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let body: Value = serde_json::from_str(&text).unwrap_or_else(|_| json!({}));

        if !status.is_success() {
            let detail = body
                .get("detail")
                .and_then(Value::as_str)
                .or_else(|| body.get("error").and_then(Value::as_str))
                .unwrap_or("Request failed")
                .to_string();
            error!("Backend error ({}): {}", status, detail);

            return Err(AppError::BackendRejected {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(BackendResponse {
            status: status.as_u16(),
            body,
        })
    }
}
