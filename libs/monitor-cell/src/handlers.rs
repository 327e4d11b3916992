use std::sync::Arc;

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use reqwest::Method;
use serde_json::json;
use tracing::debug;

use shared_gateway::AppState;
use shared_models::error::AppError;
use shared_models::monitor::CreateMonitorPayload;
use shared_utils::session::read_token;
use shared_utils::validate::{normalize_url, validate_interval};

fn forward(status: u16, body: serde_json::Value) -> Response {
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::OK),
        Json(body),
    )
        .into_response()
}

/// `GET /api/monitors`: forward the authenticated list as-is.
pub async fn list_monitors(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let token = read_token(&jar).ok_or(AppError::Unauthenticated)?;

    let res = state
        .backend
        .authed(Method::GET, "/v1/monitors", Some(&token), None)
        .await?;

    Ok(forward(res.status, res.body))
}

/// `POST /api/monitors`: validate, then forward the created monitor body.
/// Validation failures never reach the gateway.
pub async fn create_monitor(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(payload): Json<CreateMonitorPayload>,
) -> Result<Response, AppError> {
    let token = read_token(&jar).ok_or(AppError::Unauthenticated)?;

    let url = normalize_url(&payload.url)?;
    validate_interval(payload.interval_sec)?;

    let name = payload.name.trim();
    let name = if name.is_empty() { "Untitled" } else { name };

    debug!("Creating monitor {} -> {}", name, url);

    let body = json!({
        "name": name,
        "url": url,
        "interval_sec": payload.interval_sec,
        "expected_status": payload.expected_status,
    });

    let res = state
        .backend
        .authed(Method::POST, "/v1/monitors", Some(&token), Some(body))
        .await?;

    Ok(forward(res.status, res.body))
}

/// `DELETE /api/monitors/{id}`: a backend 204 passes through as-is; backend
/// errors bubble up with their status and detail.
pub async fn delete_monitor(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let token = read_token(&jar).ok_or(AppError::Unauthenticated)?;

    let res = state
        .backend
        .authed(
            Method::DELETE,
            &format!("/v1/monitors/{id}"),
            Some(&token),
            None,
        )
        .await?;

    if res.status == StatusCode::NO_CONTENT.as_u16() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(forward(res.status, res.body))
}
