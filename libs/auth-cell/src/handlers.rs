use std::sync::Arc;

use axum::{
    extract::{Json, State},
    response::Redirect,
};
use axum_extra::extract::cookie::CookieJar;
use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;

use shared_gateway::AppState;
use shared_models::auth::{LoginPayload, RegisterPayload, TokenBody};
use shared_models::error::AppError;
use shared_utils::session;
use shared_utils::validate::validate_password;

fn access_token(body: Value) -> Result<String, AppError> {
    serde_json::from_value::<TokenBody>(body)
        .map(|t| t.access_token)
        .map_err(|_| AppError::BackendUnavailable("auth response missing access_token".to_string()))
}

/// Forward credentials to the backend and plant the session cookie from the
/// returned token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(payload): Json<LoginPayload>,
) -> Result<(CookieJar, Json<Value>), AppError> {
    debug!("Login attempt for {}", payload.email);

    let body = json!({ "email": payload.email, "password": payload.password });
    let res = state
        .backend
        .public(Method::POST, "/v1/auth/login", Some(body))
        .await?;

    let token = access_token(res.body)?;
    let jar = jar.add(session::session_cookie(
        token,
        state.config.cookie_secure(),
    ));

    Ok((jar, Json(json!({ "ok": true }))))
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(payload): Json<RegisterPayload>,
) -> Result<(CookieJar, Json<Value>), AppError> {
    debug!("Registration attempt for {}", payload.email);

    validate_password(&payload.password, payload.password_confirm.as_deref())?;

    let body = json!({ "email": payload.email, "password": payload.password });
    let res = state
        .backend
        .public(Method::POST, "/v1/auth/register", Some(body))
        .await?;

    let token = access_token(res.body)?;
    let jar = jar.add(session::session_cookie(
        token,
        state.config.cookie_secure(),
    ));

    Ok((jar, Json(json!({ "ok": true }))))
}

/// Drop the session cookie and send the browser home. No backend call is
/// involved; the token simply stops being presented.
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (jar.add(session::clear_cookie()), Redirect::to("/"))
}
