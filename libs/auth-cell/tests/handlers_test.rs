use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::header::LOCATION;
use axum::response::IntoResponse;
use axum_extra::extract::cookie::CookieJar;
use reqwest::Method;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use auth_cell::handlers::{login, logout, register};
use shared_config::AppConfig;
use shared_gateway::AppState;
use shared_models::auth::{LoginPayload, RegisterPayload};
use shared_models::error::AppError;
use shared_utils::session::{read_token, SESSION_COOKIE};

fn test_state(uri: &str) -> Arc<AppState> {
    let config = AppConfig {
        api_base_internal: Some(uri.to_string()),
        api_base_public: None,
        production: false,
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    Arc::new(AppState::new(config))
}

#[tokio::test]
async fn login_success_sets_http_only_session_cookie() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .and(body_json(json!({"email": "me@example.com", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok-1"})))
        .mount(&mock_server)
        .await;

    let state = test_state(&mock_server.uri());
    let payload = LoginPayload {
        email: "me@example.com".to_string(),
        password: "secret".to_string(),
    };

    let (jar, body) = login(State(state), CookieJar::new(), Json(payload))
        .await
        .unwrap();

    assert_eq!(body.0, json!({"ok": true}));
    let cookie = jar.get(SESSION_COOKIE).expect("session cookie set");
    assert_eq!(cookie.value(), "tok-1");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
}

#[tokio::test]
async fn login_failure_passes_backend_detail_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})),
        )
        .mount(&mock_server)
        .await;

    let state = test_state(&mock_server.uri());
    let payload = LoginPayload {
        email: "me@example.com".to_string(),
        password: "wrong".to_string(),
    };

    let result = login(State(state), CookieJar::new(), Json(payload)).await;

    match result.unwrap_err() {
        AppError::BackendRejected { status, detail } => {
            assert_eq!(status, 401);
            assert_eq!(detail, "Invalid credentials");
        }
        other => panic!("Expected BackendRejected, got {other:?}"),
    }
}

#[tokio::test]
async fn register_rejects_short_password_before_any_backend_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "x"})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let state = test_state(&mock_server.uri());
    let payload = RegisterPayload {
        email: "me@example.com".to_string(),
        password: "short".to_string(),
        password_confirm: None,
    };

    let result = register(State(state), CookieJar::new(), Json(payload)).await;

    match result.unwrap_err() {
        AppError::Validation(_) => {}
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn register_rejects_mismatched_confirmation() {
    let mock_server = MockServer::start().await;

    let state = test_state(&mock_server.uri());
    let payload = RegisterPayload {
        email: "me@example.com".to_string(),
        password: "secret-1".to_string(),
        password_confirm: Some("secret-2".to_string()),
    };

    let result = register(State(state), CookieJar::new(), Json(payload)).await;

    match result.unwrap_err() {
        AppError::Validation(msg) => assert_eq!(msg, "Passwords do not match."),
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn register_success_sets_session_cookie() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok-2"})))
        .mount(&mock_server)
        .await;

    let state = test_state(&mock_server.uri());
    let payload = RegisterPayload {
        email: "new@example.com".to_string(),
        password: "secret".to_string(),
        password_confirm: Some("secret".to_string()),
    };

    let (jar, _) = register(State(state), CookieJar::new(), Json(payload))
        .await
        .unwrap();

    assert_eq!(read_token(&jar), Some("tok-2".to_string()));
}

#[tokio::test]
async fn logout_clears_cookie_and_redirects_home() {
    let jar = CookieJar::new().add(shared_utils::session::session_cookie(
        "tok-1".to_string(),
        false,
    ));

    let (jar, redirect) = logout(jar).await;

    let cookie = jar.get(SESSION_COOKIE).expect("removal cookie present");
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));

    let response = redirect.into_response();
    assert_eq!(response.headers()[LOCATION], "/");
}

#[tokio::test]
async fn credential_round_trip_login_then_authed_call_then_logout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok-rt"})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/monitors"))
        .and(header("Authorization", "Bearer tok-rt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = test_state(&mock_server.uri());
    let payload = LoginPayload {
        email: "me@example.com".to_string(),
        password: "secret".to_string(),
    };

    let (jar, _) = login(State(state.clone()), CookieJar::new(), Json(payload))
        .await
        .unwrap();

    // The freshly planted credential authorizes a backend call.
    let token = read_token(&jar);
    let listed = state
        .backend
        .authed(Method::GET, "/v1/monitors", token.as_deref(), None)
        .await;
    assert!(listed.is_ok());

    // After logout the same call is unauthenticated with no round-trip.
    let (jar, _) = logout(jar).await;
    let token = read_token(&jar).filter(|t| !t.is_empty());
    let result = state
        .backend
        .authed(Method::GET, "/v1/monitors", token.as_deref(), None)
        .await;

    match result.unwrap_err() {
        AppError::Unauthenticated => {}
        other => panic!("Expected Unauthenticated, got {other:?}"),
    }
}
