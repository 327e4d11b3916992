use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_gateway::AppState;

use crate::{handlers, pages};

pub fn auth_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", get(pages::login_page))
        .route("/register", get(pages::register_page))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/register", post(handlers::register))
        .route("/api/auth/logout", post(handlers::logout))
        .with_state(state)
}
