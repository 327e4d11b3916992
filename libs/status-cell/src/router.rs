use std::sync::Arc;

use axum::{routing::get, Router};

use shared_gateway::AppState;

use crate::pages;

pub fn status_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/status/{slug}", get(pages::status_page))
        .route("/demo", get(pages::demo_page))
        .with_state(state)
}
