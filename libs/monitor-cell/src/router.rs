use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use shared_gateway::AppState;

use crate::{handlers, pages};

pub fn monitor_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::dashboard_page))
        .route("/monitors/new", get(pages::new_monitor_page))
        .route("/monitors/{id}", get(pages::monitor_detail_page))
        .route(
            "/api/monitors",
            get(handlers::list_monitors).post(handlers::create_monitor),
        )
        .route("/api/monitors/{id}", delete(handlers::delete_monitor))
        .with_state(state)
}
