use std::sync::Arc;

use axum::{middleware, Router};

use auth_cell::router::auth_routes;
use monitor_cell::router::monitor_routes;
use shared_gateway::AppState;
use shared_utils::guard::require_session;
use status_cell::router::status_routes;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(auth_routes(state.clone()))
        .merge(monitor_routes(state.clone()))
        .merge(status_routes(state))
        // Route protection is decided here, once per request, before any
        // handler runs.
        .layer(middleware::from_fn(require_session))
}
