use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::session::SESSION_COOKIE;

/// Paths that bypass classification entirely: assets and the public
/// demo/status surface stay reachable without a session.
const EXCLUDED_PREFIXES: &[&str] = &["/static", "/assets", "/favicon.ico", "/demo", "/status"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(String),
}

fn is_protected(path: &str) -> bool {
    path == "/" || path == "/monitors" || path.starts_with("/monitors/")
}

/// Classify a request path against the static route table. Protected paths
/// without a session redirect to the login page carrying the original path.
pub fn decide(path: &str, has_session: bool) -> RouteDecision {
    if EXCLUDED_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return RouteDecision::Allow;
    }

    if is_protected(path) && !has_session {
        return RouteDecision::Redirect(format!("/login?next={path}"));
    }

    RouteDecision::Allow
}

/// Middleware for route protection. Layered over the whole router; this is
/// the only place the protected/public decision is made. Handlers may look
/// at the cookie again only as a secondary check.
pub async fn require_session(jar: CookieJar, request: Request, next: Next) -> Response {
    let has_session = jar.get(SESSION_COOKIE).is_some();

    match decide(request.uri().path(), has_session) {
        RouteDecision::Allow => next.run(request).await,
        RouteDecision::Redirect(target) => Redirect::to(&target).into_response(),
    }
}
