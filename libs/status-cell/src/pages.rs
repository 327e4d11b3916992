use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
};
use chrono::DateTime;
use reqwest::Method;

use shared_gateway::AppState;
use shared_models::error::AppError;
use shared_models::monitor::StatusPage;
use shared_utils::html::escape;

use crate::services::demo;

fn fmt_ts(ts: &str) -> String {
    DateTime::parse_from_rfc3339(ts)
        .map(|d| d.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|_| ts.to_string())
}

fn shell(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<main>
{body}
<p><a href="/">Back</a></p>
</main>
</body>
</html>"#
    )
}

/// `GET /status/{slug}`: public status page, no session involved.
pub async fn status_page(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let res = state
        .backend
        .public(Method::GET, &format!("/v1/status/{slug}"), None)
        .await
        .map_err(|e| match e {
            AppError::BackendRejected { status: 404, .. } => {
                AppError::NotFound("Status page not found".to_string())
            }
            other => other,
        })?;

    let page: StatusPage = serde_json::from_value(res.body)
        .map_err(|_| AppError::NotFound("Status page not found".to_string()))?;
    let monitor = page
        .monitors
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound("Status page not found".to_string()))?;

    let (state_label, last_line) = match &monitor.last {
        Some(last) => (
            if last.ok { "Up" } else { "Down" },
            format!(
                "Last check: {} / {} / {} ms",
                last.ts.as_deref().map(fmt_ts).unwrap_or_else(|| "n/a".to_string()),
                last.status_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "n/a".to_string()),
                last.latency_ms
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "n/a".to_string()),
            ),
        ),
        None => ("No data", "Waiting for first check".to_string()),
    };

    let body = format!(
        r#"<h1>Status: {name}</h1>
<p>{state_label}</p>
<p>URL: {url} / Expected {expected} / Every {interval}s</p>
<p>{last_line}</p>"#,
        name = escape(&monitor.name),
        url = escape(&monitor.url),
        expected = monitor.expected_status,
        interval = monitor.interval_sec,
    );

    Ok(Html(shell(&format!("Status: {}", monitor.name), &body)))
}

/// `GET /demo`: live snapshot of a few public sites, rendered from
/// monitor-shaped views.
pub async fn demo_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let views = demo::demo_dashboard(&state).await;

    let mut items = String::new();
    for v in &views {
        let line = match (v.last_code, v.last_latency) {
            (Some(code), Some(ms)) => format!("HTTP {code} / {ms} ms"),
            _ => "Unable to reach site".to_string(),
        };
        items.push_str(&format!(
            r#"<li>
<h3>{name} ({state})</h3>
<a href="{url}" rel="noreferrer">{url}</a>
<p>{line}</p>
</li>
"#,
            name = escape(&v.monitor.name),
            state = if v.last_ok == Some(true) { "up" } else { "down" },
            url = escape(&v.monitor.url),
        ));
    }
    if views.is_empty() {
        items.push_str("<li>Snapshot unavailable.</li>");
    }

    let body = format!(
        r#"<h1>Live snapshot</h1>
<p>A few public sites to showcase status and latency.</p>
<ul>
{items}
</ul>"#
    );

    Html(shell("Demo", &body))
}
