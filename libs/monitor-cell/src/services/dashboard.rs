use futures::future::join_all;
use reqwest::Method;
use tracing::debug;

use shared_gateway::AppState;
use shared_models::monitor::{LastCheck, Monitor, MonitorView, StatusPage, Summary};

async fn list_monitors(state: &AppState, token: Option<&str>) -> Option<Vec<Monitor>> {
    let res = state
        .backend
        .authed(Method::GET, "/v1/monitors", token, None)
        .await
        .ok()?;
    serde_json::from_value(res.body).ok()
}

/// Enrich one monitor with its 24h summary and last public check. The two
/// lookups run concurrently; either failing only blanks its own fields.
async fn enrich(state: &AppState, token: Option<&str>, monitor: Monitor) -> MonitorView {
    let summary_path = format!("/v1/monitors/{}/summary?range=24h", monitor.id);
    let status_path = format!("/v1/status/{}", monitor.slug);

    let (summary_res, status_res) = tokio::join!(
        state
            .backend
            .authed(Method::GET, &summary_path, token, None),
        state.backend.public(Method::GET, &status_path, None),
    );

    let summary = summary_res
        .ok()
        .and_then(|r| serde_json::from_value::<Summary>(r.body).ok());

    let last = status_res
        .ok()
        .and_then(|r| serde_json::from_value::<StatusPage>(r.body).ok())
        .and_then(|page| page.monitors.into_iter().next())
        .and_then(|m| m.last);

    merge(monitor, summary, last)
}

/// Overlay the derived fields onto the monitor. `None` stays `None`; nothing
/// is fabricated for missing data.
fn merge(monitor: Monitor, summary: Option<Summary>, last: Option<LastCheck>) -> MonitorView {
    MonitorView {
        last_ok: last.as_ref().map(|l| l.ok),
        last_code: last.as_ref().and_then(|l| l.status_code),
        last_latency: last.as_ref().and_then(|l| l.latency_ms),
        monitor,
        summary,
    }
}

/// The dashboard collection: the authenticated monitor list, each entry
/// enriched concurrently. Output order always matches the list order. A
/// failed list degrades to an empty dashboard rather than an error page.
pub async fn build_dashboard(state: &AppState, token: Option<&str>) -> Vec<MonitorView> {
    let monitors = match list_monitors(state, token).await {
        Some(monitors) => monitors,
        None => {
            debug!("Monitor list unavailable, rendering empty dashboard");
            return Vec::new();
        }
    };

    join_all(
        monitors
            .into_iter()
            .map(|monitor| enrich(state, token, monitor)),
    )
    .await
}

/// Detail view for a single monitor. The backend has no lookup-by-id
/// endpoint, so the slug comes from scanning the authenticated list.
pub async fn monitor_detail(
    state: &AppState,
    token: Option<&str>,
    id: &str,
) -> Option<MonitorView> {
    let monitors = list_monitors(state, token).await?;
    let monitor = monitors.into_iter().find(|m| m.id == id)?;
    Some(enrich(state, token, monitor).await)
}
