use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use reqwest::Method;
use tracing::debug;

use shared_gateway::AppState;
use shared_models::monitor::{DemoSite, Monitor, MonitorView, Summary};
use shared_utils::slug::{host_of, slugify};

/// Shape a snapshot entry like a real monitor so the demo page can reuse the
/// dashboard rendering. The id is a stable encoding of the source URL; the
/// slug comes from the host name, falling back to the site name. A reachable
/// site reads as 100% uptime, an unreachable one as 0%.
pub fn synthesize(site: DemoSite) -> MonitorView {
    let id = URL_SAFE_NO_PAD.encode(site.url.as_bytes());
    let slug = slugify(host_of(&site.url).unwrap_or(&site.name));
    let reachable = site.ok.unwrap_or(false);

    MonitorView {
        monitor: Monitor {
            id,
            slug,
            name: site.name,
            url: site.url,
            interval_sec: 60,
            expected_status: 200,
        },
        summary: Some(Summary {
            uptime_pct: Some(if reachable { 100.0 } else { 0.0 }),
            avg_latency_ms: site.latency_ms.map(|l| l as f64),
        }),
        last_ok: site.ok,
        last_code: site.status_code,
        last_latency: site.latency_ms,
    }
}

/// Monitor-shaped views from the public snapshot feed. Never touches the
/// session credential; a failed feed degrades to an empty page.
pub async fn demo_dashboard(state: &AppState) -> Vec<MonitorView> {
    let res = match state
        .backend
        .public(Method::GET, "/v1/demo/snapshot", None)
        .await
    {
        Ok(res) => res,
        Err(_) => {
            debug!("Demo snapshot unavailable, rendering empty page");
            return Vec::new();
        }
    };

    let sites: Vec<DemoSite> = serde_json::from_value(res.body).unwrap_or_default();
    sites.into_iter().map(synthesize).collect()
}
