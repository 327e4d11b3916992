use serde::{Deserialize, Serialize};

/// A monitor as the backend returns it from `GET /v1/monitors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monitor {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub url: String,
    pub interval_sec: u32,
    pub expected_status: u16,
}

/// 24h rollup from `GET /v1/monitors/{id}/summary`. The backend also sends
/// `range`/`samples`; only the fields the views render are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    pub uptime_pct: Option<f64>,
    pub avg_latency_ms: Option<f64>,
}

/// Most recent check record embedded in a public status page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastCheck {
    pub ok: bool,
    pub status_code: Option<u16>,
    pub latency_ms: Option<i64>,
    pub ts: Option<String>,
}

/// A monitor enriched for rendering. Derived fields stay `None` when the
/// backing call failed or returned no data, never fabricated.
#[derive(Debug, Clone, Serialize)]
pub struct MonitorView {
    #[serde(flatten)]
    pub monitor: Monitor,
    pub summary: Option<Summary>,
    pub last_ok: Option<bool>,
    pub last_code: Option<u16>,
    pub last_latency: Option<i64>,
}

/// Entry of the `monitors` array in `GET /v1/status/{slug}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusMonitor {
    pub name: String,
    pub url: String,
    pub interval_sec: u32,
    pub expected_status: u16,
    #[serde(default)]
    pub last: Option<LastCheck>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusPage {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub monitors: Vec<StatusMonitor>,
}

/// One site of the public demo snapshot feed. `ok`/`status_code`/`latency_ms`
/// are absent when the probe could not reach the site.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoSite {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub latency_ms: Option<i64>,
}

fn default_interval() -> u32 {
    60
}

fn default_expected() -> u16 {
    200
}

/// Browser payload for `POST /api/monitors`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMonitorPayload {
    #[serde(default)]
    pub name: String,
    pub url: String,
    #[serde(default = "default_interval")]
    pub interval_sec: u32,
    #[serde(default = "default_expected")]
    pub expected_status: u16,
}
