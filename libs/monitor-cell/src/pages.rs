use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
};
use axum_extra::extract::cookie::CookieJar;

use shared_gateway::AppState;
use shared_models::error::AppError;
use shared_models::monitor::MonitorView;
use shared_utils::claims::unverified_email;
use shared_utils::html::escape;
use shared_utils::session::read_token;

use crate::services::dashboard;

fn pct(view: &MonitorView) -> String {
    view.summary
        .as_ref()
        .and_then(|s| s.uptime_pct)
        .map(|p| format!("{p:.1}%"))
        .unwrap_or_else(|| "n/a".to_string())
}

fn latency(view: &MonitorView) -> String {
    view.summary
        .as_ref()
        .and_then(|s| s.avg_latency_ms)
        .map(|l| format!("{} ms", l.round()))
        .unwrap_or_else(|| "n/a".to_string())
}

fn last_check(view: &MonitorView) -> String {
    match view.last_latency {
        Some(ms) => format!(
            "Last check: {} / {} ms",
            view.last_code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "n/a".to_string()),
            ms
        ),
        None => "First check pending".to_string(),
    }
}

fn dot(ok: Option<bool>) -> &'static str {
    match ok {
        Some(true) => "up",
        Some(false) => "down",
        None => "no data",
    }
}

fn page(title: &str, identity: Option<&str>, body: &str) -> String {
    let identity = match identity {
        Some(email) => format!(
            r#"<span>{}</span> <form action="/api/auth/logout" method="post"><button type="submit">Sign out</button></form>"#,
            escape(email)
        ),
        None => r#"<a href="/login">Sign in</a> <a href="/register">Create account</a>"#.to_string(),
    };

    format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<header>
<a href="/">Uptime Monitor</a>
<nav><a href="/demo">Demo</a> <a href="/monitors/new">New Monitor</a></nav>
{identity}
</header>
<main>
{body}
</main>
</body>
</html>"#
    )
}

/// `GET /`: the aggregated dashboard. The guard already gates this route;
/// the token is read again only to build the views and the identity hint.
pub async fn dashboard_page(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Html<String> {
    let token = read_token(&jar);
    let views = dashboard::build_dashboard(&state, token.as_deref()).await;
    let email = token.as_deref().and_then(unverified_email);

    let mut items = String::new();
    for v in &views {
        items.push_str(&format!(
            r#"<li>
<h3>{name} ({state})</h3>
<a href="{url}" rel="noreferrer">{url}</a>
<p>24h uptime {uptime} / avg {latency} / every {interval}s / expect {expected}</p>
<p>{last}</p>
<p><a href="/status/{slug}">Public status</a> <a href="/monitors/{id}">Details</a></p>
</li>
"#,
            name = escape(&v.monitor.name),
            state = dot(v.last_ok),
            url = escape(&v.monitor.url),
            uptime = pct(v),
            latency = latency(v),
            interval = v.monitor.interval_sec,
            expected = v.monitor.expected_status,
            last = last_check(v),
            slug = escape(&v.monitor.slug),
            id = escape(&v.monitor.id),
        ));
    }
    if views.is_empty() {
        items.push_str("<li>No monitors yet.</li>");
    }

    let body = format!(
        r#"<h1>Uptime Dashboard</h1>
<a href="/monitors/new">+ New Monitor</a>
<ul>
{items}
</ul>"#
    );

    Html(page("Uptime Dashboard", email.as_deref(), &body))
}

/// `GET /monitors/new`: the create form. Validation errors come back from
/// the proxy endpoint and land in the banner.
pub async fn new_monitor_page(jar: CookieJar) -> Html<String> {
    let email = read_token(&jar).as_deref().and_then(unverified_email);

    let body = r#"<h1>Create a Monitor</h1>
<p id="err" role="alert"></p>
<form id="create-form">
<label>Name <input name="name" placeholder="My Homepage"></label>
<label>URL <input name="url" placeholder="https://example.com" required></label>
<label>Interval (seconds) <input name="interval_sec" type="number" value="60" min="10" max="3600" required></label>
<label>Expected HTTP status <input name="expected_status" type="number" value="200" required></label>
<button type="submit">Create monitor</button>
<a href="/">Cancel</a>
</form>
<script>
document.getElementById('create-form').addEventListener('submit', async (e) => {
  e.preventDefault();
  const f = new FormData(e.target);
  const r = await fetch('/api/monitors', {
    method: 'POST',
    headers: { 'content-type': 'application/json' },
    body: JSON.stringify({
      name: f.get('name'),
      url: f.get('url'),
      interval_sec: Number(f.get('interval_sec')),
      expected_status: Number(f.get('expected_status')),
    }),
  });
  const d = await r.json().catch(() => ({}));
  if (r.ok) {
    location.href = '/status/' + d.slug;
  } else if (r.status === 409) {
    document.getElementById('err').textContent =
      d.error || 'A monitor with that name already exists. Try a different name.';
  } else if (r.status === 401) {
    document.getElementById('err').textContent = 'You must be signed in to create a monitor.';
  } else {
    document.getElementById('err').textContent = d.error || 'Failed to create monitor. Please try again.';
  }
});
</script>"#;

    Html(page("Create a Monitor", email.as_deref(), body))
}

/// `GET /monitors/{id}`: single-monitor detail, 404 when the id is unknown.
pub async fn monitor_detail_page(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let token = read_token(&jar);
    let view = dashboard::monitor_detail(&state, token.as_deref(), &id)
        .await
        .ok_or_else(|| AppError::NotFound("Monitor not found".to_string()))?;
    let email = token.as_deref().and_then(unverified_email);

    let last = match view.last_latency {
        Some(ms) => format!(
            "HTTP {} / {} ms",
            view.last_code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "n/a".to_string()),
            ms
        ),
        None => "Waiting for first check".to_string(),
    };

    let body = format!(
        r#"<h1>{name}</h1>
<a href="{url}" rel="noreferrer">{url}</a>
<section>
<h2>Uptime (24h)</h2>
<p>{uptime} / {latency}</p>
<h2>Last check</h2>
<p>{last}</p>
<h2>Configuration</h2>
<dl>
<dt>Interval</dt><dd>{interval}s</dd>
<dt>Expected status</dt><dd>{expected}</dd>
<dt>Slug</dt><dd>{slug}</dd>
</dl>
</section>
<p><a href="/status/{slug}">Public status</a> <a href="/">Back to dashboard</a></p>
<button id="delete">Delete</button>
<script>
document.getElementById('delete').addEventListener('click', async () => {{
  if (!confirm('Delete "{name}"?\nAll checks and incidents will be removed.')) return;
  const r = await fetch('/api/monitors/{id}', {{ method: 'DELETE' }});
  if (r.ok || r.status === 204) {{
    location.href = '/';
  }} else {{
    alert('Failed to delete monitor.');
  }}
}});
</script>"#,
        name = escape(&view.monitor.name),
        url = escape(&view.monitor.url),
        uptime = pct(&view),
        latency = latency(&view),
        last = last,
        interval = view.monitor.interval_sec,
        expected = view.monitor.expected_status,
        slug = escape(&view.monitor.slug),
        id = escape(&view.monitor.id),
    );

    Ok(Html(page(&view.monitor.name, email.as_deref(), &body)))
}
