use axum::response::Html;

/// Sign-in form. Submits JSON to the login proxy; on success the script
/// follows the guard's `next` parameter so the user lands where they were
/// headed.
pub async fn login_page() -> Html<String> {
    Html(auth_form(
        "Sign in",
        "/api/auth/login",
        r#"<label>Email <input name="email" type="email" required></label>
<label>Password <input name="password" type="password" required></label>"#,
        r#"<p>No account? <a href="/register">Create one</a></p>"#,
    ))
}

pub async fn register_page() -> Html<String> {
    Html(auth_form(
        "Create your account",
        "/api/auth/register",
        r#"<label>Email <input name="email" type="email" required></label>
<label>Password <input name="password" type="password" required></label>
<label>Confirm password <input name="password_confirm" type="password" required></label>"#,
        r#"<p>Already have an account? <a href="/login">Sign in</a></p>"#,
    ))
}

fn auth_form(title: &str, action: &str, fields: &str, footer: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<main>
<h1>{title}</h1>
<p id="err" role="alert"></p>
<form id="auth-form">
{fields}
<button type="submit">{title}</button>
</form>
{footer}
</main>
<script>
document.getElementById('auth-form').addEventListener('submit', async (e) => {{
  e.preventDefault();
  const data = Object.fromEntries(new FormData(e.target));
  const r = await fetch('{action}', {{
    method: 'POST',
    headers: {{ 'content-type': 'application/json' }},
    body: JSON.stringify(data),
  }});
  if (r.ok) {{
    location.href = new URLSearchParams(location.search).get('next') || '/';
  }} else {{
    const d = await r.json().catch(() => ({{}}));
    document.getElementById('err').textContent = d.error || '{title} failed';
  }}
}});
</script>
</body>
</html>"#
    )
}
