use shared_models::error::AppError;

/// Interval bounds the backend enforces; checked here so invalid input never
/// reaches the gateway.
pub const MIN_INTERVAL_SEC: u32 = 10;
pub const MAX_INTERVAL_SEC: u32 = 3600;

const MIN_PASSWORD_LEN: usize = 6;

fn has_http_scheme(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Normalize a user-supplied URL: trim, default the scheme to `https://`,
/// and reject inputs without a plausible host.
pub fn normalize_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("URL is required.".to_string()));
    }

    let url = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let rest = url.split_once("://").map(|(_, r)| r).unwrap_or("");
    let host = rest.split('/').next().unwrap_or("");
    if host.is_empty() || host.contains(' ') {
        return Err(AppError::Validation(
            "Enter a valid URL (e.g. https://example.com).".to_string(),
        ));
    }

    Ok(url)
}

pub fn validate_interval(interval_sec: u32) -> Result<(), AppError> {
    if !(MIN_INTERVAL_SEC..=MAX_INTERVAL_SEC).contains(&interval_sec) {
        return Err(AppError::Validation(format!(
            "Interval must be between {MIN_INTERVAL_SEC} and {MAX_INTERVAL_SEC} seconds."
        )));
    }
    Ok(())
}

pub fn validate_password(password: &str, confirm: Option<&str>) -> Result<(), AppError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters."
        )));
    }
    if let Some(confirm) = confirm {
        if confirm != password {
            return Err(AppError::Validation("Passwords do not match.".to_string()));
        }
    }
    Ok(())
}
