use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde_json::Value;

/// Best-effort decode of the token's payload segment to read an identity
/// hint for display. The signature is NOT verified here; the result must
/// never feed an authorization decision. Actual access is decided solely by
/// the backend on authenticated calls.
pub fn unverified_email(token: &str) -> Option<String> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("email")?.as_str().map(str::to_owned)
}
