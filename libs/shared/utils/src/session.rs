use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Name of the HTTP-only cookie carrying the backend bearer token.
pub const SESSION_COOKIE: &str = "token";

/// Matches the backend token's 7-day expiry.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Build the session cookie set on successful login/register. HTTP-only so
/// page script can never read the credential; `Secure` in production only.
pub fn session_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .path("/")
        .max_age(Duration::days(SESSION_TTL_DAYS))
        .build()
}

/// Expired replacement cookie used by logout.
pub fn clear_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}

pub fn read_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie("abc".to_string(), true);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::days(SESSION_TTL_DAYS)));
    }

    #[test]
    fn dev_cookie_is_not_secure() {
        let cookie = session_cookie("abc".to_string(), false);
        assert_eq!(cookie.secure(), Some(false));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let cookie = clear_cookie();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }

    #[test]
    fn read_token_round_trip() {
        let jar = CookieJar::new();
        assert_eq!(read_token(&jar), None);

        let jar = jar.add(session_cookie("tok-123".to_string(), false));
        assert_eq!(read_token(&jar), Some("tok-123".to_string()));
    }
}
