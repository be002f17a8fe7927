//! # Session Cookie
//!
//! Session identity rides an opaque HTTP-only cookie. Tokens are UUIDv4;
//! anything else in the cookie is treated as absent, so a forged value
//! cannot pin arbitrary registry keys. The cookie is re-issued on every
//! response (sliding expiry). Not marked `Secure`: acceptable only in
//! non-TLS deployments.

use axum::http::{header, HeaderMap};
use uuid::Uuid;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "gridstore.sid";

/// Extract a valid session token from the request headers
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name != SESSION_COOKIE {
            return None;
        }
        let value = value.trim();
        Uuid::parse_str(value).ok().map(|_| value.to_string())
    })
}

/// Mint a fresh session token
pub fn mint_token() -> String {
    Uuid::new_v4().to_string()
}

/// Build the `Set-Cookie` value for a session token
pub fn issue(token: &str, max_age_secs: i64) -> String {
    format!(
        "{}={}; Max-Age={}; Path=/; HttpOnly; SameSite=Strict",
        SESSION_COOKIE, token, max_age_secs
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_round_trip() {
        let token = mint_token();
        let cookie = issue(&token, 7200);
        assert!(cookie.starts_with("gridstore.sid="));
        assert!(cookie.contains("Max-Age=7200"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));

        let headers = headers_with_cookie(&format!("{}={}", SESSION_COOKIE, token));
        assert_eq!(session_token(&headers), Some(token));
    }

    #[test]
    fn test_token_found_among_other_cookies() {
        let token = mint_token();
        let headers =
            headers_with_cookie(&format!("theme=dark; {}={}; lang=en", SESSION_COOKIE, token));
        assert_eq!(session_token(&headers), Some(token));
    }

    #[test]
    fn test_missing_cookie() {
        assert_eq!(session_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_malformed_token_rejected() {
        let headers = headers_with_cookie("gridstore.sid=not-a-uuid");
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn test_other_cookies_ignored() {
        let headers = headers_with_cookie("theme=dark; lang=en");
        assert_eq!(session_token(&headers), None);
    }
}
