//! Identity of the signed-in user, read from the stored token.
//!
//! The payload segment of the JWT is decoded without verifying the
//! signature; the result only drives what the UI shows.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use contracts::system::auth::UserClaims;

use super::storage;

/// Claims of a `header.payload.signature` token
pub fn decode_claims(token: &str) -> Option<UserClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// False only for a token whose claims say it has expired
pub fn is_live(token: &str, now_ts: i64) -> bool {
    decode_claims(token)
        .map(|claims| !claims.is_expired(now_ts))
        .unwrap_or(true)
}

/// True when a token is present and its claims say it has expired
pub fn has_expired(token: Option<&str>, now_ts: i64) -> bool {
    token.is_some_and(|token| !is_live(token, now_ts))
}

/// Whether the token in storage expired after it was restored
pub fn stored_token_expired() -> bool {
    has_expired(storage::get_token().as_deref(), now_ts())
}

/// Stored token, unless it has expired
pub fn get_token() -> Option<String> {
    storage::get_token().filter(|token| is_live(token, now_ts()))
}

/// Decoded user of the stored token
pub fn get_user() -> Option<UserClaims> {
    get_token().and_then(|token| decode_claims(&token))
}

fn now_ts() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Role;

    fn token_with(payload: &str) -> String {
        format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn decodes_payload_segment() {
        let token = token_with(r#"{"id":"7","name":"Ann","email":"ann@example.com","role":"captain"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.name, "Ann");
        assert_eq!(claims.role, Role::Captain);
    }

    #[test]
    fn garbage_is_none() {
        assert!(decode_claims("not-a-jwt").is_none());
        assert!(decode_claims("a.@@@.c").is_none());
        assert!(decode_claims(&token_with("[1,2]")).is_none());
    }

    #[test]
    fn expired_tokens_are_not_live() {
        let token = token_with(r#"{"id":"7","role":"admin","exp":1000}"#);
        assert!(is_live(&token, 999));
        assert!(!is_live(&token, 1000));
        // opaque tokens carry no expiry
        assert!(is_live("opaque-token", i64::MAX));
    }

    #[test]
    fn expiry_needs_a_token() {
        let token = token_with(r#"{"id":"7","role":"admin","exp":1000}"#);
        assert!(!has_expired(None, 5000));
        assert!(!has_expired(Some(&token), 999));
        assert!(has_expired(Some(&token), 5000));
        assert!(!has_expired(Some("opaque-token"), 5000));
    }
}
