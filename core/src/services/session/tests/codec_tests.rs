//! Codec round-trip, tamper-detection, and expiry-boundary tests

use chrono::{Duration, Utc};

use crate::errors::TokenError;
use crate::services::session::codec::{strip_bearer_prefix, TokenCodec};

const SECRET: &str = "test-signing-secret";

#[test]
fn test_round_trip_preserves_subject_and_expiry() {
    let codec = TokenCodec::new(SECRET);
    let now = Utc::now();
    let ttl = Duration::hours(2);

    let token = codec.encode("alice", now, ttl).unwrap();
    let claims = codec.decode_at(&token, now).unwrap();

    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.iat, now.timestamp());
    assert_eq!(claims.exp, (now + ttl).timestamp());
}

#[test]
fn test_flipping_signature_character_fails_with_bad_signature() {
    let codec = TokenCodec::new(SECRET);
    let token = codec.encode("alice", Utc::now(), Duration::hours(2)).unwrap();

    // Flip the last character of the signature segment to another
    // base64url character so only the MAC changes.
    let mut tampered: Vec<char> = token.chars().collect();
    let last = tampered.len() - 1;
    tampered[last] = if tampered[last] == 'A' { 'B' } else { 'A' };
    let tampered: String = tampered.into_iter().collect();
    assert_ne!(tampered, token);

    assert_eq!(
        codec.decode_at(&tampered, Utc::now()).unwrap_err(),
        TokenError::BadSignature
    );
}

#[test]
fn test_tampered_payload_fails_before_expiry_is_checked() {
    let codec = TokenCodec::new(SECRET);
    // Expired AND tampered: the MAC failure must win.
    let token = codec
        .encode("alice", Utc::now() - Duration::hours(3), Duration::hours(1))
        .unwrap();

    let mut parts: Vec<&str> = token.split('.').collect();
    let payload = parts[1].to_string();
    let altered = format!("{}xx", payload);
    parts[1] = &altered;
    let tampered = parts.join(".");

    let err = codec.decode_at(&tampered, Utc::now()).unwrap_err();
    assert!(matches!(
        err,
        TokenError::BadSignature | TokenError::Malformed
    ));
}

#[test]
fn test_expiry_boundary_is_inclusive() {
    let codec = TokenCodec::new(SECRET);
    let now = Utc::now();
    let token = codec.encode("alice", now, Duration::hours(1)).unwrap();

    let expires_at = now + Duration::hours(1);

    // Exactly at expiry: expired.
    assert_eq!(
        codec.decode_at(&token, expires_at).unwrap_err(),
        TokenError::Expired
    );

    // One second before: still valid.
    assert!(codec
        .decode_at(&token, expires_at - Duration::seconds(1))
        .is_ok());
}

#[test]
fn test_garbage_input_is_malformed() {
    let codec = TokenCodec::new(SECRET);

    assert_eq!(
        codec.decode_at("not-a-token", Utc::now()).unwrap_err(),
        TokenError::Malformed
    );
    assert_eq!(
        codec.decode_at("", Utc::now()).unwrap_err(),
        TokenError::Malformed
    );
}

#[test]
fn test_token_signed_with_other_secret_is_rejected() {
    let codec = TokenCodec::new(SECRET);
    let other = TokenCodec::new("a-different-secret");

    let token = other.encode("alice", Utc::now(), Duration::hours(1)).unwrap();

    assert_eq!(
        codec.decode_at(&token, Utc::now()).unwrap_err(),
        TokenError::BadSignature
    );
}

#[test]
fn test_bearer_prefix_stripping_is_case_sensitive() {
    assert_eq!(strip_bearer_prefix("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    assert_eq!(strip_bearer_prefix("bearer abc.def.ghi"), None);
    assert_eq!(strip_bearer_prefix("BEARER abc.def.ghi"), None);
    assert_eq!(strip_bearer_prefix("Bearerabc"), None);
    assert_eq!(strip_bearer_prefix("abc.def.ghi"), None);
}
