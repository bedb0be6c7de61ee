use chrono::{Duration, Utc};
use nypl_platform_client::error::PlatformError;
use nypl_platform_client::session::token::PlatformToken;
use serde_json::json;

fn token_body() -> serde_json::Value {
    json!({
        "access_token": "token_string_here",
        "expires_in": 3600,
        "token_type": "Bearer",
        "scope": "scopes_here",
        "id_token": "token_string_here"
    })
}

#[test]
fn test_from_response_success() {
    let token = PlatformToken::from_response(token_body()).unwrap();

    assert_eq!(token.token_str, "token_string_here");
    assert_eq!(token.server_response, token_body());

    // Expiry should be ~3599 seconds from now (expires_in minus 1s leeway)
    let expected = Utc::now() + Duration::seconds(3599);
    let diff = (token.expires_on - expected).num_seconds().abs();
    assert!(diff <= 1, "Expiry should be ~3599s from now, diff: {diff}s");
}

#[test]
fn test_from_response_missing_access_token() {
    let body = json!({"expires_in": 3600});
    match PlatformToken::from_response(body) {
        Err(PlatformError::MissingTokenField("access_token")) => (),
        other => panic!("Expected MissingTokenField(access_token), got {other:?}"),
    }
}

#[test]
fn test_from_response_missing_expires_in() {
    let body = json!({"access_token": "token_string_here"});
    match PlatformToken::from_response(body) {
        Err(PlatformError::MissingTokenField("expires_in")) => (),
        other => panic!("Expected MissingTokenField(expires_in), got {other:?}"),
    }
}

#[test]
fn test_from_response_wrong_expires_in_type() {
    // "expires_in" as a string is rejected, same as a missing field
    let body = json!({"access_token": "t", "expires_in": "3600"});
    match PlatformToken::from_response(body) {
        Err(PlatformError::MissingTokenField("expires_in")) => (),
        other => panic!("Expected MissingTokenField(expires_in), got {other:?}"),
    }
}

#[test]
fn test_is_expired_fresh_token() {
    let token = PlatformToken::from_response(token_body()).unwrap();
    assert!(!token.is_expired(), "Fresh token should not be expired");
}

#[test]
fn test_is_expired_past_expiry() {
    let mut token = PlatformToken::from_response(token_body()).unwrap();
    token.expires_on = Utc::now() - Duration::seconds(1);
    assert!(
        token.is_expired(),
        "Token with past expiry should be expired"
    );
}

#[test]
fn test_bearer_header_value() {
    let token = PlatformToken::from_response(token_body()).unwrap();
    assert_eq!(token.bearer(), "Bearer token_string_here");
}

#[test]
fn test_display_includes_token_and_response() {
    let token = PlatformToken::from_response(token_body()).unwrap();
    let printed = token.to_string();
    assert!(printed.starts_with("<token: token_string_here, expires_on: "));
    assert!(printed.contains("\"token_type\":\"Bearer\""));
}
