// Common utilities for integration tests

use nypl_platform_client::prelude::*;
use serde_json::json;

/// Creates a test config pointing both the OAuth server and the Platform API
/// at the given mock server URL
pub fn test_config(server_url: &str) -> Config {
    Config {
        credentials: Credentials {
            client_id: "my_client".to_string(),
            client_secret: "my_secret".to_string(),
        },
        oauth_server: server_url.to_string(),
        target: Target::Dev,
        base_url: server_url.to_string(),
        agent: "tests/1.0".to_string(),
        timeout: 3,
    }
}

/// JSON body of a successful token response
pub fn token_body(expires_in: i64) -> serde_json::Value {
    json!({
        "access_token": "token_string_here",
        "expires_in": expires_in,
        "token_type": "Bearer",
        "scope": "scopes_here",
        "id_token": "token_string_here"
    })
}

/// Mounts a successful token endpoint mock on the server
pub async fn mock_token_endpoint(server: &mut mockito::Server, hits: usize) -> mockito::Mock {
    server
        .mock("POST", "/oauth/token")
        .match_body(mockito::Matcher::UrlEncoded(
            "grant_type".to_string(),
            "client_credentials".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(token_body(3600).to_string())
        .expect(hits)
        .create_async()
        .await
}
