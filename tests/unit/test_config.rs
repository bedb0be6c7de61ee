use nypl_platform_client::config::{Config, Target};
use nypl_platform_client::constants::{DEFAULT_TIMEOUT_SECS, USER_AGENT};

#[test]
fn test_target_base_urls() {
    assert_eq!(Target::Prod.base_url(), "https://platform.nypl.org/api/v0.1");
    assert_eq!(
        Target::Dev.base_url(),
        "https://dev-platform.nypl.org/api/v0.1"
    );
}

#[test]
fn test_target_from_str() {
    assert_eq!("prod".parse::<Target>().unwrap(), Target::Prod);
    assert_eq!("production".parse::<Target>().unwrap(), Target::Prod);
    assert_eq!("dev".parse::<Target>().unwrap(), Target::Dev);
    assert_eq!("DEV".parse::<Target>().unwrap(), Target::Dev);
    assert!("staging".parse::<Target>().is_err());
}

#[test]
fn test_with_target_derives_base_url() {
    let config = Config::with_target(
        Target::Dev,
        "my_client".to_string(),
        "my_secret".to_string(),
        "https://oauth.example.com".to_string(),
    );

    assert_eq!(config.base_url, "https://dev-platform.nypl.org/api/v0.1");
    assert_eq!(config.credentials.client_id, "my_client");
    assert_eq!(config.credentials.client_secret, "my_secret");
    assert_eq!(config.oauth_server, "https://oauth.example.com");
}

#[test]
fn test_with_target_default_agent_and_timeout() {
    let config = Config::with_target(
        Target::Prod,
        "my_client".to_string(),
        "my_secret".to_string(),
        "https://oauth.example.com".to_string(),
    );

    assert_eq!(config.agent, USER_AGENT);
    assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
}
