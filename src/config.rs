//! Configuration for the NYPL Platform client.
//!
//! Configuration is normally assembled from environment variables (optionally
//! loaded from a `.env` file), following the `NYPL_*` naming used below. All
//! fields are public so tests and embedding applications can build a `Config`
//! directly.

use crate::constants::{DEFAULT_TIMEOUT_SECS, DEV_BASE_URL, PROD_BASE_URL, USER_AGENT};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, error};

/// OAuth client credentials for the NYPL Platform API
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct Credentials {
    /// Client id issued by the NYPL OAuth server
    pub client_id: String,
    /// Client secret issued by the NYPL OAuth server
    pub client_secret: String,
}

/// Platform API environment the client talks to
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Production Platform API
    Prod,
    /// Development Platform API
    Dev,
}

impl Target {
    /// Returns the fixed base URL for this target
    pub fn base_url(&self) -> &'static str {
        match self {
            Target::Prod => PROD_BASE_URL,
            Target::Dev => DEV_BASE_URL,
        }
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Ok(Target::Prod),
            "dev" | "development" => Ok(Target::Dev),
            other => Err(format!("unknown target: {other}")),
        }
    }
}

/// Main configuration for the NYPL Platform API client
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
pub struct Config {
    /// OAuth client credentials
    pub credentials: Credentials,
    /// Base URL of the NYPL OAuth server (token endpoint lives under it)
    pub oauth_server: String,
    /// Platform API environment
    pub target: Target,
    /// Base URL for Platform API requests, derived from `target` unless
    /// overridden (mock servers in tests override this)
    pub base_url: String,
    /// Value sent in the `User-Agent` header
    pub agent: String,
    /// Timeout in seconds for Platform API requests
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables.
    ///
    /// Reads `NYPL_CLIENT_ID`, `NYPL_CLIENT_SECRET`, `NYPL_OAUTH_SERVER`,
    /// `NYPL_PLATFORM_TARGET` (`prod`/`dev`), `NYPL_PLATFORM_BASE_URL`,
    /// `NYPL_PLATFORM_AGENT` and `NYPL_PLATFORM_TIMEOUT`. A `.env` file is
    /// loaded first when present.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let client_id = get_env_or_default("NYPL_CLIENT_ID", String::from("default_client_id"));
        let client_secret =
            get_env_or_default("NYPL_CLIENT_SECRET", String::from("default_client_secret"));
        let oauth_server =
            get_env_or_default("NYPL_OAUTH_SERVER", String::from("default_oauth_server"));

        if client_id == "default_client_id" {
            error!("NYPL_CLIENT_ID not found in environment variables or .env file");
        }
        if client_secret == "default_client_secret" {
            error!("NYPL_CLIENT_SECRET not found in environment variables or .env file");
        }
        if oauth_server == "default_oauth_server" {
            error!("NYPL_OAUTH_SERVER not found in environment variables or .env file");
        }

        let target = get_env_or_default("NYPL_PLATFORM_TARGET", Target::Prod);
        let base_url =
            get_env_or_default("NYPL_PLATFORM_BASE_URL", target.base_url().to_string());

        Config {
            credentials: Credentials {
                client_id,
                client_secret,
            },
            oauth_server,
            target,
            base_url,
            agent: get_env_or_default("NYPL_PLATFORM_AGENT", String::from(USER_AGENT)),
            timeout: get_env_or_default("NYPL_PLATFORM_TIMEOUT", DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Creates a configuration for the given target with explicit credentials,
    /// using default agent and timeout
    pub fn with_target(
        target: Target,
        client_id: String,
        client_secret: String,
        oauth_server: String,
    ) -> Self {
        Config {
            credentials: Credentials {
                client_id,
                client_secret,
            },
            oauth_server,
            target,
            base_url: target.base_url().to_string(),
            agent: String::from(USER_AGENT),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}
