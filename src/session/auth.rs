//! Authorization against the NYPL OAuth server.
//!
//! Implements the OAuth2 client-credentials flow: client id and secret are
//! exchanged for a bearer token at `{oauth_server}/oauth/token`. The manager
//! caches the current token and hands out a fresh one whenever the cached
//! token is absent or past its expiry.

use crate::config::Config;
use crate::error::PlatformError;
use crate::session::token::PlatformToken;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Trait for obtaining access tokens from the NYPL OAuth server
#[async_trait]
pub trait PlatformAuthenticator: Send + Sync {
    /// Requests a brand new access token from the OAuth server
    ///
    /// # Returns
    /// * `Ok(PlatformToken)` - The issued token
    /// * `Err(PlatformError)` - If the server rejects the request or the
    ///   response cannot be parsed
    async fn request_token(&self) -> Result<PlatformToken, PlatformError>;

    /// Returns a valid token, requesting a new one when the cached token is
    /// absent or expired
    async fn get_token(&self) -> Result<PlatformToken, PlatformError>;
}

/// Authorization manager for the NYPL Platform API
///
/// Holds the client credentials and the currently issued token. Safe to share
/// across tasks; the cached token sits behind an `RwLock`.
pub struct PlatformAuth {
    config: Arc<Config>,
    http: Client,
    token: Arc<RwLock<Option<PlatformToken>>>,
}

impl PlatformAuth {
    /// Creates a new authorization manager
    ///
    /// # Arguments
    /// * `config` - Configuration with credentials and the OAuth server URL
    pub fn new(config: Arc<Config>) -> Self {
        let http = Client::builder()
            .user_agent(config.agent.clone())
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http,
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the token endpoint URL for the configured OAuth server
    fn token_url(&self) -> String {
        format!(
            "{}/oauth/token",
            self.config.oauth_server.trim_end_matches('/')
        )
    }

    /// Fetches a new token and stores it as the current one
    ///
    /// # Returns
    /// * `Ok(PlatformToken)` - The newly issued token
    /// * `Err(PlatformError)` - If the token request fails
    pub async fn authorize(&self) -> Result<PlatformToken, PlatformError> {
        let token = self.request_token().await?;

        let mut current = self.token.write().await;
        *current = Some(token.clone());

        info!("Obtained new Platform access token");
        Ok(token)
    }
}

#[async_trait]
impl PlatformAuthenticator for PlatformAuth {
    async fn request_token(&self) -> Result<PlatformToken, PlatformError> {
        let url = self.token_url();
        let client_id = self.config.credentials.client_id.trim();
        let client_secret = self.config.credentials.client_secret.trim();

        debug!("Token request to URL: {}", url);
        debug!("Using client id: {}", client_id);

        let resp = self
            .http
            .post(&url)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = resp.status();
        debug!("Token response status: {}", status);

        if status.is_success() {
            let raw: serde_json::Value = resp.json().await?;
            let token = PlatformToken::from_response(raw)?;
            debug!("Access token length: {}", token.token_str.len());
            debug!("Token expires on: {}", token.expires_on);
            Ok(token)
        } else {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read response body".to_string());
            error!("Token request failed with status {}: {}", status, body);
            Err(PlatformError::ApiError { status, body })
        }
    }

    async fn get_token(&self) -> Result<PlatformToken, PlatformError> {
        let current = self.token.read().await;

        if let Some(token) = current.as_ref() {
            if !token.is_expired() {
                return Ok(token.clone());
            }
            drop(current);
            debug!("Access token expired, requesting a new one");
            return self.authorize().await;
        }

        drop(current);
        info!("No access token held, requesting one");
        self.authorize().await
    }
}
