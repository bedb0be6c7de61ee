//! Access token model for the NYPL OAuth server.

use crate::constants::EXPIRY_LEEWAY_SECS;
use crate::error::PlatformError;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::fmt;

/// Bearer access token issued by the NYPL OAuth server.
///
/// A token is immutable once issued; when it expires the session layer
/// replaces it with a freshly requested one rather than mutating it.
#[derive(Debug, Clone)]
pub struct PlatformToken {
    /// The access token string sent in the `Authorization` header
    pub token_str: String,
    /// Absolute point in time after which the token is no longer valid
    pub expires_on: DateTime<Utc>,
    /// Raw JSON body returned by the token endpoint
    pub server_response: Value,
}

impl PlatformToken {
    /// Builds a token from the raw JSON body of the token endpoint.
    ///
    /// The absolute expiry is computed from the response's `expires_in`
    /// seconds, minus a one second leeway for transit time.
    ///
    /// # Errors
    /// [`PlatformError::MissingTokenField`] when `access_token` or
    /// `expires_in` is absent or has the wrong JSON type.
    pub fn from_response(raw: Value) -> Result<Self, PlatformError> {
        let token_str = raw
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or(PlatformError::MissingTokenField("access_token"))?
            .to_owned();

        let expires_in = raw
            .get("expires_in")
            .and_then(Value::as_i64)
            .ok_or(PlatformError::MissingTokenField("expires_in"))?;

        let expires_on = Utc::now() + Duration::seconds(expires_in - EXPIRY_LEEWAY_SECS);

        Ok(Self {
            token_str,
            expires_on,
            server_response: raw,
        })
    }

    /// Checks if the token is expired based on current time.
    ///
    /// Plain comparison against the computed expiry; no extra margin.
    pub fn is_expired(&self) -> bool {
        self.expires_on < Utc::now()
    }

    /// Returns the value for an `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token_str)
    }
}

impl fmt::Display for PlatformToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<token: {}, expires_on: {}, server_response: {}>",
            self.token_str,
            self.expires_on.format("%Y-%m-%d %H:%M:%S"),
            self.server_response
        )
    }
}
