//! # NYPL Platform Client Prelude
//!
//! Imports the types needed for most interactions with the Platform API.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nypl_platform_client::prelude::*;
//!
//! let config = Config::new();
//! let session = PlatformSession::new_lazy(config);
//! // ... etc
//! ```

/// Configuration for the Platform API client
pub use crate::config::{Config, Credentials, Target};

/// Library version information
pub use crate::{VERSION, version};

/// Main error type for the library
pub use crate::error::PlatformError;

/// Authorization manager and trait
pub use crate::session::auth::{PlatformAuth, PlatformAuthenticator};

/// Access token model
pub use crate::session::token::PlatformToken;

/// Session with the query methods
pub use crate::client::PlatformSession;

/// Query parameter types
pub use crate::model::requests::{BibListParams, SearchOptions, join_keywords};

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use chrono::{DateTime, Utc};
pub use reqwest::{Response, StatusCode};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
