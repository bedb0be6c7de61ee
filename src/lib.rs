//! # NYPL Platform Client
//!
//! Async client for the NYPL Platform API: bibliographic record lookups and
//! searches over the `/bibs` endpoints, with OAuth2 client-credentials
//! authorization handled transparently by the session layer.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nypl_platform_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), PlatformError> {
//!     setup_logger();
//!
//!     let config = Config::new();
//!     let session = PlatformSession::connect(config).await?;
//!
//!     let response = session
//!         .search_standard_nos(&["9780316230032", "0674976002"], &SearchOptions::default())
//!         .await?;
//!     println!("status: {}", response.status());
//!     Ok(())
//! }
//! ```
//!
//! Query methods return the raw [`reqwest::Response`]; status codes and JSON
//! bodies are the caller's to inspect. Failures from the OAuth server and the
//! transport surface as [`error::PlatformError`].

/// Session layer with the bib query methods
pub mod client;
/// Environment-driven configuration
pub mod config;
/// Global constants (base URLs, defaults)
pub mod constants;
/// Library error type
pub mod error;
/// Query parameter types
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Token acquisition and session authorization
pub mod session;
/// Env and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
