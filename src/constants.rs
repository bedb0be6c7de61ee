/// Base URL for the production NYPL Platform API
pub const PROD_BASE_URL: &str = "https://platform.nypl.org/api/v0.1";
/// Base URL for the development NYPL Platform API
pub const DEV_BASE_URL: &str = "https://dev-platform.nypl.org/api/v0.1";
/// User agent string used in HTTP requests to identify this client to the Platform API
pub const USER_AGENT: &str = "nypl-platform-client/0.1.0";
/// Default timeout in seconds for Platform API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;
/// Default number of records returned by list queries
pub const DEFAULT_LIMIT: u32 = 10;
/// Default record offset for list queries
pub const DEFAULT_OFFSET: u32 = 0;
/// Source system identifier used by the Platform API for NYPL Sierra records
pub const DEFAULT_NYPL_SOURCE: &str = "sierra-nypl";
/// Seconds subtracted from `expires_in` when computing the absolute expiry
/// of an access token, to account for transit time of the token response
pub const EXPIRY_LEEWAY_SECS: i64 = 1;
