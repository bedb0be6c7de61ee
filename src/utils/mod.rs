/// Environment variable helpers used by the configuration module
pub mod config;
/// Tracing subscriber setup
pub mod logger;
