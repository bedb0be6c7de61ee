use crate::utils::config::get_env_or_default;
use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Initializes the global tracing subscriber.
///
/// The log level is taken from the `LOGLEVEL` environment variable
/// (`trace`, `debug`, `info`, `warn` or `error`, default `info`).
/// Safe to call multiple times; only the first call installs the subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = match get_env_or_default("LOGLEVEL", String::from("info"))
            .to_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init();
    });
}
