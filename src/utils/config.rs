use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads and parses an environment variable, falling back to `default` when
/// the variable is unset or does not parse.
///
/// # Arguments
/// * `name` - Name of the environment variable
/// * `default` - Value to use when the variable is missing or invalid
pub fn get_env_or_default<T>(name: &str, default: T) -> T
where
    T: FromStr,
    <T as FromStr>::Err: Debug,
{
    let Ok(raw) = env::var(name) else {
        return default;
    };
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(e) => {
            warn!("Could not parse {}={:?} ({:?}), using default", name, raw, e);
            default
        }
    }
}
