//! Tracing setup.
//!
//! Logs go to stderr so that stdout carries only results. `RUST_LOG` takes
//! precedence over the configured level.

use crate::config::LoggingSettings;
use crate::error::{PolymulError, PolymulResult};
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` if set, otherwise `settings.level`.
pub fn env_filter(settings: &LoggingSettings) -> PolymulResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.level)
            .map_err(|e| PolymulError::config(format!("Invalid log level: {e}"))),
    }
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` if a subscriber was already installed.
pub fn init_tracing(settings: &LoggingSettings) -> PolymulResult<bool> {
    let filter = env_filter(settings)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = if settings.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_from_settings() {
        let settings = LoggingSettings {
            level: "debug".to_string(),
            json: false,
        };
        assert!(env_filter(&settings).is_ok());
    }

    #[test]
    fn test_init_is_idempotent() {
        let settings = LoggingSettings::default();
        init_tracing(&settings).unwrap();
        assert!(!init_tracing(&settings).unwrap());
    }
}
