//! Logging initialization for native and browser targets

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::environment::Environment;

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// In the browser events go to the devtools console; natively they go to
/// stderr. Fails if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(config.with_target)
        .with_writer(tracing_web::MakeWebConsoleWriter::new());

    #[cfg(not(target_arch = "wasm32"))]
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(config.with_target)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

/// Initialize with the configuration matching the build environment
pub fn init_for_environment(environment: Environment) -> Result<()> {
    let config = if environment.is_development() {
        LoggingConfig::dev()
    } else {
        LoggingConfig::default()
    };
    init_logging(&config)?;
    tracing::debug!(%environment, level = %config.level, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back() {
        let config = LoggingConfig {
            level: "not a [valid] directive".to_string(),
            with_target: false,
        };
        // Must not panic on a bad directive
        let _ = env_filter(&config);
    }

    #[test]
    fn test_second_init_is_an_error() {
        let _ = init_logging(&LoggingConfig::default());
        assert!(init_logging(&LoggingConfig::default()).is_err());
    }
}
