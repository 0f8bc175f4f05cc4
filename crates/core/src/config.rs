//! Frontend configuration

use serde::{Deserialize, Serialize};

/// Fixed values the frontend is built against
pub struct FrontendConfig;

impl FrontendConfig {
    /// API endpoint used when running against a local development backend
    pub const DEV_API_HOST: &'static str = "http://localhost:8002";

    /// Compile-time variable overriding the detected environment
    pub const ENVIRONMENT_VAR: &'static str = "BOOKMARKS_ENV";
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace")
    pub level: String,
    /// Include the event target in each line
    #[serde(default = "default_true")]
    pub with_target: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: true,
        }
    }
}

impl LoggingConfig {
    /// Verbose configuration used for development builds
    pub fn dev() -> Self {
        Self {
            level: "debug".to_string(),
            ..Self::default()
        }
    }
}
