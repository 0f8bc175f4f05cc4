//! Deployment environment and the API host derived from it

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::FrontendConfig;
use crate::error::CoreError;

/// Where the frontend is running
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Resolve the environment for this build.
    ///
    /// `BOOKMARKS_ENV` set at compile time wins; otherwise debug builds are
    /// treated as development.
    pub fn detect() -> Self {
        option_env!("BOOKMARKS_ENV")
            .and_then(|value| {
                value
                    .parse::<Self>()
                    .inspect_err(|e| {
                        tracing::warn!(
                            var = FrontendConfig::ENVIRONMENT_VAR,
                            "Ignoring environment override: {e}"
                        );
                    })
                    .ok()
            })
            .unwrap_or(if cfg!(debug_assertions) {
                Self::Development
            } else {
                Self::Production
            })
    }

    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(CoreError::invalid_config(format!(
                "unknown environment '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}

/// Base host for API requests.
///
/// An empty host means "same origin as the page": request paths are used as
/// relative URLs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiHost(String);

impl ApiHost {
    pub fn for_environment(environment: Environment) -> Self {
        if environment.is_development() {
            Self(FrontendConfig::DEV_API_HOST.to_string())
        } else {
            Self(String::new())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether requests go to the page's own origin
    pub fn is_same_origin(&self) -> bool {
        self.0.is_empty()
    }

    /// Build the URL for an API path
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if self.is_same_origin() {
            format!("/{path}")
        } else {
            format!("{}/{path}", self.0.trim_end_matches('/'))
        }
    }
}

impl fmt::Display for ApiHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ApiHost {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
