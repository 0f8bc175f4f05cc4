//! Authentication errors

use bookmarks_core::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The silent SSO check rejected (provider unreachable, bad configuration, ...)
    #[error("Failed to initialize auth client: {message}")]
    Initialization { message: String },

    #[error("Invalid auth configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Login failed: {message}")]
    Login { message: String },

    #[error("Logout failed: {message}")]
    Logout { message: String },

    /// The client already reached a terminal state
    #[error("Auth client already settled")]
    AlreadySettled,

    /// A transition was attempted out of order
    #[error("Auth client not initializing")]
    NotInitializing,
}

impl AuthError {
    pub fn initialization(message: impl Into<String>) -> Self {
        Self::Initialization {
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

impl From<CoreError> for AuthError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidConfig { message } => Self::InvalidConfig { message },
            other => Self::Initialization {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_core_error() {
        let err: AuthError = CoreError::invalid_config("no realm").into();
        assert_eq!(err, AuthError::invalid_config("no realm"));

        let err: AuthError = CoreError::serialization_error("bad json").into();
        assert!(matches!(err, AuthError::Initialization { .. }));
    }
}
