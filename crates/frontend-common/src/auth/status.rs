//! Lifecycle of an auth client handle

use serde::{Deserialize, Serialize};

use super::error::AuthError;

/// `Uninitialized → Initializing → {Authenticated, Unauthenticated, InitFailed}`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthStatus {
    #[default]
    Uninitialized,
    Initializing,
    Authenticated,
    Unauthenticated,
    InitFailed { message: String },
}

/// Result of the asynchronous initialization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitOutcome {
    Authenticated,
    Unauthenticated,
    Failed(AuthError),
}

impl From<Result<bool, AuthError>> for InitOutcome {
    fn from(result: Result<bool, AuthError>) -> Self {
        match result {
            Ok(true) => Self::Authenticated,
            Ok(false) => Self::Unauthenticated,
            Err(e) => Self::Failed(e),
        }
    }
}

impl AuthStatus {
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            Self::Authenticated | Self::Unauthenticated | Self::InitFailed { .. }
        )
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// `Uninitialized → Initializing`
    pub fn begin(&self) -> Result<Self, AuthError> {
        match self {
            Self::Uninitialized => Ok(Self::Initializing),
            _ if self.is_settled() => Err(AuthError::AlreadySettled),
            _ => Err(AuthError::NotInitializing),
        }
    }

    /// `Initializing → terminal`; a settled status never settles again
    pub fn settle(&self, outcome: &InitOutcome) -> Result<Self, AuthError> {
        match self {
            Self::Initializing => Ok(match outcome {
                InitOutcome::Authenticated => Self::Authenticated,
                InitOutcome::Unauthenticated => Self::Unauthenticated,
                InitOutcome::Failed(e) => Self::InitFailed {
                    message: e.to_string(),
                },
            }),
            Self::Uninitialized => Err(AuthError::NotInitializing),
            _ => Err(AuthError::AlreadySettled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let status = AuthStatus::default().begin().unwrap();
        assert_eq!(status, AuthStatus::Initializing);
        assert!(!status.is_settled());

        let status = status.settle(&InitOutcome::Authenticated).unwrap();
        assert!(status.is_authenticated());
        assert!(status.is_settled());
    }

    #[test]
    fn test_settles_once() {
        let settled = AuthStatus::Initializing
            .settle(&InitOutcome::Unauthenticated)
            .unwrap();
        assert_eq!(
            settled.settle(&InitOutcome::Authenticated),
            Err(AuthError::AlreadySettled)
        );
        assert_eq!(settled.begin(), Err(AuthError::AlreadySettled));
    }

    #[test]
    fn test_out_of_order() {
        assert_eq!(
            AuthStatus::Uninitialized.settle(&InitOutcome::Authenticated),
            Err(AuthError::NotInitializing)
        );
        assert_eq!(
            AuthStatus::Initializing.begin(),
            Err(AuthError::NotInitializing)
        );
    }

    #[test]
    fn test_failure_keeps_message() {
        let outcome = InitOutcome::from(Err(AuthError::initialization("timeout")));
        let status = AuthStatus::Initializing.settle(&outcome).unwrap();
        assert_eq!(
            status,
            AuthStatus::InitFailed {
                message: "Failed to initialize auth client: timeout".to_string()
            }
        );
    }
}
