//! Identity provider client seam

use async_trait::async_trait;
use bookmarks_core::TokenClaims;
use serde::{Deserialize, Serialize};
use url::Url;

use super::error::AuthError;
use crate::config::AuthConfig;

/// What the client does when it initializes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnLoad {
    /// Look for an existing session without prompting
    #[serde(rename = "check-sso")]
    CheckSso,
    /// Redirect to the login page when there is no session
    #[serde(rename = "login-required")]
    LoginRequired,
}

/// Options handed verbatim to the identity provider client
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitOptions {
    pub on_load: OnLoad,
    pub silent_check_sso_redirect_uri: String,
}

impl InitOptions {
    /// Silent SSO check redirecting to `/silent-check-sso` on `origin`
    pub fn silent_check(origin: &str) -> Result<Self, AuthError> {
        Ok(Self {
            on_load: OnLoad::CheckSso,
            silent_check_sso_redirect_uri: redirect_uri(origin)?,
        })
    }
}

/// Resolve the silent SSO page against the page origin
pub fn redirect_uri(origin: &str) -> Result<String, AuthError> {
    let base = Url::parse(origin)
        .map_err(|e| AuthError::invalid_config(format!("invalid page origin '{origin}': {e}")))?;
    if base.cannot_be_a_base() || base.host_str().is_none() {
        return Err(AuthError::invalid_config(format!(
            "page origin '{origin}' has no host"
        )));
    }
    let uri = base
        .join(AuthConfig::SILENT_CHECK_SSO_PATH)
        .map_err(|e| AuthError::invalid_config(e.to_string()))?;
    Ok(uri.into())
}

/// Identity provider client
///
/// Implemented over `keycloak-js` in the browser and mocked in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait AuthClient {
    /// Run the initial check; resolves to whether a session exists
    async fn init(&self, options: &InitOptions) -> Result<bool, AuthError>;

    /// Claims of the current ID token, if authenticated
    fn token_claims(&self) -> Option<TokenClaims>;

    /// Current bearer token, if authenticated
    fn token(&self) -> Option<String>;

    /// Start an interactive login
    async fn login(&self) -> Result<(), AuthError>;

    async fn logout(&self) -> Result<(), AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_uri() {
        assert_eq!(
            redirect_uri("https://bookmarks.example.com").unwrap(),
            "https://bookmarks.example.com/silent-check-sso"
        );
        assert_eq!(
            redirect_uri("http://localhost:5173").unwrap(),
            "http://localhost:5173/silent-check-sso"
        );
    }

    #[test]
    fn test_redirect_uri_rejects_bad_origin() {
        assert!(matches!(
            redirect_uri("not an origin"),
            Err(AuthError::InvalidConfig { .. })
        ));
        assert!(matches!(
            redirect_uri("data:text/plain,hi"),
            Err(AuthError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_init_options_wire_format() {
        let options = InitOptions::silent_check("https://bookmarks.example.com").unwrap();
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "onLoad": "check-sso",
                "silentCheckSsoRedirectUri": "https://bookmarks.example.com/silent-check-sso",
            })
        );
    }
}
