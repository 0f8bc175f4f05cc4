//! Frontend configuration

use serde::{Deserialize, Serialize};

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Page served by the host application for the silent SSO iframe
    pub const SILENT_CHECK_SSO_PATH: &'static str = "/silent-check-sso";

    /// Notification shown when the identity provider cannot be reached
    pub const INIT_FAILED_NOTICE: &'static str = "Could not reach the sign-in service.";
}

/// Identity provider location.
///
/// When absent the client loads `keycloak.json` next to the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeycloakConfig {
    pub url: String,
    pub realm: String,
    pub client_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keycloak_config_is_camel_case() {
        let config = KeycloakConfig {
            url: "https://sso.example.com".to_string(),
            realm: "bookmarks".to_string(),
            client_id: "webapp".to_string(),
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["clientId"], "webapp");
    }
}
