//! Current end-user identity

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The signed-in user as seen by the UI.
///
/// Replaced wholesale on every change so observers never see a half-updated
/// value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub picture: Option<String>,
    /// An auth check is in flight
    pub authenticating: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl Identity {
    /// The all-null identity used before or without authentication
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Anonymous identity with an auth check in flight
    pub fn authenticating() -> Self {
        Self {
            authenticating: true,
            ..Self::default()
        }
    }

    /// Build the identity from parsed ID token claims
    pub fn from_claims(claims: &TokenClaims) -> Self {
        let (first_name, last_name) = match (&claims.given_name, &claims.family_name) {
            (None, None) => split_full_name(claims.name.as_deref()),
            (given, family) => (given.clone(), family.clone()),
        };

        let mut attributes = claims.extra.clone();
        if let Some(email) = &claims.email {
            attributes.insert("email".to_string(), email.clone().into());
        }

        let picture = claims.picture.clone().or_else(|| {
            attributes
                .get("picture")
                .and_then(|v| v.as_str())
                .map(str::to_string)
        });

        Self {
            id: Some(claims.sub.clone()),
            first_name,
            last_name,
            picture,
            authenticating: false,
            attributes,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_anonymous(&self) -> bool {
        self.id.is_none() && !self.authenticating
    }

    /// First and last name joined, if either is known
    pub fn display_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(name), None) | (None, Some(name)) => Some(name.clone()),
            (None, None) => None,
        }
    }
}

fn split_full_name(name: Option<&str>) -> (Option<String>, Option<String>) {
    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        return (None, None);
    };
    match name.split_once(' ') {
        Some((first, last)) => (Some(first.to_string()), Some(last.trim().to_string())),
        None => (Some(name.to_string()), None),
    }
}

/// Claims of the identity provider's parsed ID token
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_anonymous_identity_serializes_all_null() {
        let value = serde_json::to_value(Identity::anonymous()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": null,
                "firstName": null,
                "lastName": null,
                "picture": null,
                "authenticating": false,
            })
        );
        assert!(Identity::anonymous().is_anonymous());
        assert!(!Identity::authenticating().is_anonymous());
    }

    #[test]
    fn test_from_claims() {
        let claims: TokenClaims = serde_json::from_value(json!({
            "sub": "0b5c9c1e",
            "given_name": "Ada",
            "family_name": "Lovelace",
            "email": "ada@example.com",
            "picture": "https://example.com/ada.png",
            "preferred_username": "ada",
        }))
        .unwrap();

        let identity = Identity::from_claims(&claims);
        assert_eq!(identity.id.as_deref(), Some("0b5c9c1e"));
        assert_eq!(identity.first_name.as_deref(), Some("Ada"));
        assert_eq!(identity.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(identity.picture.as_deref(), Some("https://example.com/ada.png"));
        assert_eq!(identity.attributes["preferred_username"], json!("ada"));
        assert_eq!(identity.attributes["email"], json!("ada@example.com"));
        assert!(identity.is_authenticated());
        assert!(!identity.authenticating);
        assert_eq!(identity.display_name().as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_from_claims_falls_back_to_full_name() {
        let claims = TokenClaims {
            sub: "42".to_string(),
            name: Some("Grace Brewster Hopper".to_string()),
            ..TokenClaims::default()
        };

        let identity = Identity::from_claims(&claims);
        assert_eq!(identity.first_name.as_deref(), Some("Grace"));
        assert_eq!(identity.last_name.as_deref(), Some("Brewster Hopper"));
        assert_eq!(identity.picture, None);
    }

    #[test]
    fn test_picture_from_attributes() {
        let mut extra = BTreeMap::new();
        extra.insert("picture".to_string(), json!("https://example.com/p.png"));
        let claims = TokenClaims {
            sub: "1".to_string(),
            extra,
            ..TokenClaims::default()
        };

        assert_eq!(
            Identity::from_claims(&claims).picture.as_deref(),
            Some("https://example.com/p.png")
        );
    }
}
