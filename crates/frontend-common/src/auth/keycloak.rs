//! `keycloak-js` binding
//!
//! Expects the `Keycloak` constructor from `keycloak-js` on the global scope.

use async_trait::async_trait;
use bookmarks_core::TokenClaims;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::bootstrap::{AuthBootstrap, AuthClientHandle};
use super::client::{AuthClient, InitOptions};
use super::error::AuthError;
use crate::config::KeycloakConfig;
use crate::session::SessionContext;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Keycloak)]
    type JsKeycloak;

    #[wasm_bindgen(constructor, js_class = "Keycloak")]
    fn new() -> JsKeycloak;

    #[wasm_bindgen(constructor, js_class = "Keycloak")]
    fn with_config(config: &JsValue) -> JsKeycloak;

    #[wasm_bindgen(method, js_class = "Keycloak")]
    fn init(this: &JsKeycloak, options: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(method, js_class = "Keycloak")]
    fn login(this: &JsKeycloak) -> js_sys::Promise;

    #[wasm_bindgen(method, js_class = "Keycloak")]
    fn logout(this: &JsKeycloak) -> js_sys::Promise;

    #[wasm_bindgen(method, getter, js_class = "Keycloak", js_name = idTokenParsed)]
    fn id_token_parsed(this: &JsKeycloak) -> JsValue;

    #[wasm_bindgen(method, getter, js_class = "Keycloak", js_name = tokenParsed)]
    fn token_parsed(this: &JsKeycloak) -> JsValue;

    #[wasm_bindgen(method, getter, js_class = "Keycloak")]
    fn token(this: &JsKeycloak) -> Option<String>;
}

fn js_error(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// [`AuthClient`] backed by a `keycloak-js` instance
pub struct KeycloakClient {
    inner: JsKeycloak,
}

impl KeycloakClient {
    pub fn new(config: Option<&KeycloakConfig>) -> Result<Self, AuthError> {
        let inner = match config {
            Some(config) => {
                let config = serde_wasm_bindgen::to_value(config)
                    .map_err(|e| AuthError::invalid_config(e.to_string()))?;
                JsKeycloak::with_config(&config)
            }
            None => JsKeycloak::new(),
        };
        Ok(Self { inner })
    }
}

#[async_trait(?Send)]
impl AuthClient for KeycloakClient {
    async fn init(&self, options: &InitOptions) -> Result<bool, AuthError> {
        let options = serde_wasm_bindgen::to_value(options)
            .map_err(|e| AuthError::invalid_config(e.to_string()))?;
        let authenticated = JsFuture::from(self.inner.init(&options))
            .await
            .map_err(|e| AuthError::initialization(js_error(&e)))?;
        Ok(authenticated.as_bool().unwrap_or(false))
    }

    fn token_claims(&self) -> Option<TokenClaims> {
        let parsed = Some(self.inner.id_token_parsed())
            .filter(|v| !v.is_undefined() && !v.is_null())
            .unwrap_or_else(|| self.inner.token_parsed());
        if parsed.is_undefined() || parsed.is_null() {
            return None;
        }
        serde_wasm_bindgen::from_value(parsed)
            .inspect_err(|e| tracing::warn!("Unreadable token claims: {e}"))
            .ok()
    }

    fn token(&self) -> Option<String> {
        self.inner.token()
    }

    async fn login(&self) -> Result<(), AuthError> {
        JsFuture::from(self.inner.login())
            .await
            .map(|_| ())
            .map_err(|e| AuthError::Login {
                message: js_error(&e),
            })
    }

    async fn logout(&self) -> Result<(), AuthError> {
        JsFuture::from(self.inner.logout())
            .await
            .map(|_| ())
            .map_err(|e| AuthError::Logout {
                message: js_error(&e),
            })
    }
}

/// Create the session's Keycloak client and start the silent SSO check
pub fn create_keycloak_client(
    context: &SessionContext,
    config: Option<&KeycloakConfig>,
) -> Result<AuthClientHandle, AuthError> {
    let bootstrap = AuthBootstrap::from_window()?;
    let client = KeycloakClient::new(config)?;
    Ok(bootstrap.create_client(context, client))
}
