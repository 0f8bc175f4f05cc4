//! Authentication bootstrap

pub mod bootstrap;
pub mod client;
pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod keycloak;
pub mod status;

pub use bootstrap::{AuthBootstrap, AuthClientHandle};
pub use client::{AuthClient, InitOptions, OnLoad, redirect_uri};
pub use error::AuthError;
#[cfg(target_arch = "wasm32")]
pub use keycloak::{KeycloakClient, create_keycloak_client};
pub use status::{AuthStatus, InitOutcome};
