//! Session state and authentication bootstrap for the bookmarks web app

pub mod auth;
pub mod config;
pub mod session;
pub mod spawn;
pub mod startup;
pub mod store;

pub use auth::{AuthBootstrap, AuthClient, AuthClientHandle, AuthError, AuthStatus};
pub use config::{AuthConfig, KeycloakConfig};
pub use session::{SessionContext, SessionProvider, use_identity, use_session, use_store};
pub use store::{Readable, Subscription, Writable};
pub use startup::start_session;
#[cfg(target_arch = "wasm32")]
pub use startup::start;
