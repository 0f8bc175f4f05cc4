//! Page-lifetime session state

pub mod context;
pub mod provider;

pub use context::SessionContext;
pub use provider::{
    SessionProvider, use_api_host, use_identity, use_notification, use_session, use_store,
};
