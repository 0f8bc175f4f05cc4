//! Session state shared with the UI tree

use bookmarks_core::{ApiHost, Environment, Identity};

use crate::auth::AuthClientHandle;
use crate::store::{Readable, Writable};

/// The observable session cells.
///
/// Built once at startup and handed to the UI through
/// [`SessionProvider`](super::SessionProvider). Cloning shares the cells.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionContext {
    /// Current user; anonymous until the auth bootstrap resolves
    pub identity: Writable<Identity>,
    /// Live auth client, set once by the bootstrap
    pub auth_client: Writable<Option<AuthClientHandle>>,
    /// Transient message for the UI to show and clear
    pub notification: Writable<Option<String>>,
    /// Fixed for the lifetime of the page
    pub api_host: Readable<ApiHost>,
    environment: Environment,
}

impl SessionContext {
    pub fn new(environment: Environment) -> Self {
        Self {
            identity: Writable::new(Identity::anonymous()),
            auth_client: Writable::new(None),
            notification: Writable::new(None),
            api_host: Readable::new(ApiHost::for_environment(environment)),
            environment,
        }
    }

    /// Context for the environment this build targets
    pub fn detect() -> Self {
        Self::new(Environment::detect())
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// URL for an API path on the configured host
    pub fn api_url(&self, path: &str) -> String {
        self.api_host.get().url(path)
    }

    pub fn notify(&self, message: impl Into<String>) {
        self.notification.set(Some(message.into()));
    }

    pub fn clear_notification(&self) {
        self.notification.set(None);
    }

    pub fn reset_identity(&self) {
        self.identity.set(Identity::anonymous());
    }

    pub fn auth_client(&self) -> Option<AuthClientHandle> {
        self.auth_client.get()
    }
}
