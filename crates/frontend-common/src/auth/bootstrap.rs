//! Auth client construction and the silent SSO check

use std::fmt;
use std::rc::Rc;

use bookmarks_core::Identity;

use super::client::{AuthClient, InitOptions};
use super::error::AuthError;
use super::status::{AuthStatus, InitOutcome};
use crate::config::AuthConfig;
use crate::session::SessionContext;
use crate::spawn::spawn_local;
use crate::store::{Readable, Writable};

struct HandleInner {
    client: Box<dyn AuthClient>,
    options: InitOptions,
    status: Writable<AuthStatus>,
}

/// Shared handle to the live auth client
#[derive(Clone)]
pub struct AuthClientHandle {
    inner: Rc<HandleInner>,
}

impl PartialEq for AuthClientHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for AuthClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthClientHandle")
            .field("status", &self.status())
            .field("options", &self.inner.options)
            .finish_non_exhaustive()
    }
}

impl AuthClientHandle {
    fn new(client: Box<dyn AuthClient>, options: InitOptions) -> Self {
        Self {
            inner: Rc::new(HandleInner {
                client,
                options,
                status: Writable::new(AuthStatus::Uninitialized),
            }),
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.inner.status.get()
    }

    /// Observable lifecycle of this client
    pub fn status_store(&self) -> Readable<AuthStatus> {
        self.inner.status.readonly()
    }

    pub fn options(&self) -> &InitOptions {
        &self.inner.options
    }

    /// Bearer token for API requests
    pub fn token(&self) -> Option<String> {
        self.inner.client.token()
    }

    /// Interactive login; usable whatever the outcome of the silent check
    pub async fn login(&self) -> Result<(), AuthError> {
        tracing::info!("Starting interactive login");
        self.inner.client.login().await
    }

    /// End the session and reset the identity to anonymous
    pub async fn logout(&self, context: &SessionContext) -> Result<(), AuthError> {
        self.inner.client.logout().await?;
        context.reset_identity();
        tracing::info!("Logged out");
        Ok(())
    }

    fn transition(
        &self,
        f: impl FnOnce(&AuthStatus) -> Result<AuthStatus, AuthError>,
    ) -> Result<(), AuthError> {
        let next = f(&self.inner.status.get())?;
        self.inner.status.set(next);
        Ok(())
    }

    /// Drive the silent check to completion and apply its result
    async fn initialize(self, context: SessionContext) {
        let outcome = InitOutcome::from(self.inner.client.init(&self.inner.options).await);

        let next = match self.inner.status.get().settle(&outcome) {
            Ok(next) => next,
            Err(e) => {
                tracing::error!(error = %e, "Ignoring auth client result");
                return;
            }
        };

        // Identity first, so status observers never see it stale
        match outcome {
            InitOutcome::Authenticated => {
                let identity = match self.inner.client.token_claims() {
                    Some(claims) => Identity::from_claims(&claims),
                    None => {
                        tracing::warn!("Authenticated without token claims");
                        Identity::anonymous()
                    }
                };
                tracing::info!(user_id = ?identity.id, "authenticated");
                context.identity.set(identity);
            }
            InitOutcome::Unauthenticated => {
                tracing::info!("NOT authenticated");
                context.reset_identity();
            }
            InitOutcome::Failed(e) => {
                tracing::error!(error = %e, "Failed to initialize auth client");
                context.reset_identity();
                context.notify(AuthConfig::INIT_FAILED_NOTICE);
            }
        }

        self.inner.status.set(next);
    }
}

/// Builds the session's auth client
#[derive(Clone, Debug)]
pub struct AuthBootstrap {
    options: InitOptions,
}

impl AuthBootstrap {
    pub fn new(options: InitOptions) -> Self {
        Self { options }
    }

    /// Silent SSO check for a page served from `origin`
    pub fn for_origin(origin: &str) -> Result<Self, AuthError> {
        Ok(Self::new(InitOptions::silent_check(origin)?))
    }

    /// Silent SSO check for the current page
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Result<Self, AuthError> {
        let origin = gloo::utils::window()
            .location()
            .origin()
            .map_err(|e| AuthError::invalid_config(format!("page origin unavailable: {e:?}")))?;
        Self::for_origin(&origin)
    }

    pub fn options(&self) -> &InitOptions {
        &self.options
    }

    /// Store `client` in the session and start its silent check.
    ///
    /// Returns synchronously while the check runs on the local executor.
    /// A session has one client: if one already exists it is returned and
    /// `client` is dropped.
    pub fn create_client(
        &self,
        context: &SessionContext,
        client: impl AuthClient + 'static,
    ) -> AuthClientHandle {
        if let Some(existing) = context.auth_client() {
            tracing::warn!("Auth client already created for this session");
            return existing;
        }

        let handle = AuthClientHandle::new(Box::new(client), self.options.clone());
        if let Err(e) = handle.transition(AuthStatus::begin) {
            // A fresh handle is always uninitialized
            tracing::error!(error = %e, "Auth client in unexpected state");
        }

        context.auth_client.set(Some(handle.clone()));
        context.identity.set(Identity::authenticating());
        tracing::debug!(options = ?self.options, "creating auth client");

        spawn_local(handle.clone().initialize(context.clone()));
        handle
    }
}
