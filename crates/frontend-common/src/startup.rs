//! Application startup wiring

use bookmarks_core::{Environment, logging};

use crate::auth::{AuthBootstrap, AuthClient};
use crate::session::SessionContext;

/// Build the session for `environment` and start the auth check with `client`
pub fn start_session(
    environment: Environment,
    bootstrap: &AuthBootstrap,
    client: impl AuthClient + 'static,
) -> SessionContext {
    let context = SessionContext::new(environment);
    bootstrap.create_client(&context, client);
    tracing::info!(
        %environment,
        api_host = %context.api_host.get(),
        "Session started"
    );
    context
}

/// Browser entry point: logging, session and the Keycloak silent SSO check
#[cfg(target_arch = "wasm32")]
pub fn start(
    config: Option<&crate::config::KeycloakConfig>,
) -> Result<SessionContext, crate::auth::AuthError> {
    let environment = Environment::detect();
    init_logging(environment);
    let bootstrap = AuthBootstrap::from_window()?;
    let client = crate::auth::KeycloakClient::new(config)?;
    Ok(start_session(environment, &bootstrap, client))
}

/// Initialize logging, ignoring a subscriber that is already installed
pub fn init_logging(environment: Environment) {
    if let Err(e) = logging::init_for_environment(environment) {
        tracing::debug!("Logging already initialized: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthStatus;
    use crate::auth::client::MockAuthClient;
    use tokio::task::LocalSet;

    #[tokio::test]
    async fn test_start_session() {
        LocalSet::new()
            .run_until(async {
                let bootstrap = AuthBootstrap::for_origin("http://localhost:5173").unwrap();
                let mut client = MockAuthClient::new();
                client.expect_init().times(1).returning(|_| Ok(false));

                let context = start_session(Environment::Development, &bootstrap, client);
                assert_eq!(context.api_host.get().as_str(), "http://localhost:8002");
                let handle = context.auth_client().expect("client stored in session");

                tokio::task::yield_now().await;
                tokio::task::yield_now().await;
                assert_eq!(handle.status(), AuthStatus::Unauthenticated);
            })
            .await;
    }
}
