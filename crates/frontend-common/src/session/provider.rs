//! Session context provider and hooks

use bookmarks_core::{ApiHost, Identity};
use yew::prelude::*;

use super::context::SessionContext;
use crate::store::Readable;

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub context: SessionContext,
    pub children: Children,
}

/// Makes the session available to every component below it
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    html! {
        <ContextProvider<SessionContext> context={props.context.clone()}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Current value of `store`, re-rendering the component when it changes
#[hook]
pub fn use_store<T>(store: &Readable<T>) -> T
where
    T: Clone + PartialEq + 'static,
{
    let value = use_state_eq(|| store.get());

    {
        let value = value.clone();
        use_effect_with(store.clone(), move |store| {
            let subscription = store.subscribe(move |v: &T| value.set(v.clone()));
            move || drop(subscription)
        });
    }

    (*value).clone()
}

/// Hook to get the current identity
#[hook]
pub fn use_identity() -> Identity {
    let session = use_session();
    use_store(&session.identity.readonly())
}

/// Hook to get the current notification
#[hook]
pub fn use_notification() -> Option<String> {
    let session = use_session();
    use_store(&session.notification.readonly())
}

/// Hook to get the API host
#[hook]
pub fn use_api_host() -> ApiHost {
    let session = use_session();
    use_store(&session.api_host)
}
