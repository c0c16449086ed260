//! Route guard component that gates protected views on the stored session

use super::gate::{AuthGate, AuthorizationState};
use super::token_store::LocalTokenStore;
use crate::client::create_public_client;
use crate::components::Spinner;
use crate::routes::Route;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
}

/// Shows a placeholder until the session check settles, then either the
/// children or a redirect to the login page.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let state = use_state(AuthorizationState::default);

    // Check once per mount; the abort on unmount drops any late verdict
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let abort = match create_public_client() {
                Ok(client) => {
                    let (task, handle) = AuthGate::new(LocalTokenStore, client).into_cancellable();
                    spawn_local(async move {
                        if let Ok(verdict) = task.await {
                            state.set(verdict);
                        }
                    });
                    Some(handle)
                }
                Err(e) => {
                    warn!("cannot build API client for session check: {e}");
                    state.set(AuthorizationState::Unauthorized);
                    None
                }
            };

            move || {
                if let Some(handle) = abort {
                    handle.abort();
                }
            }
        });
    }

    match *state {
        AuthorizationState::Unresolved => html! { <Spinner text="Loading..." /> },
        AuthorizationState::Unauthorized => html! { <Redirect<Route> to={Route::Login} /> },
        AuthorizationState::Authorized => html! { <>{ props.children.clone() }</> },
    }
}
