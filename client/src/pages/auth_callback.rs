//! OAuth redirect target for Google sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! `GoogleButton` stores a random `state` in `sessionStorage` and sends the
//! browser to Google. Google redirects back here with `#id_token=...&state=...`;
//! this page checks the state, exchanges the token with the identity adapter
//! and moves on to the home page.

#[cfg(test)]
#[path = "auth_callback_test.rs"]
mod auth_callback_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::identity::{FederatedCredential, FederatedProvider};
use crate::routes::AppRoute;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::auth::parse_oauth_fragment;

/// Turn the callback fragment into a credential, checking it answers the
/// sign-in this tab started.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn credential_from_redirect(fragment: &str, expected_state: Option<&str>) -> Result<FederatedCredential, String> {
    let redirect = parse_oauth_fragment(fragment)?;
    match expected_state {
        Some(expected) if expected == redirect.state => {
            Ok(FederatedCredential { provider: FederatedProvider::Google, id_token: redirect.id_token })
        }
        Some(_) => Err("Sign-in state did not match. Please try again.".to_owned()),
        None => Err("No Google sign-in was started from this tab.".to_owned()),
    }
}

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        use crate::components::toast::{notify_error, notify_success};
        use crate::net::identity::IdentityProvider;
        use crate::state::notice::NoticeState;
        use crate::util::storage::{Area, OAUTH_STATE_KEY, load_json, remove};

        let identity = expect_context::<IdentityProvider>();
        let notices = expect_context::<RwSignal<NoticeState>>();
        let navigate = use_navigate();

        let fragment = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        let expected: Option<String> = load_json(Area::Tab, OAUTH_STATE_KEY);
        remove(Area::Tab, OAUTH_STATE_KEY);

        match credential_from_redirect(&fragment, expected.as_deref()) {
            Ok(credential) => leptos::task::spawn_local(async move {
                match identity.sign_in_with_federated(&credential).await {
                    Ok(_) => {
                        notify_success(notices, "Signed in with Google!");
                        navigate(AppRoute::Home.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                    Err(e) => {
                        notify_error(notices, "Google Sign-in Failed", &e);
                        error.set(Some(e.to_string()));
                    }
                }
            }),
            Err(msg) => error.set(Some(msg)),
        }
    }

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <Show
                    when=move || error.get().is_some()
                    fallback=|| view! { <p class="auth-card__pending">"Finishing Google sign-in..."</p> }
                >
                    <h2 class="auth-card__title">"Sign-in failed"</h2>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                    <a class="btn btn--block" href=AppRoute::Login.path()>"Back to login"</a>
                </Show>
            </div>
        </div>
    }
}
