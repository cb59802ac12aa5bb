//! "Continue with Google" button shared by the login and sign-up pages.
//!
//! Starts the OAuth redirect flow: a fresh `state` value is kept in
//! `sessionStorage` and the browser leaves for Google's consent page. The
//! `/auth/callback` page finishes the sign-in.

use leptos::prelude::*;

use crate::components::toast::notify_error;
use crate::config::ClientConfig;
use crate::net::identity::{FederatedProvider, IdentityProvider};
use crate::state::notice::NoticeState;
use crate::util::auth::new_oauth_state;
use crate::util::storage::{Area, OAUTH_STATE_KEY, save_json};

#[component]
pub fn GoogleButton(#[prop(into)] label: String, #[prop(into)] failure_title: String) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let identity = expect_context::<IdentityProvider>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_click = move |_: leptos::ev::MouseEvent| {
        let state = new_oauth_state();
        match identity.federated_authorize_url(FederatedProvider::Google, &state) {
            Ok(url) => {
                save_json(Area::Tab, OAUTH_STATE_KEY, &state);
                #[cfg(feature = "hydrate")]
                {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&url);
                    }
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = url;
                }
            }
            Err(e) => notify_error(notices, failure_title.clone(), e),
        }
    };

    view! {
        <Show when=move || config.google_enabled()>
            <div class="auth-divider">"OR"</div>
            <button type="button" class="btn btn--outline btn--block" on:click=on_click.clone()>
                <span class="google-mark" aria-hidden="true">"G"</span>
                {label.clone()}
            </button>
        </Show>
    }
}
