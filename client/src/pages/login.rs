//! Login page: email + password, or Google.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::google_button::GoogleButton;
use crate::components::toast::{notify_error, notify_success};
use crate::net::identity::IdentityProvider;
use crate::routes::AppRoute;
use crate::state::notice::NoticeState;
use crate::util::auth::validate_login_input;

#[component]
pub fn LoginPage() -> impl IntoView {
    let identity = expect_context::<IdentityProvider>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(input) => input,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let identity = identity.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match identity.sign_in_with_password(&email_value, &password_value).await {
                Ok(_) => {
                    notify_success(notices, "Login Successful!");
                    navigate(AppRoute::Dashboard.path(), NavigateOptions::default());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    notify_error(notices, "Login Failed", &e);
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2 class="auth-card__title">"Login"</h2>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <input
                    class="form-input"
                    type="email"
                    placeholder="Email"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <PasswordInput value=password shown=show_password/>
                <button class="btn btn--block" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                </button>
                <GoogleButton label="Continue with Google" failure_title="Google Login Failed"/>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href=AppRoute::Signup.path()>"Register"</a>
                </p>
            </form>
        </div>
    }
}

/// Password field with a show/hide toggle.
#[component]
pub fn PasswordInput(value: RwSignal<String>, shown: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="password-input">
            <input
                class="form-input"
                type=move || if shown.get() { "text" } else { "password" }
                placeholder="Password"
                required=true
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                type="button"
                class="password-input__toggle"
                title=move || if shown.get() { "Hide password" } else { "Show password" }
                on:click=move |_| shown.update(|s| *s = !*s)
            >
                {move || if shown.get() { "🙈" } else { "👁" }}
            </button>
        </div>
    }
}
