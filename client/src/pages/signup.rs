//! Sign-up page.
//!
//! The password rule is checked locally before any network call. On success
//! the new account gets the entered name and photo, then the user lands on
//! the home page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::google_button::GoogleButton;
use crate::components::toast::{notify_error, notify_success};
use crate::net::identity::{IdentityProvider, ProfileUpdate};
use crate::pages::login::PasswordInput;
use crate::routes::AppRoute;
use crate::state::notice::NoticeState;
use crate::util::validation::{password_error_message, validate_password};

/// Validated sign-up input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SignupRequest {
    pub email: String,
    pub password: String,
    pub profile: ProfileUpdate,
}

/// Which sign-up field failed the local check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum SignupInputError {
    #[error("{0}")]
    Password(String),
    #[error("Email is required.")]
    MissingEmail,
}

impl SignupInputError {
    /// Notice title for the failed field.
    pub(crate) fn title(&self) -> &'static str {
        match self {
            Self::Password(_) => "Invalid Password",
            Self::MissingEmail => "Invalid Email",
        }
    }
}

/// Check the sign-up fields. Blank name and photo are left unset.
pub(crate) fn validate_signup(
    name: &str,
    photo_url: &str,
    email: &str,
    password: &str,
) -> Result<SignupRequest, SignupInputError> {
    validate_password(password).map_err(|rules| SignupInputError::Password(password_error_message(&rules)))?;
    let email = email.trim();
    if email.is_empty() {
        return Err(SignupInputError::MissingEmail);
    }
    let non_blank = |v: &str| Some(v.trim().to_owned()).filter(|v| !v.is_empty());
    Ok(SignupRequest {
        email: email.to_owned(),
        password: password.to_owned(),
        profile: ProfileUpdate { display_name: non_blank(name), photo_url: non_blank(photo_url) },
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let identity = expect_context::<IdentityProvider>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let photo_url = RwSignal::new(String::new());
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
        let request = match validate_signup(
            &name.get_untracked(),
            &photo_url.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(request) => request,
            Err(invalid) => {
                let msg = invalid.to_string();
                error.set(Some(msg.clone()));
                notify_error(notices, invalid.title(), msg);
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let identity = identity.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = async {
                identity.create_account(&request.email, &request.password).await?;
                identity.update_profile(&request.profile).await
            }
            .await;
            match result {
                Ok(_) => {
                    notify_success(notices, "Signup Successful!");
                    navigate(AppRoute::Home.path(), NavigateOptions::default());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    notify_error(notices, "Signup Failed", &e);
                }
            }
            busy.set(false);
        });
    };

    let text_input = |kind: &'static str, placeholder: &'static str, value: RwSignal<String>, required: bool| {
        view! {
            <input
                class="form-input"
                type=kind
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2 class="auth-card__title">"Register"</h2>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                {text_input("text", "Full Name", name, true)}
                {text_input("url", "Profile Image URL", photo_url, false)}
                {text_input("email", "Email", email, true)}
                <PasswordInput value=password shown=show_password/>
                <button class="btn btn--block" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                </button>
                <GoogleButton label="Continue with Google" failure_title="Google Signup Failed"/>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=AppRoute::Login.path()>"Login"</a>
                </p>
            </form>
        </div>
    }
}
