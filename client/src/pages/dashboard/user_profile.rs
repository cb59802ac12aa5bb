//! Profile page: shows the signed-in identity and edits name and photo.

#[cfg(test)]
#[path = "user_profile_test.rs"]
mod user_profile_test;

use leptos::prelude::*;

use crate::components::toast::{notify_error, notify_success};
use crate::net::identity::{IdentityProvider, ProfileUpdate};
use crate::state::notice::NoticeState;
use crate::state::session::Session;

/// Turn the edit fields into an update. Unchanged or blank fields are left out.
pub(crate) fn profile_changes(
    current_name: Option<&str>,
    current_photo: Option<&str>,
    name: &str,
    photo_url: &str,
) -> Option<ProfileUpdate> {
    let changed = |current: Option<&str>, next: &str| {
        let next = next.trim();
        (!next.is_empty() && Some(next) != current).then(|| next.to_owned())
    };
    let update = ProfileUpdate {
        display_name: changed(current_name, name),
        photo_url: changed(current_photo, photo_url),
    };
    (update != ProfileUpdate::default()).then_some(update)
}

#[component]
pub fn UserProfilePage() -> impl IntoView {
    let identity = expect_context::<IdentityProvider>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let user = move || session.get().user;
    let name = RwSignal::new(session.with_untracked(|s| {
        s.user.as_ref().and_then(|u| u.display_name.clone()).unwrap_or_default()
    }));
    let photo_url = RwSignal::new(session.with_untracked(|s| {
        s.user.as_ref().and_then(|u| u.photo_url.clone()).unwrap_or_default()
    }));
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let update = session.with_untracked(|s| {
            let current = s.user.as_ref();
            profile_changes(
                current.and_then(|u| u.display_name.as_deref()),
                current.and_then(|u| u.photo_url.as_deref()),
                &name.get_untracked(),
                &photo_url.get_untracked(),
            )
        });
        let Some(update) = update else {
            notify_success(notices, "Nothing to update");
            return;
        };
        busy.set(true);
        let identity = identity.clone();
        leptos::task::spawn_local(async move {
            match identity.update_profile(&update).await {
                Ok(_) => notify_success(notices, "Profile updated"),
                Err(e) => notify_error(notices, "Profile update failed", &e),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="section section--narrow profile">
            <div class="profile__card">
                {move || match user().and_then(|u| u.photo_url) {
                    Some(src) => view! { <img class="profile__avatar" src=src alt="avatar"/> }.into_any(),
                    None => view! { <div class="profile__avatar profile__avatar--empty">"🌱"</div> }.into_any(),
                }}
                <h2>{move || user().map(|u| u.label()).unwrap_or_default()}</h2>
                <p class="profile__email">{move || user().and_then(|u| u.email).unwrap_or_default()}</p>
            </div>
            <form class="plant-form" on:submit=on_submit>
                <label class="form-field">
                    <span class="form-field__label">"Display name"</span>
                    <input
                        class="form-input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Photo URL"</span>
                    <input
                        class="form-input"
                        type="url"
                        prop:value=move || photo_url.get()
                        on:input=move |ev| photo_url.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--block" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save profile" }}
                </button>
            </form>
        </section>
    }
}
