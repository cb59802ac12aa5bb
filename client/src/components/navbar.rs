//! Top navigation bar for public pages.
//!
//! Shows the main links with the current route highlighted, the dark mode
//! toggle, and either the signed-in user with a logout button or the
//! login/register actions.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::toast::notify_success;
use crate::net::identity::IdentityProvider;
use crate::routes::{AppRoute, resolve};
use crate::state::notice::NoticeState;
use crate::state::session::Session;
use crate::state::ui::UiState;

const LINKS: [AppRoute; 6] = [
    AppRoute::Home,
    AppRoute::AllPlants,
    AppRoute::AddPlant,
    AppRoute::MyPlants,
    AppRoute::About,
    AppRoute::Contact,
];

/// Links shown in the bar; dashboard pages only once signed in.
pub(crate) fn nav_links(signed_in: bool) -> impl Iterator<Item = AppRoute> {
    LINKS.into_iter().filter(move |route| signed_in || !route.is_guarded())
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let current = Memo::new(move |_| resolve(&location.pathname.get()));

    let links = move || {
        let signed_in = session.with(|s| s.user.is_some());
        nav_links(signed_in)
            .map(|route| {
                let href = route.path();
                let title = route.title();
                view! {
                    <a
                        class="navbar__link"
                        class:navbar__link--active=move || current.get() == route
                        href=href
                        on:click=move |_| ui.update(UiState::close_menus)
                    >
                        {title}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href=AppRoute::Home.path()>"🌿 PlantCare"</a>
            <button
                class="navbar__burger"
                aria-label="Menu"
                on:click=move |_| ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open)
            >
                "☰"
            </button>
            <nav class="navbar__links" class:navbar__links--open=move || ui.get().mobile_menu_open>
                {links}
            </nav>
            <div class="navbar__actions">
                <DarkModeToggle/>
                <Show
                    when=move || session.get().user.is_some()
                    fallback=|| {
                        view! {
                            <a class="btn btn--ghost" href=AppRoute::Login.path()>"Login"</a>
                            <a class="btn" href=AppRoute::Signup.path()>"Register"</a>
                        }
                    }
                >
                    <UserBadge/>
                    <LogoutButton/>
                </Show>
            </div>
        </header>
    }
}

/// Sun/moon button flipping the `dark` class on `<html>`.
#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <button
            class="btn btn--icon"
            title="Toggle dark mode"
            on:click=move |_| {
                let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
                ui.update(|u| u.dark_mode = next);
            }
        >
            {move || if ui.get().dark_mode { "☀" } else { "☾" }}
        </button>
    }
}

/// Avatar (or initial) plus the user's display label.
#[component]
pub fn UserBadge() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let user = move || session.get().user;

    view! {
        <span class="user-badge" title=move || user().map(|u| u.label()).unwrap_or_default()>
            {move || match user().and_then(|u| u.photo_url) {
                Some(src) => view! { <img class="user-badge__avatar" src=src alt="avatar"/> }.into_any(),
                None => {
                    let initial = user()
                        .and_then(|u| u.label().chars().next())
                        .map(|c| c.to_uppercase().to_string())
                        .unwrap_or_default();
                    view! { <span class="user-badge__initial">{initial}</span> }.into_any()
                }
            }}
            <span class="user-badge__name">{move || user().map(|u| u.label()).unwrap_or_default()}</span>
        </span>
    }
}

/// Signs out and returns to the home page.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let identity = expect_context::<IdentityProvider>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        identity.sign_out();
        notify_success(notices, "Logged out");
        navigate(AppRoute::Home.path(), NavigateOptions::default());
    };

    view! {
        <button class="btn btn--ghost" on:click=on_logout title="Logout">
            "Logout"
        </button>
    }
}
