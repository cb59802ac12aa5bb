//! Dashboard chrome: sidebar navigation, user header, and the outlet for
//! the active dashboard page.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::components::navbar::{DarkModeToggle, LogoutButton, UserBadge};
use crate::routes::{AppRoute, resolve};
use crate::state::ui::UiState;

const SIDEBAR: [(AppRoute, &str); 5] = [
    (AppRoute::Dashboard, "Overview"),
    (AppRoute::DashboardAllPlants, "All Plants"),
    (AppRoute::AddPlant, "Add Plant"),
    (AppRoute::MyPlants, "My Plants"),
    (AppRoute::UserProfile, "Profile"),
];

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let current = Memo::new(move |_| resolve(&location.pathname.get()));

    let links = SIDEBAR
        .into_iter()
        .map(|(route, label)| {
            let href = route.path();
            view! {
                <a
                    class="sidebar__link"
                    class:sidebar__link--active=move || current.get() == route
                    href=href
                    on:click=move |_| ui.update(UiState::close_menus)
                >
                    {label}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard" class:dashboard--sidebar-open=move || ui.get().sidebar_open>
            <aside class="sidebar">
                <a class="sidebar__brand" href=AppRoute::Home.path()>"🌿 PlantCare"</a>
                <nav class="sidebar__nav">{links}</nav>
                <a class="sidebar__link sidebar__link--home" href=AppRoute::Home.path()>"← Back to site"</a>
            </aside>
            <div class="dashboard__main">
                <header class="dashboard__header">
                    <button
                        class="btn btn--icon dashboard__menu"
                        aria-label="Toggle sidebar"
                        on:click=move |_| ui.update(|u| u.sidebar_open = !u.sidebar_open)
                    >
                        "☰"
                    </button>
                    <h1 class="dashboard__title">{move || current.get().title()}</h1>
                    <span class="dashboard__spacer"></span>
                    <DarkModeToggle/>
                    <UserBadge/>
                    <LogoutButton/>
                </header>
                <main class="dashboard__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
