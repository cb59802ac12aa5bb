//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the identity adapter once, provides it together with the
//! session, notice, UI and config state as context, and declares the route
//! table. In the browser it also starts the initial session restore, whose
//! notification ends the session's loading phase.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::route_guard::RouteGuard;
use crate::components::toast::Toasts;
use crate::config::ClientConfig;
use crate::net::firebase::FirebaseBackend;
use crate::net::identity::IdentityProvider;
use crate::pages::all_plants::{AllPlantsPage, DashboardAllPlantsPage};
use crate::pages::auth_callback::AuthCallbackPage;
use crate::pages::dashboard::add_plant::AddPlantPage;
use crate::pages::dashboard::layout::DashboardLayout;
use crate::pages::dashboard::my_plants::MyPlantsPage;
use crate::pages::dashboard::overview::OverviewPage;
use crate::pages::dashboard::plant_details::PlantDetailsPage;
use crate::pages::dashboard::update_plant::UpdatePlantPage;
use crate::pages::dashboard::user_profile::UserProfilePage;
use crate::pages::home::HomePage;
use crate::pages::info::{AboutPage, ContactPage, SupportPage};
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::signup::SignupPage;
use crate::routes::resolve;
use crate::state::notice::NoticeState;
use crate::state::session::provide_session;
use crate::state::ui::UiState;
use crate::util::storage::LocalSessionStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let identity = IdentityProvider::new(FirebaseBackend::new(config.clone()), LocalSessionStorage);
    provide_context(config);
    provide_session(identity.clone());
    provide_context(RwSignal::new(NoticeState::default()));
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move { identity.restore().await });
        Effect::new(move || {
            let dark = crate::util::dark_mode::read_preference();
            crate::util::dark_mode::apply(dark);
            ui.update(|u| u.dark_mode = dark);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (identity, ui);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/plantcare.css"/>
        <Router>
            <RouteTitle/>
            <Toasts/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <ParentRoute path=StaticSegment("") view=PublicLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("support") view=SupportPage/>
                    <Route path=StaticSegment("all-plants") view=AllPlantsPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=AuthCallbackPage/>
                </ParentRoute>
                <ParentRoute
                    path=StaticSegment("dashboard")
                    view=|| view! { <RouteGuard><DashboardLayout/></RouteGuard> }
                >
                    <Route path=StaticSegment("") view=OverviewPage/>
                    <Route path=StaticSegment("all-plants") view=DashboardAllPlantsPage/>
                    <Route path=StaticSegment("add-plant") view=AddPlantPage/>
                    <Route path=StaticSegment("my-plants") view=MyPlantsPage/>
                    <Route path=StaticSegment("user-profile") view=UserProfilePage/>
                    <Route path=(StaticSegment("update-plant"), ParamSegment("id")) view=UpdatePlantPage/>
                    <Route path=(StaticSegment("plant-details"), ParamSegment("id")) view=PlantDetailsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Navbar and footer around the public pages.
#[component]
fn PublicLayout() -> impl IntoView {
    view! {
        <div class="site">
            <Navbar/>
            <main class="site__main">
                <Outlet/>
            </main>
            <Footer/>
        </div>
    }
}

/// Keeps the document title in step with the current route.
#[component]
fn RouteTitle() -> impl IntoView {
    let location = use_location();
    let title = move || format!("{} | PlantCare", resolve(&location.pathname.get()).title());
    view! { <Title text=title/> }
}
