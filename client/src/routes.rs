//! Route table: every path the app serves.
//!
//! DESIGN
//! ======
//! `app::App` declares the same paths to `leptos_router`, which does the
//! actual matching. `resolve` mirrors that table for page titles, active nav
//! links and tests; anything unmatched is `NotFound`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    Signup,
    About,
    Contact,
    Support,
    AllPlants,
    AuthCallback,
    Dashboard,
    DashboardAllPlants,
    AddPlant,
    MyPlants,
    UserProfile,
    UpdatePlant(String),
    PlantDetails(String),
    NotFound,
}

impl AppRoute {
    /// Path pattern, with `:id` for parameterized routes.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Support => "/support",
            Self::AllPlants => "/all-plants",
            Self::AuthCallback => "/auth/callback",
            Self::Dashboard => "/dashboard",
            Self::DashboardAllPlants => "/dashboard/all-plants",
            Self::AddPlant => "/dashboard/add-plant",
            Self::MyPlants => "/dashboard/my-plants",
            Self::UserProfile => "/dashboard/user-profile",
            Self::UpdatePlant(_) => "/dashboard/update-plant/:id",
            Self::PlantDetails(_) => "/dashboard/plant-details/:id",
            Self::NotFound => "/404",
        }
    }

    /// Concrete link target.
    pub fn href(&self) -> String {
        match self {
            Self::UpdatePlant(id) => format!("/dashboard/update-plant/{}", urlencoding::encode(id)),
            Self::PlantDetails(id) => format!("/dashboard/plant-details/{}", urlencoding::encode(id)),
            other => other.path().to_owned(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::Signup => "Sign Up",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Support => "Support",
            Self::AllPlants | Self::DashboardAllPlants => "All Plants",
            Self::AuthCallback => "Signing in",
            Self::Dashboard => "Dashboard",
            Self::AddPlant => "Add Plant",
            Self::MyPlants => "My Plants",
            Self::UserProfile => "Profile",
            Self::UpdatePlant(_) => "Update Plant",
            Self::PlantDetails(_) => "Plant Details",
            Self::NotFound => "Not Found",
        }
    }

    /// Whether the route sits behind the session guard.
    pub fn is_guarded(&self) -> bool {
        matches!(
            self,
            Self::Dashboard
                | Self::DashboardAllPlants
                | Self::AddPlant
                | Self::MyPlants
                | Self::UserProfile
                | Self::UpdatePlant(_)
                | Self::PlantDetails(_)
        )
    }
}

/// Map a URL path (query and fragment ignored) to its route.
pub fn resolve(path: &str) -> AppRoute {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let param = |raw: &str| urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), |v| v.into_owned());

    match segments.as_slice() {
        [] => AppRoute::Home,
        ["login"] => AppRoute::Login,
        ["signup"] => AppRoute::Signup,
        ["about"] => AppRoute::About,
        ["contact"] => AppRoute::Contact,
        ["support"] => AppRoute::Support,
        ["all-plants"] => AppRoute::AllPlants,
        ["auth", "callback"] => AppRoute::AuthCallback,
        ["dashboard"] => AppRoute::Dashboard,
        ["dashboard", "all-plants"] => AppRoute::DashboardAllPlants,
        ["dashboard", "add-plant"] => AppRoute::AddPlant,
        ["dashboard", "my-plants"] => AppRoute::MyPlants,
        ["dashboard", "user-profile"] => AppRoute::UserProfile,
        ["dashboard", "update-plant", id] => AppRoute::UpdatePlant(param(id)),
        ["dashboard", "plant-details", id] => AppRoute::PlantDetails(param(id)),
        _ => AppRoute::NotFound,
    }
}
