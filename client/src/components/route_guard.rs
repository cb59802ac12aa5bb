//! Session gate for the dashboard subtree.
//!
//! DESIGN
//! ======
//! The decision is a `Memo` over the session signal, so identity changes that
//! leave the decision unchanged (e.g. a profile update) do not rebuild the
//! protected subtree.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::state::session::Session;
use crate::util::auth::{GuardDecision, guard_decision};

/// Render `children` only for a signed-in user.
///
/// Shows a neutral placeholder while the initial identity check runs and
/// replaces the attempted navigation with the login page once it resolves
/// to signed out.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let decision = Memo::new(move |_| session.with(guard_decision));

    move || match decision.get() {
        GuardDecision::Pending => view! {
            <div class="route-guard__pending" aria-busy="true">
                <span class="spinner"></span>
            </div>
        }
        .into_any(),
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Redirect(path) => {
            log::info!("guard: no session, redirecting to {path}");
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=path options/> }.into_any()
        }
    }
}
