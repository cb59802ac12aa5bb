//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, submits, navigation)
//! and delegates rendering details to `components`. Pages under `dashboard`
//! render inside the guarded dashboard layout.

pub mod all_plants;
pub mod auth_callback;
pub mod dashboard;
pub mod home;
pub mod info;
pub mod login;
pub mod not_found;
pub mod signup;

use std::future::Future;

use leptos::prelude::*;

use crate::error::DataFetchError;
use crate::state::plants::LoadState;

/// Run `fetch` in the browser and store its outcome in `state`.
///
/// On the server nothing runs and `state` stays `Loading`, which is also the
/// first state the hydrating client renders.
pub(crate) fn load_into<T, F>(state: RwSignal<LoadState<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, DataFetchError>> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = fetch.await;
        if let Err(e) = &result {
            log::warn!("plant fetch failed: {e}");
        }
        state.try_set(LoadState::from_result(result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, fetch);
    }
}

/// Centered spinner shown while a page's data loads.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading" aria-busy="true">
            <span class="spinner"></span>
        </div>
    }
}
