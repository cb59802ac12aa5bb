use leptos::prelude::*;

use crate::routes::AppRoute;

/// Fallback for unmatched paths. Server renders answer 404.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p>"The page you are looking for has wilted away."</p>
            <a class="btn" href=AppRoute::Home.path()>"Back to home"</a>
        </div>
    }
}
