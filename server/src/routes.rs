//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the health check, the compiled WASM/CSS bundle
//! under `/pkg`, and every app route rendered through Leptos SSR. Anything
//! else falls through to static files, then to the app's not-found page.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use plantcare_client::app::{App, shell};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Routes that do not go through Leptos.
fn api_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/healthz", get(healthz))
}

/// Full application router.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    api_routes()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
