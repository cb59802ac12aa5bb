use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;

#[tokio::test]
async fn healthz_returns_ok_with_empty_body() {
    let app: Router = api_routes();

    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}

#[tokio::test]
async fn api_routes_alone_do_not_match_app_paths() {
    let app: Router = api_routes();

    let response = app
        .oneshot(Request::builder().uri("/nonexistent").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unmatched_path_renders_not_found_page_with_404() {
    let site_root = tempfile::tempdir().unwrap();
    let options = LeptosOptions::builder()
        .output_name("plantcare")
        .site_root(site_root.path().to_string_lossy().to_string())
        .build();

    let response = app(options)
        .oneshot(Request::builder().uri("/nonexistent").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("not-found"), "missing not-found markup: {html}");
    assert!(html.contains("Back to home"));
}
