use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

#[tokio::test]
async fn healthz_returns_ok() {
    let response = service_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_service_route_is_not_found() {
    let response = service_routes()
        .oneshot(Request::builder().uri("/api/nothing").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn config_error_message() {
    let err = RouterError::Config("missing output-name".to_owned());
    assert_eq!(err.to_string(), "leptos configuration: missing output-name");
}
