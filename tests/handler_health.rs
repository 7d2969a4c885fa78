mod common;

use axum::{
    body::Body,
    http::{HeaderValue, Method, Request, StatusCode, header},
};
use noteful_api::routes::app_router;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test]
async fn test_health_endpoint_success(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[sqlx::test]
async fn test_health_reports_degraded_when_pool_closed(pool: PgPool) {
    let state = common::create_test_state(pool);
    state.db.close().await;

    let app = noteful_api::routes::build_router(state, &["*".to_string()]);
    let server = axum_test::TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}

#[sqlx::test]
async fn test_trailing_slash_is_normalized(pool: PgPool) {
    common::seed_folders(&pool).await;
    let app = app_router(common::create_test_state(pool), &["*".to_string()]);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/folder/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test]
async fn test_cors_preflight_allows_patch(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .method(Method::OPTIONS, "/api/note/1")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("http://localhost:3000"),
        )
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("PATCH"),
        )
        .await;

    response.assert_status_ok();
    let allowed = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(allowed.contains("PATCH"));
}
