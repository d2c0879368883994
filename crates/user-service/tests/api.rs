use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use user_service::config::{AppConfig, DatabaseConfig};
use user_service::db::{apply_migrations, create_pool, DbPool};
use user_service::router::build_router;
use user_service::state::AppState;
use user_service::template::PageRenderer;

struct TestApp {
    router: Router,
    pool: DbPool,
    _dir: tempfile::TempDir,
}

async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let pool = create_pool(&DatabaseConfig::at_path(dir.path().join("site.db")))
        .await
        .unwrap();
    apply_migrations(&pool).await.unwrap();

    let state = AppState::new(
        pool.clone(),
        AppConfig::default(),
        PageRenderer::new().unwrap(),
    );

    TestApp {
        router: build_router(state),
        pool,
        _dir: dir,
    }
}

async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn user_count(pool: &DbPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn list_users_starts_empty() {
    let app = spawn_app().await;

    let (status, body) = send(&app, get("/api/users")).await;

    assert_eq!(status, StatusCode::OK);
    let users: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(users, json!([]));
}

#[tokio::test]
async fn created_user_appears_in_list() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        post_json("/api/users", r#"{"username":"alice","email":"a@x.com"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(created, json!({"message": "User created successfully"}));

    let (status, body) = send(&app, get("/api/users")).await;
    assert_eq!(status, StatusCode::OK);
    let users: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        users,
        json!([{"id": 1, "username": "alice", "email": "a@x.com"}])
    );
}

#[tokio::test]
async fn users_are_listed_in_creation_order() {
    let app = spawn_app().await;

    for (username, email) in [("alice", "a@x.com"), ("bob", "b@x.com"), ("alice", "a@x.com")] {
        let body = json!({"username": username, "email": email}).to_string();
        let (status, _) = send(&app, post_json("/api/users", &body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = send(&app, get("/api/users")).await;
    let users: Vec<Value> = serde_json::from_slice(&body).unwrap();
    let ids: Vec<i64> = users.iter().map(|u| u["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(users[2]["username"], "alice");
}

#[tokio::test]
async fn missing_fields_are_rejected_without_writing() {
    let app = spawn_app().await;

    for body in [
        r#"{"username":"alice"}"#,
        r#"{"email":"a@x.com"}"#,
        r#"{"username":"alice","email":null}"#,
        r#"{}"#,
    ] {
        let (status, response) = send(&app, post_json("/api/users", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");

        let error: Value = serde_json::from_slice(&response).unwrap();
        assert_eq!(error["status"], 400);
        assert!(error["error"].as_str().unwrap().contains("Missing required field"));
    }

    assert_eq!(user_count(&app.pool).await, 0);
}

#[tokio::test]
async fn malformed_bodies_are_rejected() {
    let app = spawn_app().await;

    let (status, _) = send(&app, post_json("/api/users", "{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        post_json("/api/users", r#"{"username":42,"email":"a@x.com"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .method("POST")
        .uri("/api/users")
        .body(Body::from(r#"{"username":"alice","email":"a@x.com"}"#))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(user_count(&app.pool).await, 0);
}

#[tokio::test]
async fn health_reports_healthy_without_side_effects() {
    let app = spawn_app().await;

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health, json!({"status": "healthy"}));
    assert_eq!(user_count(&app.pool).await, 0);

    app.pool.close().await;

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "healthy");
}

#[tokio::test]
async fn api_health_reflects_database_state() {
    let app = spawn_app().await;

    let (status, body) = send(&app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["database"], "connected");

    app.pool.close().await;

    let (status, body) = send(&app, get("/api/health")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let health: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "unhealthy");
}

#[tokio::test]
async fn storage_failure_is_a_server_error() {
    let app = spawn_app().await;
    app.pool.close().await;

    let (status, body) = send(&app, get("/api/users")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["status"], 500);
}

#[tokio::test]
async fn home_page_is_html() {
    let app = spawn_app().await;

    let response = app.router.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<title>user-service</title>"));
}

#[tokio::test]
async fn page_script_is_served() {
    let app = spawn_app().await;

    let response = app
        .router
        .clone()
        .oneshot(get("/static/script.js"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/javascript"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = spawn_app().await;

    let (status, _) = send(&app, get("/api/unknown")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
