use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use posts_api::{AppState, Config, app};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_app() -> Router {
    app(AppState::new(Config::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn create(app: &Router, content: &str) -> String {
    let (status, post) =
        send(app, Method::POST, "/posts", Some(json!({ "content": content }))).await;
    assert_eq!(status, StatusCode::OK);
    post["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn post_comment_like_round_trip() {
    let app = test_app();
    let id = create(&app, "hello").await;

    let (status, post) = send(&app, Method::GET, &format!("/posts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["content"], "hello");
    assert_eq!(post["likes"], 0);

    let (status, comment) = send(
        &app,
        Method::POST,
        &format!("/posts/{id}/comments"),
        Some(json!({ "content": "nice" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comment["content"], "nice");
    assert!(comment["id"].as_str().is_some_and(|s| !s.is_empty()));

    let (_, post) = send(&app, Method::GET, &format!("/posts/{id}"), None).await;
    assert_eq!(post["comments"].as_array().unwrap().len(), 1);
    assert_eq!(post["comments"][0]["content"], "nice");

    for _ in 0..2 {
        let (status, _) = send(&app, Method::POST, &format!("/posts/{id}/like"), None).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (_, post) = send(&app, Method::GET, &format!("/posts/{id}"), None).await;
    assert_eq!(post["likes"], 2);
    assert_eq!(post["dislikes"], 0);
}

#[tokio::test]
async fn created_post_has_wire_shape() {
    let app = test_app();
    let (status, post) = send(
        &app,
        Method::POST,
        "/posts",
        Some(json!({ "content": "shape", "id": "client-chosen", "likes": 9 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_ne!(post["id"], "client-chosen");
    assert_eq!(post["comments"], json!([]));
    assert_eq!(post["likes"], 0);
    assert_eq!(post["dislikes"], 0);
    let created_at = post["created_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn dislike_returns_updated_post() {
    let app = test_app();
    let id = create(&app, "meh").await;

    let (status, post) = send(&app, Method::POST, &format!("/posts/{id}/dislike"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["dislikes"], 1);
    assert_eq!(post["likes"], 0);
}

#[tokio::test]
async fn share_link_uses_configured_base() {
    let app = test_app();
    let id = create(&app, "share me").await;

    let (status, body) = send(&app, Method::GET, &format!("/posts/{id}/share"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["shareable_link"],
        format!("http://localhost:8000/post/{id}")
    );
}

#[tokio::test]
async fn invalid_posts_are_bad_requests() {
    let app = test_app();

    let (status, body) = send(&app, Method::POST, "/posts", Some(json!({ "content": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Validation failed"));

    let too_long = "x".repeat(501);
    let (status, _) =
        send(&app, Method::POST, "/posts", Some(json!({ "content": too_long }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::POST,
        "/posts",
        Some(json!({ "text": "wrong field" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request payload");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/posts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, health) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["posts"], 0);
}

#[tokio::test]
async fn unknown_posts_are_not_found() {
    let app = test_app();

    for (method, uri) in [
        (Method::GET, "/posts/missing"),
        (Method::POST, "/posts/missing/like"),
        (Method::POST, "/posts/missing/dislike"),
        (Method::GET, "/posts/missing/share"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "Post not found");
    }

    let (status, _) = send(
        &app,
        Method::POST,
        "/posts/missing/comments",
        Some(json!({ "content": "hello?" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::POST, "/posts/missing/comments", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, health) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(health["posts"], 0);
}

#[tokio::test]
async fn invalid_comment_is_bad_request() {
    let app = test_app();
    let id = create(&app, "hello").await;

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/posts/{id}/comments"),
        Some(json!({ "content": "c".repeat(301) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, post) = send(&app, Method::GET, &format!("/posts/{id}"), None).await;
    assert_eq!(post["comments"], json!([]));
}

#[tokio::test]
async fn unmatched_routes_use_framework_defaults() {
    let app = test_app();

    let (status, _) = send(&app, Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/posts/abc", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(&app, Method::GET, "/posts/abc/like", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn concurrent_likes_over_http() {
    let app = test_app();
    let id = create(&app, "popular").await;

    let tasks: Vec<_> = (0..50)
        .map(|_| {
            let app = app.clone();
            let uri = format!("/posts/{id}/like");
            tokio::spawn(async move { send(&app, Method::POST, &uri, None).await.0 })
        })
        .collect();
    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::OK);
    }

    let (_, post) = send(&app, Method::GET, &format!("/posts/{id}"), None).await;
    assert_eq!(post["likes"], 50);
}
