//! Full route table driven in-process through `TestClient` (no socket).

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};

use sampleapi_api::app::Directory;
use sampleapi_api::middleware::REQUEST_ID_HEADER;
use sampleapi_api::testing::TestClient;
use sampleapi_core::{Lookup, RecordId};
use sampleapi_posts::Post;
use sampleapi_users::User;

fn client() -> TestClient {
    sampleapi_observability::init_for_tests();
    TestClient::sample()
}

// -------------------------
// Health
// -------------------------

#[tokio::test]
async fn health_and_ready() {
    let client = client();

    let res = client.get("/health").await.unwrap();
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.text(), r#"{"status":"ok","version":"0.1.0"}"#);

    let res = client.get("/health/ready").await.unwrap();
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.text(), r#"{"status":"ready","version":"0.1.0"}"#);
}

// -------------------------
// Users
// -------------------------

#[tokio::test]
async fn list_users_returns_two_samples() {
    let res = client().get("/users").await.unwrap();
    assert_eq!(res.status, StatusCode::OK);

    let users: Vec<User> = res.json().unwrap();
    assert_eq!(
        users,
        vec![
            User::new(1, "Alice", "alice@example.com"),
            User::new(2, "Bob", "bob@example.com"),
        ]
    );
}

#[tokio::test]
async fn get_user_echoes_id() {
    let res = client().get("/users/1").await.unwrap();
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json::<User>().unwrap(),
        User::new(1, "Sample User", "user@example.com")
    );
}

#[tokio::test]
async fn create_user_returns_created_with_location() {
    let res = client()
        .post_json("/users", &json!({ "name": "Alice", "email": "alice@example.com" }))
        .await
        .unwrap();
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.header(header::LOCATION), Some("/users/1"));
    assert_eq!(
        res.json::<User>().unwrap(),
        User::new(1, "Alice", "alice@example.com")
    );
}

#[tokio::test]
async fn create_user_rejects_invalid_bodies() {
    let client = client();
    let cases = [
        (json!({ "name": "", "email": "test@example.com" }), "name", "required"),
        (json!({ "name": "A", "email": "test@example.com" }), "name", "too_short"),
        (json!({ "name": "Test User", "email": "" }), "email", "required"),
        (json!({ "name": "Test User", "email": "not-an-email" }), "email", "invalid_format"),
    ];

    for (body, field, kind) in cases {
        let res = client.post_json("/users", &body).await.unwrap();
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{body}");

        let err: Value = res.json().unwrap();
        assert_eq!(err["error"], "validation_error");
        assert_eq!(err["errors"][0]["field"], field);
        assert_eq!(err["errors"][0]["kind"], kind);
        assert!(err["errors"][0]["message"].as_str().unwrap().contains(field));
    }
}

#[tokio::test]
async fn update_user() {
    let client = client();
    let body = json!({ "name": "Updated Name", "email": "updated@example.com" });

    let res = client.put_json("/users/1", &body).await.unwrap();
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json::<User>().unwrap(),
        User::new(1, "Updated Name", "updated@example.com")
    );

    let res = client.put_json("/users/999", &body).await.unwrap();
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = client
        .put_json("/users/1", &json!({ "name": "", "email": "invalid" }))
        .await
        .unwrap();
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn validation_precedes_not_found() {
    let res = client()
        .put_json("/users/999", &json!({ "name": "", "email": "invalid" }))
        .await
        .unwrap();
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_user() {
    let client = client();

    let res = client.delete("/users/1").await.unwrap();
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert!(res.body.is_empty());

    let res = client.delete("/users/999").await.unwrap();
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

// -------------------------
// Posts
// -------------------------

#[tokio::test]
async fn list_and_get_posts() {
    let client = client();

    let posts: Vec<Post> = client.get("/posts").await.unwrap().json().unwrap();
    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["First Post", "Second Post"]);

    let res = client.get("/posts/1").await.unwrap();
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json::<Post>().unwrap(),
        Post::new(1, 1, "Sample Post", "Post body")
    );

    let res = client.get("/posts/999").await.unwrap();
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_post_accepts_pascal_case_body() {
    let res = client()
        .post_json(
            "/posts",
            &json!({ "UserId": 1, "Title": "New Post", "Body": "Post content" }),
        )
        .await
        .unwrap();
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.header(header::LOCATION), Some("/posts/1"));
    assert_eq!(
        res.json::<Value>().unwrap(),
        json!({ "id": 1, "userId": 1, "title": "New Post", "body": "Post content" })
    );
}

#[tokio::test]
async fn create_post_rejects_invalid_bodies() {
    let client = client();
    let cases = [
        json!({ "userId": 1, "title": "", "body": "Some content" }),
        json!({ "userId": 1, "title": "AB", "body": "Some content" }),
        json!({ "userId": 1, "title": "Valid Title", "body": "" }),
        json!({ "userId": 0, "title": "Valid Title", "body": "Valid body" }),
        json!({ "userId": -1, "title": "Valid Title", "body": "Valid body" }),
        json!({}),
    ];

    for body in cases {
        let res = client.post_json("/posts", &body).await.unwrap();
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{body}");
    }
}

#[tokio::test]
async fn user_posts_are_tagged_with_user() {
    let client = client();

    let res = client.get("/users/7/posts").await.unwrap();
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json::<Vec<Post>>().unwrap(),
        vec![Post::new(1, 7, "User Post", "Content")]
    );

    let res = client.get("/users/999/posts").await.unwrap();
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

// -------------------------
// Routing and decoding
// -------------------------

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let client = client();

    for raw in ["{", "[1,2]", r#"{"userId":"one"}"#] {
        let res = client.post_raw("/posts", raw).await.unwrap();
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{raw}");
        assert_eq!(res.json::<Value>().unwrap()["error"], "malformed_request");
    }
}

#[tokio::test]
async fn missing_content_type_is_bad_request() {
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/users")
        .body(axum::body::Body::from(r#"{"name":"Alice","email":"a@b.c"}"#))
        .unwrap();

    let res = client().request(request).await.unwrap();
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unmatched_routes() {
    let client = client();

    for path in ["/nope", "/users/abc", "/posts/1/comments"] {
        let res = client.get(path).await.unwrap();
        assert_eq!(res.status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(res.json::<Value>().unwrap()["error"], "not_found");
    }

    let res = client.delete("/posts/1").await.unwrap();
    assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn not_found_message_names_the_full_path() {
    let client = client();

    // Overflows i32, so the nested `/users/:id` capture rejects it.
    let res = client.get("/users/99999999999").await.unwrap();
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(
        res.json::<Value>().unwrap()["message"],
        "no route for /users/99999999999"
    );

    let res = client.get("/posts/abc").await.unwrap();
    assert_eq!(res.json::<Value>().unwrap()["message"], "no route for /posts/abc");

    let res = client.get("/nope").await.unwrap();
    assert_eq!(res.json::<Value>().unwrap()["message"], "no route for /nope");
}

// -------------------------
// Request id
// -------------------------

#[tokio::test]
async fn request_id_is_generated_as_uuid_v7() {
    let res = client().get("/health").await.unwrap();
    let id = res.header(REQUEST_ID_HEADER).unwrap();
    assert_eq!(uuid::Uuid::parse_str(id).unwrap().get_version_num(), 7);
}

#[tokio::test]
async fn inbound_request_id_is_kept() {
    let request = Request::builder()
        .uri("/users/999")
        .header("x-request-id", "trace-42")
        .body(Body::empty())
        .unwrap();

    let res = client().request(request).await.unwrap();
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.header(REQUEST_ID_HEADER), Some("trace-42"));
}

#[tokio::test]
async fn repeated_gets_are_byte_identical() {
    let client = client();

    for path in ["/health", "/users", "/users/3", "/posts", "/posts/4", "/users/5/posts"] {
        let first = client.get(path).await.unwrap();
        let second = client.get(path).await.unwrap();
        assert_eq!(first.body, second.body, "{path}");
    }
}

// -------------------------
// Directory injection
// -------------------------

struct EmptyDirectory;

impl Directory for EmptyDirectory {
    fn users(&self) -> Vec<User> {
        Vec::new()
    }

    fn user(&self, _id: RecordId) -> Lookup<User> {
        Lookup::Missing
    }

    fn posts(&self) -> Vec<Post> {
        Vec::new()
    }

    fn post(&self, _id: RecordId) -> Lookup<Post> {
        Lookup::Missing
    }

    fn user_posts(&self, _user_id: RecordId) -> Lookup<Vec<Post>> {
        Lookup::Missing
    }
}

#[tokio::test]
async fn handlers_consult_the_injected_directory() {
    let client = TestClient::with_directory(Arc::new(EmptyDirectory));

    let res = client.get("/users").await.unwrap();
    assert_eq!(res.text(), "[]");

    let res = client.get("/users/1").await.unwrap();
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().unwrap()["message"], "user 1 not found");

    let res = client.delete("/users/1").await.unwrap();
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    // Creates never consult the directory.
    let res = client
        .post_json("/users", &json!({ "name": "Alice", "email": "alice@example.com" }))
        .await
        .unwrap();
    assert_eq!(res.status, StatusCode::CREATED);
}
