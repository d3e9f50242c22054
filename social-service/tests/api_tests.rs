mod common;

use auth::Claims;
use common::TestApp;
use reqwest::header::AUTHORIZATION;
use reqwest::header::WWW_AUTHENTICATE;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app.register("alice@example.com", "pass_word!").await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["data"]["detail"], "User created.");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    app.register("alice@example.com", "pass_word!").await;
    let response = app.register("alice@example.com", "other_pass").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["data"]["message"],
        "A user with that email already exists"
    );
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app.register("not-an-email", "pass_word!").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    app.register("alice@example.com", "pass_word!").await;

    let response = app
        .post("/api/token")
        .json(&json!({
            "email": "alice@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["token_type"], "bearer");
    assert_eq!(body["data"]["expires_in"], 1800);
    assert!(body["data"]["access_token"].is_string());
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_alike() {
    let app = TestApp::spawn().await;

    app.register("alice@example.com", "pass_word!").await;

    let mut messages = Vec::new();
    for (email, password) in [
        ("alice@example.com", "wrong"),
        ("nobody@example.com", "pass_word!"),
    ] {
        let response = app
            .post("/api/token")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[WWW_AUTHENTICATE], "Bearer");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        messages.push(body["data"]["message"].clone());
    }

    assert_eq!(messages[0], "Incorrect email or password");
    assert_eq!(messages[0], messages[1]);
}

#[tokio::test]
async fn test_current_user() {
    let app = TestApp::spawn().await;

    let token = app
        .register_and_login("alice@example.com", "pass_word!")
        .await;

    let response = app
        .get_authenticated("/api/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["email"], "alice@example.com");
    assert!(body["data"]["id"].is_i64());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_current_user_with_lowercase_scheme() {
    let app = TestApp::spawn().await;

    let token = app
        .register_and_login("alice@example.com", "pass_word!")
        .await;

    let response = app
        .get("/api/users/me")
        .header(AUTHORIZATION, format!("bearer {token}"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_current_user_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/users/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()[WWW_AUTHENTICATE], "Bearer");
}

#[tokio::test]
async fn test_expired_token_is_reported_as_expired() {
    let app = TestApp::spawn_with_ttl(-1).await;

    let token = app
        .register_and_login("alice@example.com", "pass_word!")
        .await;

    let response = app
        .get_authenticated("/api/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Token has expired");
}

#[tokio::test]
async fn test_invalid_tokens_share_generic_message() {
    let app = TestApp::spawn().await;

    app.register("alice@example.com", "pass_word!").await;

    let handler = app.services.jwt_handler();
    let unknown_subject = handler
        .encode(&Claims::for_subject(
            "ghost@example.com",
            chrono::Duration::minutes(5),
        )
        .unwrap())
        .unwrap();
    let no_subject = handler
        .encode(&Claims::new().with_expiration(chrono::Utc::now().timestamp() + 300))
        .unwrap();

    for token in ["garbage", unknown_subject.as_str(), no_subject.as_str()] {
        let response = app
            .get_authenticated("/api/users/me", token)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["data"]["message"], "Could not validate credentials");
    }
}

#[tokio::test]
async fn test_create_post_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/posts")
        .json(&json!({ "body": "Hello" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_post_comment_and_like_flow() {
    let app = TestApp::spawn().await;

    let token = app
        .register_and_login("alice@example.com", "pass_word!")
        .await;

    let response = app
        .post_authenticated("/api/posts", &token)
        .json(&json!({ "body": "Hello" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let post_id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["body"], "Hello");

    let response = app
        .post_authenticated("/api/comments", &token)
        .json(&json!({ "body": "First", "post_id": post_id }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .post_authenticated("/api/like", &token)
        .json(&json!({ "post_id": post_id }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .get(&format!("/api/posts/{post_id}"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["post"]["likes"], 1);
    assert_eq!(body["data"]["comments"][0]["body"], "First");

    let response = app
        .get("/api/posts")
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let response = app
        .get(&format!("/api/posts/{post_id}/comments"))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"][0]["post_id"], post_id);
}

#[tokio::test]
async fn test_missing_post() {
    let app = TestApp::spawn().await;

    let token = app
        .register_and_login("alice@example.com", "pass_word!")
        .await;

    let response = app
        .get("/api/posts/999")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .post_authenticated("/api/comments", &token)
        .json(&json!({ "body": "Orphan", "post_id": 999 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Post not found");
}
