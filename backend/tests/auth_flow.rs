//! End-to-end tests for the signup/login/dashboard flow.
//!
//! These tests drive the full router in process with `tower::ServiceExt`;
//! no network listener or external store is involved.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{json, Value};
use tower::ServiceExt;

use authgate::auth::{AppState, AuthService, Claims, TokenKeys};
use authgate::database::queries::MemoryCredentialStore;

const TEST_SECRET: &[u8] = b"integration-test-secret-0123456789abcdef";
// Minimum bcrypt cost keeps the suite fast.
const TEST_BCRYPT_COST: u32 = 4;

fn test_app() -> Router {
    let store = Arc::new(MemoryCredentialStore::new());
    let state = AppState {
        service: AuthService::new(store),
        tokens: Arc::new(TokenKeys::new(TEST_SECRET, 3600)),
        bcrypt_cost: TEST_BCRYPT_COST,
    };
    authgate::app(state)
}

async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get_with_auth(app: &Router, path: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn decode_claims(token: &str) -> Claims {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    decode::<Claims>(token, &DecodingKey::from_secret(TEST_SECRET), &validation)
        .unwrap()
        .claims
}

#[tokio::test]
async fn signup_returns_token_with_normalized_email() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/auth/signup",
        json!({"email": "  New.User@Example.COM ", "password": "pw1"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Account created successfully"));

    let claims = decode_claims(body["token"].as_str().unwrap());
    assert_eq!(claims.email, "new.user@example.com");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn signup_duplicate_email_is_rejected_case_insensitively() {
    let app = test_app();

    let (status, _) = post_json(
        &app,
        "/auth/signup",
        json!({"email": "A@B.com", "password": "pw1"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_json(
        &app,
        "/auth/signup",
        json!({"email": "a@b.com", "password": "pw2"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Error creating account"));
}

#[tokio::test]
async fn login_succeeds_with_correct_password() {
    let app = test_app();
    post_json(
        &app,
        "/auth/signup",
        json!({"email": "user@example.com", "password": "hunter2"}),
    )
    .await;

    let (status, body) = post_json(
        &app,
        "/auth/login",
        json!({"email": "USER@example.com", "password": "hunter2"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Login successful"));

    let claims = decode_claims(body["token"].as_str().unwrap());
    assert_eq!(claims.email, "user@example.com");
}

#[tokio::test]
async fn login_wrong_password_is_unauthorized() {
    let app = test_app();
    post_json(
        &app,
        "/auth/signup",
        json!({"email": "user@example.com", "password": "hunter2"}),
    )
    .await;

    let (status, body) = post_json(
        &app,
        "/auth/login",
        json!({"email": "user@example.com", "password": "wrong"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Invalid credentials"));
}

#[tokio::test]
async fn login_unknown_email_is_not_found() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/auth/login",
        json!({"email": "ghost@nowhere.com", "password": "pw"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("User not found"));
}

#[tokio::test]
async fn dashboard_without_token_is_forbidden() {
    let app = test_app();

    let (status, body) = get_with_auth(&app, "/auth/dashboard", None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], json!("No token provided"));
}

#[tokio::test]
async fn dashboard_with_garbage_token_is_unauthorized() {
    let app = test_app();

    let (status, body) = get_with_auth(&app, "/auth/dashboard", Some("not.a.jwt")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], json!("Unauthorized: Invalid token"));
}

#[tokio::test]
async fn dashboard_round_trips_identity_from_signup_token() {
    let app = test_app();

    let (_, body) = post_json(
        &app,
        "/auth/signup",
        json!({"email": "dash@example.com", "password": "pw"}),
    )
    .await;
    let token = body["token"].as_str().unwrap().to_owned();
    let issued = decode_claims(&token);

    let (status, body) = get_with_auth(&app, "/auth/dashboard", Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["message"],
        json!("Welcome to your dashboard, dash@example.com")
    );
    // Same {id, email} pair that was encoded at issuance.
    assert_eq!(body["user"]["id"], json!(issued.id));
    assert_eq!(body["user"]["email"], json!(issued.email));
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let app = test_app();
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        id: "principal-1".to_string(),
        email: "late@example.com".to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap();

    let (status, body) = get_with_auth(&app, "/auth/dashboard", Some(&token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], json!("Unauthorized: Invalid token"));
}

#[tokio::test]
async fn missing_fields_are_bad_request() {
    let app = test_app();

    // Absent field fails JSON extraction.
    let (status, body) = post_json(&app, "/auth/signup", json!({"email": "x@y.com"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));

    // Present but empty field fails presence validation.
    let (status, body) = post_json(
        &app,
        "/auth/login",
        json!({"email": "x@y.com", "password": "  "}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Missing required field: password"));
}

#[tokio::test]
async fn logout_always_succeeds() {
    let app = test_app();

    let (status, body) = post_json(&app, "/auth/logout", Value::Null).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
}
