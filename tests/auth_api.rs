//! Authentication API integration tests
//!
//! Black-box tests for the session lifecycle: registration, login,
//! logout and refresh, driven over HTTP against the assembled router.

mod common;

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

use common::{register_and_login, test_server, ACCESS_SECRET, REFRESH_SECRET};
use memora::auth::tokens::verify_token;

fn register_body(email: &str) -> serde_json::Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": email,
        "password": "password123",
        "confirm_password": "password123",
    })
}

#[tokio::test]
async fn test_register_success() {
    let photos = TempDir::new().unwrap();
    let server = test_server("http://127.0.0.1:9", photos.path());

    let response = server
        .post("/auth/register")
        .json(&register_body("x@x.com"))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], "x@x.com");
    assert_eq!(body["first_name"], "Ada");
    assert_eq!(body["last_name"], "Lovelace");
    // The hash never leaves the server
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let photos = TempDir::new().unwrap();
    let server = test_server("http://127.0.0.1:9", photos.path());

    let first = server
        .post("/auth/register")
        .json(&register_body("x@x.com"))
        .await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = server
        .post("/auth/register")
        .json(&register_body("x@x.com"))
        .await;
    assert_eq!(second.status_code(), StatusCode::CONFLICT);
    let body: serde_json::Value = second.json();
    assert_eq!(body["error"], "User already exists");
}

#[tokio::test]
async fn test_register_missing_field() {
    let photos = TempDir::new().unwrap();
    let server = test_server("http://127.0.0.1:9", photos.path());

    let response = server
        .post("/auth/register")
        .json(&json!({
            "first_name": "Ada",
            "email": "x@x.com",
            "password": "password123",
            "confirm_password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "All fields are required");
}

#[tokio::test]
async fn test_register_password_mismatch() {
    let photos = TempDir::new().unwrap();
    let server = test_server("http://127.0.0.1:9", photos.path());

    let response = server
        .post("/auth/register")
        .json(&json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "x@x.com",
            "password": "password123",
            "confirm_password": "password124",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Passwords do not match");
}

#[tokio::test]
async fn test_login_returns_token_and_sets_refresh_cookie() {
    let photos = TempDir::new().unwrap();
    let server = test_server("http://127.0.0.1:9", photos.path());

    server
        .post("/auth/register")
        .json(&register_body("ada@example.com"))
        .await;

    let response = server
        .post("/auth/login")
        .json(&json!({"email": "ada@example.com", "password": "password123"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    let token = body["token"].as_str().unwrap();
    let claims = verify_token(token, ACCESS_SECRET).unwrap();
    assert_eq!(claims.sub, body["user"]["user_num"].to_string());
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert_eq!(body["user"]["first_name"], "Ada");

    let cookie = response
        .header(SET_COOKIE)
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("refreshToken="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Max-Age=604800"));
}

#[tokio::test]
async fn test_login_enumeration_resistance() {
    let photos = TempDir::new().unwrap();
    let server = test_server("http://127.0.0.1:9", photos.path());

    server
        .post("/auth/register")
        .json(&register_body("real@x.com"))
        .await;

    let unknown = server
        .post("/auth/login")
        .json(&json!({"email": "nonexistent@x.com", "password": "any"}))
        .await;
    let wrong = server
        .post("/auth/login")
        .json(&json!({"email": "real@x.com", "password": "wrongpass"}))
        .await;

    // Identical status and identical body for both failure modes
    assert_eq!(unknown.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status_code(), StatusCode::UNAUTHORIZED);

    let unknown_body: serde_json::Value = unknown.json();
    let wrong_body: serde_json::Value = wrong.json();
    assert_eq!(unknown_body, wrong_body);
    assert_eq!(unknown_body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let photos = TempDir::new().unwrap();
    let server = test_server("http://127.0.0.1:9", photos.path());

    let response = server
        .post("/auth/login")
        .json(&json!({"email": "ada@example.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Email and password required");
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let photos = TempDir::new().unwrap();
    let server = test_server("http://127.0.0.1:9", photos.path());

    // No cookie: no-content success, twice in a row
    let first = server.post("/auth/logout").await;
    assert_eq!(first.status_code(), StatusCode::NO_CONTENT);

    let second = server.post("/auth/logout").await;
    assert_eq!(second.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let photos = TempDir::new().unwrap();
    let server = test_server("http://127.0.0.1:9", photos.path());

    let response = server
        .post("/auth/logout")
        .add_header(COOKIE, HeaderValue::from_static("refreshToken=sometoken"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Logged out successfully");

    let cookie = response.header(SET_COOKIE).to_str().unwrap().to_string();
    assert!(cookie.starts_with("refreshToken=;"));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_refresh_flow() {
    let photos = TempDir::new().unwrap();
    let server = test_server("http://127.0.0.1:9", photos.path());

    server
        .post("/auth/register")
        .json(&register_body("ada@example.com"))
        .await;
    let login = server
        .post("/auth/login")
        .json(&json!({"email": "ada@example.com", "password": "password123"}))
        .await;

    // Pull the refresh token out of the Set-Cookie header
    let set_cookie = login.header(SET_COOKIE).to_str().unwrap().to_string();
    let refresh_token = set_cookie
        .strip_prefix("refreshToken=")
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();
    let claims = verify_token(&refresh_token, REFRESH_SECRET).unwrap();

    let response = server
        .get("/auth/refresh")
        .add_header(
            COOKIE,
            HeaderValue::from_str(&format!("refreshToken={}", refresh_token)).unwrap(),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let access_token = body["accessToken"].as_str().unwrap();
    let access_claims = verify_token(access_token, ACCESS_SECRET).unwrap();
    assert_eq!(access_claims.sub, claims.sub);
}

#[tokio::test]
async fn test_refresh_without_cookie() {
    let photos = TempDir::new().unwrap();
    let server = test_server("http://127.0.0.1:9", photos.path());

    let response = server.get("/auth/refresh").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_with_invalid_token() {
    let photos = TempDir::new().unwrap();
    let server = test_server("http://127.0.0.1:9", photos.path());

    let response = server
        .get("/auth/refresh")
        .add_header(COOKIE, HeaderValue::from_static("refreshToken=garbage"))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_access_token_usable_against_model_routes() {
    // End-to-end: the token from login passes the access guard (the
    // request then fails validation, which proves it got through).
    let photos = TempDir::new().unwrap();
    let server = test_server("http://127.0.0.1:9", photos.path());

    let token = register_and_login(&server).await;

    let response = server
        .post("/model/query")
        .add_header(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        )
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
