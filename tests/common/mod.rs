//! Common test utilities
//!
//! Builds a fully wired test server over the in-memory credential store,
//! a wiremock model service, and a temporary photos directory.

use std::path::Path;
use std::sync::Arc;

use axum_test::TestServer;
use serde_json::json;

use memora::auth::store::MemoryUserStore;
use memora::model::client::ModelClient;
use memora::routes::router::create_router;
use memora::server::config::AppConfig;
use memora::server::state::AppState;

/// Access-token secret used by test servers
pub const ACCESS_SECRET: &str = "it-access-secret";

/// Refresh-token secret used by test servers
pub const REFRESH_SECRET: &str = "it-refresh-secret";

/// Build a test server against the given model-service URL and photos root
pub fn test_server(model_base_url: &str, photos_dir: &Path) -> TestServer {
    let config = AppConfig {
        database_url: "postgres://unused-in-tests".to_string(),
        access_token_secret: ACCESS_SECRET.to_string(),
        refresh_token_secret: REFRESH_SECRET.to_string(),
        model_api_base_url: model_base_url.to_string(),
        photos_dir: photos_dir.to_path_buf(),
        port: 0,
    };

    let state = AppState {
        store: Arc::new(MemoryUserStore::new()),
        model: ModelClient::new(model_base_url),
        config: Arc::new(config),
    };

    TestServer::new(create_router(state)).unwrap()
}

/// Register a default user and log in, returning the access token
pub async fn register_and_login(server: &TestServer) -> String {
    let response = server
        .post("/auth/register")
        .json(&json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "password": "password123",
            "confirm_password": "password123",
        }))
        .await;
    assert_eq!(response.status_code().as_u16(), 201);

    let response = server
        .post("/auth/login")
        .json(&json!({
            "email": "ada@example.com",
            "password": "password123",
        }))
        .await;
    assert_eq!(response.status_code().as_u16(), 200);

    let body: serde_json::Value = response.json();
    body["token"].as_str().expect("login token").to_string()
}
