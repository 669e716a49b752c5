//! Shared helpers for Web API integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use mentora::db::{NewUser, Role, UserRepository};
use mentora::hash_password;
use mentora::web::handlers::AppState;
use mentora::web::router::{create_health_router, create_router};
use mentora::Database;
use serde_json::{json, Value};

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-testing-only";

/// Create a test server backed by an in-memory database.
///
/// The returned Database handle shares the server's pool, so tests can
/// inspect and seed state directly.
pub async fn create_test_server() -> (TestServer, Database) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(AppState::new(db.clone(), TEST_JWT_SECRET, 30));
    let router = create_router(app_state, &[]).merge(create_health_router());

    let server = TestServer::new(router).expect("Failed to create test server");
    (server, db)
}

/// Register a student through the API and return the response body.
pub async fn register_student(server: &TestServer, name: &str, email: &str, password: &str) -> Value {
    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "name": name,
            "email": email,
            "password": password,
            "role": "student"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

/// Register a mentor through the API and return the response body.
pub async fn register_mentor(server: &TestServer, name: &str, email: &str, password: &str) -> Value {
    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "name": name,
            "email": email,
            "password": password,
            "role": "mentor",
            "specializations": "mathematics",
            "experience_years": 4
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

/// Log in and return the full response body.
pub async fn login(server: &TestServer, email: &str, password: &str) -> Value {
    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": email,
            "password": password
        }))
        .await;
    response.json::<Value>()
}

/// Log in and return the bearer token.
pub async fn login_token(server: &TestServer, email: &str, password: &str) -> String {
    let body = login(server, email, password).await;
    body["data"]["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}

/// Seed an admin account directly in the database.
///
/// The registration endpoint refuses the admin role, so tests create
/// admins the way the bootstrap path does.
pub async fn create_admin(db: &Database, email: &str, password: &str) -> i64 {
    let hash = hash_password(password).expect("hash password");
    let admin = UserRepository::new(db.pool())
        .create(&NewUser::new("Admin", email, hash).with_role(Role::Admin))
        .await
        .expect("create admin");
    admin.id
}

/// Seed an admin and return a bearer token for it.
pub async fn admin_token(server: &TestServer, db: &Database) -> String {
    create_admin(db, "admin@example.com", "admin-password").await;
    login_token(server, "admin@example.com", "admin-password").await
}

/// Build an Authorization header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
