//! Web API notification tests.
//!
//! Integration tests for listing, reading, and deleting notifications,
//! including broadcast visibility and ownership checks.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{admin_token, create_test_server, login_token, register_student};
use mentora::notification::{NewNotification, NotificationKind, NotificationRepository};
use mentora::Database;

/// Seed a direct notification for a user, returning its id.
async fn seed_notification(db: &Database, user_id: i64, message: &str) -> i64 {
    NotificationRepository::new(db.pool())
        .create(&NewNotification::to_user(
            user_id,
            NotificationKind::Announcement,
            message,
        ))
        .await
        .unwrap()
        .id
}

/// Seed a broadcast notification, returning its id.
async fn seed_broadcast(db: &Database, message: &str) -> i64 {
    NotificationRepository::new(db.pool())
        .create(&NewNotification::broadcast(
            NotificationKind::Announcement,
            message,
        ))
        .await
        .unwrap()
        .id
}

async fn student(server: &axum_test::TestServer, name: &str, email: &str) -> (i64, String) {
    let body = register_student(server, name, email, "password123").await;
    let id = body["data"]["user"]["id"].as_i64().unwrap();
    let token = login_token(server, email, "password123").await;
    (id, token)
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_requires_auth() {
    let (server, _db) = create_test_server().await;

    server
        .get("/api/notifications")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_own_and_broadcast() {
    let (server, db) = create_test_server().await;

    let (asha_id, asha_token) = student(&server, "Asha", "asha@example.com").await;
    let (ravi_id, _ravi_token) = student(&server, "Ravi", "ravi@example.com").await;

    seed_notification(&db, asha_id, "for asha").await;
    seed_notification(&db, ravi_id, "for ravi").await;
    seed_broadcast(&db, "maintenance window").await;

    let response = server
        .get("/api/notifications")
        .add_header(AUTHORIZATION, format!("Bearer {}", asha_token))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 2);
    let messages: Vec<&str> = list.iter().map(|n| n["message"].as_str().unwrap()).collect();
    assert!(messages.contains(&"for asha"));
    assert!(messages.contains(&"maintenance window"));
    assert!(!messages.contains(&"for ravi"));
}

#[tokio::test]
async fn test_list_unread_filter() {
    let (server, db) = create_test_server().await;

    let (asha_id, asha_token) = student(&server, "Asha", "asha@example.com").await;

    let read_id = seed_notification(&db, asha_id, "already read").await;
    seed_notification(&db, asha_id, "still unread").await;
    NotificationRepository::new(db.pool())
        .mark_read(read_id)
        .await
        .unwrap();

    let response = server
        .get("/api/notifications?unread=true")
        .add_header(AUTHORIZATION, format!("Bearer {}", asha_token))
        .await;

    let body: Value = response.json();
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["message"], "still unread");
}

#[tokio::test]
async fn test_list_all_is_admin_only() {
    let (server, db) = create_test_server().await;

    let (asha_id, asha_token) = student(&server, "Asha", "asha@example.com").await;
    let (ravi_id, _) = student(&server, "Ravi", "ravi@example.com").await;
    seed_notification(&db, asha_id, "for asha").await;
    seed_notification(&db, ravi_id, "for ravi").await;

    // Students cannot list everyone's notifications
    server
        .get("/api/notifications?all=true")
        .add_header(AUTHORIZATION, format!("Bearer {}", asha_token))
        .await
        .assert_status(StatusCode::FORBIDDEN);

    // Admins can
    let token = admin_token(&server, &db).await;
    let response = server
        .get("/api/notifications?all=true")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

// ============================================================================
// Mark read
// ============================================================================

#[tokio::test]
async fn test_mark_read_own() {
    let (server, db) = create_test_server().await;

    let (asha_id, asha_token) = student(&server, "Asha", "asha@example.com").await;
    let id = seed_notification(&db, asha_id, "hello").await;

    let response = server
        .put(&format!("/api/notifications/{}/read", id))
        .add_header(AUTHORIZATION, format!("Bearer {}", asha_token))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["is_read"], true);
    assert!(body["data"]["read_at"].is_string());
}

#[tokio::test]
async fn test_mark_read_foreign_is_forbidden() {
    let (server, db) = create_test_server().await;

    let (asha_id, _asha_token) = student(&server, "Asha", "asha@example.com").await;
    let (_ravi_id, ravi_token) = student(&server, "Ravi", "ravi@example.com").await;
    let id = seed_notification(&db, asha_id, "asha's").await;

    let response = server
        .put(&format!("/api/notifications/{}/read", id))
        .add_header(AUTHORIZATION, format!("Bearer {}", ravi_token))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["error"], "You can only modify your own notifications");
}

#[tokio::test]
async fn test_mark_read_broadcast_is_admin_only() {
    let (server, db) = create_test_server().await;

    let (_asha_id, asha_token) = student(&server, "Asha", "asha@example.com").await;
    let id = seed_broadcast(&db, "maintenance").await;

    // The read flag on a broadcast is global, so students cannot flip it
    server
        .put(&format!("/api/notifications/{}/read", id))
        .add_header(AUTHORIZATION, format!("Bearer {}", asha_token))
        .await
        .assert_status(StatusCode::FORBIDDEN);

    let token = admin_token(&server, &db).await;
    server
        .put(&format!("/api/notifications/{}/read", id))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_mark_read_unknown_id() {
    let (server, _db) = create_test_server().await;

    let (_id, token) = student(&server, "Asha", "asha@example.com").await;

    let response = server
        .put("/api/notifications/9999/read")
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Notification not found");
}

#[tokio::test]
async fn test_read_all_marks_own_rows_only() {
    let (server, db) = create_test_server().await;

    let (asha_id, asha_token) = student(&server, "Asha", "asha@example.com").await;
    let (ravi_id, ravi_token) = student(&server, "Ravi", "ravi@example.com").await;

    seed_notification(&db, asha_id, "a1").await;
    seed_notification(&db, asha_id, "a2").await;
    seed_notification(&db, ravi_id, "r1").await;
    seed_broadcast(&db, "broadcast").await;

    let response = server
        .put("/api/notifications/read-all")
        .add_header(AUTHORIZATION, format!("Bearer {}", asha_token))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"], 2);

    // Ravi's row and the broadcast are untouched
    let ravi_list: Value = server
        .get("/api/notifications?unread=true")
        .add_header(AUTHORIZATION, format!("Bearer {}", ravi_token))
        .await
        .json();
    assert_eq!(ravi_list["data"].as_array().unwrap().len(), 2);
}

// ============================================================================
// Deletion
// ============================================================================

#[tokio::test]
async fn test_delete_own_notification() {
    let (server, db) = create_test_server().await;

    let (asha_id, asha_token) = student(&server, "Asha", "asha@example.com").await;
    let id = seed_notification(&db, asha_id, "to delete").await;

    server
        .delete(&format!("/api/notifications/{}", id))
        .add_header(AUTHORIZATION, format!("Bearer {}", asha_token))
        .await
        .assert_status_ok();

    let list: Value = server
        .get("/api/notifications")
        .add_header(AUTHORIZATION, format!("Bearer {}", asha_token))
        .await
        .json();
    assert_eq!(list["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_delete_foreign_is_forbidden() {
    let (server, db) = create_test_server().await;

    let (asha_id, _) = student(&server, "Asha", "asha@example.com").await;
    let (_ravi_id, ravi_token) = student(&server, "Ravi", "ravi@example.com").await;
    let id = seed_notification(&db, asha_id, "asha's").await;

    server
        .delete(&format!("/api/notifications/{}", id))
        .add_header(AUTHORIZATION, format!("Bearer {}", ravi_token))
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_can_delete_any() {
    let (server, db) = create_test_server().await;

    let (asha_id, _) = student(&server, "Asha", "asha@example.com").await;
    let id = seed_notification(&db, asha_id, "moderated away").await;

    let token = admin_token(&server, &db).await;
    server
        .delete(&format!("/api/notifications/{}", id))
        .add_header(AUTHORIZATION, format!("Bearer {}", token))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_delete_all_spares_broadcasts() {
    let (server, db) = create_test_server().await;

    let (asha_id, asha_token) = student(&server, "Asha", "asha@example.com").await;
    seed_notification(&db, asha_id, "a1").await;
    seed_notification(&db, asha_id, "a2").await;
    seed_broadcast(&db, "broadcast").await;

    let response = server
        .delete("/api/notifications")
        .add_header(AUTHORIZATION, format!("Bearer {}", asha_token))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"], 2);

    let list: Value = server
        .get("/api/notifications")
        .add_header(AUTHORIZATION, format!("Bearer {}", asha_token))
        .await
        .json();
    let remaining = list["data"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["message"], "broadcast");
}

// Notification payload shape sanity check
#[tokio::test]
async fn test_notification_payload_shape() {
    let (server, db) = create_test_server().await;

    let (asha_id, asha_token) = student(&server, "Asha", "asha@example.com").await;
    seed_notification(&db, asha_id, "shape").await;

    let body: Value = server
        .get("/api/notifications")
        .add_header(AUTHORIZATION, format!("Bearer {}", asha_token))
        .await
        .json();

    let n = &body["data"][0];
    assert!(n["id"].is_i64());
    assert_eq!(n["user_id"], json!(asha_id));
    assert_eq!(n["kind"], "announcement");
    assert_eq!(n["is_read"], false);
    assert!(n["created_at"].is_string());
    assert!(n.get("read_at").is_none());
}
