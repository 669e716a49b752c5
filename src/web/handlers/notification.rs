//! Notification handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::auth::require_admin;
use crate::db::User;
use crate::notification::{Notification, NotificationRepository};
use crate::web::dto::{ApiResponse, NotificationInfo, NotificationListQuery};
use crate::web::error::ApiError;
use crate::web::middleware::CurrentUser;

use super::AppState;

fn ensure_can_modify(notification: &Notification, user: &User) -> Result<(), ApiError> {
    if notification.is_owned_by(user.id) || user.is_admin() {
        return Ok(());
    }
    Err(ApiError::forbidden(
        "You can only modify your own notifications",
    ))
}

/// GET /api/notifications - List notifications for the current user.
///
/// Broadcasts are included. `?unread=true` filters to unread ones;
/// `?all=true` lists every user's notifications and is admin only.
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<NotificationListQuery>,
) -> Result<Json<ApiResponse<Vec<NotificationInfo>>>, ApiError> {
    let repo = NotificationRepository::new(state.db.pool());

    let notifications = if query.all {
        require_admin(&user)?;
        repo.list_all().await?
    } else {
        repo.list_for(user.id, query.unread).await?
    };

    let infos: Vec<NotificationInfo> = notifications.iter().map(NotificationInfo::from).collect();
    Ok(Json(ApiResponse::new(infos)))
}

/// PUT /api/notifications/:id/read - Mark a notification as read.
///
/// Owners and admins only. Marking a broadcast read flips its global
/// flag, so that is reserved for admins.
pub async fn mark_read(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<NotificationInfo>>, ApiError> {
    let repo = NotificationRepository::new(state.db.pool());

    let notification = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Notification not found"))?;
    ensure_can_modify(&notification, &user)?;

    repo.mark_read(id).await?;

    let updated = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Notification not found"))?;
    Ok(Json(ApiResponse::new(NotificationInfo::from(&updated))))
}

/// PUT /api/notifications/read-all - Mark all own notifications as read.
///
/// Broadcasts are untouched; only rows addressed to the current user
/// are affected. Returns the number of rows marked.
pub async fn mark_all_read(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ApiResponse<u64>>, ApiError> {
    let count = NotificationRepository::new(state.db.pool())
        .mark_all_read(user.id)
        .await?;

    Ok(Json(ApiResponse::new(count)))
}

/// DELETE /api/notifications/:id - Delete a notification.
///
/// Owners and admins only.
pub async fn delete_notification(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let repo = NotificationRepository::new(state.db.pool());

    let notification = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Notification not found"))?;
    ensure_can_modify(&notification, &user)?;

    repo.delete(id).await?;
    Ok(Json(ApiResponse::new(())))
}

/// DELETE /api/notifications - Delete all own notifications.
///
/// Broadcasts are untouched. Returns the number of rows deleted.
pub async fn delete_all_notifications(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ApiResponse<u64>>, ApiError> {
    let count = NotificationRepository::new(state.db.pool())
        .delete_all_for(user.id)
        .await?;

    Ok(Json(ApiResponse::new(count)))
}
