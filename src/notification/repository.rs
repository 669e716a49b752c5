//! Notification repository for Mentora.
//!
//! Append-only per-user message log written by workflow transitions and
//! read by polling endpoints. Rows are only ever mutated to flip the
//! read flag.

use sqlx::SqlitePool;

use super::types::{NewNotification, Notification};
use crate::{MentoraError, Result};

const NOTIFICATION_COLUMNS: &str = "id, user_id, kind, message, is_read, created_at, read_at";

/// Repository for notification operations.
pub struct NotificationRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> NotificationRepository<'a> {
    /// Create a new NotificationRepository with the given pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a new notification. Created unread.
    pub async fn create(&self, new: &NewNotification) -> Result<Notification> {
        let result = sqlx::query("INSERT INTO notifications (user_id, kind, message) VALUES (?, ?, ?)")
            .bind(new.user_id)
            .bind(new.kind.as_str())
            .bind(&new.message)
            .execute(self.pool)
            .await
            .map_err(|e| MentoraError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| MentoraError::NotFound("notification".to_string()))
    }

    /// Get a notification by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Notification>> {
        let sql = format!("SELECT {NOTIFICATION_COLUMNS} FROM notifications WHERE id = ?");
        let result = sqlx::query_as::<_, Notification>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| MentoraError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List notifications visible to a user, newest first.
    ///
    /// Includes the user's own notifications and broadcasts (NULL target).
    pub async fn list_for(&self, user_id: i64, unread_only: bool) -> Result<Vec<Notification>> {
        let mut sql = format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications
             WHERE (user_id = ? OR user_id IS NULL)"
        );
        if unread_only {
            sql.push_str(" AND is_read = 0");
        }
        sql.push_str(" ORDER BY created_at DESC, id DESC");

        let notifications = sqlx::query_as::<_, Notification>(&sql)
            .bind(user_id)
            .fetch_all(self.pool)
            .await
            .map_err(|e| MentoraError::Database(e.to_string()))?;

        Ok(notifications)
    }

    /// List every notification in the system, newest first. Admin view.
    pub async fn list_all(&self) -> Result<Vec<Notification>> {
        let sql = format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications ORDER BY created_at DESC, id DESC"
        );
        let notifications = sqlx::query_as::<_, Notification>(&sql)
            .fetch_all(self.pool)
            .await
            .map_err(|e| MentoraError::Database(e.to_string()))?;

        Ok(notifications)
    }

    /// Count unread notifications targeted at a user.
    pub async fn count_unread(&self, user_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications
             WHERE (user_id = ? OR user_id IS NULL) AND is_read = 0",
        )
        .bind(user_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| MentoraError::Database(e.to_string()))?;

        Ok(count)
    }

    /// Mark a notification as read and stamp read_at.
    ///
    /// Returns true if the row existed.
    pub async fn mark_read(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = 1, read_at = datetime('now') WHERE id = ?",
        )
        .bind(id)
        .execute(self.pool)
        .await
        .map_err(|e| MentoraError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Mark all of a user's own unread notifications as read.
    ///
    /// Scoped strictly to rows targeting the user; broadcasts are left alone.
    pub async fn mark_all_read(&self, user_id: i64) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = 1, read_at = datetime('now')
             WHERE user_id = ? AND is_read = 0",
        )
        .bind(user_id)
        .execute(self.pool)
        .await
        .map_err(|e| MentoraError::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }

    /// Delete a notification by ID.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| MentoraError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete all of a user's own notifications. Broadcasts are left alone.
    pub async fn delete_all_for(&self, user_id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM notifications WHERE user_id = ?")
            .bind(user_id)
            .execute(self.pool)
            .await
            .map_err(|e| MentoraError::Database(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
