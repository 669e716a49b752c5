//! Mentor approval workflow for Mentora.
//!
//! A mentor application moves from Pending (record exists, unapproved)
//! to either Approved (approval columns stamped) or Rejected. Rejection
//! is destructive: the record is deleted and only the rejection
//! notification survives.

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{info, warn};

use crate::db::{Role, User, UserRepository};
use crate::notification::{NewNotification, NotificationKind, NotificationRepository};

/// Approval workflow errors.
#[derive(Error, Debug)]
pub enum ApprovalError {
    /// No mentor exists under the given id.
    #[error("mentor not found")]
    MentorNotFound,

    /// Rejection requires a non-empty reason.
    #[error("rejection reason is required")]
    ReasonRequired,

    /// Database error.
    #[error("database error: {0}")]
    Database(String),
}

impl From<crate::MentoraError> for ApprovalError {
    fn from(e: crate::MentoraError) -> Self {
        ApprovalError::Database(e.to_string())
    }
}

/// Approve a pending mentor.
///
/// Stamps is_approved, approved_at, and the acting admin's id, then
/// notifies the mentor. The stamp is the authoritative effect: a failed
/// notification write is logged and swallowed. Re-approving an already
/// approved mentor is not guarded against and simply re-stamps.
pub async fn approve_mentor(
    pool: &SqlitePool,
    mentor_id: i64,
    admin_id: i64,
) -> Result<User, ApprovalError> {
    let repo = UserRepository::new(pool);

    let user = repo
        .get_by_id(mentor_id)
        .await?
        .ok_or(ApprovalError::MentorNotFound)?;
    if user.role != Role::Mentor {
        return Err(ApprovalError::MentorNotFound);
    }

    let approved = repo
        .approve(mentor_id, admin_id)
        .await?
        .ok_or(ApprovalError::MentorNotFound)?;

    let notification = NewNotification::to_user(
        mentor_id,
        NotificationKind::MentorApproved,
        "Congratulations! Your mentor application has been approved. You can now log in.",
    );
    if let Err(e) = NotificationRepository::new(pool).create(&notification).await {
        warn!(mentor_id, error = %e, "Failed to write approval notification");
    }

    info!(mentor_id, admin_id, "Mentor application approved");
    Ok(approved)
}

/// Reject a pending mentor.
///
/// Writes the rejection notification first so the reason survives, then
/// deletes the mentor record. There is no retained Rejected state and
/// the transition cannot be undone.
pub async fn reject_mentor(
    pool: &SqlitePool,
    mentor_id: i64,
    admin_id: i64,
    reason: &str,
) -> Result<(), ApprovalError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ApprovalError::ReasonRequired);
    }

    let repo = UserRepository::new(pool);

    let user = repo
        .get_by_id(mentor_id)
        .await?
        .ok_or(ApprovalError::MentorNotFound)?;
    if user.role != Role::Mentor {
        return Err(ApprovalError::MentorNotFound);
    }

    let notification = NewNotification::to_user(
        mentor_id,
        NotificationKind::MentorRejected,
        format!("Your mentor application has been rejected. Reason: {reason}"),
    );
    if let Err(e) = NotificationRepository::new(pool).create(&notification).await {
        warn!(mentor_id, error = %e, "Failed to write rejection notification");
    }

    if !repo.delete(mentor_id).await? {
        return Err(ApprovalError::MentorNotFound);
    }

    info!(mentor_id, admin_id, reason, "Mentor application rejected");
    Ok(())
}
