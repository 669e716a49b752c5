//! Role gate for Mentora.
//!
//! Declarative role checks that run strictly after the caller has been
//! resolved to a concrete user record.

use thiserror::Error;

use crate::db::{Role, User};

/// Permission-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    /// User's role is not in the allowed set.
    #[error("this action requires one of the following roles: {0}")]
    RoleNotAllowed(String),

    /// Mentor account has not been approved yet.
    #[error("your mentor application is pending approval")]
    PendingApproval,
}

/// Check that the user's role is in the allowed set.
///
/// Fails with an error naming the required role(s) on mismatch.
pub fn authorize(user: &User, allowed: &[Role]) -> Result<(), PermissionError> {
    if allowed.contains(&user.role) {
        return Ok(());
    }

    let wanted: Vec<&str> = allowed.iter().map(Role::as_str).collect();
    Err(PermissionError::RoleNotAllowed(wanted.join(", ")))
}

/// Require the admin role.
pub fn require_admin(user: &User) -> Result<(), PermissionError> {
    authorize(user, &[Role::Admin])
}

/// Gate mentor-only functionality behind approval.
///
/// A mentor who has not been approved is rejected; every other role
/// passes through untouched.
pub fn ensure_mentor_active(user: &User) -> Result<(), PermissionError> {
    if user.is_pending_mentor() {
        return Err(PermissionError::PendingApproval);
    }
    Ok(())
}
