//! Request handlers for the Web API.

mod auth;
mod mentor;
mod notification;

pub use auth::{login, me, register, update_details, update_password};
pub use mentor::{
    approve_mentor, get_mentor, list_mentors, list_pending_mentors, reject_mentor,
    update_availability,
};
pub use notification::{
    delete_all_notifications, delete_notification, list_notifications, mark_all_read, mark_read,
};

use std::sync::Arc;

use crate::auth::TokenIssuer;
use crate::db::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Database,
    /// Token issuer for login and password changes.
    pub issuer: Arc<TokenIssuer>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, jwt_secret: &str, token_expiry_days: u64) -> Self {
        Self {
            db,
            issuer: Arc::new(TokenIssuer::new(jwt_secret, token_expiry_days)),
        }
    }
}
