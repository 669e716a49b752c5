//! Notification sink for Mentora.
//!
//! Workflow transitions write here; polling endpoints read.

mod repository;
mod types;

pub use repository::NotificationRepository;
pub use types::{NewNotification, Notification, NotificationKind};
