//! Notification types for Mentora.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of notification, used by clients to pick icons and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A mentor application was approved.
    MentorApproved,
    /// A mentor application was rejected.
    MentorRejected,
    /// A new doubt was posted.
    NewDoubt,
    /// A doubt changed status.
    DoubtStatus,
    /// A meeting was scheduled.
    MeetingScheduled,
    /// General announcement (usually broadcast).
    Announcement,
}

impl NotificationKind {
    /// Convert to the database/wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::MentorApproved => "mentor_approved",
            NotificationKind::MentorRejected => "mentor_rejected",
            NotificationKind::NewDoubt => "new_doubt",
            NotificationKind::DoubtStatus => "doubt_status",
            NotificationKind::MeetingScheduled => "meeting_scheduled",
            NotificationKind::Announcement => "announcement",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mentor_approved" => Ok(NotificationKind::MentorApproved),
            "mentor_rejected" => Ok(NotificationKind::MentorRejected),
            "new_doubt" => Ok(NotificationKind::NewDoubt),
            "doubt_status" => Ok(NotificationKind::DoubtStatus),
            "meeting_scheduled" => Ok(NotificationKind::MeetingScheduled),
            "announcement" => Ok(NotificationKind::Announcement),
            _ => Err(format!("unknown notification kind: {s}")),
        }
    }
}

/// A notification row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Notification {
    /// Unique notification ID.
    pub id: i64,
    /// Target user. None marks a broadcast visible to everyone.
    pub user_id: Option<i64>,
    /// Notification kind.
    pub kind: NotificationKind,
    /// Message text.
    pub message: String,
    /// Whether the notification has been read.
    pub is_read: bool,
    /// Creation timestamp.
    pub created_at: String,
    /// When the notification was read.
    pub read_at: Option<String>,
}

impl Notification {
    /// Whether this notification is a broadcast.
    pub fn is_broadcast(&self) -> bool {
        self.user_id.is_none()
    }

    /// Whether the given user may flip this notification's read flag
    /// or delete it: the target, or an admin acting on anything.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == Some(user_id)
    }
}

/// Data for creating a new notification.
#[derive(Debug, Clone)]
pub struct NewNotification {
    /// Target user. None for broadcasts.
    pub user_id: Option<i64>,
    /// Notification kind.
    pub kind: NotificationKind,
    /// Message text.
    pub message: String,
}

impl NewNotification {
    /// Create a notification targeting one user.
    pub fn to_user(user_id: i64, kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            kind,
            message: message.into(),
        }
    }

    /// Create a broadcast notification visible to everyone.
    pub fn broadcast(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            user_id: None,
            kind,
            message: message.into(),
        }
    }
}
