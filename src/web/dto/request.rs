//! Request DTOs for the Mentora Web API.

use serde::Deserialize;
use validator::Validate;

use crate::db::Availability;

fn default_role() -> String {
    "student".to_string()
}

/// User registration request.
///
/// The role decides which of the optional profile fields are
/// meaningful; unknown fields for the chosen role are stored as-is.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,
    /// Plain-text password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    /// Requested role ("student" or "mentor").
    #[serde(default = "default_role")]
    pub role: String,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Self-introduction.
    #[serde(default)]
    pub bio: Option<String>,
    /// Student: class level.
    #[serde(default)]
    pub class_level: Option<String>,
    /// Student: academic stream.
    #[serde(default)]
    pub stream: Option<String>,
    /// Student: school board.
    #[serde(default)]
    pub school_board: Option<String>,
    /// Student: school.
    #[serde(default)]
    pub school: Option<String>,
    /// Subjects.
    #[serde(default)]
    pub subjects: Option<String>,
    /// Student: target exams.
    #[serde(default)]
    pub target_exams: Option<String>,
    /// Student: learning goals.
    #[serde(default)]
    pub learning_goals: Option<String>,
    /// Mentor: specializations.
    #[serde(default)]
    pub specializations: Option<String>,
    /// Mentor: years of experience.
    #[serde(default)]
    pub experience_years: Option<i64>,
    /// Mentor: education history.
    #[serde(default)]
    pub education: Option<String>,
    /// Mentor: achievements.
    #[serde(default)]
    pub achievements: Option<String>,
    /// Mentor: timezone.
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Profile update request.
///
/// Fields that are absent are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateDetailsRequest {
    /// New display name.
    pub name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New bio.
    pub bio: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New profile image reference.
    pub profile_image: Option<String>,
    /// New class level.
    pub class_level: Option<String>,
    /// New academic stream.
    pub stream: Option<String>,
    /// New school board.
    pub school_board: Option<String>,
    /// New school.
    pub school: Option<String>,
    /// New subjects.
    pub subjects: Option<String>,
    /// New target exams.
    pub target_exams: Option<String>,
    /// New learning goals.
    pub learning_goals: Option<String>,
    /// New specializations.
    pub specializations: Option<String>,
    /// New years of experience.
    pub experience_years: Option<i64>,
    /// New education history.
    pub education: Option<String>,
    /// New achievements.
    pub achievements: Option<String>,
    /// New timezone.
    pub timezone: Option<String>,
}

/// Password change request.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    /// Current password, re-checked before the change.
    pub current_password: String,
    /// New plain-text password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
}

/// Mentor rejection request.
#[derive(Debug, Deserialize)]
pub struct RejectRequest {
    /// Reason shown to the rejected applicant.
    pub reason: String,
}

/// Mentor availability update request.
#[derive(Debug, Deserialize)]
pub struct UpdateAvailabilityRequest {
    /// New availability status.
    pub availability: Availability,
}

/// Query parameters for listing notifications.
#[derive(Debug, Default, Deserialize)]
pub struct NotificationListQuery {
    /// Only return unread notifications.
    #[serde(default)]
    pub unread: bool,
    /// Return notifications for every user (admin only).
    #[serde(default)]
    pub all: bool,
}
