//! Response DTOs for the Mentora Web API.

use serde::Serialize;

use crate::db::{Availability, User};
use crate::notification::{Notification, NotificationKind};

/// Generic success envelope: `{"success": true, "data": ...}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always true for successful responses.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new success response.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Login and registration response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Bearer token (JWT).
    pub token: String,
    /// Role of the authenticated user.
    pub role: String,
    /// Approval flag at the time of issue.
    pub is_approved: bool,
    /// User profile.
    pub user: UserInfo,
}

/// Full user profile view, for the owner and for admins.
///
/// The password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    /// User ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// User role.
    pub role: String,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Self-introduction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Profile image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Student: class level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_level: Option<String>,
    /// Student: academic stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
    /// Student: school board.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_board: Option<String>,
    /// Student: school.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    /// Subjects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<String>,
    /// Student: target exams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_exams: Option<String>,
    /// Student: learning goals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_goals: Option<String>,
    /// Mentor: specializations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specializations: Option<String>,
    /// Mentor: years of experience.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<i64>,
    /// Mentor: education history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    /// Mentor: achievements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<String>,
    /// Mentor: timezone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Mentor: availability status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    /// Approval flag.
    pub is_approved: bool,
    /// Account creation timestamp.
    pub created_at: String,
    /// Last login timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            phone: user.phone.clone(),
            bio: user.bio.clone(),
            address: user.address.clone(),
            profile_image: user.profile_image.clone(),
            class_level: user.class_level.clone(),
            stream: user.stream.clone(),
            school_board: user.school_board.clone(),
            school: user.school.clone(),
            subjects: user.subjects.clone(),
            target_exams: user.target_exams.clone(),
            learning_goals: user.learning_goals.clone(),
            specializations: user.specializations.clone(),
            experience_years: user.experience_years,
            education: user.education.clone(),
            achievements: user.achievements.clone(),
            timezone: user.timezone.clone(),
            availability: user.availability,
            is_approved: user.is_approved,
            created_at: user.created_at.clone(),
            last_login: user.last_login.clone(),
        }
    }
}

/// Public mentor profile view, as shown to students.
///
/// Contact details are omitted; matching happens through the platform.
#[derive(Debug, Serialize)]
pub struct MentorInfo {
    /// User ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Self-introduction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Specializations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specializations: Option<String>,
    /// Years of experience.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<i64>,
    /// Education history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    /// Achievements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<String>,
    /// Timezone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Availability status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    /// Approval flag.
    pub is_approved: bool,
    /// Account creation timestamp.
    pub created_at: String,
}

impl From<&User> for MentorInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            bio: user.bio.clone(),
            specializations: user.specializations.clone(),
            experience_years: user.experience_years,
            education: user.education.clone(),
            achievements: user.achievements.clone(),
            timezone: user.timezone.clone(),
            availability: user.availability,
            is_approved: user.is_approved,
            created_at: user.created_at.clone(),
        }
    }
}

/// Current user response (for /api/auth/me).
#[derive(Debug, Serialize)]
pub struct MeResponse {
    /// User profile.
    pub user: UserInfo,
    /// Count of unread notifications, broadcasts included.
    pub unread_notifications: i64,
}

/// Notification view.
#[derive(Debug, Serialize)]
pub struct NotificationInfo {
    /// Notification ID.
    pub id: i64,
    /// Recipient user ID; None for broadcasts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Notification kind.
    pub kind: NotificationKind,
    /// Message body.
    pub message: String,
    /// Read flag.
    pub is_read: bool,
    /// Creation timestamp.
    pub created_at: String,
    /// Read timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_at: Option<String>,
}

impl From<&Notification> for NotificationInfo {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id,
            user_id: n.user_id,
            kind: n.kind,
            message: n.message.clone(),
            is_read: n.is_read,
            created_at: n.created_at.clone(),
            read_at: n.read_at.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_envelope() {
        let resp = ApiResponse::new(vec![1, 2, 3]);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_user_info_skips_absent_fields() {
        let info = UserInfo {
            id: 1,
            name: "A".to_string(),
            email: "a@example.com".to_string(),
            role: "student".to_string(),
            phone: None,
            bio: None,
            address: None,
            profile_image: None,
            class_level: None,
            stream: None,
            school_board: None,
            school: None,
            subjects: None,
            target_exams: None,
            learning_goals: None,
            specializations: None,
            experience_years: None,
            education: None,
            achievements: None,
            timezone: None,
            availability: None,
            is_approved: true,
            created_at: "2024-01-01".to_string(),
            last_login: None,
        };

        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("phone").is_none());
        assert!(json.get("availability").is_none());
        assert_eq!(json["is_approved"], true);
    }

    #[test]
    fn test_mentor_info_omits_contact_details() {
        let json = serde_json::to_string(&MentorInfo {
            id: 2,
            name: "M".to_string(),
            bio: None,
            specializations: Some("physics".to_string()),
            experience_years: Some(5),
            education: None,
            achievements: None,
            timezone: None,
            availability: Some(Availability::Available),
            is_approved: true,
            created_at: "2024-01-01".to_string(),
        })
        .unwrap();

        assert!(!json.contains("email"));
        assert!(!json.contains("phone"));
        assert!(json.contains("\"availability\":\"available\""));
    }
}
