//! User model for Mentora.
//!
//! This module defines the User struct and the Role discriminant shared
//! by students, mentors, and admins.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// User role. Fixed at creation, never mutated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    /// Student. Approved implicitly on registration.
    #[default]
    Student,
    /// Mentor. Starts unapproved and must be approved by an admin.
    Mentor,
    /// Administrator. Privileged role with access to all gates.
    Admin,
}

impl Role {
    /// Convert role to its database/wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Mentor => "mentor",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "mentor" => Ok(Role::Mentor),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}

/// Mentor availability status.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Availability {
    /// Accepting sessions.
    #[default]
    Available,
    /// Temporarily busy.
    Busy,
    /// Not taking sessions.
    Offline,
}

impl Availability {
    /// Convert to the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Busy => "busy",
            Availability::Offline => "offline",
        }
    }
}

impl FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(Availability::Available),
            "busy" => Ok(Availability::Busy),
            "offline" => Ok(Availability::Offline),
            _ => Err(format!("unknown availability: {s}")),
        }
    }
}

/// User entity covering all three roles.
///
/// Role-specific fields are None for the roles they do not apply to.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address (unique, case-insensitive).
    pub email: String,
    /// Password hash (Argon2). Never serialized to clients.
    pub password: String,
    /// Role discriminant.
    pub role: Role,

    /// Phone number.
    pub phone: Option<String>,
    /// Self-introduction text.
    pub bio: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Profile image reference.
    pub profile_image: Option<String>,

    /// Student: class / grade level.
    pub class_level: Option<String>,
    /// Student: academic stream.
    pub stream: Option<String>,
    /// Student: examination board.
    pub school_board: Option<String>,
    /// Student: school name.
    pub school: Option<String>,
    /// Subjects of interest (students) or taught (mentors).
    pub subjects: Option<String>,
    /// Student: target exams.
    pub target_exams: Option<String>,
    /// Student: learning goals.
    pub learning_goals: Option<String>,

    /// Mentor: areas of specialization.
    pub specializations: Option<String>,
    /// Mentor: years of experience.
    pub experience_years: Option<i64>,
    /// Mentor: education history.
    pub education: Option<String>,
    /// Mentor: notable achievements.
    pub achievements: Option<String>,
    /// Mentor: timezone.
    pub timezone: Option<String>,
    /// Mentor: current availability.
    pub availability: Option<Availability>,

    /// Whether the account is approved. Always true for students and
    /// admins; false for mentors until an admin approves them.
    pub is_approved: bool,
    /// When the mentor was approved.
    pub approved_at: Option<String>,
    /// Id of the approving admin (audit only).
    pub approved_by: Option<i64>,

    /// Account creation timestamp.
    pub created_at: String,
    /// Last login timestamp.
    pub last_login: Option<String>,
}

impl User {
    /// Check if this user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Check if this user is a mentor.
    pub fn is_mentor(&self) -> bool {
        self.role == Role::Mentor
    }

    /// Check if this user is a mentor still awaiting approval.
    pub fn is_pending_mentor(&self) -> bool {
        self.role == Role::Mentor && !self.is_approved
    }
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Password hash (should be pre-hashed with Argon2).
    pub password: String,
    /// Role (defaults to Student).
    pub role: Role,
    /// Phone number.
    pub phone: Option<String>,
    /// Self-introduction.
    pub bio: Option<String>,
    /// Student: class level.
    pub class_level: Option<String>,
    /// Student: academic stream.
    pub stream: Option<String>,
    /// Student: school board.
    pub school_board: Option<String>,
    /// Student: school.
    pub school: Option<String>,
    /// Subjects.
    pub subjects: Option<String>,
    /// Student: target exams.
    pub target_exams: Option<String>,
    /// Student: learning goals.
    pub learning_goals: Option<String>,
    /// Mentor: specializations.
    pub specializations: Option<String>,
    /// Mentor: years of experience.
    pub experience_years: Option<i64>,
    /// Mentor: education history.
    pub education: Option<String>,
    /// Mentor: achievements.
    pub achievements: Option<String>,
    /// Mentor: timezone.
    pub timezone: Option<String>,
}

impl NewUser {
    /// Create a new user with minimal required fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: Role::Student,
            phone: None,
            bio: None,
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
        }
    }

    /// Set the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the bio.
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Set the class level.
    pub fn with_class_level(mut self, class_level: impl Into<String>) -> Self {
        self.class_level = Some(class_level.into());
        self
    }

    /// Set the academic stream.
    pub fn with_stream(mut self, stream: impl Into<String>) -> Self {
        self.stream = Some(stream.into());
        self
    }

    /// Set the school board.
    pub fn with_school_board(mut self, school_board: impl Into<String>) -> Self {
        self.school_board = Some(school_board.into());
        self
    }

    /// Set the school.
    pub fn with_school(mut self, school: impl Into<String>) -> Self {
        self.school = Some(school.into());
        self
    }

    /// Set the subjects.
    pub fn with_subjects(mut self, subjects: impl Into<String>) -> Self {
        self.subjects = Some(subjects.into());
        self
    }

    /// Set the target exams.
    pub fn with_target_exams(mut self, target_exams: impl Into<String>) -> Self {
        self.target_exams = Some(target_exams.into());
        self
    }

    /// Set the learning goals.
    pub fn with_learning_goals(mut self, learning_goals: impl Into<String>) -> Self {
        self.learning_goals = Some(learning_goals.into());
        self
    }

    /// Set the specializations.
    pub fn with_specializations(mut self, specializations: impl Into<String>) -> Self {
        self.specializations = Some(specializations.into());
        self
    }

    /// Set the years of experience.
    pub fn with_experience_years(mut self, years: i64) -> Self {
        self.experience_years = Some(years);
        self
    }

    /// Set the education history.
    pub fn with_education(mut self, education: impl Into<String>) -> Self {
        self.education = Some(education.into());
        self
    }

    /// Set the achievements.
    pub fn with_achievements(mut self, achievements: impl Into<String>) -> Self {
        self.achievements = Some(achievements.into());
        self
    }

    /// Set the timezone.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Whether accounts of this role start approved.
    ///
    /// Mentors go through the admin approval workflow; students and
    /// admins are approved on creation.
    pub fn initial_approval(&self) -> bool {
        self.role != Role::Mentor
    }
}

/// Data for updating an existing user's mutable profile fields.
///
/// Role and the approval columns are deliberately absent; they change
/// only through the approval workflow.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New password hash (if changing password).
    pub password: Option<String>,
    /// New phone number.
    pub phone: Option<Option<String>>,
    /// New bio.
    pub bio: Option<Option<String>>,
    /// New address.
    pub address: Option<Option<String>>,
    /// New profile image reference.
    pub profile_image: Option<Option<String>>,
    /// New class level.
    pub class_level: Option<Option<String>>,
    /// New academic stream.
    pub stream: Option<Option<String>>,
    /// New school board.
    pub school_board: Option<Option<String>>,
    /// New school.
    pub school: Option<Option<String>>,
    /// New subjects.
    pub subjects: Option<Option<String>>,
    /// New target exams.
    pub target_exams: Option<Option<String>>,
    /// New learning goals.
    pub learning_goals: Option<Option<String>>,
    /// New specializations.
    pub specializations: Option<Option<String>>,
    /// New years of experience.
    pub experience_years: Option<Option<i64>>,
    /// New education history.
    pub education: Option<Option<String>>,
    /// New achievements.
    pub achievements: Option<Option<String>>,
    /// New timezone.
    pub timezone: Option<Option<String>>,
    /// New availability status.
    pub availability: Option<Availability>,
}

impl UserUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set new display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set new password hash.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set new phone number.
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = Some(phone);
        self
    }

    /// Set new bio.
    pub fn bio(mut self, bio: Option<String>) -> Self {
        self.bio = Some(bio);
        self
    }

    /// Set new address.
    pub fn address(mut self, address: Option<String>) -> Self {
        self.address = Some(address);
        self
    }

    /// Set new profile image reference.
    pub fn profile_image(mut self, profile_image: Option<String>) -> Self {
        self.profile_image = Some(profile_image);
        self
    }

    /// Set new class level.
    pub fn class_level(mut self, class_level: Option<String>) -> Self {
        self.class_level = Some(class_level);
        self
    }

    /// Set new academic stream.
    pub fn stream(mut self, stream: Option<String>) -> Self {
        self.stream = Some(stream);
        self
    }

    /// Set new school board.
    pub fn school_board(mut self, school_board: Option<String>) -> Self {
        self.school_board = Some(school_board);
        self
    }

    /// Set new school.
    pub fn school(mut self, school: Option<String>) -> Self {
        self.school = Some(school);
        self
    }

    /// Set new subjects.
    pub fn subjects(mut self, subjects: Option<String>) -> Self {
        self.subjects = Some(subjects);
        self
    }

    /// Set new target exams.
    pub fn target_exams(mut self, target_exams: Option<String>) -> Self {
        self.target_exams = Some(target_exams);
        self
    }

    /// Set new learning goals.
    pub fn learning_goals(mut self, learning_goals: Option<String>) -> Self {
        self.learning_goals = Some(learning_goals);
        self
    }

    /// Set new specializations.
    pub fn specializations(mut self, specializations: Option<String>) -> Self {
        self.specializations = Some(specializations);
        self
    }

    /// Set new years of experience.
    pub fn experience_years(mut self, years: Option<i64>) -> Self {
        self.experience_years = Some(years);
        self
    }

    /// Set new education history.
    pub fn education(mut self, education: Option<String>) -> Self {
        self.education = Some(education);
        self
    }

    /// Set new achievements.
    pub fn achievements(mut self, achievements: Option<String>) -> Self {
        self.achievements = Some(achievements);
        self
    }

    /// Set new timezone.
    pub fn timezone(mut self, timezone: Option<String>) -> Self {
        self.timezone = Some(timezone);
        self
    }

    /// Set new availability status.
    pub fn availability(mut self, availability: Availability) -> Self {
        self.availability = Some(availability);
        self
    }

    /// Check if any fields are set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.password.is_none()
            && self.phone.is_none()
            && self.bio.is_none()
            && self.address.is_none()
            && self.profile_image.is_none()
            && self.class_level.is_none()
            && self.stream.is_none()
            && self.school_board.is_none()
            && self.school.is_none()
            && self.subjects.is_none()
            && self.target_exams.is_none()
            && self.learning_goals.is_none()
            && self.specializations.is_none()
            && self.experience_years.is_none()
            && self.education.is_none()
            && self.achievements.is_none()
            && self.timezone.is_none()
            && self.availability.is_none()
    }
}
