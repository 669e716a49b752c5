//! User repository for Mentora.
//!
//! This module provides CRUD operations for users in the database.

use sqlx::{QueryBuilder, SqlitePool};

use super::user::{NewUser, Role, User, UserUpdate};
use crate::{MentoraError, Result};

/// Column list shared by every user SELECT.
const USER_COLUMNS: &str = "id, name, email, password, role, \
     phone, bio, address, profile_image, \
     class_level, stream, school_board, school, subjects, target_exams, learning_goals, \
     specializations, experience_years, education, achievements, timezone, availability, \
     is_approved, approved_at, approved_by, created_at, last_login";

/// Repository for user CRUD operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user in the database.
    ///
    /// The initial approval flag follows the role: mentors start
    /// unapproved, students and admins approved.
    ///
    /// Returns the created user with the assigned ID.
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        let result = sqlx::query(
            "INSERT INTO users (name, email, password, role, phone, bio, \
                    class_level, stream, school_board, school, subjects, target_exams, \
                    learning_goals, specializations, experience_years, education, achievements, \
                    timezone, is_approved)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password)
        .bind(new_user.role.as_str())
        .bind(&new_user.phone)
        .bind(&new_user.bio)
        .bind(&new_user.class_level)
        .bind(&new_user.stream)
        .bind(&new_user.school_board)
        .bind(&new_user.school)
        .bind(&new_user.subjects)
        .bind(&new_user.target_exams)
        .bind(&new_user.learning_goals)
        .bind(&new_user.specializations)
        .bind(new_user.experience_years)
        .bind(&new_user.education)
        .bind(&new_user.achievements)
        .bind(&new_user.timezone)
        .bind(new_user.initial_approval())
        .execute(self.pool)
        .await
        .map_err(|e| MentoraError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| MentoraError::NotFound("user".to_string()))
    }

    /// Get a user by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");
        let result = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| MentoraError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get a user by email (case-insensitive), across all roles.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE lower(email) = lower(?)");
        let result = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| MentoraError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Check whether an email is already registered under any role.
    pub async fn email_exists(&self, email: &str) -> Result<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE lower(email) = lower(?)")
                .bind(email)
                .fetch_one(self.pool)
                .await
                .map_err(|e| MentoraError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    /// Update a user's mutable profile fields by ID.
    ///
    /// Only fields that are set in the update will be modified.
    /// Returns the updated user, or None if not found.
    pub async fn update(&self, id: i64, update: &UserUpdate) -> Result<Option<User>> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE users SET ");
        let mut separated = query.separated(", ");

        if let Some(ref name) = update.name {
            separated.push("name = ");
            separated.push_bind_unseparated(name);
        }
        if let Some(ref password) = update.password {
            separated.push("password = ");
            separated.push_bind_unseparated(password);
        }
        if let Some(ref phone) = update.phone {
            separated.push("phone = ");
            separated.push_bind_unseparated(phone.clone());
        }
        if let Some(ref bio) = update.bio {
            separated.push("bio = ");
            separated.push_bind_unseparated(bio.clone());
        }
        if let Some(ref address) = update.address {
            separated.push("address = ");
            separated.push_bind_unseparated(address.clone());
        }
        if let Some(ref profile_image) = update.profile_image {
            separated.push("profile_image = ");
            separated.push_bind_unseparated(profile_image.clone());
        }
        if let Some(ref class_level) = update.class_level {
            separated.push("class_level = ");
            separated.push_bind_unseparated(class_level.clone());
        }
        if let Some(ref stream) = update.stream {
            separated.push("stream = ");
            separated.push_bind_unseparated(stream.clone());
        }
        if let Some(ref school_board) = update.school_board {
            separated.push("school_board = ");
            separated.push_bind_unseparated(school_board.clone());
        }
        if let Some(ref school) = update.school {
            separated.push("school = ");
            separated.push_bind_unseparated(school.clone());
        }
        if let Some(ref subjects) = update.subjects {
            separated.push("subjects = ");
            separated.push_bind_unseparated(subjects.clone());
        }
        if let Some(ref target_exams) = update.target_exams {
            separated.push("target_exams = ");
            separated.push_bind_unseparated(target_exams.clone());
        }
        if let Some(ref learning_goals) = update.learning_goals {
            separated.push("learning_goals = ");
            separated.push_bind_unseparated(learning_goals.clone());
        }
        if let Some(ref specializations) = update.specializations {
            separated.push("specializations = ");
            separated.push_bind_unseparated(specializations.clone());
        }
        if let Some(experience_years) = update.experience_years {
            separated.push("experience_years = ");
            separated.push_bind_unseparated(experience_years);
        }
        if let Some(ref education) = update.education {
            separated.push("education = ");
            separated.push_bind_unseparated(education.clone());
        }
        if let Some(ref achievements) = update.achievements {
            separated.push("achievements = ");
            separated.push_bind_unseparated(achievements.clone());
        }
        if let Some(ref timezone) = update.timezone {
            separated.push("timezone = ");
            separated.push_bind_unseparated(timezone.clone());
        }
        if let Some(availability) = update.availability {
            separated.push("availability = ");
            separated.push_bind_unseparated(availability.as_str().to_string());
        }

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query
            .build()
            .execute(self.pool)
            .await
            .map_err(|e| MentoraError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Stamp the approval columns on a mentor.
    ///
    /// Sets is_approved, approved_at, and the approving admin's id.
    /// Returns the updated user, or None if not found.
    pub async fn approve(&self, id: i64, admin_id: i64) -> Result<Option<User>> {
        let result = sqlx::query(
            "UPDATE users SET is_approved = 1, approved_at = datetime('now'), approved_by = ?
             WHERE id = ?",
        )
        .bind(admin_id)
        .bind(id)
        .execute(self.pool)
        .await
        .map_err(|e| MentoraError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Update the last login timestamp for a user.
    pub async fn update_last_login(&self, id: i64) -> Result<()> {
        sqlx::query("UPDATE users SET last_login = datetime('now') WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| MentoraError::Database(e.to_string()))?;
        Ok(())
    }

    /// Delete a user by ID.
    ///
    /// Returns true if a user was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| MentoraError::Database(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    /// List mentors awaiting approval, oldest application first.
    pub async fn list_pending_mentors(&self) -> Result<Vec<User>> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users
             WHERE role = 'mentor' AND is_approved = 0 ORDER BY created_at, id"
        );
        let users = sqlx::query_as::<_, User>(&sql)
            .fetch_all(self.pool)
            .await
            .map_err(|e| MentoraError::Database(e.to_string()))?;

        Ok(users)
    }

    /// List approved mentors, ordered by name.
    pub async fn list_approved_mentors(&self) -> Result<Vec<User>> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users
             WHERE role = 'mentor' AND is_approved = 1 ORDER BY name"
        );
        let users = sqlx::query_as::<_, User>(&sql)
            .fetch_all(self.pool)
            .await
            .map_err(|e| MentoraError::Database(e.to_string()))?;

        Ok(users)
    }

    /// Count users with a given role.
    pub async fn count_by_role(&self, role: Role) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = ?")
            .bind(role.as_str())
            .fetch_one(self.pool)
            .await
            .map_err(|e| MentoraError::Database(e.to_string()))?;

        Ok(count)
    }
}
