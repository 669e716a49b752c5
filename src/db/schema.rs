//! Database schema and migrations for Mentora.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Initial schema - users table
    r#"
-- Users table for all roles: students, mentors, admins.
-- A single table with a role discriminant; role-specific columns are
-- nullable and only populated for the matching role.
CREATE TABLE users (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    name             TEXT NOT NULL,
    email            TEXT NOT NULL,
    password         TEXT NOT NULL,           -- Argon2 hash
    role             TEXT NOT NULL DEFAULT 'student',  -- 'student', 'mentor', 'admin'

    -- Common profile fields
    phone            TEXT,
    bio              TEXT,
    address          TEXT,
    profile_image    TEXT,

    -- Student fields
    class_level      TEXT,
    stream           TEXT,
    school_board     TEXT,
    school           TEXT,
    subjects         TEXT,
    target_exams     TEXT,
    learning_goals   TEXT,

    -- Mentor fields
    specializations  TEXT,
    experience_years INTEGER,
    education        TEXT,
    achievements     TEXT,
    timezone         TEXT,
    availability     TEXT,                    -- 'available', 'busy', 'offline'

    -- Approval lifecycle (mentors start unapproved)
    is_approved      INTEGER NOT NULL DEFAULT 1,
    approved_at      TEXT,
    approved_by      INTEGER,                 -- approving admin's id, audit only

    created_at       TEXT NOT NULL DEFAULT (datetime('now')),
    last_login       TEXT
);

-- One account per email across every role; enforced at the storage
-- level so concurrent registrations cannot slip past the handler check.
CREATE UNIQUE INDEX idx_users_email_nocase ON users(lower(email));
CREATE INDEX idx_users_role ON users(role);
CREATE INDEX idx_users_role_approved ON users(role, is_approved);
"#,
    // v2: Notifications table
    r#"
-- Per-user notification log. A NULL user_id marks a broadcast visible
-- to every recipient. Rows are never mutated except to flip the read
-- flag; user_id is a weak reference and intentionally has no foreign
-- key, so a rejected mentor's notification outlives the account.
CREATE TABLE notifications (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id     INTEGER,
    kind        TEXT NOT NULL,
    message     TEXT NOT NULL,
    is_read     INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL DEFAULT (datetime('now')),
    read_at     TEXT
);

CREATE INDEX idx_notifications_user_id ON notifications(user_id);
CREATE INDEX idx_notifications_unread ON notifications(user_id, is_read);
"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_not_empty() {
        assert!(!MIGRATIONS.is_empty());
    }

    #[test]
    fn test_first_migration_contains_users_table() {
        let first = MIGRATIONS[0];
        assert!(first.contains("CREATE TABLE users"));
        assert!(first.contains("email"));
        assert!(first.contains("password"));
        assert!(first.contains("is_approved"));
        assert!(first.contains("approved_by"));
    }

    #[test]
    fn test_first_migration_has_unique_email_index() {
        assert!(MIGRATIONS[0].contains("CREATE UNIQUE INDEX idx_users_email_nocase"));
    }

    #[test]
    fn test_second_migration_contains_notifications_table() {
        let second = MIGRATIONS[1];
        assert!(second.contains("CREATE TABLE notifications"));
        assert!(second.contains("is_read"));
    }
}
