//! Authentication and authorization for Mentora.

pub mod approval;
pub mod password;
pub mod permission;
pub mod token;

pub use approval::{approve_mentor, reject_mentor, ApprovalError};
pub use password::{
    hash_password, validate_password, verify_password, PasswordError, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
pub use permission::{authorize, ensure_mentor_active, require_admin, PermissionError};
pub use token::{TokenClaims, TokenError, TokenIssuer};

use sqlx::SqlitePool;
use tracing::info;

use crate::config::AuthConfig;
use crate::db::{NewUser, Role, UserRepository};
use crate::Result;

/// Create the bootstrap admin account if no admin exists yet.
///
/// Registration can only create students and mentors, so the first
/// admin has to come from configuration. Skipped when the config does
/// not carry admin credentials or an admin is already present.
pub async fn ensure_bootstrap_admin(pool: &SqlitePool, config: &AuthConfig) -> Result<()> {
    let (email, password) = match (&config.admin_email, &config.admin_password) {
        (Some(email), Some(password)) => (email, password),
        _ => return Ok(()),
    };

    let repo = UserRepository::new(pool);
    if repo.count_by_role(Role::Admin).await? > 0 {
        return Ok(());
    }

    let hash = hash_password(password)
        .map_err(|e| crate::MentoraError::Config(format!("admin password: {e}")))?;
    let admin = repo
        .create(&NewUser::new(&config.admin_name, email, hash).with_role(Role::Admin))
        .await?;

    info!(admin_id = admin.id, email = %email, "Bootstrap admin account created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[tokio::test]
    async fn test_bootstrap_admin_created_once() {
        let db = Database::open_in_memory().await.unwrap();
        let config = AuthConfig {
            admin_email: Some("admin@example.com".to_string()),
            admin_password: Some("changeme123".to_string()),
            ..Default::default()
        };

        ensure_bootstrap_admin(db.pool(), &config).await.unwrap();
        ensure_bootstrap_admin(db.pool(), &config).await.unwrap();

        let repo = UserRepository::new(db.pool());
        assert_eq!(repo.count_by_role(Role::Admin).await.unwrap(), 1);

        let admin = repo.get_by_email("admin@example.com").await.unwrap().unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert!(admin.is_approved);
    }

    #[tokio::test]
    async fn test_bootstrap_skipped_without_credentials() {
        let db = Database::open_in_memory().await.unwrap();

        ensure_bootstrap_admin(db.pool(), &AuthConfig::default())
            .await
            .unwrap();

        let repo = UserRepository::new(db.pool());
        assert_eq!(repo.count_by_role(Role::Admin).await.unwrap(), 0);
    }
}
