//! Client-side auth session mirror.
//!
//! A typed store for the login state a client keeps between requests:
//! the bearer token plus the role and approval flag the server reported
//! at login. It is purely a cache of server-issued truth and is never
//! consulted for authorization decisions, which always happen against
//! the token on the server.
//!
//! Clients hydrate once on startup with [`SessionStore::load`] and tear
//! down once on logout with [`SessionStore::clear`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Cached login state, as reported by the server at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Bearer token.
    pub token: String,
    /// Authenticated user's id.
    pub user_id: i64,
    /// Role string as issued by the server.
    pub role: String,
    /// Approval flag at login time. Mentors only ever see true here,
    /// since unapproved mentors cannot obtain a session.
    pub is_approved: bool,
}

/// Persistence for the client's auth session.
pub trait SessionStore {
    /// Load the persisted session, if any. Corrupt or missing data
    /// yields None; the client then starts logged out.
    fn load(&self) -> Option<AuthSession>;

    /// Persist the session.
    fn save(&self, session: &AuthSession) -> Result<()>;

    /// Remove the persisted session.
    fn clear(&self) -> Result<()>;
}

/// JSON-file-backed session store.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store persisting to the given path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<AuthSession> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn save(&self, session: &AuthSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(session)
            .map_err(|e| crate::MentoraError::Validation(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory session store, for tests and embedded clients.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<AuthSession>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MemorySessionStore {
    fn guard(&self) -> std::sync::MutexGuard<'_, Option<AuthSession>> {
        // A poisoned lock only means a writer panicked mid-store; the
        // Option inside is still a coherent value
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<AuthSession> {
        self.guard().clone()
    }

    fn save(&self, session: &AuthSession) -> Result<()> {
        *self.guard() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.guard() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> AuthSession {
        AuthSession {
            token: "header.payload.signature".to_string(),
            user_id: 7,
            role: "mentor".to_string(),
            is_approved: true,
        }
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySessionStore::new();
        assert!(store.load().is_none());

        store.save(&sample_session()).unwrap();
        assert_eq!(store.load(), Some(sample_session()));

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));

        assert!(store.load().is_none());

        store.save(&sample_session()).unwrap();
        assert_eq!(store.load(), Some(sample_session()));

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_file_store_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));

        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_corrupt_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileSessionStore::new(&path);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested/dir/session.json"));

        store.save(&sample_session()).unwrap();
        assert!(store.load().is_some());
    }
}
