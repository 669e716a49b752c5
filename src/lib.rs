//! Mentora - a mentorship platform connecting students with mentors.
//!
//! The core of the system is the mentor approval lifecycle: mentors
//! register, wait in a pending state, and are approved or rejected by
//! an admin. Students are active immediately. All three roles share one
//! account model and authenticate with stateless bearer tokens.
//!
//! # Modules
//!
//! - [`auth`] - Password hashing, token issuing, role gates, and the
//!   mentor approval workflow
//! - [`client`] - Client-side auth session persistence
//! - [`config`] - TOML configuration
//! - [`db`] - SQLite storage and the user repository
//! - [`notification`] - In-app notifications
//! - [`web`] - REST API (axum)

pub mod auth;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod notification;
pub mod web;

pub use auth::{hash_password, validate_password, verify_password};
pub use config::Config;
pub use db::{Database, Role, User};
pub use error::{MentoraError, Result};
