//! Web API for Mentora.
//!
//! Exposes the REST API consumed by the browser client: registration
//! and login, mentor directory and approval, profile management, and
//! notifications.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::{ApiError, ErrorCode};
pub use handlers::AppState;
pub use router::{create_health_router, create_router};
pub use server::WebServer;
