//! Middleware for the Web API.

mod auth;
mod cors;

pub use auth::{inject_state, AuthUser, CurrentUser, OptionalAuthUser};
pub use cors::create_cors_layer;
