//! Router configuration for the Web API.

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    approve_mentor, delete_all_notifications, delete_notification, get_mentor, list_mentors,
    list_notifications, list_pending_mentors, login, mark_all_read, mark_read, me, register,
    reject_mentor, update_availability, update_details, update_password, AppState,
};
use super::middleware::{create_cors_layer, inject_state};

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
        .route("/updatedetails", put(update_details))
        .route("/updatepassword", put(update_password));

    // Static segments are registered before the :id capture
    let mentor_routes = Router::new()
        .route("/", get(list_mentors))
        .route("/pending", get(list_pending_mentors))
        .route("/availability", put(update_availability))
        .route("/:id", get(get_mentor))
        .route("/:id/approve", put(approve_mentor))
        .route("/:id/reject", put(reject_mentor));

    let notification_routes = Router::new()
        .route("/", get(list_notifications).delete(delete_all_notifications))
        .route("/read-all", put(mark_all_read))
        .route("/:id/read", put(mark_read))
        .route("/:id", delete(delete_notification));

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/mentors", mentor_routes)
        .nest("/notifications", notification_routes);

    // Clone app_state for the middleware closure
    let state_for_middleware = app_state.clone();

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(move |req, next| {
                    let state = state_for_middleware.clone();
                    inject_state(state, req, next)
                })),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
