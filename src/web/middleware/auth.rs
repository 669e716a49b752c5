//! Bearer token authentication middleware.

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, Request},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::auth::TokenClaims;
use crate::db::UserRepository;
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// Extractor for authenticated users.
///
/// Use this extractor to require a valid bearer token for a handler.
/// The handler receives the verified token claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub TokenClaims);

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
}

fn app_state(parts: &Parts) -> Result<&Arc<AppState>, ApiError> {
    parts
        .extensions
        .get::<Arc<AppState>>()
        .ok_or_else(|| ApiError::internal("Application state not configured"))
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let token = bearer_token(parts)
                .ok_or_else(|| ApiError::unauthorized("Missing authorization"))?
                .to_string();

            let state = app_state(parts)?;

            let claims = state.issuer.verify(&token).map_err(|e| {
                tracing::debug!("Token verification failed: {}", e);
                ApiError::from(e)
            })?;

            Ok(AuthUser(claims))
        })
    }
}

/// Optional authentication extractor.
///
/// Similar to AuthUser but doesn't fail if no token is provided or the
/// token is invalid.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<TokenClaims>);

impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let token = match bearer_token(parts) {
                Some(t) => t.to_string(),
                None => return Ok(OptionalAuthUser(None)),
            };

            let state = match parts.extensions.get::<Arc<AppState>>() {
                Some(s) => s,
                None => return Ok(OptionalAuthUser(None)),
            };

            match state.issuer.verify(&token) {
                Ok(claims) => Ok(OptionalAuthUser(Some(claims))),
                Err(_) => Ok(OptionalAuthUser(None)),
            }
        })
    }
}

/// Extractor resolving the bearer token to the full user record.
///
/// Use this where handlers need the current database row, not just the
/// claims. A valid token whose user has since been deleted (for
/// example a rejected mentor) yields 404.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub crate::db::User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;

            let app_state = app_state(parts)?;
            let repo = UserRepository::new(app_state.db.pool());
            let user = repo
                .get_by_id(claims.sub)
                .await
                .map_err(ApiError::from)?
                .ok_or_else(|| ApiError::not_found("User not found"))?;

            Ok(CurrentUser(user))
        })
    }
}

/// Middleware function to inject application state into request
/// extensions, making it available to the extractors above.
pub async fn inject_state(
    state: Arc<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    request.extensions_mut().insert(state);
    next.run(request).await
}
