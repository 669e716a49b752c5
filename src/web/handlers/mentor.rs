//! Mentor directory and approval handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::auth::{approval, authorize, ensure_mentor_active, require_admin};
use crate::db::{Role, UserRepository, UserUpdate};
use crate::web::dto::{
    ApiResponse, MentorInfo, RejectRequest, UpdateAvailabilityRequest, UserInfo,
};
use crate::web::error::ApiError;
use crate::web::middleware::{CurrentUser, OptionalAuthUser};

use super::AppState;

/// GET /api/mentors - List approved mentors.
///
/// Public endpoint; only approved mentors appear here.
pub async fn list_mentors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<MentorInfo>>>, ApiError> {
    let mentors = UserRepository::new(state.db.pool())
        .list_approved_mentors()
        .await?;

    let infos: Vec<MentorInfo> = mentors.iter().map(MentorInfo::from).collect();
    Ok(Json(ApiResponse::new(infos)))
}

/// GET /api/mentors/:id - Get a single mentor profile.
///
/// Public for approved mentors. A pending mentor's profile is visible
/// only to an admin or to the mentor themself; everyone else gets the
/// same 404 as for an id that does not exist.
pub async fn get_mentor(
    State(state): State<Arc<AppState>>,
    OptionalAuthUser(claims): OptionalAuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MentorInfo>>, ApiError> {
    let user = UserRepository::new(state.db.pool())
        .get_by_id(id)
        .await?
        .filter(|u| u.is_mentor())
        .ok_or_else(|| ApiError::not_found("Mentor not found"))?;

    if !user.is_approved {
        let allowed = claims
            .as_ref()
            .map(|c| c.sub == id || c.role == "admin")
            .unwrap_or(false);
        if !allowed {
            return Err(ApiError::not_found("Mentor not found"));
        }
    }

    Ok(Json(ApiResponse::new(MentorInfo::from(&user))))
}

/// GET /api/mentors/pending - List mentors awaiting approval.
///
/// Admin only. Returns full profiles, oldest application first.
pub async fn list_pending_mentors(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ApiResponse<Vec<UserInfo>>>, ApiError> {
    require_admin(&user)?;

    let pending = UserRepository::new(state.db.pool())
        .list_pending_mentors()
        .await?;

    let infos: Vec<UserInfo> = pending.iter().map(UserInfo::from).collect();
    Ok(Json(ApiResponse::new(infos)))
}

/// PUT /api/mentors/:id/approve - Approve a pending mentor.
///
/// Admin only.
pub async fn approve_mentor(
    State(state): State<Arc<AppState>>,
    CurrentUser(admin): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<UserInfo>>, ApiError> {
    require_admin(&admin)?;

    let approved = approval::approve_mentor(state.db.pool(), id, admin.id).await?;
    Ok(Json(ApiResponse::new(UserInfo::from(&approved))))
}

/// PUT /api/mentors/:id/reject - Reject a pending mentor.
///
/// Admin only. Deletes the application; only the rejection notification
/// survives.
pub async fn reject_mentor(
    State(state): State<Arc<AppState>>,
    CurrentUser(admin): CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<RejectRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    require_admin(&admin)?;

    approval::reject_mentor(state.db.pool(), id, admin.id, &req.reason).await?;
    Ok(Json(ApiResponse::new(())))
}

/// PUT /api/mentors/availability - Update own availability status.
///
/// Approved mentors only.
pub async fn update_availability(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<UpdateAvailabilityRequest>,
) -> Result<Json<ApiResponse<MentorInfo>>, ApiError> {
    authorize(&user, &[Role::Mentor])?;
    ensure_mentor_active(&user)?;

    let updated = UserRepository::new(state.db.pool())
        .update(user.id, &UserUpdate::new().availability(req.availability))
        .await?
        .ok_or_else(|| ApiError::not_found("Mentor not found"))?;

    Ok(Json(ApiResponse::new(MentorInfo::from(&updated))))
}
