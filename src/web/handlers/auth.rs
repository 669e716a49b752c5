//! Authentication and profile handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::str::FromStr;
use std::sync::Arc;
use validator::Validate;

use crate::auth::{hash_password, verify_password, PermissionError};
use crate::db::{NewUser, Role, UserRepository, UserUpdate};
use crate::notification::NotificationRepository;
use crate::web::dto::{
    ApiResponse, AuthResponse, LoginRequest, MeResponse, RegisterRequest, UpdateDetailsRequest,
    UpdatePasswordRequest, UserInfo,
};
use crate::web::error::ApiError;
use crate::web::middleware::CurrentUser;

use super::AppState;

/// POST /api/auth/register - User registration.
///
/// Students are active immediately. Mentors are recorded as pending:
/// the registration token lets them view their own profile and
/// notifications, but mentor functionality and future logins stay
/// closed until an admin approves them.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), ApiError> {
    req.validate().map_err(ApiError::from_validation_errors)?;

    let role = Role::from_str(&req.role)
        .map_err(|_| ApiError::bad_request("Role must be either student or mentor"))?;
    if role == Role::Admin {
        return Err(ApiError::bad_request(
            "Role must be either student or mentor",
        ));
    }

    let repo = UserRepository::new(state.db.pool());
    if repo.email_exists(&req.email).await? {
        return Err(ApiError::bad_request("User with this email already exists"));
    }

    let password_hash =
        hash_password(&req.password).map_err(|_| ApiError::internal("Failed to hash password"))?;

    let mut new_user = NewUser::new(&req.name, &req.email, password_hash).with_role(role);
    if let Some(ref phone) = req.phone {
        new_user = new_user.with_phone(phone);
    }
    if let Some(ref bio) = req.bio {
        new_user = new_user.with_bio(bio);
    }
    if let Some(ref class_level) = req.class_level {
        new_user = new_user.with_class_level(class_level);
    }
    if let Some(ref stream) = req.stream {
        new_user = new_user.with_stream(stream);
    }
    if let Some(ref school_board) = req.school_board {
        new_user = new_user.with_school_board(school_board);
    }
    if let Some(ref school) = req.school {
        new_user = new_user.with_school(school);
    }
    if let Some(ref subjects) = req.subjects {
        new_user = new_user.with_subjects(subjects);
    }
    if let Some(ref target_exams) = req.target_exams {
        new_user = new_user.with_target_exams(target_exams);
    }
    if let Some(ref learning_goals) = req.learning_goals {
        new_user = new_user.with_learning_goals(learning_goals);
    }
    if let Some(ref specializations) = req.specializations {
        new_user = new_user.with_specializations(specializations);
    }
    if let Some(years) = req.experience_years {
        new_user = new_user.with_experience_years(years);
    }
    if let Some(ref education) = req.education {
        new_user = new_user.with_education(education);
    }
    if let Some(ref achievements) = req.achievements {
        new_user = new_user.with_achievements(achievements);
    }
    if let Some(ref timezone) = req.timezone {
        new_user = new_user.with_timezone(timezone);
    }

    let user = repo.create(&new_user).await.map_err(|e| {
        // Concurrent registration can slip past the email_exists check;
        // the unique index catches it here.
        if e.to_string().contains("UNIQUE") {
            ApiError::bad_request("User with this email already exists")
        } else {
            tracing::error!("User creation failed: {}", e);
            ApiError::internal("Failed to create user")
        }
    })?;

    let token = state.issuer.issue(user.id, &user.role)?;

    tracing::info!(user_id = user.id, role = %user.role, "User registered");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(AuthResponse {
            token,
            role: user.role.as_str().to_string(),
            is_approved: user.is_approved,
            user: (&user).into(),
        })),
    ))
}

/// POST /api/auth/login - User login.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let repo = UserRepository::new(state.db.pool());
    let user = repo
        .get_by_email(&req.email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    verify_password(&req.password, &user.password)
        .map_err(|_| ApiError::unauthorized("Invalid email or password"))?;

    // Pending mentors authenticate but are refused a session
    if user.is_pending_mentor() {
        return Err(PermissionError::PendingApproval.into());
    }

    let token = state.issuer.issue(user.id, &user.role)?;

    if let Err(e) = repo.update_last_login(user.id).await {
        tracing::warn!(user_id = user.id, error = %e, "Failed to update last login");
    }

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");
    Ok(Json(ApiResponse::new(AuthResponse {
        token,
        role: user.role.as_str().to_string(),
        is_approved: user.is_approved,
        user: (&user).into(),
    })))
}

/// GET /api/auth/me - Current user profile.
pub async fn me(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ApiResponse<MeResponse>>, ApiError> {
    let unread_notifications = NotificationRepository::new(state.db.pool())
        .count_unread(user.id)
        .await?;

    Ok(Json(ApiResponse::new(MeResponse {
        user: (&user).into(),
        unread_notifications,
    })))
}

/// PUT /api/auth/updatedetails - Update the current user's profile.
pub async fn update_details(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<UpdateDetailsRequest>,
) -> Result<Json<ApiResponse<UserInfo>>, ApiError> {
    let mut update = UserUpdate::new();
    if let Some(name) = req.name {
        if name.trim().is_empty() {
            return Err(ApiError::bad_request("Name is required"));
        }
        update = update.name(name);
    }
    if let Some(phone) = req.phone {
        update = update.phone(Some(phone));
    }
    if let Some(bio) = req.bio {
        update = update.bio(Some(bio));
    }
    if let Some(address) = req.address {
        update = update.address(Some(address));
    }
    if let Some(profile_image) = req.profile_image {
        update = update.profile_image(Some(profile_image));
    }
    if let Some(class_level) = req.class_level {
        update = update.class_level(Some(class_level));
    }
    if let Some(stream) = req.stream {
        update = update.stream(Some(stream));
    }
    if let Some(school_board) = req.school_board {
        update = update.school_board(Some(school_board));
    }
    if let Some(school) = req.school {
        update = update.school(Some(school));
    }
    if let Some(subjects) = req.subjects {
        update = update.subjects(Some(subjects));
    }
    if let Some(target_exams) = req.target_exams {
        update = update.target_exams(Some(target_exams));
    }
    if let Some(learning_goals) = req.learning_goals {
        update = update.learning_goals(Some(learning_goals));
    }
    if let Some(specializations) = req.specializations {
        update = update.specializations(Some(specializations));
    }
    if let Some(years) = req.experience_years {
        update = update.experience_years(Some(years));
    }
    if let Some(education) = req.education {
        update = update.education(Some(education));
    }
    if let Some(achievements) = req.achievements {
        update = update.achievements(Some(achievements));
    }
    if let Some(timezone) = req.timezone {
        update = update.timezone(Some(timezone));
    }

    let repo = UserRepository::new(state.db.pool());
    let updated = repo
        .update(user.id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(ApiResponse::new((&updated).into())))
}

/// PUT /api/auth/updatepassword - Change the current user's password.
///
/// Re-checks the current password before changing it and issues a fresh
/// token; outstanding tokens stay valid until they expire.
pub async fn update_password(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<UpdatePasswordRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate().map_err(ApiError::from_validation_errors)?;

    verify_password(&req.current_password, &user.password)
        .map_err(|_| ApiError::unauthorized("Current password is incorrect"))?;

    let password_hash = hash_password(&req.new_password)
        .map_err(|_| ApiError::internal("Failed to hash password"))?;

    let repo = UserRepository::new(state.db.pool());
    let updated = repo
        .update(user.id, &UserUpdate::new().password(password_hash))
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let token = state.issuer.issue(updated.id, &updated.role)?;

    tracing::info!(user_id = updated.id, "Password changed");
    Ok(Json(ApiResponse::new(AuthResponse {
        token,
        role: updated.role.as_str().to_string(),
        is_approved: updated.is_approved,
        user: (&updated).into(),
    })))
}
