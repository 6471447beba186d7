// SPDX-License-Identifier: MIT

//! User registration, login, and profile routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_jwt, AuthUser};
use crate::models::User;
use crate::services::password;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Routes that issue tokens (no auth required).
pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/register", post(register))
        .route("/users/login", post(login))
}

/// Routes scoped to the authenticated user.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/users/profile", get(get_profile).put(update_profile))
}

// ─── Register ────────────────────────────────────────────────

#[derive(Deserialize)]
struct RegisterRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// Public user fields plus a fresh session token.
#[derive(Serialize)]
pub struct AuthResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub token: String,
}

/// Register a new account.
///
/// The password is hashed before anything is persisted; the uniqueness
/// check and the insert are the only two database operations.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    // Normalize once; the uniqueness lookup and the stored field must
    // see the same value or a padded variant slips past the check.
    let email = body.email.trim();

    if body.name.trim().is_empty() || email.is_empty() || body.password.is_empty() {
        return Err(AppError::BadRequest(
            "name, email and password are required".to_string(),
        ));
    }

    if state.db.get_user_by_email(email).await?.is_some() {
        return Err(AppError::DuplicateEmail);
    }

    let password_hash = password::hash_password(&body.password)?;

    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        name: body.name.trim().to_string(),
        email: email.to_string(),
        password_hash,
        created_at: chrono::Utc::now().to_rfc3339(),
    };
    state.db.upsert_user(&user).await?;

    tracing::info!(user_id = %user.id, "User registered");

    let token = create_jwt(&user.id, &state.config.jwt_signing_key)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            token,
        }),
    ))
}

// ─── Login ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// Log in with email and password.
///
/// Unknown email and wrong password produce the same error; neither the
/// email nor the comparison outcome is ever logged.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    if body.email.trim().is_empty() || body.password.is_empty() {
        return Err(AppError::BadRequest(
            "email and password are required".to_string(),
        ));
    }

    let user = state
        .db
        .get_user_by_email(body.email.trim())
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !password::verify_password(&body.password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    tracing::info!(user_id = %user.id, "User logged in");

    let token = create_jwt(&user.id, &state.config.jwt_signing_key)?;

    Ok(Json(AuthResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        token,
    }))
}

// ─── Profile ─────────────────────────────────────────────────

/// Public profile response.
#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Get the authenticated user's profile.
async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ProfileResponse>> {
    let profile = state
        .db
        .get_user(&user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(ProfileResponse {
        id: profile.id,
        name: profile.name,
        email: profile.email,
    }))
}

#[derive(Deserialize)]
struct UpdateProfileRequest {
    #[serde(default)]
    name: String,
}

/// Update the authenticated user's display name.
///
/// Email is immutable; the hash and created_at are carried over as-is.
async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>> {
    if body.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }

    let mut profile = state
        .db
        .get_user(&user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    profile.name = body.name.trim().to_string();
    state.db.upsert_user(&profile).await?;

    Ok(Json(ProfileResponse {
        id: profile.id,
        name: profile.name,
        email: profile.email,
    }))
}
