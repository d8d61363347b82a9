use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bloom_auth::{jwt, password};
use bloom_core::keys;
use bloom_core::models::user::{PublicUser, Role, User};
use bloom_storage::documents;

use crate::error::ApiError;
use crate::state::AppState;

/// Session tokens live for 24 hours; the client re-authenticates after that.
const TOKEN_TTL_SECONDS: u64 = 60 * 60 * 24;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub user: PublicUser,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    if req.email.trim().is_empty() || req.password.is_empty() || req.name.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "email, password, and name are required".to_string(),
        ));
    }

    let email = req.email.trim().to_lowercase();

    if find_by_email(&state, &email).await?.is_some() {
        return Err(ApiError::Conflict(
            "user already exists with this email".to_string(),
        ));
    }

    let password_hash = password::hash_password(&req.password)?;

    let now = jiff::Timestamp::now();
    let user = User {
        id: Uuid::new_v4(),
        email,
        name: req.name.trim().to_string(),
        role: req.role.unwrap_or(Role::Student),
        password_hash,
        created_at: now,
        updated_at: now,
    };

    documents::save(&state.s3, &state.bucket, &keys::user(user.id), &user).await?;

    tracing::info!(user_id = %user.id, role = ?user.role, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: PublicUser::from(&user),
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest(
            "email and password are required".to_string(),
        ));
    }

    let email = req.email.trim().to_lowercase();

    // One 401 for both unknown email and bad password.
    let user = find_by_email(&state, &email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("invalid credentials".to_string()))?;

    if !password::verify_password(&req.password, &user.password_hash)? {
        return Err(ApiError::Unauthorized("invalid credentials".to_string()));
    }

    let token = jwt::issue_token(&user, state.jwt_secret.as_bytes(), TOKEN_TTL_SECONDS)?;

    Ok(Json(LoginResponse {
        token,
        user: PublicUser::from(&user),
    }))
}

/// Scan the users prefix for a matching email. The user set is small enough
/// that a prefix scan beats maintaining a secondary index document.
pub async fn find_by_email(state: &AppState, email: &str) -> Result<Option<User>, ApiError> {
    let users: Vec<User> =
        documents::load_all(&state.s3, &state.bucket, keys::USERS_PREFIX).await?;
    Ok(users.into_iter().find(|u| u.email == email))
}
