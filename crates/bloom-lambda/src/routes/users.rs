use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use bloom_core::keys;
use bloom_core::models::user::{PublicUser, Role, User};
use bloom_storage::documents;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub role: Option<Role>,
}

pub async fn list_users(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<PublicUser>>, ApiError> {
    if !auth.is_staff() {
        return Err(ApiError::Forbidden("user listing is staff-only".to_string()));
    }

    let mut users: Vec<User> =
        documents::load_all(&state.s3, &state.bucket, keys::USERS_PREFIX).await?;

    if let Some(role) = query.role {
        users.retain(|u| u.role == role);
    }
    users.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(Json(users.iter().map(PublicUser::from).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<PublicUser>, ApiError> {
    if !auth.can_access(id) {
        return Err(ApiError::Forbidden(
            "cannot read another user's record".to_string(),
        ));
    }

    let (user, _etag): (User, String) =
        documents::load(&state.s3, &state.bucket, &keys::user(id)).await?;

    Ok(Json(PublicUser::from(&user)))
}
