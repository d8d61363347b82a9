use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use bloom_core::models::user::Role;

use crate::state::AppState;

/// JWT validation middleware.
///
/// Extracts the `Authorization: Bearer <token>` header, validates the HS256
/// signature and expiry, and inserts [`AuthUser`] into request extensions
/// for handlers to use. Identity always comes from the token — handlers
/// never trust a caller-supplied user id for authorization decisions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = bloom_auth::jwt::validate_token(token, state.jwt_secret.as_bytes())
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let id: Uuid = claims.sub.parse().map_err(|_| StatusCode::UNAUTHORIZED)?;

    req.extensions_mut().insert(AuthUser {
        id,
        email: claims.email,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

/// Authenticated user extracted from JWT claims.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

impl AuthUser {
    pub fn is_staff(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Support)
    }

    /// Owner-or-staff check used by the per-subject read routes.
    pub fn can_access(&self, subject_id: Uuid) -> bool {
        self.id == subject_id || self.is_staff()
    }
}
