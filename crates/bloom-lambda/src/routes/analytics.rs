use axum::extract::State;
use axum::{Extension, Json};

use bloom_core::keys;
use bloom_core::models::assessment::Assessment;
use bloom_core::models::user::{Role, User};
use bloom_screening::analytics::{summarize_population, PopulationSummary};
use bloom_storage::documents;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Population risk summary for the staff dashboard: distribution over the
/// triage levels (latest assessment per student), mean subscale scores, and
/// the 7-day submission count.
pub async fn get_analytics(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<PopulationSummary>, ApiError> {
    if !auth.is_staff() {
        return Err(ApiError::Forbidden("analytics are staff-only".to_string()));
    }

    let users: Vec<User> =
        documents::load_all(&state.s3, &state.bucket, keys::USERS_PREFIX).await?;
    let total_students = users.iter().filter(|u| u.role == Role::Student).count();

    let assessments: Vec<Assessment> =
        documents::load_all(&state.s3, &state.bucket, keys::ASSESSMENTS_PREFIX).await?;

    let summary = summarize_population(total_students, &assessments, jiff::Timestamp::now());

    Ok(Json(summary))
}
