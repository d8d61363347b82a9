use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Serialize;
use uuid::Uuid;

use bloom_core::keys;
use bloom_core::models::assessment::Assessment;
use bloom_screening::analytics::latest_assessment;
use bloom_screening::recommendations::{activities, music_tracks, Activity, MusicTrack};
use bloom_screening::severity::{anxiety_severity, depression_severity, Severity};
use bloom_storage::documents;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ReportResponse {
    pub assessment: Assessment,
    /// Subject-facing bands — computed from the stored scores with the
    /// display cutoffs, never from the triage thresholds.
    pub depression_severity: Severity,
    pub anxiety_severity: Severity,
    pub activities: Vec<Activity>,
    pub music: Vec<MusicTrack>,
}

/// The student-facing report: the latest assessment with severity labels
/// and the self-care catalog. The stored triage level rides along inside
/// the assessment record but is not recomputed here.
pub async fn get_report(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ReportResponse>, ApiError> {
    if !auth.can_access(user_id) {
        return Err(ApiError::Forbidden(
            "cannot read another student's report".to_string(),
        ));
    }

    let assessments: Vec<Assessment> = documents::load_all(
        &state.s3,
        &state.bucket,
        &keys::user_assessments_prefix(user_id),
    )
    .await?;

    let latest = latest_assessment(&assessments)
        .ok_or_else(|| ApiError::NotFound("no assessments on record".to_string()))?;

    Ok(Json(ReportResponse {
        depression_severity: depression_severity(latest.phq9_score),
        anxiety_severity: anxiety_severity(latest.pars_score),
        activities: activities().to_vec(),
        music: music_tracks().to_vec(),
        assessment: latest.clone(),
    }))
}
