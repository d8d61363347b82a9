use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bloom_audit::events::AuditEvent;
use bloom_core::keys;
use bloom_core::models::answer::Answer;
use bloom_core::models::assessment::{Assessment, RiskLevel};
use bloom_screening::scoring::{score_answers, validate_answers};
use bloom_screening::triage::classify_risk;
use bloom_storage::documents;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Per-subject listings default to the most recent handful of records.
const DEFAULT_SUBJECT_LIMIT: usize = 10;

#[derive(Deserialize)]
pub struct SubmitRequest {
    pub answers: Vec<Answer>,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub id: Uuid,
    pub phq9_score: u32,
    pub pars_score: u32,
    pub risk_level: RiskLevel,
    pub completed_at: jiff::Timestamp,
}

/// Submit a completed screening. The answers are validated, scored, and
/// classified, then persisted as an immutable assessment record owned by
/// the authenticated student.
pub async fn submit_assessment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<SubmitRequest>,
) -> Result<(StatusCode, Json<SubmitResponse>), ApiError> {
    let errors = validate_answers(&req.answers);
    if let Some(first) = errors.first() {
        return Err(ApiError::BadRequest(format!(
            "invalid submission ({} problem(s)): {}",
            errors.len(),
            first
        )));
    }

    let scores = score_answers(&req.answers);
    let risk_level = classify_risk(scores.phq9, scores.pars);

    let assessment = Assessment {
        id: Uuid::new_v4(),
        user_id: auth.id,
        phq9_score: scores.phq9,
        pars_score: scores.pars,
        risk_level,
        answers: req.answers,
        completed_at: jiff::Timestamp::now(),
    };

    documents::save(
        &state.s3,
        &state.bucket,
        &keys::assessment(auth.id, assessment.id),
        &assessment,
    )
    .await?;

    AuditEvent::new("submit", "assessment", assessment.id.to_string(), auth.id)
        .with_details(serde_json::json!({ "risk_level": risk_level }))
        .emit();

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            id: assessment.id,
            phq9_score: assessment.phq9_score,
            pars_score: assessment.pars_score,
            risk_level: assessment.risk_level,
            completed_at: assessment.completed_at,
        }),
    ))
}

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// List assessments, newest first. Students may only list their own;
/// staff may list any subject's or the whole population's.
pub async fn list_assessments(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Assessment>>, ApiError> {
    let prefix = match query.user_id {
        Some(user_id) => {
            if !auth.can_access(user_id) {
                return Err(ApiError::Forbidden(
                    "cannot list another student's assessments".to_string(),
                ));
            }
            keys::user_assessments_prefix(user_id)
        }
        None => {
            if !auth.is_staff() {
                return Err(ApiError::Forbidden(
                    "population listing is staff-only".to_string(),
                ));
            }
            keys::ASSESSMENTS_PREFIX.to_string()
        }
    };

    let mut assessments: Vec<Assessment> =
        documents::load_all(&state.s3, &state.bucket, &prefix).await?;
    assessments.sort_by(|a, b| (b.completed_at, b.id).cmp(&(a.completed_at, a.id)));

    let limit = match (query.limit, query.user_id) {
        (Some(limit), _) => Some(limit),
        (None, Some(_)) => Some(DEFAULT_SUBJECT_LIMIT),
        (None, None) => None,
    };
    if let Some(limit) = limit {
        assessments.truncate(limit);
    }

    Ok(Json(assessments))
}

pub async fn get_assessment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((user_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Assessment>, ApiError> {
    if !auth.can_access(user_id) {
        return Err(ApiError::Forbidden(
            "cannot read another student's assessment".to_string(),
        ));
    }

    let (assessment, _etag): (Assessment, String) = documents::load(
        &state.s3,
        &state.bucket,
        &keys::assessment(user_id, id),
    )
    .await?;

    Ok(Json(assessment))
}
