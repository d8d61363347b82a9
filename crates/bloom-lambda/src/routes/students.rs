use std::collections::HashMap;

use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;
use uuid::Uuid;

use bloom_core::keys;
use bloom_core::models::assessment::{Assessment, RiskLevel};
use bloom_core::models::support::{ContactMethod, SupportProfile, TimeSlot};
use bloom_core::models::user::{Role, User};
use bloom_screening::analytics::latest_assessment;
use bloom_storage::documents;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct StudentRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub last_assessment: Option<jiff::Timestamp>,
    pub phq9_score: u32,
    pub pars_score: u32,
    pub risk_level: RiskLevel,
    pub total_assessments: usize,
}

/// The staff roster: every student with their latest scores and stored
/// triage level. A student with no assessments shows zero scores and low
/// risk — the same absence-reads-as-wellness policy the analytics use.
pub async fn list_students(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<StudentRow>>, ApiError> {
    if !auth.is_staff() {
        return Err(ApiError::Forbidden("roster is staff-only".to_string()));
    }

    let users: Vec<User> =
        documents::load_all(&state.s3, &state.bucket, keys::USERS_PREFIX).await?;
    let by_user = load_assessments_by_user(&state).await?;

    let rows = users
        .iter()
        .filter(|u| u.role == Role::Student)
        .map(|student| {
            let history = by_user.get(&student.id).map(Vec::as_slice).unwrap_or(&[]);
            let latest = latest_assessment(history);

            StudentRow {
                id: student.id,
                name: student.name.clone(),
                email: student.email.clone(),
                last_assessment: latest.map(|a| a.completed_at),
                phq9_score: latest.map(|a| a.phq9_score).unwrap_or(0),
                pars_score: latest.map(|a| a.pars_score).unwrap_or(0),
                risk_level: latest.map(|a| a.risk_level).unwrap_or(RiskLevel::Low),
                total_assessments: history.len(),
            }
        })
        .collect();

    Ok(Json(rows))
}

#[derive(Serialize)]
pub struct AvailableStudentRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub risk_level: RiskLevel,
    pub last_assessment: Option<jiff::Timestamp>,
    pub phq9_score: u32,
    pub pars_score: u32,
    pub preferred_contact: ContactMethod,
    pub available_slots: Vec<TimeSlot>,
    pub notes: Option<String>,
}

/// Students with an active peer-support registration, with their slots and
/// latest risk picture — what staff browse when scheduling outreach.
pub async fn list_available_students(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<AvailableStudentRow>>, ApiError> {
    if !auth.is_staff() {
        return Err(ApiError::Forbidden(
            "support listings are staff-only".to_string(),
        ));
    }

    let profiles: Vec<SupportProfile> =
        documents::load_all(&state.s3, &state.bucket, keys::SUPPORT_PREFIX).await?;
    let users: Vec<User> =
        documents::load_all(&state.s3, &state.bucket, keys::USERS_PREFIX).await?;
    let users_by_id: HashMap<Uuid, &User> = users.iter().map(|u| (u.id, u)).collect();
    let by_user = load_assessments_by_user(&state).await?;

    let mut rows = Vec::new();
    for profile in profiles.iter().filter(|p| p.is_active) {
        // A profile whose user record is gone is an orphan; skip it.
        let Some(user) = users_by_id.get(&profile.user_id) else {
            tracing::warn!(user_id = %profile.user_id, "support profile without user record");
            continue;
        };

        let history = by_user.get(&profile.user_id).map(Vec::as_slice).unwrap_or(&[]);
        let latest = latest_assessment(history);

        rows.push(AvailableStudentRow {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            risk_level: latest.map(|a| a.risk_level).unwrap_or(RiskLevel::Low),
            last_assessment: latest.map(|a| a.completed_at),
            phq9_score: latest.map(|a| a.phq9_score).unwrap_or(0),
            pars_score: latest.map(|a| a.pars_score).unwrap_or(0),
            preferred_contact: profile.preferred_contact,
            available_slots: profile.available_slots.clone(),
            notes: profile.notes.clone(),
        });
    }

    Ok(Json(rows))
}

async fn load_assessments_by_user(
    state: &AppState,
) -> Result<HashMap<Uuid, Vec<Assessment>>, ApiError> {
    let assessments: Vec<Assessment> =
        documents::load_all(&state.s3, &state.bucket, keys::ASSESSMENTS_PREFIX).await?;

    let mut by_user: HashMap<Uuid, Vec<Assessment>> = HashMap::new();
    for assessment in assessments {
        by_user.entry(assessment.user_id).or_default().push(assessment);
    }

    Ok(by_user)
}
