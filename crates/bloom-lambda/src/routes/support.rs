use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bloom_audit::events::AuditEvent;
use bloom_core::keys;
use bloom_core::models::support::{ContactMethod, SupportProfile, TimeSlot};
use bloom_storage::documents;
use bloom_storage::error::StorageError;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SupportStatusResponse {
    pub is_registered: bool,
    pub profile: Option<SupportProfile>,
}

pub async fn get_registration(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<SupportStatusResponse>, ApiError> {
    if !auth.can_access(user_id) {
        return Err(ApiError::Forbidden(
            "cannot read another student's support registration".to_string(),
        ));
    }

    match documents::load::<SupportProfile>(
        &state.s3,
        &state.bucket,
        &keys::support_profile(user_id),
    )
    .await
    {
        Ok((profile, _etag)) => Ok(Json(SupportStatusResponse {
            is_registered: true,
            profile: Some(profile),
        })),
        Err(StorageError::NotFound { .. }) => Ok(Json(SupportStatusResponse {
            is_registered: false,
            profile: None,
        })),
        Err(e) => Err(e.into()),
    }
}

#[derive(Deserialize)]
pub struct SlotRequest {
    pub date: jiff::civil::Date,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Deserialize)]
pub struct RegisterSupportRequest {
    pub preferred_contact: ContactMethod,
    #[serde(default)]
    pub available_slots: Vec<SlotRequest>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Register the authenticated student for peer support.
pub async fn register(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<RegisterSupportRequest>,
) -> Result<(StatusCode, Json<SupportProfile>), ApiError> {
    let key = keys::support_profile(auth.id);

    match documents::load::<SupportProfile>(&state.s3, &state.bucket, &key).await {
        Ok(_) => {
            return Err(ApiError::Conflict(
                "already registered for support".to_string(),
            ));
        }
        Err(StorageError::NotFound { .. }) => {}
        Err(e) => return Err(e.into()),
    }

    let now = jiff::Timestamp::now();
    let profile = SupportProfile {
        id: Uuid::new_v4(),
        user_id: auth.id,
        preferred_contact: req.preferred_contact,
        available_slots: req
            .available_slots
            .into_iter()
            .map(|slot| TimeSlot {
                id: Uuid::new_v4(),
                date: slot.date,
                start_time: slot.start_time,
                end_time: slot.end_time,
                is_booked: false,
                booked_by: None,
            })
            .collect(),
        notes: req.notes,
        is_active: true,
        created_at: now,
        updated_at: now,
    };

    documents::save(&state.s3, &state.bucket, &key, &profile).await?;

    AuditEvent::new("register", "support_profile", profile.id.to_string(), auth.id).emit();

    Ok((StatusCode::CREATED, Json(profile)))
}

#[derive(Deserialize)]
pub struct UpdateSupportRequest {
    #[serde(default)]
    pub preferred_contact: Option<ContactMethod>,
    #[serde(default)]
    pub available_slots: Option<Vec<SlotRequest>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Partial update of a support registration. Replacing the slot list
/// resets booking state — slots are availability declarations, not
/// booking records (those live on the bookings themselves).
pub async fn update_registration(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<UpdateSupportRequest>,
) -> Result<Json<SupportProfile>, ApiError> {
    if !auth.can_access(user_id) {
        return Err(ApiError::Forbidden(
            "cannot update another student's support registration".to_string(),
        ));
    }

    let key = keys::support_profile(user_id);
    let (mut profile, _etag): (SupportProfile, String) =
        documents::load(&state.s3, &state.bucket, &key).await?;

    if let Some(preferred_contact) = req.preferred_contact {
        profile.preferred_contact = preferred_contact;
    }
    if let Some(slots) = req.available_slots {
        profile.available_slots = slots
            .into_iter()
            .map(|slot| TimeSlot {
                id: Uuid::new_v4(),
                date: slot.date,
                start_time: slot.start_time,
                end_time: slot.end_time,
                is_booked: false,
                booked_by: None,
            })
            .collect();
    }
    if let Some(notes) = req.notes {
        profile.notes = Some(notes);
    }
    if let Some(is_active) = req.is_active {
        profile.is_active = is_active;
    }
    profile.updated_at = jiff::Timestamp::now();

    documents::save(&state.s3, &state.bucket, &key, &profile).await?;

    AuditEvent::new("update", "support_profile", profile.id.to_string(), auth.id).emit();

    Ok(Json(profile))
}
