use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bloom_audit::events::AuditEvent;
use bloom_core::keys;
use bloom_core::models::booking::{Booking, BookingStatus};
use bloom_core::models::support::SupportProfile;
use bloom_core::models::user::{Role, User};
use bloom_storage::documents;
use bloom_storage::error::StorageError;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct BookingRow {
    pub id: Uuid,
    pub student_id: Uuid,
    pub student_name: Option<String>,
    pub student_email: Option<String>,
    pub staff_id: Uuid,
    pub staff_name: Option<String>,
    pub slot_id: Uuid,
    pub date: jiff::civil::Date,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
}

/// Bookings visible to the caller: students see their own sessions, support
/// staff see the sessions they booked, admins see everything.
pub async fn list_bookings(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<BookingRow>>, ApiError> {
    let mut bookings: Vec<Booking> =
        documents::load_all(&state.s3, &state.bucket, keys::BOOKINGS_PREFIX).await?;

    match auth.role {
        Role::Student => bookings.retain(|b| b.student_id == auth.id),
        Role::Support => bookings.retain(|b| b.staff_id == auth.id),
        Role::Admin => {}
    }

    bookings.sort_by(|a, b| (b.date, b.created_at).cmp(&(a.date, a.created_at)));

    let users: Vec<User> =
        documents::load_all(&state.s3, &state.bucket, keys::USERS_PREFIX).await?;
    let users_by_id: HashMap<Uuid, &User> = users.iter().map(|u| (u.id, u)).collect();

    let rows = bookings
        .into_iter()
        .map(|booking| BookingRow {
            student_name: users_by_id.get(&booking.student_id).map(|u| u.name.clone()),
            student_email: users_by_id
                .get(&booking.student_id)
                .map(|u| u.email.clone()),
            staff_name: users_by_id.get(&booking.staff_id).map(|u| u.name.clone()),
            id: booking.id,
            student_id: booking.student_id,
            staff_id: booking.staff_id,
            slot_id: booking.slot_id,
            date: booking.date,
            start_time: booking.start_time,
            end_time: booking.end_time,
            status: booking.status,
            notes: booking.notes,
            created_at: booking.created_at,
        })
        .collect();

    Ok(Json(rows))
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub student_id: Uuid,
    pub slot_id: Uuid,
    pub date: jiff::civil::Date,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Book a session with a student. Staff-only; the booker is the
/// authenticated staff member.
///
/// The slot flip on the student's support profile is a plain read-modify-
/// write with no precondition: two staff booking the same slot both
/// succeed and the last write wins, exactly as the product has always
/// behaved. `documents::save_if_match` is the fix if that ever changes —
/// see DESIGN.md.
pub async fn create_booking(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    if !auth.is_staff() {
        return Err(ApiError::Forbidden("booking is staff-only".to_string()));
    }
    if req.start_time.is_empty() || req.end_time.is_empty() {
        return Err(ApiError::BadRequest(
            "start_time and end_time are required".to_string(),
        ));
    }

    let booking = Booking {
        id: Uuid::new_v4(),
        student_id: req.student_id,
        staff_id: auth.id,
        slot_id: req.slot_id,
        date: req.date,
        start_time: req.start_time,
        end_time: req.end_time,
        status: BookingStatus::Scheduled,
        notes: req.notes,
        created_at: jiff::Timestamp::now(),
    };

    documents::save(
        &state.s3,
        &state.bucket,
        &keys::booking(booking.id),
        &booking,
    )
    .await?;

    mark_slot_booked(&state, req.student_id, req.slot_id, auth.id).await?;

    AuditEvent::new("create", "booking", booking.id.to_string(), auth.id)
        .with_details(serde_json::json!({ "student_id": booking.student_id }))
        .emit();

    Ok((StatusCode::CREATED, Json(booking)))
}

/// Flip `is_booked` on the matching slot of the student's support profile.
/// Missing profile or slot is logged and tolerated, matching the original
/// flow where the slot update was a silent no-op on mismatch.
async fn mark_slot_booked(
    state: &AppState,
    student_id: Uuid,
    slot_id: Uuid,
    staff_id: Uuid,
) -> Result<(), ApiError> {
    let key = keys::support_profile(student_id);

    let (mut profile, _etag): (SupportProfile, String) =
        match documents::load(&state.s3, &state.bucket, &key).await {
            Ok(loaded) => loaded,
            Err(StorageError::NotFound { .. }) => {
                tracing::warn!(%student_id, "booking created for student with no support profile");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

    match profile.available_slots.iter_mut().find(|s| s.id == slot_id) {
        Some(slot) => {
            slot.is_booked = true;
            slot.booked_by = Some(staff_id);
        }
        None => {
            tracing::warn!(%student_id, %slot_id, "booked slot not found on support profile");
            return Ok(());
        }
    }
    profile.updated_at = jiff::Timestamp::now();

    documents::save(&state.s3, &state.bucket, &key, &profile).await?;

    Ok(())
}
