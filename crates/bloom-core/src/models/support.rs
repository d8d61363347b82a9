use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A student's peer-support registration: how they want to be contacted and
/// when they are available. One profile per user.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupportProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub preferred_contact: ContactMethod,
    pub available_slots: Vec<TimeSlot>,
    #[serde(default)]
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ContactMethod {
    Email,
    Phone,
    Video,
}

/// An availability window embedded in a [`SupportProfile`], mutated in place
/// when a staff member books it.
///
/// There is no version field on the profile document, so two concurrent
/// bookings of the same slot both succeed and the last write wins. Known
/// gap — see DESIGN.md; `bloom_storage::objects::put_object_if_match` is
/// the primitive a fix would use.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimeSlot {
    pub id: Uuid,
    pub date: jiff::civil::Date,
    /// Wall-clock labels like "14:00"; display-only, never compared.
    pub start_time: String,
    pub end_time: String,
    pub is_booked: bool,
    #[serde(default)]
    pub booked_by: Option<Uuid>,
}
