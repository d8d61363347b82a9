use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Booking {
    pub id: Uuid,
    pub student_id: Uuid,
    pub staff_id: Uuid,
    /// The [`super::support::TimeSlot`] this booking claimed.
    pub slot_id: Uuid,
    pub date: jiff::civil::Date,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BookingStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}
