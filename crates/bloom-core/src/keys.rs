//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of documents in the Bloom S3 bucket.

use uuid::Uuid;

pub fn user(id: Uuid) -> String {
    format!("users/{id}.json")
}

pub const USERS_PREFIX: &str = "users/";

/// Assessments live under a per-user prefix so that a single subject's
/// history and the full population scan are both prefix listings.
pub fn assessment(user_id: Uuid, id: Uuid) -> String {
    format!("assessments/{user_id}/{id}.json")
}

pub fn user_assessments_prefix(user_id: Uuid) -> String {
    format!("assessments/{user_id}/")
}

pub const ASSESSMENTS_PREFIX: &str = "assessments/";

pub fn chat_message(user_id: Uuid, id: Uuid) -> String {
    format!("chats/{user_id}/{id}.json")
}

pub fn user_chat_prefix(user_id: Uuid) -> String {
    format!("chats/{user_id}/")
}

/// One support profile per user, keyed by the user rather than the profile.
pub fn support_profile(user_id: Uuid) -> String {
    format!("support/{user_id}.json")
}

pub const SUPPORT_PREFIX: &str = "support/";

pub fn booking(id: Uuid) -> String {
    format!("bookings/{id}.json")
}

pub const BOOKINGS_PREFIX: &str = "bookings/";
