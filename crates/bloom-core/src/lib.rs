//! bloom-core
//!
//! Pure domain types and S3 key conventions.
//! No AWS SDK dependency — this is the shared vocabulary of the Bloom system.

pub mod keys;
pub mod models;
