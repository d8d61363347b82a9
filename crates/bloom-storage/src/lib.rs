//! bloom-storage
//!
//! S3 operations. Thin wrapper around the AWS S3 SDK; every Bloom record is
//! a JSON document under a key prefix defined in `bloom_core::keys`.

pub mod client;
pub mod documents;
pub mod error;
pub mod objects;
