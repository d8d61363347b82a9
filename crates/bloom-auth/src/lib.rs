//! bloom-auth
//!
//! Credential handling: Argon2 password hashing and HS256 session tokens.
//! Sessions are explicit server-issued JWTs carried in the Authorization
//! header — there is no ambient session state anywhere in the system.

pub mod error;
pub mod jwt;
pub mod password;
