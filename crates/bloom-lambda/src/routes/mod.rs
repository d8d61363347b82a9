pub mod analytics;
pub mod assessments;
pub mod auth;
pub mod bookings;
pub mod chat;
pub mod health;
pub mod questions;
pub mod reports;
pub mod students;
pub mod support;
pub mod users;
