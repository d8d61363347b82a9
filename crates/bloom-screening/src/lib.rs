//! bloom-screening
//!
//! The PHQ-9/PARS screening engine: question bank, answer scoring, risk
//! classification, severity bands, population analytics, and the
//! recommendation catalog. Pure functions over domain types — no I/O.

pub mod analytics;
pub mod questions;
pub mod recommendations;
pub mod scoring;
pub mod severity;
pub mod triage;
