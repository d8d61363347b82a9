//! bloom-audit
//!
//! Structured audit events for sensitive actions (assessment submissions,
//! bookings, support-profile changes). Emitted via `tracing` so they land in
//! CloudWatch Logs with the rest of the service's JSON output.

pub mod events;
