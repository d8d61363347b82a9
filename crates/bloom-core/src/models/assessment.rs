use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::Answer;

/// A completed screening submission. Immutable once written — there is no
/// update or delete path, so historical records keep the risk classification
/// that was in effect when they were created.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub phq9_score: u32,
    pub pars_score: u32,
    pub risk_level: RiskLevel,
    pub answers: Vec<Answer>,
    pub completed_at: jiff::Timestamp,
}

/// Staff-triage risk label, computed at write time from the two subscale
/// scores. Never re-derived at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}
