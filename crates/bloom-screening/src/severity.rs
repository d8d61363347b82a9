//! Subject-facing severity bands.
//!
//! These labels appear on the student's own report. They use different
//! numeric cutoffs from the triage thresholds in [`crate::triage`] — the
//! asymmetry is intentional, so the two are kept as separately named and
//! separately tested functions.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    #[serde(rename = "Moderately Severe")]
    ModeratelySevere,
    Severe,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::ModeratelySevere => "Moderately Severe",
            Self::Severe => "Severe",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// PHQ-9 interpretation. Total over all non-negative inputs; tops out at
/// "Moderately Severe" on this shortened item set.
pub fn depression_severity(phq9_score: u32) -> Severity {
    if phq9_score >= 15 {
        Severity::ModeratelySevere
    } else if phq9_score >= 10 {
        Severity::Moderate
    } else if phq9_score >= 5 {
        Severity::Mild
    } else {
        Severity::Minimal
    }
}

/// PARS interpretation. Same cut points as the depression band except the
/// top band reads "Severe".
pub fn anxiety_severity(pars_score: u32) -> Severity {
    if pars_score >= 15 {
        Severity::Severe
    } else if pars_score >= 10 {
        Severity::Moderate
    } else if pars_score >= 5 {
        Severity::Mild
    } else {
        Severity::Minimal
    }
}
