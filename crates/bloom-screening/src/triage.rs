//! Staff-triage risk classification.

use bloom_core::models::assessment::RiskLevel;

/// Map the two subscale totals to the three-level triage label used to
/// prioritize staff outreach.
///
/// Checks are evaluated high → moderate → low and the first match wins,
/// which is equivalent to taking the maximum of the two per-subscale
/// classifications since the bands nest.
///
/// These cutoffs are deliberately not the same as the subject-facing
/// severity bands in [`crate::severity`] — the two threshold sets serve
/// different audiences and must stay independent.
pub fn classify_risk(phq9_score: u32, pars_score: u32) -> RiskLevel {
    if phq9_score >= 15 || pars_score >= 20 {
        RiskLevel::High
    } else if phq9_score >= 10 || pars_score >= 15 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}
