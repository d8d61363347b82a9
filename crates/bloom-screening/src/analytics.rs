//! Population-level risk reporting.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use bloom_core::models::assessment::{Assessment, RiskLevel};

/// The population summary shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PopulationSummary {
    pub total_students: usize,
    pub risk_distribution: RiskDistribution,
    pub average_scores: AverageScores,
    /// Assessments completed within the trailing 7-day window.
    pub recent_assessments: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskDistribution {
    pub low: usize,
    pub moderate: usize,
    pub high: usize,
}

/// Mean subscale scores over the latest assessment of each student who has
/// one, rounded to the nearest integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AverageScores {
    pub phq9: u32,
    pub pars: u32,
}

/// Summarize the population's risk picture from every stored assessment.
///
/// The distribution and the averages consider only each student's latest
/// assessment (maximum `completed_at`; equal timestamps break to the larger
/// assessment id, so the selection is deterministic). Students with no
/// assessment on record are counted toward `low` — a product policy, not a
/// statistical one: absence of data is displayed as absence of risk.
/// Averages divide by the number of students **with** data and are 0 when
/// nobody has any. `recent_assessments` counts every assessment (not just
/// latest-per-student) completed in the 7 days before `now`.
pub fn summarize_population(
    total_students: usize,
    assessments: &[Assessment],
    now: jiff::Timestamp,
) -> PopulationSummary {
    let mut latest: HashMap<Uuid, &Assessment> = HashMap::new();
    for assessment in assessments {
        match latest.get(&assessment.user_id) {
            Some(current)
                if (current.completed_at, current.id)
                    >= (assessment.completed_at, assessment.id) => {}
            _ => {
                latest.insert(assessment.user_id, assessment);
            }
        }
    }

    let mut risk_distribution = RiskDistribution {
        low: 0,
        moderate: 0,
        high: 0,
    };
    let mut phq9_total: u64 = 0;
    let mut pars_total: u64 = 0;

    for assessment in latest.values() {
        match assessment.risk_level {
            RiskLevel::Low => risk_distribution.low += 1,
            RiskLevel::Moderate => risk_distribution.moderate += 1,
            RiskLevel::High => risk_distribution.high += 1,
        }
        phq9_total += u64::from(assessment.phq9_score);
        pars_total += u64::from(assessment.pars_score);
    }

    // Students who never took the screening land in the `low` bucket.
    let assessed = latest.len();
    risk_distribution.low += total_students.saturating_sub(assessed);

    let average_scores = if assessed > 0 {
        AverageScores {
            phq9: (phq9_total as f64 / assessed as f64).round() as u32,
            pars: (pars_total as f64 / assessed as f64).round() as u32,
        }
    } else {
        AverageScores { phq9: 0, pars: 0 }
    };

    let window_start = now
        .checked_sub(jiff::SignedDuration::from_hours(24 * 7))
        .unwrap_or(jiff::Timestamp::MIN);
    let recent_assessments = assessments
        .iter()
        .filter(|a| a.completed_at >= window_start)
        .count();

    PopulationSummary {
        total_students,
        risk_distribution,
        average_scores,
        recent_assessments,
    }
}

/// Pick the latest assessment from one student's records, using the same
/// deterministic ordering as [`summarize_population`].
pub fn latest_assessment(assessments: &[Assessment]) -> Option<&Assessment> {
    assessments.iter().max_by_key(|a| (a.completed_at, a.id))
}
