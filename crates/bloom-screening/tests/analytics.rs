use jiff::Timestamp;
use uuid::Uuid;

use bloom_core::models::assessment::{Assessment, RiskLevel};
use bloom_screening::analytics::{latest_assessment, summarize_population};

fn ts(s: &str) -> Timestamp {
    s.parse().expect("valid timestamp")
}

fn assessment(
    user_id: Uuid,
    phq9: u32,
    pars: u32,
    risk: RiskLevel,
    completed_at: &str,
) -> Assessment {
    Assessment {
        id: Uuid::new_v4(),
        user_id,
        phq9_score: phq9,
        pars_score: pars,
        risk_level: risk,
        answers: Vec::new(),
        completed_at: ts(completed_at),
    }
}

const NOW: &str = "2026-08-05T12:00:00Z";

#[test]
fn empty_population_summary_is_all_zeroes() {
    let summary = summarize_population(0, &[], ts(NOW));

    assert_eq!(summary.total_students, 0);
    assert_eq!(summary.risk_distribution.low, 0);
    assert_eq!(summary.average_scores.phq9, 0);
    assert_eq!(summary.average_scores.pars, 0);
    assert_eq!(summary.recent_assessments, 0);
}

/// Product policy, preserved deliberately: students who never took the
/// screening are counted as low risk, not as unknown. With three students
/// and one low-risk assessment, the distribution reads {low: 3}.
#[test]
fn students_without_assessments_count_as_low_risk() {
    let assessed = Uuid::new_v4();
    let records = vec![assessment(assessed, 3, 2, RiskLevel::Low, "2026-08-01T10:00:00Z")];

    let summary = summarize_population(3, &records, ts(NOW));

    assert_eq!(summary.risk_distribution.low, 3);
    assert_eq!(summary.risk_distribution.moderate, 0);
    assert_eq!(summary.risk_distribution.high, 0);
}

/// Means divide by the count of students with data, not the population size.
#[test]
fn averages_ignore_students_without_data() {
    let assessed = Uuid::new_v4();
    let records = vec![assessment(assessed, 6, 4, RiskLevel::Low, "2026-08-01T10:00:00Z")];

    let summary = summarize_population(3, &records, ts(NOW));

    assert_eq!(summary.average_scores.phq9, 6);
    assert_eq!(summary.average_scores.pars, 4);
}

#[test]
fn averages_round_to_nearest_integer() {
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let records = vec![
        assessment(a, 5, 3, RiskLevel::Low, "2026-08-01T10:00:00Z"),
        assessment(b, 6, 4, RiskLevel::Low, "2026-08-01T11:00:00Z"),
    ];

    let summary = summarize_population(2, &records, ts(NOW));

    // (5+6)/2 = 5.5 rounds to 6; (3+4)/2 = 3.5 rounds to 4.
    assert_eq!(summary.average_scores.phq9, 6);
    assert_eq!(summary.average_scores.pars, 4);
}

#[test]
fn distribution_uses_only_the_latest_assessment_per_student() {
    let student = Uuid::new_v4();
    let records = vec![
        assessment(student, 20, 5, RiskLevel::High, "2026-07-01T10:00:00Z"),
        assessment(student, 2, 1, RiskLevel::Low, "2026-08-01T10:00:00Z"),
    ];

    let summary = summarize_population(1, &records, ts(NOW));

    assert_eq!(summary.risk_distribution.low, 1);
    assert_eq!(summary.risk_distribution.high, 0);
    assert_eq!(summary.average_scores.phq9, 2);
}

#[test]
fn identical_timestamps_resolve_to_exactly_one_record() {
    let student = Uuid::new_v4();
    let mut first = assessment(student, 20, 5, RiskLevel::High, "2026-08-01T10:00:00Z");
    let mut second = assessment(student, 2, 1, RiskLevel::Low, "2026-08-01T10:00:00Z");
    // Pin the tie-break: the larger assessment id wins.
    first.id = Uuid::from_u128(1);
    second.id = Uuid::from_u128(2);

    let records = vec![first, second];
    let summary = summarize_population(1, &records, ts(NOW));

    assert_eq!(
        summary.risk_distribution.low + summary.risk_distribution.moderate
            + summary.risk_distribution.high,
        1
    );
    assert_eq!(summary.risk_distribution.low, 1);

    let latest = latest_assessment(&records).expect("some record");
    assert_eq!(latest.id, Uuid::from_u128(2));
}

#[test]
fn recent_window_counts_all_assessments_from_the_last_seven_days() {
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let records = vec![
        // Two recent records for the same student both count.
        assessment(a, 1, 1, RiskLevel::Low, "2026-08-01T10:00:00Z"),
        assessment(a, 1, 1, RiskLevel::Low, "2026-08-04T10:00:00Z"),
        // Outside the window.
        assessment(b, 1, 1, RiskLevel::Low, "2026-07-20T10:00:00Z"),
    ];

    let summary = summarize_population(2, &records, ts(NOW));

    assert_eq!(summary.recent_assessments, 2);
}

#[test]
fn latest_assessment_of_empty_history_is_none() {
    assert!(latest_assessment(&[]).is_none());
}
