use bloom_core::models::assessment::RiskLevel;
use bloom_screening::severity::{anxiety_severity, depression_severity, Severity};
use bloom_screening::triage::classify_risk;

#[test]
fn phq9_at_high_threshold_classifies_high() {
    assert_eq!(classify_risk(15, 0), RiskLevel::High);
}

#[test]
fn phq9_just_below_high_threshold_is_moderate() {
    assert_eq!(classify_risk(14, 0), RiskLevel::Moderate);
}

#[test]
fn phq9_below_moderate_threshold_is_low() {
    assert_eq!(classify_risk(9, 0), RiskLevel::Low);
}

#[test]
fn high_depression_wins_regardless_of_anxiety() {
    assert_eq!(classify_risk(15, 10), RiskLevel::High);
}

#[test]
fn anxiety_at_high_threshold_classifies_high() {
    assert_eq!(classify_risk(0, 20), RiskLevel::High);
}

#[test]
fn anxiety_between_bands_is_moderate() {
    // pars=16 is below the high cutoff (20) but at/above moderate (15).
    assert_eq!(classify_risk(9, 16), RiskLevel::Moderate);
}

#[test]
fn both_scores_zero_is_low() {
    assert_eq!(classify_risk(0, 0), RiskLevel::Low);
}

#[test]
fn classification_takes_the_worse_of_the_two_subscales() {
    assert_eq!(classify_risk(10, 20), RiskLevel::High);
    assert_eq!(classify_risk(10, 0), RiskLevel::Moderate);
    assert_eq!(classify_risk(0, 15), RiskLevel::Moderate);
}

#[test]
fn depression_severity_bands() {
    assert_eq!(depression_severity(0), Severity::Minimal);
    assert_eq!(depression_severity(4), Severity::Minimal);
    assert_eq!(depression_severity(5), Severity::Mild);
    assert_eq!(depression_severity(9), Severity::Mild);
    assert_eq!(depression_severity(10), Severity::Moderate);
    assert_eq!(depression_severity(14), Severity::Moderate);
    assert_eq!(depression_severity(15), Severity::ModeratelySevere);
    assert_eq!(depression_severity(27), Severity::ModeratelySevere);
}

#[test]
fn anxiety_severity_bands() {
    assert_eq!(anxiety_severity(0), Severity::Minimal);
    assert_eq!(anxiety_severity(4), Severity::Minimal);
    assert_eq!(anxiety_severity(5), Severity::Mild);
    assert_eq!(anxiety_severity(10), Severity::Moderate);
    assert_eq!(anxiety_severity(15), Severity::Severe);
    assert_eq!(anxiety_severity(30), Severity::Severe);
}

/// The severity cutoffs are intentionally not the triage cutoffs: a PHQ-9
/// of 15 reads "Moderately Severe" to the student but triages as high, while
/// a PARS of 15 reads "Severe" yet only triages as moderate.
#[test]
fn severity_and_triage_thresholds_disagree_on_purpose() {
    assert_eq!(anxiety_severity(15), Severity::Severe);
    assert_eq!(classify_risk(0, 15), RiskLevel::Moderate);

    assert_eq!(depression_severity(14), Severity::Moderate);
    assert_eq!(classify_risk(14, 0), RiskLevel::Moderate);
}

#[test]
fn severity_labels_render_for_display() {
    assert_eq!(Severity::ModeratelySevere.label(), "Moderately Severe");
    assert_eq!(Severity::Minimal.to_string(), "Minimal");
}

/// Scenario: a mostly-skipped submission scores low everywhere. The
/// "Minimal" floor on an empty subscale is an implicit default the product
/// relies on — absence of answers reads as absence of symptoms.
#[test]
fn unanswered_subscales_read_as_minimal() {
    assert_eq!(depression_severity(0), Severity::Minimal);
    assert_eq!(anxiety_severity(0), Severity::Minimal);
    assert_eq!(classify_risk(0, 0), RiskLevel::Low);
}
