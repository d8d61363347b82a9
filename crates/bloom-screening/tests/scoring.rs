use bloom_core::models::answer::Answer;
use bloom_screening::scoring::{score_answers, validate_answers};

fn answer(question_id: &str, score: u32) -> Answer {
    Answer {
        question_id: question_id.to_string(),
        answer: String::new(),
        score,
    }
}

#[test]
fn sums_each_subscale_independently() {
    let answers = vec![
        answer("phq1", 2),
        answer("phq2", 1),
        answer("pars1", 3),
        answer("pars2", 4),
    ];

    let scores = score_answers(&answers);
    assert_eq!(scores.phq9, 3);
    assert_eq!(scores.pars, 7);
}

#[test]
fn partial_submission_contributes_fewer_terms() {
    // phq1=3, phq2=3, pars1=4; everything else unanswered.
    let answers = vec![answer("phq1", 3), answer("phq2", 3), answer("pars1", 4)];

    let scores = score_answers(&answers);
    assert_eq!(scores.phq9, 6);
    assert_eq!(scores.pars, 4);
}

#[test]
fn empty_submission_scores_zero_on_both_subscales() {
    let scores = score_answers(&[]);
    assert_eq!(scores.phq9, 0);
    assert_eq!(scores.pars, 0);
}

#[test]
fn unknown_prefixes_contribute_to_neither_total() {
    let answers = vec![
        answer("phq1", 2),
        answer("gad1", 3),
        answer("bogus", 1),
        answer("pars1", 1),
    ];

    let scores = score_answers(&answers);
    assert_eq!(scores.phq9, 2);
    assert_eq!(scores.pars, 1);
}

#[test]
fn scoring_is_order_insensitive() {
    let forward = vec![answer("phq1", 1), answer("pars1", 2), answer("phq2", 3)];
    let mut reversed = forward.clone();
    reversed.reverse();

    assert_eq!(score_answers(&forward), score_answers(&reversed));
}

#[test]
fn scoring_is_idempotent() {
    let answers = vec![answer("phq1", 3), answer("pars4", 2)];
    assert_eq!(score_answers(&answers), score_answers(&answers));
}

#[test]
fn validation_accepts_a_full_in_range_submission() {
    let answers = vec![answer("phq1", 3), answer("pars1", 4)];
    assert!(validate_answers(&answers).is_empty());
}

#[test]
fn validation_flags_scores_above_the_subscale_scale() {
    // 4 is valid on the 5-point PARS scale but not on the 4-point PHQ-9 scale.
    let answers = vec![answer("phq1", 4), answer("pars1", 4)];

    let errors = validate_answers(&answers);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].question_id, "phq1");
    assert_eq!(errors[0].score, 4);
}

#[test]
fn validation_flags_unknown_question_ids() {
    // The scorer silently drops these; validation is where typos surface.
    let answers = vec![answer("phq1", 1), answer("gad7", 2)];

    let errors = validate_answers(&answers);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].question_id, "gad7");
}
