use bloom_screening::questions::{get_question, question_bank, Subscale};

#[test]
fn bank_has_six_items_per_subscale() {
    let depression = question_bank()
        .iter()
        .filter(|q| q.subscale == Subscale::Depression)
        .count();
    let anxiety = question_bank()
        .iter()
        .filter(|q| q.subscale == Subscale::Anxiety)
        .count();

    assert_eq!(depression, 6);
    assert_eq!(anxiety, 6);
}

#[test]
fn question_ids_match_their_declared_subscale() {
    for question in question_bank() {
        assert_eq!(
            Subscale::from_question_id(&question.id),
            Some(question.subscale),
            "prefix of {} must agree with its subscale",
            question.id
        );
    }
}

#[test]
fn option_count_matches_the_response_scale() {
    for question in question_bank() {
        assert_eq!(
            question.options.len() as u32,
            question.subscale.max_score() + 1,
            "{} options out of step with scale",
            question.id
        );
    }
}

#[test]
fn unknown_prefixes_have_no_subscale() {
    assert_eq!(Subscale::from_question_id("gad7"), None);
    assert_eq!(Subscale::from_question_id(""), None);
}

#[test]
fn lookup_by_id() {
    assert!(get_question("phq1").is_some());
    assert!(get_question("pars6").is_some());
    assert!(get_question("phq99").is_none());
}
