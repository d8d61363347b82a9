use bloom_bedrock::crisis::{screen, CRISIS_RESPONSE};

#[test]
fn ordinary_message_passes_the_screen() {
    assert!(screen("I've been feeling stressed about finals").is_none());
}

#[test]
fn crisis_keyword_returns_the_canned_response() {
    let response = screen("sometimes I think about suicide").expect("screen trips");
    assert_eq!(response, CRISIS_RESPONSE);
    assert!(response.contains("988"));
}

#[test]
fn matching_is_case_insensitive() {
    assert!(screen("I want to KILL MYSELF").is_some());
}

#[test]
fn keyword_inside_a_longer_sentence_still_trips() {
    assert!(screen("lately i just don't want to live like this anymore").is_some());
}

#[test]
fn empty_message_passes() {
    assert!(screen("").is_none());
}

#[test]
fn unrelated_mention_of_harm_does_not_trip() {
    // "harmony" contains neither "self-harm" nor "hurt myself".
    assert!(screen("the choir harmony calmed me down").is_none());
}
