//! Answer scoring and submission validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use bloom_core::models::answer::Answer;

use crate::questions::Subscale;

/// The two subscale totals produced by [`score_answers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleScores {
    pub phq9: u32,
    pub pars: u32,
}

/// Reduce a list of answers to the two subscale totals.
///
/// Each total is the arithmetic sum of `score` over answers whose question
/// ID carries that subscale's prefix. Order-insensitive; partial submissions
/// simply contribute fewer terms; answers with an unrecognized prefix
/// contribute to neither total. Callers that want unrecognized or
/// out-of-range answers surfaced run [`validate_answers`] first — scoring
/// itself never fails.
pub fn score_answers(answers: &[Answer]) -> SubscaleScores {
    let mut scores = SubscaleScores { phq9: 0, pars: 0 };

    for answer in answers {
        match Subscale::from_question_id(&answer.question_id) {
            Some(Subscale::Depression) => scores.phq9 += answer.score,
            Some(Subscale::Anxiety) => scores.pars += answer.score,
            None => {}
        }
    }

    scores
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: String,
    pub score: u32,
    pub message: String,
}

/// Validate a submission against the response scales.
///
/// Flags answers whose question ID matches no known subscale and answers
/// whose value exceeds the subscale's scale (0–3 for PHQ-9 items, 0–4 for
/// PARS items). Returns one error per offending answer; an empty result
/// means the submission is well-formed.
pub fn validate_answers(answers: &[Answer]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for answer in answers {
        match Subscale::from_question_id(&answer.question_id) {
            None => errors.push(ValidationError {
                question_id: answer.question_id.clone(),
                score: answer.score,
                message: format!("unknown question id: {}", answer.question_id),
            }),
            Some(subscale) if answer.score > subscale.max_score() => {
                errors.push(ValidationError {
                    question_id: answer.question_id.clone(),
                    score: answer.score,
                    message: format!(
                        "{}: score {} is outside range [0, {}]",
                        answer.question_id,
                        answer.score,
                        subscale.max_score(),
                    ),
                });
            }
            Some(_) => {}
        }
    }

    errors
}
