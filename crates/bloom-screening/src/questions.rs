//! The screening question bank.
//!
//! Two fixed subscales: six PHQ-9 depression items on a 4-point frequency
//! scale and six PARS anxiety items on a 5-point frequency scale. Question
//! IDs carry the subscale as a prefix (`phq1`, `pars3`, ...), which is how
//! scoring attributes an answer to a subscale.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which subscale a question (or an answer to it) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Subscale {
    Depression,
    Anxiety,
}

impl Subscale {
    /// Map a question ID to its subscale by prefix. Unknown prefixes map to
    /// `None` and are invisible to scoring.
    pub fn from_question_id(question_id: &str) -> Option<Self> {
        if question_id.starts_with("phq") {
            Some(Self::Depression)
        } else if question_id.starts_with("pars") {
            Some(Self::Anxiety)
        } else {
            None
        }
    }

    /// The largest valid answer value on this subscale's response scale
    /// (number of options minus one).
    pub fn max_score(self) -> u32 {
        match self {
            Self::Depression => 3,
            Self::Anxiety => 4,
        }
    }
}

/// A single screening question as presented to the student.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    /// Option labels in score order; the answer value is the option index.
    pub options: Vec<String>,
    pub subscale: Subscale,
}

const PHQ9_OPTIONS: [&str; 4] = [
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
];

const PARS_OPTIONS: [&str; 5] = ["Never", "Rarely", "Sometimes", "Often", "Very often"];

/// All screening questions, in presentation order.
pub fn question_bank() -> &'static [Question] {
    static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
        let phq = |id: &str, text: &str| Question {
            id: id.to_string(),
            text: format!("Over the last 2 weeks, how often have you been bothered by {text}?"),
            options: PHQ9_OPTIONS.iter().map(|o| o.to_string()).collect(),
            subscale: Subscale::Depression,
        };
        let pars = |id: &str, text: &str| Question {
            id: id.to_string(),
            text: format!("In the past month, how often have you {text}?"),
            options: PARS_OPTIONS.iter().map(|o| o.to_string()).collect(),
            subscale: Subscale::Anxiety,
        };

        vec![
            phq("phq1", "little interest or pleasure in doing things"),
            phq("phq2", "feeling down, depressed, or hopeless"),
            phq(
                "phq3",
                "trouble falling or staying asleep, or sleeping too much",
            ),
            phq("phq4", "feeling tired or having little energy"),
            phq("phq5", "poor appetite or overeating"),
            phq(
                "phq6",
                "feeling bad about yourself or that you are a failure",
            ),
            pars("pars1", "felt nervous, anxious, or on edge"),
            pars("pars2", "been unable to stop or control worrying"),
            pars("pars3", "had trouble relaxing"),
            pars("pars4", "felt restless or had difficulty sitting still"),
            pars("pars5", "felt afraid that something awful might happen"),
            pars(
                "pars6",
                "had physical symptoms of anxiety (racing heart, sweating, etc.) interfere with your daily activities",
            ),
        ]
    });
    &QUESTIONS
}

/// Look up a question by ID.
pub fn get_question(id: &str) -> Option<&'static Question> {
    question_bank().iter().find(|q| q.id == id)
}
