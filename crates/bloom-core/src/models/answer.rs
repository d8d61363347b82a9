use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single response to a screening question.
///
/// The `question_id` prefix determines subscale membership: `phq` items
/// belong to the depression subscale, `pars` items to the anxiety subscale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub question_id: String,
    /// The option label the student selected, e.g. "Several days".
    pub answer: String,
    /// Numeric value of the selected option: 0–3 on PHQ-9 items,
    /// 0–4 on PARS items.
    pub score: u32,
}
