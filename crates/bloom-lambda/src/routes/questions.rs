use axum::Json;

use bloom_screening::questions::{question_bank, Question};

/// The screening question bank. Public — the questions themselves are not
/// sensitive, only the answers are.
pub async fn list_questions() -> Json<Vec<Question>> {
    Json(question_bank().to_vec())
}
