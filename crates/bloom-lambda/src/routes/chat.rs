use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bloom_bedrock::chat::{converse, SUPPORT_SYSTEM_PROMPT};
use bloom_bedrock::context::recent_history;
use bloom_bedrock::crisis;
use bloom_core::keys;
use bloom_core::models::chat_message::{ChatMessage, MessageKind, Sender};
use bloom_storage::documents;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Listings return at most this many messages per conversation.
const HISTORY_CAP: usize = 100;

#[derive(Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub session_id: Option<String>,
}

/// A student's chat history, oldest first.
pub async fn list_messages(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    let messages = load_history(&state, auth.id, query.session_id.as_deref()).await?;
    Ok(Json(messages))
}

#[derive(Deserialize)]
pub struct PostMessageRequest {
    pub content: String,
    pub sender: Sender,
    #[serde(default)]
    pub kind: Option<MessageKind>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Persist one side of an exchange. The client writes both the student's
/// message and the bot's reply through this route, so the stored transcript
/// mirrors what was displayed.
pub async fn post_message(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<PostMessageRequest>,
) -> Result<(StatusCode, Json<ChatMessage>), ApiError> {
    if req.content.trim().is_empty() {
        return Err(ApiError::BadRequest("content is required".to_string()));
    }

    let message = ChatMessage {
        id: Uuid::new_v4(),
        user_id: auth.id,
        content: req.content,
        sender: req.sender,
        kind: req.kind.unwrap_or_default(),
        session_id: req.session_id,
        timestamp: jiff::Timestamp::now(),
    };

    documents::save(
        &state.s3,
        &state.bucket,
        &keys::chat_message(auth.id, message.id),
        &message,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(message)))
}

#[derive(Deserialize)]
pub struct AiRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Serialize)]
pub struct AiResponse {
    pub response: String,
}

/// Generate the support bot's reply to a student message.
///
/// Order matters: the crisis screen runs before anything else so the
/// escalation path never depends on model availability. A model failure
/// degrades to the canned fallback rather than an error response.
pub async fn ai_reply(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<AiRequest>,
) -> Result<Json<AiResponse>, ApiError> {
    if req.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message is required".to_string()));
    }

    if let Some(crisis_response) = crisis::screen(&req.message) {
        tracing::warn!(user_id = %auth.id, "crisis keywords detected in chat message");
        return Ok(Json(AiResponse {
            response: crisis_response.to_string(),
        }));
    }

    let history = load_history(&state, auth.id, req.session_id.as_deref()).await?;
    let turns = recent_history(&history, &req.message);

    let response = match converse(
        &state.aws_config,
        &state.chat_model_id,
        SUPPORT_SYSTEM_PROMPT,
        &turns,
    )
    .await
    {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(user_id = %auth.id, error = %e, "support bot invocation failed");
            crisis::FALLBACK_RESPONSE.to_string()
        }
    };

    Ok(Json(AiResponse { response }))
}

async fn load_history(
    state: &AppState,
    user_id: Uuid,
    session_id: Option<&str>,
) -> Result<Vec<ChatMessage>, ApiError> {
    let mut messages: Vec<ChatMessage> = documents::load_all(
        &state.s3,
        &state.bucket,
        &keys::user_chat_prefix(user_id),
    )
    .await?;

    if let Some(session_id) = session_id {
        messages.retain(|m| m.session_id.as_deref() == Some(session_id));
    }

    messages.sort_by(|a, b| (a.timestamp, a.id).cmp(&(b.timestamp, b.id)));
    messages.truncate(HISTORY_CAP);

    Ok(messages)
}
