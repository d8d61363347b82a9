use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A persisted message in a student's support-bot conversation.
///
/// Written after every user/bot exchange so the conversation is durable
/// across sessions.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatMessage {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub sender: Sender,
    pub kind: MessageKind,
    #[serde(default)]
    pub session_id: Option<String>,
    pub timestamp: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MessageKind {
    Text,
    Suggestion,
    Resource,
}

impl Default for MessageKind {
    fn default() -> Self {
        Self::Text
    }
}
