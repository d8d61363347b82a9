//! Conversation-context windowing.
//!
//! Maps the persisted chat history into the trailing window of turns the
//! model sees. The window is small on purpose: the support bot needs recent
//! conversational context, not the student's entire history.

use bloom_core::models::chat_message::{ChatMessage, Sender};

use crate::chat::{ChatRole, ChatTurn};

/// How many persisted messages of history accompany a new user message.
pub const HISTORY_WINDOW: usize = 6;

/// Build the model-facing turn list: the last [`HISTORY_WINDOW`] persisted
/// messages followed by the new user message.
///
/// History is assumed oldest-first, as the chat listing returns it.
pub fn recent_history(history: &[ChatMessage], new_message: &str) -> Vec<ChatTurn> {
    let start = history.len().saturating_sub(HISTORY_WINDOW);

    let mut turns: Vec<ChatTurn> = history[start..]
        .iter()
        .map(|msg| ChatTurn {
            role: match msg.sender {
                Sender::User => ChatRole::User,
                Sender::Bot => ChatRole::Assistant,
            },
            content: msg.content.clone(),
        })
        .collect();

    turns.push(ChatTurn {
        role: ChatRole::User,
        content: new_message.to_string(),
    });

    turns
}
