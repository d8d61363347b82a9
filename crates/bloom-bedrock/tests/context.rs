use uuid::Uuid;

use bloom_bedrock::chat::ChatRole;
use bloom_bedrock::context::{recent_history, HISTORY_WINDOW};
use bloom_core::models::chat_message::{ChatMessage, MessageKind, Sender};

fn message(content: &str, sender: Sender, minute: u8) -> ChatMessage {
    ChatMessage {
        id: Uuid::new_v4(),
        user_id: Uuid::from_u128(1),
        content: content.to_string(),
        sender,
        kind: MessageKind::Text,
        session_id: None,
        timestamp: format!("2026-08-01T10:{minute:02}:00Z")
            .parse()
            .expect("valid timestamp"),
    }
}

#[test]
fn empty_history_yields_just_the_new_message() {
    let turns = recent_history(&[], "hello");

    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].role, ChatRole::User);
    assert_eq!(turns[0].content, "hello");
}

#[test]
fn short_history_is_included_in_full() {
    let history = vec![
        message("hi", Sender::User, 0),
        message("hello, how are you feeling?", Sender::Bot, 1),
    ];

    let turns = recent_history(&history, "not great");

    assert_eq!(turns.len(), 3);
    assert_eq!(turns[0].role, ChatRole::User);
    assert_eq!(turns[1].role, ChatRole::Assistant);
    assert_eq!(turns[2].content, "not great");
}

#[test]
fn long_history_is_trimmed_to_the_window() {
    let history: Vec<ChatMessage> = (0..10)
        .map(|i| {
            let sender = if i % 2 == 0 { Sender::User } else { Sender::Bot };
            message(&format!("message {i}"), sender, i)
        })
        .collect();

    let turns = recent_history(&history, "latest");

    assert_eq!(turns.len(), HISTORY_WINDOW + 1);
    // Oldest surviving turn is message 4; messages 0-3 fell out of the window.
    assert_eq!(turns[0].content, "message 4");
    assert_eq!(turns.last().expect("nonempty").content, "latest");
}
