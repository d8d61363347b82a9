//! Integration tests for support-bot model invocation.
//!
//! These tests call real AWS APIs and require valid credentials in the
//! environment (e.g. `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`).
//!
//! Run with: `cargo test -p bloom-bedrock --test converse -- --ignored`

use bloom_bedrock::chat::{converse, ChatRole, ChatTurn, SUPPORT_SYSTEM_PROMPT};

async fn build_config() -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .load()
        .await
}

const MODEL_ID: &str = "us.anthropic.claude-3-5-haiku-20241022-v1:0";

#[tokio::test]
#[ignore]
async fn single_turn_conversation_gets_a_reply() {
    let config = build_config().await;

    let turns = vec![ChatTurn {
        role: ChatRole::User,
        content: "I've been feeling overwhelmed by coursework lately.".to_string(),
    }];

    let reply = converse(&config, MODEL_ID, SUPPORT_SYSTEM_PROMPT, &turns)
        .await
        .expect("converse should succeed");

    assert!(!reply.is_empty(), "expected a non-empty reply");
}

#[tokio::test]
#[ignore]
async fn multi_turn_conversation_keeps_context() {
    let config = build_config().await;

    let turns = vec![
        ChatTurn {
            role: ChatRole::User,
            content: "My name is Sam and I'm anxious about my thesis defense.".to_string(),
        },
        ChatTurn {
            role: ChatRole::Assistant,
            content: "That sounds stressful, Sam. What part worries you most?".to_string(),
        },
        ChatTurn {
            role: ChatRole::User,
            content: "What was my name again?".to_string(),
        },
    ];

    let reply = converse(&config, MODEL_ID, SUPPORT_SYSTEM_PROMPT, &turns)
        .await
        .expect("converse should succeed");

    assert!(
        reply.contains("Sam"),
        "expected the model to recall the name, got: {reply}"
    );
}
