//! Bedrock Converse invocation for the support bot.

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use serde::{Deserialize, Serialize};

use crate::error::BedrockError;

/// The fixed system prompt behind every support-bot reply.
pub const SUPPORT_SYSTEM_PROMPT: &str = "\
You are a compassionate AI mental health support assistant for a student \
wellness platform. Your role is to provide empathetic, helpful, and \
appropriate responses to students seeking mental health support.

Guidelines:
1. Always be empathetic, supportive, and non-judgmental
2. Provide practical coping strategies and resources when appropriate
3. Recognize signs of crisis and direct users to appropriate emergency resources
4. Keep responses concise but comprehensive (1-3 paragraphs)
5. Encourage professional help when needed
6. Never provide medical diagnoses or prescribe treatments
7. Be culturally sensitive and inclusive
8. If someone mentions self-harm or suicide, immediately provide crisis resources

Emergency Resources:
- National Suicide Prevention Lifeline: 988
- Crisis Text Line: Text HOME to 741741
- Campus Counseling Center: (555) 123-4567

Remember: You're providing peer support and guidance, not professional therapy.";

/// A single message in a conversation, as sent to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Send a multi-turn conversation to Bedrock and return the assistant's
/// reply.
///
/// The caller provides the windowed message history (see
/// [`crate::context::recent_history`]) and a system prompt.
pub async fn converse(
    config: &aws_config::SdkConfig,
    model_id: &str,
    system_prompt: &str,
    turns: &[ChatTurn],
) -> Result<String, BedrockError> {
    let client = aws_sdk_bedrockruntime::Client::new(config);

    tracing::debug!(model_id, turns = turns.len(), "invoking support model");

    let mut messages: Vec<Message> = Vec::new();

    for turn in turns {
        let role = match turn.role {
            ChatRole::User => ConversationRole::User,
            ChatRole::Assistant => ConversationRole::Assistant,
        };
        let message = Message::builder()
            .role(role)
            .content(ContentBlock::Text(turn.content.clone()))
            .build()
            .map_err(|e| BedrockError::Invocation(e.to_string()))?;
        messages.push(message);
    }

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .set_messages(Some(messages))
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    Ok(response_text)
}
