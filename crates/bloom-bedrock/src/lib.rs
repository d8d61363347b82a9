//! bloom-bedrock
//!
//! The support-bot model layer: crisis screening, conversation-context
//! windowing, and Bedrock Converse invocation. The model is treated as an
//! opaque text-completion service behind a fixed system prompt.

pub mod chat;
pub mod context;
pub mod crisis;
pub mod error;
