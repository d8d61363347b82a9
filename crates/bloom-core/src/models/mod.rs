pub mod answer;
pub mod assessment;
pub mod booking;
pub mod chat_message;
pub mod support;
pub mod user;
