pub mod base;
pub mod openai_compat;

pub use base::{ChatBackend, ChatReply, ChatRequest};
pub use openai_compat::OpenAICompatBackend;
