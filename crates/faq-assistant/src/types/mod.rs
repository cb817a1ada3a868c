//! Core types for the FAQ assistant

pub mod chat;
pub mod intent;
pub mod knowledge;

pub use chat::{ChatHistory, ChatTurn, Speaker};
pub use intent::{Intent, Response};
pub use knowledge::{Answer, KnowledgeBase, KnowledgeStats};
