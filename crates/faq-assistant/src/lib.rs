//! faq-assistant: rule-based banking FAQ responder with a teachable knowledge base
//!
//! The crate maps free-text questions to canned answers held in a JSON-backed
//! [`KnowledgeBase`], and lets users teach new facts with `learn question: answer`.
//! [`Responder::respond`] is the single call boundary for UI collaborators: it takes
//! the current knowledge base and hands back the classified intent, the reply and
//! the (possibly updated) knowledge base.

pub mod config;
pub mod error;
pub mod learning;
pub mod responder;
pub mod retrieval;
pub mod types;

pub use config::AssistantConfig;
pub use error::{Error, Result};
pub use learning::{KnowledgeStore, Learner};
pub use responder::Responder;
pub use retrieval::{Matcher, Tokenizer, UnicodeWordTokenizer};
pub use types::{
    chat::{ChatHistory, ChatTurn, Speaker},
    intent::{Intent, Response},
    knowledge::{Answer, KnowledgeBase, KnowledgeStats},
};
