//! Intent and response types

use serde::{Deserialize, Serialize};
use std::fmt;

use super::knowledge::{Answer, KnowledgeBase};

/// Classification of a user turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// User ended the session
    Goodbye,
    /// User taught (or tried to teach) a new fact
    Learn,
    /// A knowledge key matched
    Answer,
    /// Nothing matched
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Goodbye => "goodbye",
            Self::Learn => "learn",
            Self::Answer => "answer",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the caller should end the session after this turn
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::Goodbye)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one call to the responder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Classified intent
    pub intent: Intent,
    /// Reply to show; a matched topic is returned as stored
    pub reply: Answer,
    /// Knowledge base to use for the next turn
    pub knowledge: KnowledgeBase,
}

impl Response {
    pub fn new(intent: Intent, reply: impl Into<Answer>, knowledge: KnowledgeBase) -> Self {
        Self {
            intent,
            reply: reply.into(),
            knowledge,
        }
    }
}
