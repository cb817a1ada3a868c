//! Chat history types owned by UI collaborators
//!
//! The responder never reads or writes history; front-ends keep it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who said a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("You"),
            Self::Assistant => f.write_str("Assistant"),
        }
    }
}

/// One line of conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

/// Ordered conversation transcript
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatHistory {
    turns: Vec<ChatTurn>,
}

impl ChatHistory {
    /// Start a history with an assistant greeting
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            turns: vec![ChatTurn::assistant(greeting)],
        }
    }

    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    /// Drop all turns, leaving a single assistant notice
    pub fn clear(&mut self, notice: impl Into<String>) {
        self.turns.clear();
        self.turns.push(ChatTurn::assistant(notice));
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_leaves_notice() {
        let mut history = ChatHistory::with_greeting("Hello!");
        history.push(ChatTurn::user("fees"));
        history.push(ChatTurn::assistant("Fees vary."));
        assert_eq!(history.len(), 3);

        history.clear("Chat history cleared.");

        let turns: Vec<&ChatTurn> = history.iter().collect();
        assert_eq!(turns, vec![&ChatTurn::assistant("Chat history cleared.")]);
    }
}
