//! Substring/token matching of user input against knowledge keys

use std::sync::Arc;

use super::tokenizer::{Tokenizer, UnicodeWordTokenizer};
use crate::types::{Answer, KnowledgeBase};

/// Finds the first knowledge key contained in the user's input
#[derive(Clone)]
pub struct Matcher {
    tokenizer: Arc<dyn Tokenizer>,
}

impl Matcher {
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }

    /// Return the answer of the first matching key, if any
    pub fn find<'a>(&self, input: &str, kb: &'a KnowledgeBase) -> Option<&'a Answer> {
        self.find_entry(input, kb).map(|(_, answer)| answer)
    }

    /// Return the first matching `(key, answer)` pair
    ///
    /// Keys are tried in stored order. A key matches when it is a literal
    /// substring of the lowercased input or equals one of its word tokens.
    /// Multi-word keys can only match through the substring check.
    pub fn find_entry<'a>(&self, input: &str, kb: &'a KnowledgeBase) -> Option<(&'a str, &'a Answer)> {
        let normalized = input.to_lowercase();
        let tokens = self.tokenizer.tokenize(&normalized);

        let hit = kb
            .iter()
            .find(|(key, _)| normalized.contains(key.as_str()) || tokens.iter().any(|t| t == *key))
            .map(|(key, answer)| (key.as_str(), answer));

        match hit {
            Some((key, _)) => tracing::debug!(key, "Matched knowledge key"),
            None => tracing::debug!("No knowledge key matched"),
        }

        hit
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(Arc::new(UnicodeWordTokenizer))
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher").finish_non_exhaustive()
    }
}
