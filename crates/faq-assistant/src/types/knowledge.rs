//! Knowledge base types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value stored under a knowledge key
///
/// Serialized untagged so the persisted file stays a plain JSON object of
/// strings and string-to-string objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// A single canned answer
    Text(String),
    /// A topic with sub-entries (e.g. city -> text), returned whole
    Topic(IndexMap<String, String>),
}

impl Answer {
    /// Returns the answer text if this is a plain answer
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Topic(_) => None,
        }
    }

    /// Returns true if this answer holds sub-entries
    pub fn is_topic(&self) -> bool {
        matches!(self, Self::Topic(_))
    }

    /// Render for plain-text display, one `- key: text` line per topic entry
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Topic(entries) => entries
                .iter()
                .map(|(name, text)| format!("- {}: {}", name, text))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

impl From<String> for Answer {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Ordered mapping from question keys to answers
///
/// Iteration order is the stored order and is significant: the matcher walks
/// keys in this order and the first hit wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBase {
    entries: IndexMap<String, Answer>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a question key: trimmed and lowercase
    pub fn normalize_key(key: &str) -> String {
        key.trim().to_lowercase()
    }

    /// Insert or overwrite an entry. Returns the previous answer if any.
    ///
    /// The key is normalized first. Overwriting keeps the key's position;
    /// new keys are appended.
    pub fn insert(&mut self, key: &str, answer: impl Into<Answer>) -> Option<Answer> {
        self.entries.insert(Self::normalize_key(key), answer.into())
    }

    /// Look up an answer by exact key
    pub fn get(&self, key: &str) -> Option<&Answer> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in stored order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Answer)> {
        self.entries.iter()
    }

    /// Iterate keys in stored order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Get statistics about stored knowledge
    pub fn stats(&self) -> KnowledgeStats {
        let topics = self.entries.values().filter(|a| a.is_topic()).count();
        KnowledgeStats {
            total_entries: self.entries.len(),
            facts: self.entries.len() - topics,
            topics,
        }
    }
}

// Equality includes key order.
impl PartialEq for KnowledgeBase {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for KnowledgeBase {}

impl<K: AsRef<str>, A: Into<Answer>> FromIterator<(K, A)> for KnowledgeBase {
    fn from_iter<I: IntoIterator<Item = (K, A)>>(iter: I) -> Self {
        let mut kb = Self::new();
        for (key, answer) in iter {
            kb.insert(key.as_ref(), answer);
        }
        kb
    }
}

/// Summary counts for a knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnowledgeStats {
    pub total_entries: usize,
    pub facts: usize,
    pub topics: usize,
}
