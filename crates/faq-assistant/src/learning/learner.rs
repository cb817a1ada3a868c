//! Teaching new facts with `learn question: answer`

use super::knowledge_store::KnowledgeStore;
use crate::error::{Error, Result};
use crate::types::KnowledgeBase;

/// Command keyword that starts a teach command
pub const LEARN_KEYWORD: &str = "learn";

const SAVED_MESSAGE: &str = "Got it! I've saved that information.";
const FORMAT_MESSAGE: &str = "Please use the format: 'learn question: answer'.";

/// Parses teach commands and persists the taught facts
#[derive(Debug, Clone)]
pub struct Learner {
    store: KnowledgeStore,
}

impl Learner {
    pub fn new(store: KnowledgeStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// Apply a teach command to `kb` and persist the result
    ///
    /// The caller has already checked that `input` starts with `learn`.
    /// A command without `:` returns `kb` unchanged with a format hint. A failed
    /// save is reported in the message while the returned `kb` still carries
    /// the new fact; any other error propagates.
    pub fn learn(&self, input: &str, mut kb: KnowledgeBase) -> Result<(KnowledgeBase, String)> {
        let Some((question, answer)) = parse_teach_command(input) else {
            tracing::debug!("Teach command without 'question: answer' shape");
            return Ok((kb, FORMAT_MESSAGE.to_string()));
        };

        let replaced = kb.insert(&question, answer).is_some();
        tracing::info!(question = %question, replaced, "Learned new fact");

        match self.store.save(&kb) {
            Ok(()) => Ok((kb, SAVED_MESSAGE.to_string())),
            Err(Error::StoreWrite { path, source }) => {
                tracing::warn!("Failed to save knowledge store {}: {}", path.display(), source);
                let message = format!(
                    "Sorry, I couldn't save that information because {}.",
                    source.kind()
                );
                Ok((kb, message))
            }
            Err(e) => Err(e),
        }
    }
}

/// Split a teach command into `(question, answer)`
///
/// Lowercases the input, drops the first `learn`, and splits on the first `:`.
/// Returns `None` only when there is no `:`; either side may be empty.
pub fn parse_teach_command(input: &str) -> Option<(String, String)> {
    let content = input.to_lowercase().replacen(LEARN_KEYWORD, "", 1);
    let (question, answer) = content.trim().split_once(':')?;
    Some((question.trim().to_string(), answer.trim().to_string()))
}
