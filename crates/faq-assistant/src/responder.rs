//! Intent classification and dispatch
//!
//! [`Responder::respond`] is the call boundary for UI collaborators. It is
//! stateless across calls: the knowledge base goes in and comes back out, and
//! the caller keeps it for the next turn.

use crate::error::Result;
use crate::learning::{KnowledgeStore, Learner, LEARN_KEYWORD};
use crate::retrieval::Matcher;
use crate::types::{Intent, KnowledgeBase, Response};

/// Input that ends the session
pub const GOODBYE_COMMAND: &str = "goodbye";

pub const FAREWELL_MESSAGE: &str = "Goodbye! Have a great day.";
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I don't know the answer to that. Try rephrasing or use 'learn question: answer'.";

/// Classifies user input and dispatches to the learner or matcher
#[derive(Debug, Clone)]
pub struct Responder {
    learner: Learner,
    matcher: Matcher,
}

impl Responder {
    /// Create a responder persisting taught facts to `store`
    pub fn new(store: KnowledgeStore) -> Self {
        Self::with_matcher(store, Matcher::default())
    }

    /// Create a responder with a custom matcher (e.g. another tokenizer)
    pub fn with_matcher(store: KnowledgeStore, matcher: Matcher) -> Self {
        Self {
            learner: Learner::new(store),
            matcher,
        }
    }

    pub fn store(&self) -> &KnowledgeStore {
        self.learner.store()
    }

    /// Answer one user turn
    ///
    /// Rules, in priority order, on the trimmed lowercase input:
    /// 1. exactly `goodbye` ends the session
    /// 2. a leading `learn` is a teach command
    /// 3. otherwise the first matching knowledge key answers, or the fallback
    pub fn respond(&self, input: &str, kb: KnowledgeBase) -> Result<Response> {
        let command = input.trim().to_lowercase();

        if command == GOODBYE_COMMAND {
            tracing::debug!(intent = %Intent::Goodbye, "Classified input");
            return Ok(Response::new(Intent::Goodbye, FAREWELL_MESSAGE, kb));
        }

        if command.starts_with(LEARN_KEYWORD) {
            tracing::debug!(intent = %Intent::Learn, "Classified input");
            let (kb, message) = self.learner.learn(&command, kb)?;
            return Ok(Response::new(Intent::Learn, message, kb));
        }

        let response = match self.matcher.find(input, &kb).cloned() {
            Some(answer) => Response::new(Intent::Answer, answer, kb),
            None => Response::new(Intent::Unknown, FALLBACK_MESSAGE, kb),
        };
        tracing::debug!(intent = %response.intent, "Classified input");

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::default_knowledge;
    use crate::types::Answer;
    use tempfile::TempDir;

    fn responder_in(dir: &TempDir) -> Responder {
        Responder::new(KnowledgeStore::new(dir.path().join("knowledge_data.json")))
    }

    #[test]
    fn test_every_key_answers_itself() {
        let dir = TempDir::new().unwrap();
        let responder = responder_in(&dir);
        let kb = default_knowledge();

        // "goodbye" is claimed by the session-ending rule
        for (key, answer) in kb.iter().filter(|(k, _)| k.as_str() != GOODBYE_COMMAND) {
            let response = responder.respond(key, kb.clone()).unwrap();
            assert_eq!(response.intent, Intent::Answer, "key '{}'", key);
            assert_eq!(&response.reply, answer, "key '{}'", key);
            assert_eq!(response.knowledge, kb);
        }
    }

    #[test]
    fn test_goodbye_regardless_of_knowledge() {
        let dir = TempDir::new().unwrap();
        let responder = responder_in(&dir);

        for kb in [KnowledgeBase::new(), default_knowledge()] {
            let response = responder.respond("  GoodBye ", kb.clone()).unwrap();
            assert_eq!(response.intent, Intent::Goodbye);
            assert_eq!(response.reply, Answer::from(FAREWELL_MESSAGE));
            assert_eq!(response.knowledge, kb);
        }
    }

    #[test]
    fn test_goodbye_inside_sentence_is_not_goodbye_intent() {
        let dir = TempDir::new().unwrap();
        let responder = responder_in(&dir);
        let kb = default_knowledge();

        let response = responder.respond("goodbye for now", kb.clone()).unwrap();

        assert_eq!(response.intent, Intent::Answer);
        assert_eq!(Some(&response.reply), kb.get("goodbye"));
    }

    #[test]
    fn test_learn_then_answer_round_trip() {
        let dir = TempDir::new().unwrap();
        let responder = responder_in(&dir);

        let learned = responder.respond("learn foo: bar", default_knowledge()).unwrap();
        assert_eq!(learned.intent, Intent::Learn);
        assert_eq!(learned.knowledge.get("foo"), Some(&Answer::from("bar")));

        let asked = responder.respond("foo", learned.knowledge).unwrap();
        assert_eq!(asked.intent, Intent::Answer);
        assert_eq!(asked.reply, Answer::from("bar"));

        // The taught fact survives a reload
        let reloaded = responder.store().load().unwrap();
        assert_eq!(reloaded.get("foo"), Some(&Answer::from("bar")));
    }

    #[test]
    fn test_learn_without_separator() {
        let dir = TempDir::new().unwrap();
        let responder = responder_in(&dir);
        let kb = default_knowledge();

        let response = responder.respond("learn foobar", kb.clone()).unwrap();

        assert_eq!(response.intent, Intent::Learn);
        assert!(response.reply.render().contains("learn question: answer"));
        assert_eq!(response.knowledge, kb);
    }

    #[test]
    fn test_learn_with_empty_sides_still_inserts() {
        let dir = TempDir::new().unwrap();
        let responder = responder_in(&dir);

        let response = responder.respond("learn card limit:", default_knowledge()).unwrap();
        assert_eq!(response.intent, Intent::Learn);
        assert_eq!(response.knowledge.get("card limit"), Some(&Answer::from("")));

        let response = responder.respond("learn : orphan", response.knowledge).unwrap();
        assert_eq!(response.intent, Intent::Learn);
        assert_eq!(response.knowledge.get(""), Some(&Answer::from("orphan")));

        let reloaded = responder.store().load().unwrap();
        assert_eq!(reloaded, response.knowledge);
    }

    #[test]
    fn test_learn_keyword_case_and_leading_whitespace() {
        let dir = TempDir::new().unwrap();
        let responder = responder_in(&dir);

        let response = responder
            .respond("   LEARN Card Limit: 5000", default_knowledge())
            .unwrap();

        assert_eq!(response.intent, Intent::Learn);
        assert_eq!(response.knowledge.get("card limit"), Some(&Answer::from("5000")));
    }

    #[test]
    fn test_unknown_input() {
        let dir = TempDir::new().unwrap();
        let responder = responder_in(&dir);

        let response = responder.respond("xyzzy-nonsense", default_knowledge()).unwrap();

        assert_eq!(response.intent, Intent::Unknown);
        assert_eq!(response.reply, Answer::from(FALLBACK_MESSAGE));
    }

    #[test]
    fn test_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let responder = responder_in(&dir);
        let kb = default_knowledge();

        let upper = responder.respond("HELLO", kb.clone()).unwrap();
        let lower = responder.respond("hello", kb).unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper.intent, Intent::Answer);
    }

    #[test]
    fn test_banking_hours_in_sentence() {
        let dir = TempDir::new().unwrap();
        let responder = responder_in(&dir);
        let kb = default_knowledge();

        let response = responder.respond("what are your banking hours", kb.clone()).unwrap();

        assert_eq!(response.intent, Intent::Answer);
        assert_eq!(Some(&response.reply), kb.get("banking hours"));
    }

    #[test]
    fn test_learn_with_failing_store_still_answers() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let responder = Responder::new(KnowledgeStore::new(blocker.join("kb.json")));

        let response = responder.respond("learn foo: bar", default_knowledge()).unwrap();

        assert_eq!(response.intent, Intent::Learn);
        assert!(response.reply.render().starts_with("Sorry, I couldn't save"));
        assert_eq!(response.knowledge.get("foo"), Some(&Answer::from("bar")));
    }
}
