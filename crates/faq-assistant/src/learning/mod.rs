//! Knowledge persistence and teaching

pub mod defaults;
pub mod knowledge_store;
pub mod learner;

pub use defaults::default_knowledge;
pub use knowledge_store::KnowledgeStore;
pub use learner::{parse_teach_command, Learner, LEARN_KEYWORD};
