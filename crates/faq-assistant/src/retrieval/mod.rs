//! Query matching against the knowledge base

pub mod matcher;
pub mod tokenizer;

pub use matcher::Matcher;
pub use tokenizer::{Tokenizer, UnicodeWordTokenizer};
