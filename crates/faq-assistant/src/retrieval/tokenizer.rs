//! Word tokenization for query matching

use unicode_segmentation::UnicodeSegmentation;

/// Splits normalized text into word tokens
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Unicode word-boundary tokenizer (UAX #29); punctuation is dropped
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_string).collect()
    }
}
