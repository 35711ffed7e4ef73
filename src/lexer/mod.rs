// Author: Dustin Pilgrim
// License: MIT

mod tokenizer;

pub use tokenizer::Tokenization;

/// A single input line after comment splitting and classification.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Blank,
    /// Comment-only line; holds the trimmed text after `#`.
    Comment(String),
    Open { comment: Option<String> },
    Close { comment: Option<String> },
    Data { tokens: Vec<String>, comment: Option<String> },
}

/// Splits raw lines at the first `#` and classifies them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lexer {
    tokenization: Tokenization,
}

impl Lexer {
    pub fn new(tokenization: Tokenization) -> Self {
        Self { tokenization }
    }

    pub fn classify(&self, raw: &str) -> Line {
        let (data, comment) = split_comment(raw);
        let comment = (!comment.is_empty()).then(|| comment.to_string());

        match (data, comment) {
            ("", None) => Line::Blank,
            ("", Some(text)) => Line::Comment(text),
            ("{", comment) => Line::Open { comment },
            ("}", comment) => Line::Close { comment },
            (data, comment) => Line::Data {
                tokens: self.tokenization.split(data),
                comment,
            },
        }
    }
}

/// Data and comment halves of a line, both trimmed.
pub fn split_comment(raw: &str) -> (&str, &str) {
    match raw.split_once('#') {
        Some((data, comment)) => (data.trim(), comment.trim()),
        None => (raw.trim(), ""),
    }
}
