use std::io::BufRead;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lexer::{Lexer, Tokenization};
use crate::node::ConfigNode;
use crate::PikError;

mod state;

use state::ParseState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    pub tokenization: Tokenization,
}

/// Line-oriented parser. Each call builds an independent tree; on error the
/// partially built tree is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            lexer: Lexer::new(options.tokenization),
        }
    }

    pub fn parse_str(&self, input: &str) -> Result<ConfigNode, PikError> {
        self.parse_lines(input.lines())
    }

    pub fn parse_lines<I, S>(&self, lines: I) -> Result<ConfigNode, PikError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = ParseState::new();
        for raw in lines {
            state.feed(self.lexer.classify(raw.as_ref()))?;
        }
        finish(state)
    }

    /// Parse from any buffered reader, e.g. an open file.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<ConfigNode, PikError> {
        let mut state = ParseState::new();
        for raw in reader.lines() {
            let raw = raw.map_err(|e| PikError::IoError {
                message: format!("Failed to read line: {}", e),
                line: state.line(),
                hint: Some("Check that the input is valid UTF-8 text".into()),
                code: Some(404),
            })?;
            state.feed(self.lexer.classify(&raw))?;
        }
        finish(state)
    }
}

fn finish(state: ParseState) -> Result<ConfigNode, PikError> {
    let lines = state.line();
    let root = state.finish()?;
    debug!(entries = root.len(), lines, "parsed config");
    Ok(root)
}
