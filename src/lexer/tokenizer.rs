use serde::{Deserialize, Serialize};

/// How the data part of a line is split into tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tokenization {
    /// Split on every single ASCII space. `a  b` yields `["a", "", "b"]` and
    /// tabs stay inside tokens. Matches the files the game ships.
    #[default]
    Strict,
    /// Split on runs of any whitespace; never yields empty tokens.
    Whitespace,
}

impl Tokenization {
    pub fn split(self, data: &str) -> Vec<String> {
        match self {
            Tokenization::Strict => data.split(' ').map(str::to_string).collect(),
            Tokenization::Whitespace => data.split_whitespace().map(str::to_string).collect(),
        }
    }
}
