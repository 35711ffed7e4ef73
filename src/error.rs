use std::fmt;

/// The main error type for parsing, accessing and saving config trees.
#[derive(Debug, Clone, PartialEq)]
pub enum PikError {
    /// Raised for a `}` with no open node, or a `{` still open at end of input.
    UnbalancedBraces {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised by positional access with an invalid index.
    IndexOutOfRange {
        index: usize,
        len: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when the underlying line source fails mid-parse.
    IoError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl PikError {
    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        PikError::IndexOutOfRange {
            index,
            len,
            hint: Some(if len == 0 {
                "The node has no entries".into()
            } else {
                format!("Valid positions are 0..{}", len)
            }),
            code: Some(301),
        }
    }

    /// Line number the error points at, when there is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            PikError::UnbalancedBraces { line, .. } | PikError::IoError { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl fmt::Display for PikError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PikError::UnbalancedBraces { message, line, hint, code } =>
                write!(f, "[PIK] Unbalanced braces at line {}: {}{}{}",
                    line, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            PikError::IndexOutOfRange { index, len, hint, code } =>
                write!(f, "[PIK] Index {} out of range for node with {} entries{}{}",
                    index, len,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            PikError::FileError { message, path, hint, code } =>
                write!(f, "[PIK] File Error '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            PikError::IoError { message, line, hint, code } =>
                write!(f, "[PIK] I/O Error after line {}: {}{}{}",
                    line, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for PikError {}
