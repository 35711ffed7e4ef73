pub mod ast;
pub mod config;
pub mod error;
pub mod export;
pub mod lexer;
pub mod node;
pub mod parser;
mod writer;

use std::io::{self, BufRead};

pub use ast::{Entry, Value};
pub use config::PikConfig;
pub use error::PikError;
pub use lexer::Tokenization;
pub use node::ConfigNode;
pub use parser::{ParseOptions, Parser};

/// Parse config text with the default options.
pub fn parse_str(input: &str) -> Result<ConfigNode, PikError> {
    Parser::default().parse_str(input)
}

/// Parse from a buffered line source with the default options.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<ConfigNode, PikError> {
    Parser::default().parse_reader(reader)
}

/// Write `root` to `writer` in canonical form.
pub fn write_config<W: io::Write>(writer: W, root: &ConfigNode) -> io::Result<()> {
    root.write_to(writer)
}
