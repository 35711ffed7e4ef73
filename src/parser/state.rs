use tracing::trace;

use crate::ast::Value;
use crate::lexer::Line;
use crate::node::ConfigNode;
use crate::PikError;

/// A `{` block whose closing `}` has not been seen yet.
#[derive(Debug)]
struct OpenNode {
    node: ConfigNode,
    comment: Option<String>,
    prefix_comment: Option<Vec<String>>,
    line: usize,
}

/// Comment-only lines collected since the last other line.
#[derive(Debug, Default)]
pub(super) struct PendingPrefix {
    lines: Vec<String>,
}

impl PendingPrefix {
    pub(super) fn push(&mut self, text: String) {
        self.lines.push(text);
    }

    /// Hand the block to an entry, leaving the buffer empty.
    pub(super) fn take(&mut self) -> Option<Vec<String>> {
        if self.lines.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.lines))
        }
    }

    pub(super) fn clear(&mut self) {
        self.lines.clear();
    }

    #[cfg(test)]
    pub(super) fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Default)]
pub(super) struct ParseState {
    root: ConfigNode,
    open: Vec<OpenNode>,
    pending: PendingPrefix,
    line: usize,
}

impl ParseState {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Number of lines consumed so far.
    pub(super) fn line(&self) -> usize {
        self.line
    }

    #[cfg(test)]
    pub(super) fn depth(&self) -> usize {
        self.open.len()
    }

    #[cfg(test)]
    pub(super) fn pending(&self) -> &PendingPrefix {
        &self.pending
    }

    fn target(&mut self) -> &mut ConfigNode {
        match self.open.last_mut() {
            Some(open) => &mut open.node,
            None => &mut self.root,
        }
    }

    pub(super) fn feed(&mut self, line: Line) -> Result<(), PikError> {
        self.line += 1;

        match line {
            // Only transition that keeps the buffer.
            Line::Comment(text) => {
                self.pending.push(text);
                return Ok(());
            }
            Line::Blank => {}
            Line::Open { comment } => {
                trace!(line = self.line, depth = self.open.len() + 1, "open node");
                let prefix_comment = self.pending.take();
                self.open.push(OpenNode {
                    node: ConfigNode::default(),
                    comment,
                    prefix_comment,
                    line: self.line,
                });
            }
            Line::Close { .. } => {
                let closed = self.open.pop().ok_or_else(|| PikError::UnbalancedBraces {
                    message: "Found '}' without a matching '{'".into(),
                    line: self.line,
                    hint: Some("Remove the extra '}' or add the missing '{'".into()),
                    code: Some(201),
                })?;
                trace!(line = self.line, opened_at = closed.line, "close node");
                self.target().append(Value::Node(closed.node), closed.comment, closed.prefix_comment);
            }
            Line::Data { mut tokens, comment } => {
                let prefix_comment = self.pending.take();
                let value = if tokens.len() == 1 {
                    Value::Scalar(tokens.remove(0))
                } else {
                    Value::Item(tokens)
                };
                self.target().append(value, comment, prefix_comment);
            }
        }

        self.pending.clear();
        Ok(())
    }

    pub(super) fn finish(mut self) -> Result<ConfigNode, PikError> {
        if let Some(open) = self.open.pop() {
            return Err(PikError::UnbalancedBraces {
                message: format!(
                    "Input ended with {} unclosed node(s); innermost opened here",
                    self.open.len() + 1
                ),
                line: open.line,
                hint: Some("Add the missing '}'".into()),
                code: Some(202),
            });
        }
        Ok(self.root)
    }
}
