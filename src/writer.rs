use std::fmt::{self, Write as _};
use std::io;

use crate::ast::Value;
use crate::node::ConfigNode;

const INDENT: &str = "    ";

impl ConfigNode {
    /// Render the entries of this node as text, each line indented by
    /// `indent_level` levels of four spaces.
    ///
    /// Nested nodes get their `{`/`}` lines at `indent_level` and their
    /// contents one level deeper. The node's own braces are never written,
    /// so `render(0)` on a root node yields the file contents.
    ///
    /// # Examples
    /// ```
    /// use pik_cfg::{ConfigNode, Entry, Value};
    ///
    /// let mut root = ConfigNode::default();
    /// root.add_value("2", Some("count".into()), Some(vec!["objects".into()]));
    /// root.add_node(vec![Entry::from(Value::Scalar("a".into()))], None, None);
    ///
    /// assert_eq!(root.render(0), "# objects\n2 # count\n{\n    a\n}\n");
    /// ```
    pub fn render(&self, indent_level: usize) -> String {
        let mut out = String::new();
        // Writing to a String never fails.
        let _ = self.render_into(&mut out, indent_level);
        out
    }

    /// Write the rendered root to `writer`.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.render(0).as_bytes())?;
        writer.flush()
    }

    fn render_into(&self, out: &mut String, indent_level: usize) -> fmt::Result {
        let indent = INDENT.repeat(indent_level);

        for entry in self {
            if let Some(block) = entry.prefix_comment() {
                for line in block {
                    writeln!(out, "{}# {}", indent, line)?;
                }
            }

            match entry.value() {
                Value::Node(child) => {
                    write!(out, "{}{{", indent)?;
                    write_comment(out, entry.comment())?;
                    out.push('\n');
                    child.render_into(out, indent_level + 1)?;
                    writeln!(out, "{}}}", indent)?;
                }
                Value::Item(tokens) => {
                    write!(out, "{}{}", indent, tokens.join(" "))?;
                    write_comment(out, entry.comment())?;
                    out.push('\n');
                }
                Value::Scalar(token) => {
                    write!(out, "{}{}", indent, token)?;
                    write_comment(out, entry.comment())?;
                    out.push('\n');
                }
            }
        }
        Ok(())
    }
}

fn write_comment(out: &mut String, comment: Option<&str>) -> fmt::Result {
    match comment {
        Some(text) => write!(out, " # {}", text),
        None => Ok(()),
    }
}

impl fmt::Display for ConfigNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}
