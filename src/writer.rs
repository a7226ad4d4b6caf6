use std::fmt;

use crate::errors::{Error, Result};

const DEFAULT_INDENT_WIDTH: usize = 4;

#[derive(Debug, Clone, PartialEq)]
struct Line {
    contents: String,
    indentation: usize,
}

/// A text buffer made of lines, each remembering its own indentation level.
///
/// Meant for code generators feeding it rendered snippets:
///
/// ```rust
/// # use stencil::IndentedWriter;
/// let mut writer = IndentedWriter::new();
/// writer.add_line("fn main() {");
/// writer.indent();
/// writer.add("let x = ");
/// writer.add("1;");
/// writer.unindent()?;
/// writer.add_line("}");
/// assert_eq!(writer.format(), "fn main() {\n    let x = 1;\n}\n");
/// # Ok::<(), stencil::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IndentedWriter {
    lines: Vec<Line>,
    indent_width: usize,
}

impl IndentedWriter {
    /// Creates a writer indenting with 4 spaces per level
    pub fn new() -> Self {
        Self::with_indent_width(DEFAULT_INDENT_WIDTH)
    }

    /// Creates a writer indenting with `width` spaces per level
    pub fn with_indent_width(width: usize) -> Self {
        IndentedWriter {
            lines: vec![Line { contents: String::new(), indentation: 0 }],
            indent_width: width,
        }
    }

    fn current(&mut self) -> &mut Line {
        // there is always at least one line
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }

    /// Joins all lines, each one indented and terminated by `\n`.
    /// The current line is left out while it is still empty.
    pub fn format(&self) -> String {
        let mut lines = &self.lines[..];
        if let Some((last, rest)) = lines.split_last() {
            if last.contents.is_empty() {
                lines = rest;
            }
        }

        let mut result = String::new();
        for line in lines {
            result.push_str(&" ".repeat(line.indentation * self.indent_width));
            result.push_str(&line.contents);
            result.push('\n');
        }
        result
    }

    /// Starts a new line with the current indentation, unless the current line is still empty
    pub fn new_line(&mut self) {
        let current = self.current();
        if !current.contents.is_empty() {
            let indentation = current.indentation;
            self.lines.push(Line { contents: String::new(), indentation });
        }
    }

    /// Increases the indentation, starting from the next non-empty line
    pub fn indent(&mut self) {
        self.new_line();
        self.current().indentation += 1;
    }

    /// Decreases the indentation. Errors if already at indentation 0.
    pub fn unindent(&mut self) -> Result<()> {
        self.new_line();
        let current = self.current();
        if current.indentation == 0 {
            return Err(Error::negative_indentation());
        }
        current.indentation -= 1;
        Ok(())
    }

    /// Appends `s` to the current line
    pub fn add(&mut self, s: &str) {
        self.current().contents.push_str(s);
    }

    /// Writes `line` on a line of its own
    pub fn add_line(&mut self, line: &str) {
        self.new_line();
        self.add(line);
        self.new_line();
    }
}

impl Default for IndentedWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for IndentedWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.add(s);
        Ok(())
    }
}

impl fmt::Display for IndentedWriter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.format())
    }
}
