use crate::bindings::{Bindings, Row};
use crate::errors::{Error, Result};

/// The scopes active while rendering: one frame per block row being expanded,
/// on top of the instance's own bindings.
///
/// Frames never shadow each other nor the instance scalars, `push_row_frame`
/// refuses any row that would.
#[derive(Debug)]
pub struct CallStack<'a> {
    /// Rows of the blocks currently being expanded, innermost last
    stack: Vec<&'a Row>,
    /// User supplied bindings for the render
    bindings: &'a Bindings,
}

impl<'a> CallStack<'a> {
    /// Create the initial call stack, with no frame
    pub fn new(bindings: &'a Bindings) -> CallStack<'a> {
        CallStack { stack: Vec::new(), bindings }
    }

    /// Merges `row` into the current scope for the expansion of one row of `list`
    pub fn push_row_frame(&mut self, list: &str, row: &'a Row) -> Result<()> {
        for (key, _) in row {
            if self.lookup(key).is_some() {
                return Err(Error::binding_collision(key, list));
            }
        }
        self.stack.push(row);
        Ok(())
    }

    /// Pop the last frame
    pub fn pop(&mut self) {
        self.stack.pop();
    }

    /// Finds the value of a scalar tag, innermost row first
    pub fn lookup(&self, key: &str) -> Option<&'a str> {
        for &row in self.stack.iter().rev() {
            if let Some(val) = row.get(key) {
                return Some(val);
            }
        }

        self.bindings.scalar(key)
    }

    /// List parameters are never scoped: every block sees the instance's lists
    pub fn list(&self, name: &str) -> Option<&'a [Row]> {
        self.bindings.list(name)
    }

    /// How many blocks are currently being expanded
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
