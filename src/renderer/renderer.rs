use tracing::trace;

use crate::bindings::Bindings;
use crate::errors::{BindingKind, Error, Result};
use crate::parser::ast::Node;
use crate::parser::parse;
use crate::renderer::call_stack::CallStack;

/// Given a template source and its `Bindings`, renders text
#[derive(Debug)]
pub struct Renderer<'a> {
    /// Template to render
    template: &'a str,
    /// Read-only bindings for the whole render
    bindings: &'a Bindings,
}

impl<'a> Renderer<'a> {
    /// Create a new `Renderer`
    #[inline]
    pub fn new(template: &'a str, bindings: &'a Bindings) -> Renderer<'a> {
        Renderer { template, bindings }
    }

    /// Combines the bindings with the template to generate text results
    pub fn render(&self) -> Result<String> {
        trace!(len = self.template.len(), bindings = self.bindings.len(), "rendering template");

        let mut call_stack = CallStack::new(self.bindings);
        let mut output = String::with_capacity(self.template.len());
        render_nodes(&parse(self.template)?, &mut call_stack, &mut output)?;

        Ok(output)
    }
}

fn render_nodes<'a>(
    nodes: &[Node<'a>],
    call_stack: &mut CallStack<'a>,
    output: &mut String,
) -> Result<()> {
    for node in nodes {
        match *node {
            Node::Text(s) => output.push_str(s),
            Node::Tag(name) => match call_stack.lookup(name) {
                Some(val) => output.push_str(val),
                None => return Err(Error::unbound_tag(name, BindingKind::Scalar)),
            },
            Node::Block { name, body } => render_block(name, body, call_stack, output)?,
        }
    }

    Ok(())
}

/// Renders `body` once per row of `name`, each time with that row merged into the scope
fn render_block<'a>(
    name: &'a str,
    body: &'a str,
    call_stack: &mut CallStack<'a>,
    output: &mut String,
) -> Result<()> {
    if name.is_empty() {
        return Err(Error::malformed_tag("the list name is empty"));
    }
    let rows = call_stack.list(name).ok_or_else(|| Error::unbound_tag(name, BindingKind::List))?;
    if rows.is_empty() {
        return Ok(());
    }

    let nodes = parse(body)?;
    trace!(list = name, rows = rows.len(), depth = call_stack.depth(), "expanding block");

    for row in rows {
        call_stack.push_row_frame(name, row)?;
        let res = render_nodes(&nodes, call_stack, output);
        call_stack.pop();
        res?;
    }

    Ok(())
}
