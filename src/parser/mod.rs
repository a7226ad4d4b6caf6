use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::errors::{Error, Result as StencilResult};

// This include forces recompiling this source file if the grammar file changes.
const _GRAMMAR: &str = include_str!("stencil.pest");

#[derive(Parser)]
#[grammar = "parser/stencil.pest"]
pub struct StencilParser;

/// The AST of a template
pub mod ast;


use self::ast::*;

fn parse_block(pair: Pair<'_, Rule>) -> Node<'_> {
    let mut name = None;
    let mut body = "";

    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::list_name => name = Some(p.as_str()),
            Rule::block_body => body = p.as_str(),
            _ => unreachable!("{:?} not supposed to get there (parse_block)!", p.as_rule()),
        }
    }

    // the grammar cannot match a block without its name, even an empty one
    Node::Block { name: name.unwrap_or_default(), body }
}

fn parse_scalar_tag(pair: Pair<'_, Rule>) -> Node<'_> {
    let name = pair
        .into_inner()
        .find(|p| p.as_rule() == Rule::tag_name)
        .map(|p| p.as_str())
        .unwrap_or_default();
    Node::Tag(name)
}

/// Splits `input` into text, scalar tags and blocks, left to right.
///
/// Adjacent text pieces are merged so a lone `<` doesn't fragment the output.
///
/// A `<#name>` without its `</name>` makes the body scan run to the end of the
/// input before falling back to text, so many unclosed openers cost quadratic time.
pub fn parse(input: &str) -> StencilResult<Vec<Node<'_>>> {
    // Every input is accepted: `text` matches a lone `<` and any run without one
    let mut pairs = match StencilParser::parse(Rule::template, input) {
        Ok(p) => p,
        Err(e) => return Err(Error::msg(e)),
    };

    let mut nodes: Vec<Node> = vec![];
    // Where the text node at the end of `nodes` starts, if there is one
    let mut text_start = None;

    let template = match pairs.next() {
        Some(p) => p,
        None => return Ok(nodes),
    };

    for p in template.into_inner() {
        match p.as_rule() {
            Rule::text => {
                let span = p.as_span();
                match text_start {
                    Some(start) => {
                        if let Some(last) = nodes.last_mut() {
                            *last = Node::Text(&input[start..span.end()]);
                        }
                    }
                    None => {
                        text_start = Some(span.start());
                        nodes.push(Node::Text(p.as_str()));
                    }
                }
            }
            Rule::scalar_tag => {
                text_start = None;
                nodes.push(parse_scalar_tag(p));
            }
            Rule::block => {
                text_start = None;
                nodes.push(parse_block(p));
            }
            Rule::EOI => (),
            _ => unreachable!("unknown tpl rule: {:?}", p.as_rule()),
        }
    }

    Ok(nodes)
}
