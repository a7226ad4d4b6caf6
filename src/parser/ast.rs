/// All the different pieces a template is made of
#[derive(Clone, Debug, PartialEq)]
pub enum Node<'a> {
    /// Literal text, copied to the output as is
    Text(&'a str),
    /// A `<name>` tag
    Tag(&'a str),
    /// A `<#name>...</name>` block. The body is kept unparsed until the block is expanded.
    Block {
        /// The list parameter driving the expansion
        name: &'a str,
        /// Everything between the opening and closing tags
        body: &'a str,
    },
}
