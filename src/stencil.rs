use serde::ser::Serialize;
use tracing::debug;

use crate::bindings::{Bindings, Row};
use crate::errors::Result;
use crate::renderer::Renderer;

/// A template and the parameters it is rendered with.
///
/// Parameters are bound once each, then the template can be rendered as many
/// times as needed:
///
/// ```rust
/// # use stencil::{Row, Stencil};
/// let mut stencil = Stencil::new("<#people><name> is <age>\n</people>-- <source>");
/// stencil
///     .bind_scalar("source", "census")?
///     .bind_list("people", vec![
///         vec![("name", "Alice"), ("age", "31")].into_iter().collect::<Row>(),
///         vec![("name", "Bob"), ("age", "42")].into_iter().collect::<Row>(),
///     ])?;
///
/// assert_eq!(stencil.render()?, "Alice is 31\nBob is 42\n-- census");
/// # Ok::<(), stencil::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stencil {
    template: String,
    bindings: Bindings,
}

impl Stencil {
    /// Create a new instance for the given template source, with nothing bound
    pub fn new<T: Into<String>>(template: T) -> Stencil {
        Stencil { template: template.into(), bindings: Bindings::new() }
    }

    /// Binds `name` to a single value, substituted for every `<name>` tag.
    ///
    /// Errors if `name` is already bound, as a scalar or as a list. The existing
    /// binding is kept in that case.
    pub fn bind_scalar<K: Into<String>, V: Into<String>>(
        &mut self,
        name: K,
        value: V,
    ) -> Result<&mut Self> {
        let name = name.into();
        match self.bindings.insert_scalar(name.as_str(), value) {
            Ok(()) => debug!(name = %name, "bound scalar parameter"),
            Err(e) => {
                debug!(name = %name, error = %e, "rejected scalar parameter");
                return Err(e);
            }
        }
        Ok(self)
    }

    /// Binds `name` to a sequence of rows: every `<#name>...</name>` block is
    /// expanded once per row, in order.
    ///
    /// Errors if `name` is already bound, as a list or as a scalar. The rows
    /// themselves are only checked when rendering.
    pub fn bind_list<K, I>(&mut self, name: K, rows: I) -> Result<&mut Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = Row>,
    {
        let name = name.into();
        let rows: Vec<Row> = rows.into_iter().collect();
        let count = rows.len();
        match self.bindings.insert_list(name.as_str(), rows) {
            Ok(()) => debug!(name = %name, rows = count, "bound list parameter"),
            Err(e) => {
                debug!(name = %name, error = %e, "rejected list parameter");
                return Err(e);
            }
        }
        Ok(self)
    }

    /// Same as `bind_list` but the rows are built with `Row::from_serialize`.
    ///
    /// ```rust
    /// # use stencil::Stencil;
    /// # use serde_json::json;
    /// let rows = vec![json!({"x": 1}), json!({"x": 2})];
    /// let mut stencil = Stencil::new("<#items><x></items>");
    /// stencil.bind_serialized_list("items", &rows)?;
    /// assert_eq!(stencil.render()?, "12");
    /// # Ok::<(), stencil::Error>(())
    /// ```
    ///
    /// Nothing is bound if any element fails to convert.
    pub fn bind_serialized_list<K, T>(&mut self, name: K, rows: &[T]) -> Result<&mut Self>
    where
        K: Into<String>,
        T: Serialize,
    {
        let rows = rows.iter().map(|r| Row::from_serialize(r)).collect::<Result<Vec<_>>>()?;
        self.bind_list(name, rows)
    }

    /// Renders the template with the current bindings.
    ///
    /// Rendering never modifies the instance so calling it repeatedly gives the same output.
    ///
    /// Each `<#name>` left without its `</name>` is scanned to the end of the template
    /// before being kept as text, so templates with many unclosed openers render in
    /// quadratic time.
    pub fn render(&self) -> Result<String> {
        Renderer::new(&self.template, &self.bindings).render()
    }

    /// Renders a one off template against existing bindings, without building an instance.
    ///
    /// ```rust
    /// # use stencil::{Bindings, Stencil};
    /// let mut bindings = Bindings::new();
    /// bindings.insert_scalar("name", "World")?;
    /// assert_eq!(Stencil::one_off("Hello <name>!", &bindings)?, "Hello World!");
    /// # Ok::<(), stencil::Error>(())
    /// ```
    pub fn one_off(input: &str, bindings: &Bindings) -> Result<String> {
        Renderer::new(input, bindings).render()
    }

    /// The template source
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Everything bound so far
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }
}
