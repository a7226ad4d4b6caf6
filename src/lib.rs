#![doc(html_root_url = "https://docs.rs/stencil")]
//! # Stencil
//!
//! A minimal logic-less template renderer, meant for code and documentation generators.
//!
//! A template only knows two kinds of tags:
//!
//! - `<name>` is replaced by the value bound to `name`
//! - `<#items>...</items>` repeats its body once per row bound to `items`, each row
//!   adding its own values to the ones visible in the body
//!
//! Everything else is copied verbatim: there is no escaping, no conditionals and no
//! whitespace control.
//!
//! ## Example
//!
//! ```rust
//! use stencil::{Row, Stencil};
//!
//! let mut stencil = Stencil::new("contract <name> {\n<#fields>    uint <field>;\n</fields>}");
//! stencil
//!     .bind_scalar("name", "Token")?
//!     .bind_list("fields", vec![
//!         vec![("field", "supply")].into_iter().collect::<Row>(),
//!         vec![("field", "decimals")].into_iter().collect::<Row>(),
//!     ])?;
//!
//! assert_eq!(
//!     stencil.render()?,
//!     "contract Token {\n    uint supply;\n    uint decimals;\n}"
//! );
//! # Ok::<(), stencil::Error>(())
//! ```
//!
//! A name can only be bound once, and a row may not rebind a name already visible
//! where its block is expanded: both are reported as errors rather than resolved by
//! precedence.
//!
//! [`IndentedWriter`] is a small line buffer to assemble rendered snippets into
//! indented source code.

#![deny(missing_docs)]

mod bindings;
mod errors;
mod parser;
mod renderer;
mod stencil;
mod writer;

// Library exports.

pub use crate::bindings::{Binding, Bindings, Row};
pub use crate::errors::{BindingKind, Error, ErrorKind, Result};
pub use crate::stencil::Stencil;
pub use crate::writer::IndentedWriter;
