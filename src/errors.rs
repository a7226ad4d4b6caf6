use std::error::Error as StdError;
use std::fmt;

/// Which of the two parameter namespaces a name lives in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingKind {
    /// A single string value, used by `<name>` tags
    Scalar,
    /// A sequence of rows, used by `<#name>...</name>` blocks
    List,
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BindingKind::Scalar => write!(f, "scalar"),
            BindingKind::List => write!(f, "list"),
        }
    }
}

/// The kind of an error (non-exhaustive)
#[non_exhaustive]
#[derive(Debug)]
pub enum ErrorKind {
    /// Generic error
    Msg(String),
    /// A name was bound twice on the same instance
    DuplicateBinding {
        /// Name of the parameter
        name: String,
        /// How it was bound the first time
        existing: BindingKind,
        /// How the failed call tried to bind it
        attempted: BindingKind,
    },
    /// A tag in the template has no binding of the right kind
    UnboundTag {
        /// Name used in the tag
        name: String,
        /// `Scalar` for `<name>`, `List` for `<#name>`
        kind: BindingKind,
    },
    /// A row binds a name that is already a scalar in the enclosing scope
    BindingCollision {
        /// The name bound twice
        name: String,
        /// The block whose row caused the collision
        list: String,
    },
    /// A block tag matched but is unusable, eg with an empty list name
    MalformedTag(String),
    /// `IndentedWriter::unindent` was called at indentation 0
    NegativeIndentation,
    /// An error while converting a value into a row
    Json(serde_json::Error),
}

/// The Error type
#[derive(Debug)]
pub struct Error {
    /// Kind of error
    pub kind: ErrorKind,
    source: Option<Box<dyn StdError + Sync + Send>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Msg(ref message) => write!(f, "{}", message),
            ErrorKind::DuplicateBinding { ref name, existing, attempted } => {
                if existing == attempted {
                    write!(f, "`{}` already set", name)
                } else {
                    write!(f, "`{}` already set as a {} parameter", name, existing)
                }
            }
            ErrorKind::UnboundTag { ref name, kind: BindingKind::Scalar } => {
                write!(f, "Tag `{}` not found", name)
            }
            ErrorKind::UnboundTag { ref name, kind: BindingKind::List } => {
                write!(f, "List parameter `{}` not set", name)
            }
            ErrorKind::BindingCollision { ref name, ref list } => write!(
                f,
                "Parameter collision: `{}` from a row of `{}` is already bound",
                name, list
            ),
            ErrorKind::MalformedTag(ref reason) => write!(f, "Malformed block tag: {}", reason),
            ErrorKind::NegativeIndentation => write!(f, "Negative indentation"),
            ErrorKind::Json(ref e) => write!(f, "{}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|c| &**c as &(dyn StdError + 'static))
    }
}

impl Error {
    /// Creates generic error
    pub fn msg(value: impl ToString) -> Self {
        Self { kind: ErrorKind::Msg(value.to_string()), source: None }
    }

    /// Creates generic error with a source
    pub fn chain(value: impl ToString, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self { kind: ErrorKind::Msg(value.to_string()), source: Some(source.into()) }
    }

    /// Creates an error for a name bound twice
    pub fn duplicate_binding(
        name: impl ToString,
        existing: BindingKind,
        attempted: BindingKind,
    ) -> Self {
        Self {
            kind: ErrorKind::DuplicateBinding { name: name.to_string(), existing, attempted },
            source: None,
        }
    }

    /// Creates an error for a tag with no matching binding
    pub fn unbound_tag(name: impl ToString, kind: BindingKind) -> Self {
        Self { kind: ErrorKind::UnboundTag { name: name.to_string(), kind }, source: None }
    }

    /// Creates an error for a row shadowing an enclosing scalar
    pub fn binding_collision(name: impl ToString, list: impl ToString) -> Self {
        Self {
            kind: ErrorKind::BindingCollision { name: name.to_string(), list: list.to_string() },
            source: None,
        }
    }

    /// Creates an error for an unusable block tag
    pub fn malformed_tag(reason: impl ToString) -> Self {
        Self { kind: ErrorKind::MalformedTag(reason.to_string()), source: None }
    }

    /// Creates an error for an unindent below column 0
    pub fn negative_indentation() -> Self {
        Self { kind: ErrorKind::NegativeIndentation, source: None }
    }

    /// Creates JSON error
    pub fn json(value: serde_json::Error) -> Self {
        Self { kind: ErrorKind::Json(value), source: None }
    }
}

impl From<&str> for Error {
    fn from(e: &str) -> Self {
        Self::msg(e)
    }
}
impl From<String> for Error {
    fn from(e: String) -> Self {
        Self::msg(e)
    }
}
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::json(e)
    }
}
/// Convenient wrapper around std::Result.
pub type Result<T> = ::std::result::Result<T, Error>;
