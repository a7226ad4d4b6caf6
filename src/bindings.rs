use std::collections::btree_map::{self, BTreeMap};
use std::collections::hash_map::{Entry, HashMap};
use std::iter::FromIterator;

use serde::ser::Serialize;
use serde_json::value::{to_value, Value};

use crate::errors::{BindingKind, Error, Result};

/// One element of a list parameter: the scalars visible while its block body is rendered.
///
/// Keys are kept sorted so that iteration, and therefore collision reporting, is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    data: BTreeMap<String, String>,
}

impl Row {
    /// Initializes an empty row
    pub fn new() -> Self {
        Row { data: BTreeMap::new() }
    }

    /// Inserts a value, replacing any previous value under the same name.
    ///
    /// ```rust
    /// # use stencil::Row;
    /// let mut row = Row::new();
    /// row.insert("name", "alice");
    /// row.insert("age", 42.to_string());
    /// assert_eq!(row.get("age"), Some("42"));
    /// ```
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, val: V) {
        self.data.insert(key.into(), val.into());
    }

    /// Builds a row out of anything serializable to a map of strings, numbers or booleans.
    ///
    /// Numbers and booleans are converted with their JSON representation. `null`, arrays
    /// and nested objects have no textual form and are rejected.
    ///
    /// ```rust
    /// # use stencil::Row;
    /// # use serde_json::json;
    /// let row = Row::from_serialize(&json!({"name": "alice", "age": 42})).unwrap();
    /// assert_eq!(row.get("name"), Some("alice"));
    /// assert_eq!(row.get("age"), Some("42"));
    /// ```
    pub fn from_serialize(value: impl Serialize) -> Result<Self> {
        let obj = match to_value(value).map_err(Error::json)? {
            Value::Object(m) => m,
            _ => return Err(Error::msg("Creating a Row from a value that is not an object")),
        };

        let mut row = Row::new();
        for (key, val) in obj {
            let text = match val {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    return Err(Error::msg(format!(
                        "Row value `{}` must be a string, a number or a boolean, got `{}`",
                        key, other
                    )))
                }
            };
            row.data.insert(key, text);
        }
        Ok(row)
    }

    /// Returns the value bound to `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Checks if a value exists at a specific key
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Iterates over the bound names in sorted order
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.data.iter()
    }

    /// Number of values in the row
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the row binds nothing
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row { data: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl From<BTreeMap<String, String>> for Row {
    fn from(data: BTreeMap<String, String>) -> Self {
        Row { data }
    }
}

impl From<HashMap<String, String>> for Row {
    fn from(data: HashMap<String, String>) -> Self {
        data.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// A value registered under a name: either a single string or a sequence of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// Substituted for `<name>`
    Scalar(String),
    /// Expanded once per row by `<#name>...</name>`
    List(Vec<Row>),
}

impl Binding {
    /// Which namespace this binding occupies
    pub fn kind(&self) -> BindingKind {
        match *self {
            Binding::Scalar(_) => BindingKind::Scalar,
            Binding::List(_) => BindingKind::List,
        }
    }
}

/// The parameters of one template, scalars and lists sharing a single table.
///
/// Every name is bound at most once and to exactly one kind, so a tag can never
/// be ambiguous between the two namespaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    table: HashMap<String, Binding>,
}

impl Bindings {
    /// Initializes an empty table
    pub fn new() -> Self {
        Bindings { table: HashMap::new() }
    }

    /// Registers `name` as a scalar. Fails if the name is taken, whatever its kind.
    pub fn insert_scalar<K: Into<String>, V: Into<String>>(
        &mut self,
        name: K,
        value: V,
    ) -> Result<()> {
        self.insert(name.into(), Binding::Scalar(value.into()))
    }

    /// Registers `name` as a list. Fails if the name is taken, whatever its kind.
    pub fn insert_list<K, I>(&mut self, name: K, rows: I) -> Result<()>
    where
        K: Into<String>,
        I: IntoIterator<Item = Row>,
    {
        self.insert(name.into(), Binding::List(rows.into_iter().collect()))
    }

    fn insert(&mut self, name: String, binding: Binding) -> Result<()> {
        match self.table.entry(name) {
            Entry::Occupied(e) => {
                Err(Error::duplicate_binding(e.key(), e.get().kind(), binding.kind()))
            }
            Entry::Vacant(e) => {
                e.insert(binding);
                Ok(())
            }
        }
    }

    /// Returns the binding registered under `name`
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.table.get(name)
    }

    /// The scalar value of `name`, `None` if unbound or bound as a list
    pub fn scalar(&self, name: &str) -> Option<&str> {
        match self.table.get(name) {
            Some(Binding::Scalar(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The rows of `name`, `None` if unbound or bound as a scalar
    pub fn list(&self, name: &str) -> Option<&[Row]> {
        match self.table.get(name) {
            Some(Binding::List(rows)) => Some(rows.as_slice()),
            _ => None,
        }
    }

    /// The kind `name` is bound as, if bound at all
    pub fn kind_of(&self, name: &str) -> Option<BindingKind> {
        self.table.get(name).map(Binding::kind)
    }

    /// Checks if `name` is bound
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Number of bound names, scalars and lists together
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether nothing is bound
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
