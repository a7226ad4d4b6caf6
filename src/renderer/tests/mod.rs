mod errors;

use crate::bindings::Row;

/// Builds a row out of literal pairs
pub fn row(pairs: &[(&str, &str)]) -> Row {
    pairs.iter().cloned().collect()
}
