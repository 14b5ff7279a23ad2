//! vCard property parameters as seen by the importer.

use std::collections::HashMap;

/// Marker value stored for a bare parameter token (`PREF`, `WORK`).
pub const FLAG_VALUE: &str = "TRUE";

/// Parameters of a single property line.
///
/// Keys and values are normalized to uppercase. A bare token with no `=`
/// is stored as a key mapped to [`FLAG_VALUE`]. A repeated key keeps the
/// last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: HashMap<String, String>,
}

impl Parameters {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, normalizing key and value to uppercase.
    pub fn insert(&mut self, name: &str, value: &str) {
        self.entries
            .insert(name.to_ascii_uppercase(), value.to_ascii_uppercase());
    }

    /// Returns the value of a parameter, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_uppercase())
            .map(String::as_str)
    }

    /// Returns the TYPE parameter, if present.
    #[must_use]
    pub fn type_value(&self) -> Option<&str> {
        self.get("TYPE")
    }

    /// Returns whether the value is marked preferred.
    ///
    /// Only `PREF` (bare) and `PREF=1` count.
    #[must_use]
    pub fn is_preferred(&self) -> bool {
        matches!(self.get("PREF"), Some(FLAG_VALUE | "1"))
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
