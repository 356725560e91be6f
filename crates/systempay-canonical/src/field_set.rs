//! Ordered field sets
//!
//! A `FieldSet` is the canonical form of the parameters that go into a
//! signature: unique names mapped to already-rendered string values, always
//! iterated in ascending byte order of the names.

use std::collections::BTreeMap;

use crate::error::CanonicalError;

/// Separator between concatenated values
pub const VALUE_SEPARATOR: char = '+';

/// An ordered mapping from field name to rendered value
///
/// Backed by a `BTreeMap` so iteration order is the signing order. Names
/// are unique; inserting a name twice is an error rather than a silent
/// overwrite, since a reordered or doubled field changes the signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: BTreeMap<String, String>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field
    ///
    /// # Errors
    ///
    /// Returns `CanonicalError::DuplicateField` if the name is already
    /// present.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), CanonicalError> {
        let name = name.into();
        if self.fields.contains_key(&name) {
            return Err(CanonicalError::DuplicateField(name));
        }
        self.fields.insert(name, value.into());
        Ok(())
    }

    /// Build a field set from name/value pairs
    ///
    /// # Errors
    ///
    /// Returns `CanonicalError::DuplicateField` on the first repeated name.
    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Result<Self, CanonicalError>
    where
        N: Into<String>,
        V: Into<String>,
    {
        let mut fields = Self::new();
        for (name, value) in pairs {
            fields.insert(name, value)?;
        }
        Ok(fields)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in ascending name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// The values in ascending name order, joined with `+`
    ///
    /// This is the exact string the signature engine hashes.
    pub fn concatenated(&self) -> String {
        let values: Vec<&str> = self.fields.values().map(String::as_str).collect();
        values.join(&VALUE_SEPARATOR.to_string())
    }
}
