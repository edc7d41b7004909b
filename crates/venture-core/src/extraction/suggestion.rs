//! Suggested profile values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::profile::ProfileField;

/// A partial mapping from profile field to suggested value.
///
/// Fields without a suggestion are absent. Empty values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Suggestions(BTreeMap<ProfileField, String>);

impl Suggestions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a suggestion unless the field already has one.
    ///
    /// Returns `true` when the value was stored.
    pub fn insert(&mut self, field: ProfileField, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.trim().is_empty() || self.0.contains_key(&field) {
            return false;
        }
        self.0.insert(field, value);
        true
    }

    /// Appends `value` to the field's suggestion, joined with `", "`.
    ///
    /// A value already present in the list is not repeated.
    pub fn append(&mut self, field: ProfileField, value: &str) {
        if value.trim().is_empty() {
            return;
        }
        match self.0.get_mut(&field) {
            Some(existing) => {
                if !existing.split(", ").any(|part| part == value) {
                    existing.push_str(", ");
                    existing.push_str(value);
                }
            }
            None => {
                self.0.insert(field, value.to_string());
            }
        }
    }

    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ProfileField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProfileField, &String)> {
        self.0.iter()
    }

    pub fn fields(&self) -> impl Iterator<Item = ProfileField> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
