//! Free-form profile draft.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::field::ProfileField;
use crate::extraction::Suggestions;

/// How confirmed suggestions interact with values already in the draft.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApplyPolicy {
    /// Suggested values replace whatever the field held
    #[default]
    Overwrite,
    /// Suggested values only fill fields that are still empty
    PreserveExisting,
}

/// The user's self-described attributes for the current session.
///
/// Values are whole strings; an update always replaces the previous value.
/// Unset fields are absent from the map, never stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileDraft {
    fields: BTreeMap<ProfileField, String>,
}

impl ProfileDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Sets a field from a direct user edit.
    ///
    /// A blank value clears the field. Returns the previous value.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.fields.remove(&field)
        } else {
            self.fields.insert(field, trimmed.to_string())
        }
    }

    /// Applies confirmed suggestions and returns the fields that changed.
    pub fn apply(&mut self, suggestions: &Suggestions, policy: ApplyPolicy) -> Vec<ProfileField> {
        let mut applied = Vec::new();
        for (field, value) in suggestions.iter() {
            if policy == ApplyPolicy::PreserveExisting && self.fields.contains_key(field) {
                continue;
            }
            if self.get(*field) == Some(value.as_str()) {
                continue;
            }
            self.fields.insert(*field, value.clone());
            applied.push(*field);
        }
        applied
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProfileField, &String)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
