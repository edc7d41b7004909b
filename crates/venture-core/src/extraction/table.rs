//! Declarative keyword table.
//!
//! The table is data, not code: the default ships embedded in the crate and a
//! replacement can be loaded from a TOML file at startup.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::role::Role;
use crate::error::{Result, VentureError};
use crate::profile::ProfileField;

const BUILTIN_TABLE: &str = include_str!("../../assets/keywords.toml");

/// A validated keyword table.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordTable {
    categories: Vec<KeywordCategory>,
}

/// An independent group of rules, such as "industry" or "geography".
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordCategory {
    pub name: String,
    /// Roles allowed to use this category; empty means every role
    pub roles: Vec<Role>,
    /// Rules in declaration order
    pub rules: Vec<KeywordRule>,
}

/// Keywords that, when any is found, suggest the listed values.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordRule {
    /// Lowercased keywords
    pub keywords: Vec<String>,
    pub suggest: Vec<(ProfileField, String)>,
}

impl KeywordCategory {
    pub fn is_eligible(&self, role: Role) -> bool {
        self.roles.is_empty() || self.roles.contains(&role)
    }
}

impl KeywordRule {
    /// Returns the first keyword contained in already-lowercased `text`.
    pub fn matched_keyword(&self, text: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| text.contains(keyword))
    }
}

// On-disk shape, validated into the public types.
#[derive(Deserialize)]
struct RawTable {
    #[serde(default, rename = "category")]
    categories: Vec<RawCategory>,
}

#[derive(Deserialize)]
struct RawCategory {
    name: String,
    #[serde(default)]
    roles: Vec<Role>,
    #[serde(default, rename = "rule")]
    rules: Vec<RawRule>,
}

#[derive(Deserialize)]
struct RawRule {
    keywords: Vec<String>,
    suggest: BTreeMap<String, String>,
}

impl KeywordTable {
    /// The table embedded in the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_TABLE)
    }

    /// Loads and validates a table from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            VentureError::config(format!(
                "Failed to read keyword table {}: {}",
                path.display(),
                e
            ))
        })?;
        let table = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded keyword table from {} ({} categories)",
            path.display(),
            table.categories.len()
        );
        Ok(table)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawTable = toml::from_str(content)
            .map_err(|e| VentureError::config(format!("Invalid keyword table: {}", e)))?;
        Self::validate(raw)
    }

    pub fn categories(&self) -> &[KeywordCategory] {
        &self.categories
    }

    fn validate(raw: RawTable) -> Result<Self> {
        let mut categories = Vec::with_capacity(raw.categories.len());

        for raw_category in raw.categories {
            let name = raw_category.name.trim().to_string();
            if name.is_empty() {
                return Err(VentureError::config("Keyword category without a name"));
            }

            let mut rules = Vec::with_capacity(raw_category.rules.len());
            for (index, raw_rule) in raw_category.rules.into_iter().enumerate() {
                let keywords: Vec<String> = raw_rule
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect();
                if keywords.is_empty() {
                    return Err(VentureError::config(format!(
                        "Rule {} in category '{}' has no keywords",
                        index, name
                    )));
                }

                let mut suggest = Vec::with_capacity(raw_rule.suggest.len());
                for (key, value) in raw_rule.suggest {
                    let field: ProfileField = key.parse().map_err(|_| {
                        VentureError::config(format!(
                            "Rule {} in category '{}' names unknown field '{}'",
                            index, name, key
                        ))
                    })?;
                    if value.trim().is_empty() {
                        return Err(VentureError::config(format!(
                            "Rule {} in category '{}' suggests an empty value for '{}'",
                            index, name, key
                        )));
                    }
                    suggest.push((field, value.trim().to_string()));
                }
                if suggest.is_empty() {
                    return Err(VentureError::config(format!(
                        "Rule {} in category '{}' suggests nothing",
                        index, name
                    )));
                }

                rules.push(KeywordRule { keywords, suggest });
            }

            categories.push(KeywordCategory {
                name,
                roles: raw_category.roles,
                rules,
            });
        }

        Ok(Self { categories })
    }
}
