//! Root configuration.
//!
//! Loaded from `~/.config/venture-desk/config.toml` (or an explicit path).
//! Every section has defaults, so a missing file or a partial file is valid.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VentureError};
use crate::extraction::{KeywordTable, MatchPolicy};
use crate::persona::PersonaCatalog;
use crate::profile::ApplyPolicy;

/// Directory name used under the platform config directory.
pub const APP_DIR_NAME: &str = "venture-desk";

/// Root configuration.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct VentureConfig {
    pub chat: ChatConfig,
    pub extraction: ExtractionConfig,
    pub profile: ProfileConfig,
    pub agents: AgentsConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChatConfig {
    /// Simulated assistant latency in milliseconds
    pub reply_delay_ms: u64,
    /// Cancel scheduled replies when the user navigates to another screen
    pub cancel_replies_on_navigation: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1200,
            cancel_replies_on_navigation: true,
        }
    }
}

impl ChatConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    pub match_policy: MatchPolicy,
    /// Custom keyword table; the embedded table is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_table: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ProfileConfig {
    pub apply_policy: ApplyPolicy,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AgentsConfig {
    /// Custom persona catalog; the embedded catalog is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl VentureConfig {
    /// Default config file location for the current platform.
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join("config.toml"))
            .ok_or_else(|| VentureError::config("Cannot determine config directory"))
    }

    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads the keyword table named by the config, or the embedded one.
    pub fn keyword_table(&self) -> Result<KeywordTable> {
        match &self.extraction.keyword_table {
            Some(path) => KeywordTable::load(path),
            None => KeywordTable::builtin(),
        }
    }

    /// Loads the persona catalog named by the config, or the embedded one.
    pub fn persona_catalog(&self) -> Result<PersonaCatalog> {
        match &self.agents.catalog {
            Some(path) => PersonaCatalog::load(path),
            None => PersonaCatalog::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = VentureConfig::load(&temp_dir.path().join("config.toml")).unwrap();

        assert_eq!(config, VentureConfig::default());
        assert_eq!(config.chat.reply_delay(), Duration::from_millis(1200));
        assert!(config.chat.cancel_replies_on_navigation);
        assert_eq!(config.extraction.match_policy, MatchPolicy::FirstMatch);
        assert_eq!(config.profile.apply_policy, ApplyPolicy::Overwrite);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = VentureConfig::from_toml_str(
            r#"
            [chat]
            reply_delay_ms = 50

            [profile]
            apply_policy = "preserve_existing"
            "#,
        )
        .unwrap();

        assert_eq!(config.chat.reply_delay_ms, 50);
        assert!(config.chat.cancel_replies_on_navigation);
        assert_eq!(config.profile.apply_policy, ApplyPolicy::PreserveExisting);
        assert_eq!(config.extraction.match_policy, MatchPolicy::FirstMatch);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[chat\nreply_delay_ms = ").unwrap();

        let err = VentureConfig::load(&path).unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result = VentureConfig::from_toml_str("[extraction]\nmatch_policy = \"best_match\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_round_trip_of_custom_paths() {
        let mut config = VentureConfig::default();
        config.extraction.match_policy = MatchPolicy::AllMatches;
        config.agents.catalog = Some(PathBuf::from("/etc/venture/agents.toml"));

        let text = config.to_toml_string().unwrap();
        assert_eq!(VentureConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_builtin_tables_load() {
        let config = VentureConfig::default();
        assert!(config.keyword_table().is_ok());
        assert!(config.persona_catalog().is_ok());
    }
}
