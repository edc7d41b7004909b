//! Investment preferences draft.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InvestmentHorizon {
    /// Under three years
    Short,
    /// Three to seven years
    Medium,
    /// Seven years or more
    Long,
}

/// The user's stated preferences for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesDraft {
    pub risk_tolerance: Option<RiskTolerance>,
    pub horizon: Option<InvestmentHorizon>,
    #[serde(default)]
    pub preferred_industries: BTreeSet<String>,
    #[serde(default)]
    pub geographic_focus: BTreeSet<String>,
}

impl PreferencesDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the industry if absent, removes it if present.
    ///
    /// Returns whether the industry is selected afterwards.
    pub fn toggle_industry(&mut self, industry: &str) -> bool {
        toggle(&mut self.preferred_industries, industry)
    }

    /// Adds the region if absent, removes it if present.
    pub fn toggle_region(&mut self, region: &str) -> bool {
        toggle(&mut self.geographic_focus, region)
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_industry_adds_then_removes() {
        let mut prefs = PreferencesDraft::new();

        assert!(prefs.toggle_industry("Fintech"));
        assert!(prefs.preferred_industries.contains("Fintech"));

        assert!(!prefs.toggle_industry("Fintech"));
        assert!(prefs.preferred_industries.is_empty());
    }

    #[test]
    fn test_blank_toggle_is_ignored() {
        let mut prefs = PreferencesDraft::new();
        assert!(!prefs.toggle_region("  "));
        assert!(prefs.geographic_focus.is_empty());
    }

    #[test]
    fn test_parse_enumerations() {
        assert_eq!("Aggressive".parse::<RiskTolerance>().unwrap(), RiskTolerance::Aggressive);
        assert_eq!("long".parse::<InvestmentHorizon>().unwrap(), InvestmentHorizon::Long);
        assert!("forever".parse::<InvestmentHorizon>().is_err());
    }
}
