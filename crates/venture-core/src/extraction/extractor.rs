//! Keyword matching.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::role::Role;
use super::suggestion::Suggestions;
use super::table::KeywordTable;

/// Tie-break policy for several matching rules in one category.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// The first matching rule in declaration order wins
    #[default]
    FirstMatch,
    /// Every matching rule contributes; values are joined in declaration order
    AllMatches,
}

/// Maps free text to suggested profile values.
///
/// Extraction is a pure function of the text, the role and the table. It
/// never fails: text without known keywords yields empty suggestions.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    table: Arc<KeywordTable>,
    policy: MatchPolicy,
}

impl KeywordExtractor {
    pub fn new(table: Arc<KeywordTable>, policy: MatchPolicy) -> Self {
        Self { table, policy }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    pub fn extract(&self, text: &str, role: Role) -> Suggestions {
        let text = text.to_lowercase();
        let mut suggestions = Suggestions::new();

        if text.trim().is_empty() {
            return suggestions;
        }

        for category in self.table.categories() {
            if !category.is_eligible(role) {
                continue;
            }

            for rule in &category.rules {
                let Some(keyword) = rule.matched_keyword(&text) else {
                    continue;
                };
                tracing::debug!(
                    category = %category.name,
                    keyword,
                    "Keyword matched"
                );

                for (field, value) in &rule.suggest {
                    match self.policy {
                        MatchPolicy::FirstMatch => {
                            suggestions.insert(*field, value.as_str());
                        }
                        MatchPolicy::AllMatches => suggestions.append(*field, value),
                    }
                }

                if self.policy == MatchPolicy::FirstMatch {
                    break;
                }
            }
        }

        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileField;

    fn extractor(policy: MatchPolicy) -> KeywordExtractor {
        KeywordExtractor::new(Arc::new(KeywordTable::builtin().unwrap()), policy)
    }

    #[test]
    fn test_founder_scenario() {
        let s = extractor(MatchPolicy::FirstMatch)
            .extract("I work in fintech in Dubai, senior level", Role::Founder);

        assert!(s.get(ProfileField::IndustryExpertise).unwrap().contains("Fintech"));
        assert_eq!(s.get(ProfileField::Country), Some("UAE"));
        assert_eq!(s.get(ProfileField::YearsExperience), Some("11-15"));
    }

    #[test]
    fn test_no_keywords_yields_empty() {
        let s = extractor(MatchPolicy::FirstMatch).extract("just saying hello", Role::Investor);
        assert!(s.is_empty());
        assert_eq!(serde_json::to_string(&s).unwrap(), "{}");
    }

    #[test]
    fn test_empty_text_yields_empty() {
        assert!(extractor(MatchPolicy::AllMatches).extract("", Role::Expert).is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let s = extractor(MatchPolicy::FirstMatch).extract("FINTECH founder", Role::Founder);
        assert_eq!(s.get(ProfileField::IndustryExpertise), Some("Fintech"));
    }

    #[test]
    fn test_first_match_wins_within_category() {
        // "saas" is declared after "fintech", so fintech wins regardless of text order.
        let s = extractor(MatchPolicy::FirstMatch).extract("saas and fintech", Role::Founder);
        assert_eq!(s.get(ProfileField::IndustryExpertise), Some("Fintech"));
    }

    #[test]
    fn test_all_matches_joins_in_declaration_order() {
        let s = extractor(MatchPolicy::AllMatches).extract("saas and fintech", Role::Founder);
        assert_eq!(s.get(ProfileField::IndustryExpertise), Some("Fintech, SaaS"));
    }

    #[test]
    fn test_categories_are_independent() {
        let s = extractor(MatchPolicy::FirstMatch).extract("healthtech in london", Role::Investor);
        assert_eq!(s.get(ProfileField::IndustryExpertise), Some("Healthtech"));
        assert_eq!(s.get(ProfileField::Country), Some("United Kingdom"));
        assert_eq!(s.get(ProfileField::City), Some("London"));
    }

    #[test]
    fn test_role_restricts_categories() {
        // Seniority is not offered to investors.
        let s = extractor(MatchPolicy::FirstMatch).extract("senior partner", Role::Investor);
        assert!(!s.contains(ProfileField::YearsExperience));

        let s = extractor(MatchPolicy::FirstMatch).extract("senior engineer", Role::Expert);
        assert_eq!(s.get(ProfileField::YearsExperience), Some("11-15"));
    }

    #[test]
    fn test_pre_seed_declared_before_seed() {
        let s = extractor(MatchPolicy::FirstMatch).extract("raising a pre-seed round", Role::Founder);
        assert_eq!(s.get(ProfileField::CompanyStage), Some("Pre-seed"));
    }
}
