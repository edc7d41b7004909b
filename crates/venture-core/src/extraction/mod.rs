//! Keyword-driven profile autofill.
//!
//! Scans free text for domain vocabulary (industry, geography, seniority,
//! company stage, occupation) and proposes profile values. Proposals are
//! plain data; applying them to a `ProfileDraft` is a separate step.
//!
//! # Module Structure
//!
//! - `role`: The closed set of user roles (`Role`)
//! - `suggestion`: The partial field mapping produced by extraction
//! - `table`: Declarative keyword table loaded from TOML
//! - `extractor`: The matching logic and its tie-break policy

mod extractor;
mod role;
mod suggestion;
mod table;

// Re-export public API
pub use extractor::{KeywordExtractor, MatchPolicy};
pub use role::Role;
pub use suggestion::Suggestions;
pub use table::{KeywordCategory, KeywordRule, KeywordTable};
