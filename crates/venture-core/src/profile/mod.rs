//! Profile domain module.
//!
//! Session-scoped drafts of what the user says about themselves
//! (`ProfileDraft`) and what they are looking for (`PreferencesDraft`).
//!
//! # Module Structure
//!
//! - `field`: The closed set of profile fields (`ProfileField`)
//! - `draft`: The free-form profile record and the apply policy
//! - `preferences`: Categorical investment preferences

mod draft;
mod field;
mod preferences;

// Re-export public API
pub use draft::{ApplyPolicy, ProfileDraft};
pub use field::ProfileField;
pub use preferences::{InvestmentHorizon, PreferencesDraft, RiskTolerance};
