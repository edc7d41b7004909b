use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The kind of member using the platform.
///
/// The role decides which keyword categories may produce suggestions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[default]
    Founder,
    Investor,
    Expert,
}
