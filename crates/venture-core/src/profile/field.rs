//! Profile field identifiers.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A field of the profile form.
///
/// Names follow the camelCase keys the profile editor uses, both on the
/// wire and when parsed from text (`"industryExpertise".parse()`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum ProfileField {
    FullName,
    Email,
    Phone,
    Occupation,
    IndustryExpertise,
    Country,
    City,
    YearsExperience,
    CompanyName,
    CompanyStage,
    CompanySize,
}

impl ProfileField {
    /// Human-readable label used in assistant replies.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::FullName => "Full name",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
            ProfileField::Occupation => "Occupation",
            ProfileField::IndustryExpertise => "Industry expertise",
            ProfileField::Country => "Country",
            ProfileField::City => "City",
            ProfileField::YearsExperience => "Years of experience",
            ProfileField::CompanyName => "Company name",
            ProfileField::CompanyStage => "Company stage",
            ProfileField::CompanySize => "Company size",
        }
    }
}
