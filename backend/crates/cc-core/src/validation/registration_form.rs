use serde::Deserialize;

/// Registration payload exactly as received
///
/// Every field is optional at this stage so that a missing field surfaces as
/// a per-field validation message rather than a body parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub email: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Registration input after validation and normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationInput {
    /// Trimmed, lowercased
    pub email: String,
    pub password: String,
    /// Trimmed, lowercased
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
