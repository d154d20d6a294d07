//! Language identifiers

use crate::limits::{validate_language_name, ValidationError};
use serde::{Deserialize, Serialize};

/// The name of a language, used to tell vocabularies apart
///
/// Languages are plain values: equal iff their names are equal, and ordered
/// lexicographically by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(String);

impl Language {
    /// Create a language, or `None` if the name is empty or too long
    pub fn new(name: impl Into<String>) -> Option<Self> {
        Self::try_from(name.into()).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Language {
    type Error = ValidationError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        validate_language_name(&name)?;
        Ok(Self(name))
    }
}

impl TryFrom<&str> for Language {
    type Error = ValidationError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::try_from(name.to_string())
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.0
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
