//! Lexicon configuration

use crate::error::{Error, Result};
use crate::limits::validate_limit;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Resource guards applied to translation queries
///
/// Both caps are off by default: the closure always terminates on its own.
/// Live processing pairs are kept per distinct chain, so on dense lexicons
/// their number can grow exponentially with the rounds run; the caps bound
/// that work.
///
/// ```toml
/// max_expansion_rounds = 8
/// max_processing_pairs = 100000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Maximum expansion rounds per query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expansion_rounds: Option<usize>,

    /// Maximum live processing pairs per query
    ///
    /// This is the cap to set for dense lexicons, where the pair count grows
    /// faster than the round count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_processing_pairs: Option<usize>,
}

impl LexiconConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_expansion_rounds(mut self, rounds: usize) -> Self {
        self.max_expansion_rounds = Some(rounds);
        self
    }

    pub fn with_max_processing_pairs(mut self, pairs: usize) -> Self {
        self.max_processing_pairs = Some(pairs);
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading lexicon config from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn validate(&self) -> Result<()> {
        validate_limit("max_expansion_rounds", self.max_expansion_rounds)?;
        validate_limit("max_processing_pairs", self.max_processing_pairs)?;
        Ok(())
    }
}
