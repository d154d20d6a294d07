//! Entry types - a titled expression and its direct translations

use crate::expression::Expression;
use crate::language::Language;
use crate::synoset::Synoset;
use serde::{Deserialize, Serialize};

/// One direct bilingual link: a title expression and its translations
///
/// Equality, hashing and ordering cover the title and the full translation
/// set. Entries order by title first and by translations second, so sorted
/// lists of entries are reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entry {
    title: Expression,
    translations: Synoset,
}

impl Entry {
    /// Create a new entry
    pub fn new(title: Expression, translations: Synoset) -> Self {
        Self {
            title,
            translations,
        }
    }

    /// Create an entry with a single translation
    pub fn single(title: Expression, translation: Expression) -> Self {
        Self::new(title, Synoset::from_expression(translation))
    }

    pub fn title(&self) -> &Expression {
        &self.title
    }

    pub fn translations(&self) -> &Synoset {
        &self.translations
    }

    /// The `(title, translations)` language pair
    pub fn languages(&self) -> (&Language, &Language) {
        (self.title.language(), self.translations.language())
    }

    /// Add a translation; same contract as `Synoset::insert`
    pub fn insert(&mut self, translation: Expression) -> bool {
        self.translations.insert(translation)
    }

    /// Remove a translation, returning whether it was present
    pub fn remove(&mut self, translation: &Expression) -> bool {
        self.translations.remove(translation)
    }

    /// Check if the expression is the title or one of the translations
    pub fn contains(&self, expression: &Expression) -> bool {
        &self.title == expression || self.translations.contains(expression)
    }

    /// The expressions on the other side of this entry relative to `expression`
    ///
    /// For the title this is every translation; for a translation it is the
    /// title; for anything else it is empty.
    pub fn counterparts(&self, expression: &Expression) -> Vec<Expression> {
        if &self.title == expression {
            self.translations.iter().cloned().collect()
        } else if self.translations.contains(expression) {
            vec![self.title.clone()]
        } else {
            Vec::new()
        }
    }

    /// One entry per translation, titled by that translation and translated
    /// back to this entry's title
    ///
    /// An entry without translations flips to nothing.
    pub fn flipped(&self) -> Vec<Entry> {
        if self.translations.is_empty() {
            return Vec::new();
        }
        self.translations
            .iter()
            .map(|translation| Entry::single(translation.clone(), self.title.clone()))
            .collect()
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.title, self.translations)
    }
}
