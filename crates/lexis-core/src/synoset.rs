//! Synosets - sorted sets of synonymous expressions in one language

use crate::expression::Expression;
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An ordered set of expressions of the same language, similar or equal in
/// meaning.
///
/// Members are unique, share `language`, and are kept sorted at all times.
/// Operations given an expression or synoset of another language reject it
/// and leave `self` untouched. A synoset may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "SynosetRepr")]
pub struct Synoset {
    language: Language,
    synonyms: Vec<Expression>,
}

impl Synoset {
    /// Create an empty synoset with a fixed language
    pub fn new(language: Language) -> Self {
        Self {
            language,
            synonyms: Vec::new(),
        }
    }

    /// Create a synoset holding exactly one expression
    pub fn from_expression(expression: Expression) -> Self {
        Self {
            language: expression.language().clone(),
            synonyms: vec![expression],
        }
    }

    /// Build a synoset from loose expressions, discarding those not in `language`
    pub fn from_expressions_in<I>(expressions: I, language: Language) -> Self
    where
        I: IntoIterator<Item = Expression>,
    {
        let mut synonyms: Vec<Expression> = expressions
            .into_iter()
            .filter(|e| e.language() == &language)
            .collect();
        synonyms.sort();
        synonyms.dedup();
        Self { language, synonyms }
    }

    /// Build a synoset in the language of the first expression
    ///
    /// Returns `None` for an empty sequence, as there is no language to infer.
    pub fn from_expressions<I>(expressions: I) -> Option<Self>
    where
        I: IntoIterator<Item = Expression>,
    {
        let mut iter = expressions.into_iter().peekable();
        let language = iter.peek()?.language().clone();
        Some(Self::from_expressions_in(iter, language))
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }

    pub fn first(&self) -> Option<&Expression> {
        self.synonyms.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expression> {
        self.synonyms.iter()
    }

    pub fn as_slice(&self) -> &[Expression] {
        &self.synonyms
    }

    pub fn contains(&self, expression: &Expression) -> bool {
        self.synonyms.binary_search(expression).is_ok()
    }

    /// Insert an expression at its sorted position
    ///
    /// Returns `true` iff the expression is of this synoset's language and
    /// was not already a member.
    pub fn insert(&mut self, expression: Expression) -> bool {
        if expression.language() != &self.language {
            return false;
        }
        match self.synonyms.binary_search(&expression) {
            Ok(_) => false,
            Err(index) => {
                self.synonyms.insert(index, expression);
                true
            }
        }
    }

    /// Remove an expression, returning whether it was a member
    ///
    /// Removal of the last member is allowed; empty synosets are valid.
    pub fn remove(&mut self, expression: &Expression) -> bool {
        match self.synonyms.binary_search(expression) {
            Ok(index) => {
                self.synonyms.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    /// Remove every member, returning them in order
    pub fn remove_all(&mut self) -> Vec<Expression> {
        std::mem::take(&mut self.synonyms)
    }

    /// Merge another synoset of the same language into `self`
    ///
    /// Returns `false` (and changes nothing) if the languages differ.
    pub fn merge(&mut self, other: &Synoset) -> bool {
        if other.language != self.language {
            return false;
        }
        if other.synonyms.is_empty() {
            return true;
        }
        if self.synonyms.is_empty() {
            self.synonyms = other.synonyms.clone();
            return true;
        }
        let left = std::mem::take(&mut self.synonyms);
        self.synonyms = merge_unique(left, &other.synonyms);
        true
    }

    /// The merge of `self` and `other`, or `None` if the languages differ
    pub fn merging(&self, other: &Synoset) -> Option<Synoset> {
        let mut merged = self.clone();
        merged.merge(other).then_some(merged)
    }
}

/// Linear merge of two sorted, duplicate-free sequences
fn merge_unique(left: Vec<Expression>, right: &[Expression]) -> Vec<Expression> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.iter().peekable();

    loop {
        let ordering = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l.cmp(*r),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => break,
        };
        match ordering {
            Ordering::Less => merged.extend(left.next()),
            Ordering::Greater => merged.extend(right.next().cloned()),
            Ordering::Equal => {
                merged.extend(left.next());
                right.next();
            }
        }
    }

    merged
}

impl Extend<Expression> for Synoset {
    /// Inserts every expression of this synoset's language; others are skipped
    fn extend<I: IntoIterator<Item = Expression>>(&mut self, iter: I) {
        for expression in iter {
            self.insert(expression);
        }
    }
}

impl<'a> IntoIterator for &'a Synoset {
    type Item = &'a Expression;
    type IntoIter = std::slice::Iter<'a, Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.synonyms.iter()
    }
}

impl IntoIterator for Synoset {
    type Item = Expression;
    type IntoIter = std::vec::IntoIter<Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.synonyms.into_iter()
    }
}

impl std::fmt::Display for Synoset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let texts: Vec<&str> = self.synonyms.iter().map(|e| e.text()).collect();
        write!(f, "[{}]", texts.join(", "))
    }
}

#[derive(Deserialize)]
struct SynosetRepr {
    language: Language,
    #[serde(default)]
    synonyms: Vec<Expression>,
}

impl From<SynosetRepr> for Synoset {
    fn from(repr: SynosetRepr) -> Self {
        Self::from_expressions_in(repr.synonyms, repr.language)
    }
}
