//! Expression types - words and phrases bound to a language

use crate::language::Language;
use crate::limits::{validate_context, validate_expression_text, validate_group_name, ValidationError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Classification of an expression (e.g. "Word", "Phrase", "Question")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Group(String);

impl Group {
    /// Create a group, or `None` if the name is empty or too long
    pub fn new(name: impl Into<String>) -> Option<Self> {
        Self::try_from(name.into()).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Group {
    type Error = ValidationError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        validate_group_name(&name)?;
        Ok(Self(name))
    }
}

impl TryFrom<&str> for Group {
    type Error = ValidationError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::try_from(name.to_string())
    }
}

impl From<Group> for String {
    fn from(group: Group) -> Self {
        group.0
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A word or phrase in a certain language
///
/// Identity is `(text, language, group)`. The optional context (e.g. the
/// article "der" for "Baum") is carried along but never takes part in
/// equality, hashing or ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ExpressionRepr")]
pub struct Expression {
    text: String,
    language: Language,
    group: Group,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<String>,
}

impl Expression {
    /// Create an expression, or `None` if the text is empty or too long
    pub fn new(text: impl Into<String>, language: Language, group: Group) -> Option<Self> {
        let text = text.into();
        validate_expression_text(&text).ok()?;
        Some(Self {
            text,
            language,
            group,
            context: None,
        })
    }

    /// Attach free-text context; an empty or oversized context is dropped
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        let context = context.into();
        self.context = if context.is_empty() || validate_context(&context).is_err() {
            None
        } else {
            Some(context)
        };
        self
    }

    /// The same expression moved to another language
    pub fn with_language(&self, language: Language) -> Self {
        Self {
            language,
            ..self.clone()
        }
    }

    /// The same expression reclassified into another group
    pub fn with_group(&self, group: Group) -> Self {
        Self {
            group,
            ..self.clone()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn group(&self) -> &Group {
        &self.group
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    fn key(&self) -> (&str, &Language, &Group) {
        (&self.text, &self.language, &self.group)
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Expression {}

impl Hash for Expression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Ord for Expression {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Expression {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.context {
            Some(context) => write!(f, "{} ({}) [{}]", self.text, context, self.language),
            None => write!(f, "{} [{}]", self.text, self.language),
        }
    }
}

#[derive(Deserialize)]
struct ExpressionRepr {
    text: String,
    language: Language,
    group: Group,
    #[serde(default)]
    context: Option<String>,
}

impl TryFrom<ExpressionRepr> for Expression {
    type Error = ValidationError;

    fn try_from(repr: ExpressionRepr) -> Result<Self, Self::Error> {
        validate_expression_text(&repr.text)?;
        if let Some(context) = &repr.context {
            validate_context(context)?;
        }
        Ok(Self {
            text: repr.text,
            language: repr.language,
            group: repr.group,
            context: repr.context.filter(|c| !c.is_empty()),
        })
    }
}
