//! Input validation limits for lexicon values

/// Maximum length for language names (64 chars)
pub const MAX_LANGUAGE_NAME_LEN: usize = 64;

/// Maximum length for expression text (1KB)
pub const MAX_EXPRESSION_TEXT_LEN: usize = 1024;

/// Maximum length for group names (64 chars)
pub const MAX_GROUP_NAME_LEN: usize = 64;

/// Maximum length for expression context (4KB)
pub const MAX_CONTEXT_LEN: usize = 4 * 1024;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyLanguageName,
    EmptyExpressionText,
    EmptyGroupName,
    LanguageNameTooLong { len: usize, max: usize },
    ExpressionTextTooLong { len: usize, max: usize },
    GroupNameTooLong { len: usize, max: usize },
    ContextTooLong { len: usize, max: usize },
    ZeroLimit { name: &'static str },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLanguageName => write!(f, "Language name cannot be empty"),
            Self::EmptyExpressionText => write!(f, "Expression text cannot be empty"),
            Self::EmptyGroupName => write!(f, "Group name cannot be empty"),
            Self::LanguageNameTooLong { len, max } => {
                write!(f, "Language name too long: {} chars (max {})", len, max)
            }
            Self::ExpressionTextTooLong { len, max } => {
                write!(f, "Expression text too long: {} chars (max {})", len, max)
            }
            Self::GroupNameTooLong { len, max } => {
                write!(f, "Group name too long: {} chars (max {})", len, max)
            }
            Self::ContextTooLong { len, max } => {
                write!(f, "Context too long: {} chars (max {})", len, max)
            }
            Self::ZeroLimit { name } => write!(f, "Limit {} must be greater than zero", name),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate language name
pub fn validate_language_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyLanguageName);
    }
    if name.len() > MAX_LANGUAGE_NAME_LEN {
        return Err(ValidationError::LanguageNameTooLong {
            len: name.len(),
            max: MAX_LANGUAGE_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate expression text
pub fn validate_expression_text(text: &str) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::EmptyExpressionText);
    }
    if text.len() > MAX_EXPRESSION_TEXT_LEN {
        return Err(ValidationError::ExpressionTextTooLong {
            len: text.len(),
            max: MAX_EXPRESSION_TEXT_LEN,
        });
    }
    Ok(())
}

/// Validate group name
pub fn validate_group_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyGroupName);
    }
    if name.len() > MAX_GROUP_NAME_LEN {
        return Err(ValidationError::GroupNameTooLong {
            len: name.len(),
            max: MAX_GROUP_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate expression context (empty context is allowed)
pub fn validate_context(context: &str) -> Result<(), ValidationError> {
    if context.len() > MAX_CONTEXT_LEN {
        return Err(ValidationError::ContextTooLong {
            len: context.len(),
            max: MAX_CONTEXT_LEN,
        });
    }
    Ok(())
}

/// Validate an optional resource cap (a cap of zero would reject every query)
pub fn validate_limit(name: &'static str, limit: Option<usize>) -> Result<(), ValidationError> {
    if limit == Some(0) {
        return Err(ValidationError::ZeroLimit { name });
    }
    Ok(())
}
