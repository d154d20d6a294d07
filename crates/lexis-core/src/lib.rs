//! Lexis Core - Multilingual lexicon engine
//!
//! This crate provides the value types of a multilingual vocabulary
//! (languages, expressions, synosets, entries) and the lexicon that answers
//! transitive translation queries over them: given a title language and a
//! translation language it returns every entry connecting the two, even when
//! the link only exists through other languages.

pub mod closure;
pub mod config;
pub mod entry;
pub mod error;
pub mod expression;
pub mod language;
pub mod lexicon;
pub mod limits;
pub mod page;
pub mod shared;
pub mod synoset;

pub use closure::{ClosureEngine, ClosureStats, TranslationQuery, TranslationResult};
pub use config::LexiconConfig;
pub use entry::Entry;
pub use error::{Error, Result};
pub use expression::{Expression, Group};
pub use language::Language;
pub use lexicon::Lexicon;
pub use limits::ValidationError;
pub use page::Page;
pub use shared::SharedLexicon;
pub use synoset::Synoset;
