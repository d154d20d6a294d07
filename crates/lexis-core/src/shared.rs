//! A lexicon behind a coarse read/write lock

use crate::closure::{TranslationQuery, TranslationResult};
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::language::Language;
use crate::lexicon::Lexicon;
use std::sync::RwLock;

/// Lexicon shared between threads
///
/// Queries take the read lock and may run side by side; `insert` and
/// `remove` take the write lock, so no query ever observes a half-applied
/// mutation.
#[derive(Debug, Default)]
pub struct SharedLexicon {
    lexicon: RwLock<Lexicon>,
}

impl SharedLexicon {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon: RwLock::new(lexicon),
        }
    }

    pub fn insert(&self, entry: Entry) -> Result<bool> {
        let mut lexicon = self
            .lexicon
            .write()
            .map_err(|e| Error::Lock(e.to_string()))?;
        Ok(lexicon.insert(entry))
    }

    pub fn remove(&self, entry: &Entry) -> Result<bool> {
        let mut lexicon = self
            .lexicon
            .write()
            .map_err(|e| Error::Lock(e.to_string()))?;
        Ok(lexicon.remove(entry))
    }

    pub fn entries(&self, title: &Language, translations: &Language) -> Result<Vec<Entry>> {
        let lexicon = self
            .lexicon
            .read()
            .map_err(|e| Error::Lock(e.to_string()))?;
        Ok(lexicon.entries(title, translations))
    }

    pub fn query(&self, query: &TranslationQuery) -> Result<TranslationResult> {
        let lexicon = self
            .lexicon
            .read()
            .map_err(|e| Error::Lock(e.to_string()))?;
        Ok(lexicon.query(query))
    }

    /// A copy of the current lexicon
    pub fn snapshot(&self) -> Result<Lexicon> {
        let lexicon = self
            .lexicon
            .read()
            .map_err(|e| Error::Lock(e.to_string()))?;
        Ok(lexicon.clone())
    }

    pub fn into_inner(self) -> Result<Lexicon> {
        self.lexicon
            .into_inner()
            .map_err(|e| Error::Lock(e.to_string()))
    }
}

impl From<Lexicon> for SharedLexicon {
    fn from(lexicon: Lexicon) -> Self {
        Self::new(lexicon)
    }
}
