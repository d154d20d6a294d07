//! Pages - sorted entries of one language pair and a set of groups

use crate::entry::Entry;
use crate::expression::Group;
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A sorted, duplicate-free list of entries sharing one language pair
///
/// A page only accepts entries whose languages match its own and whose title
/// belongs to one of its groups. An empty group set accepts every group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    title: Language,
    translations: Language,
    groups: BTreeSet<Group>,
    entries: Vec<Entry>,
}

impl Page {
    /// Create an empty page
    pub fn new(title: Language, translations: Language, groups: BTreeSet<Group>) -> Self {
        Self {
            title,
            translations,
            groups,
            entries: Vec::new(),
        }
    }

    /// The `(title, translations)` language pair
    pub fn languages(&self) -> (&Language, &Language) {
        (&self.title, &self.translations)
    }

    pub fn groups(&self) -> &BTreeSet<Group> {
        &self.groups
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if an entry fits this page's languages and groups
    pub fn accepts(&self, entry: &Entry) -> bool {
        entry.languages() == self.languages()
            && (self.groups.is_empty() || self.groups.contains(entry.title().group()))
    }

    /// Insert an entry at its sorted position
    ///
    /// Returns `false` if the entry does not fit the page or is already on it.
    pub fn insert(&mut self, entry: Entry) -> bool {
        if !self.accepts(&entry) {
            return false;
        }
        match self.entries.binary_search(&entry) {
            Ok(_) => false,
            Err(index) => {
                self.entries.insert(index, entry);
                true
            }
        }
    }

    /// Insert every fitting entry, returning how many were inserted
    pub fn insert_all<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = Entry>,
    {
        entries
            .into_iter()
            .map(|entry| self.insert(entry))
            .filter(|inserted| *inserted)
            .count()
    }
}

impl<'a> IntoIterator for &'a Page {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
