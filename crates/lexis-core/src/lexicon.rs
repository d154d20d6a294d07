//! The lexicon - a registry of entries answering translation queries

use crate::closure::{ClosureEngine, TranslationQuery, TranslationResult};
use crate::config::LexiconConfig;
use crate::entry::Entry;
use crate::error::Result;
use crate::expression::Group;
use crate::language::Language;
use crate::page::Page;
use std::collections::BTreeSet;

/// A set of entries and the means of querying translations across them
///
/// Entries are stored whole and never edited in place: to change an entry,
/// remove it and insert the new value. Queries only read the stored entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    storage: BTreeSet<Entry>,
    config: LexiconConfig,
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lexicon from a collection of entries
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        Self {
            storage: entries.into_iter().collect(),
            config: LexiconConfig::default(),
        }
    }

    /// Use the given config's caps as defaults for every query
    pub fn with_config(mut self, config: LexiconConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &LexiconConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.storage.iter()
    }

    pub fn contains(&self, entry: &Entry) -> bool {
        self.storage.contains(entry)
    }

    /// Add an entry, returning `false` if an equal entry was already stored
    pub fn insert(&mut self, entry: Entry) -> bool {
        tracing::trace!("Inserting entry {}", entry);
        self.storage.insert(entry)
    }

    /// Remove an entry, returning whether it was stored
    pub fn remove(&mut self, entry: &Entry) -> bool {
        tracing::trace!("Removing entry {}", entry);
        self.storage.remove(entry)
    }

    /// All entries titled in `title` and translated into `translations`
    ///
    /// Stored entries of that pair are returned as they are, entries of the
    /// reversed pair are flipped, and the rest is connected through other
    /// languages. The result is sorted and free of duplicates.
    pub fn entries(&self, title: &Language, translations: &Language) -> Vec<Entry> {
        self.query(&TranslationQuery::new(title.clone(), translations.clone()))
            .entries
    }

    /// Execute a translation query
    ///
    /// Caps the query leaves unset are taken from the lexicon's config.
    pub fn query(&self, query: &TranslationQuery) -> TranslationResult {
        let mut query = query.clone();
        query.max_rounds = query.max_rounds.or(self.config.max_expansion_rounds);
        query.max_pairs = query.max_pairs.or(self.config.max_processing_pairs);
        ClosureEngine::execute(&query, &self.storage)
    }

    /// The entries whose title belongs to `group`, as a lexicon of their own
    pub fn filtered_by_group(&self, group: &Group) -> Lexicon {
        Self {
            storage: self
                .storage
                .iter()
                .filter(|entry| entry.title().group() == group)
                .cloned()
                .collect(),
            config: self.config.clone(),
        }
    }

    /// A page of the given languages and groups (empty = all groups)
    ///
    /// Groups are matched against the titles of the query's result entries,
    /// not against the stored entries they were built from.
    pub fn page(&self, title: &Language, translations: &Language, groups: BTreeSet<Group>) -> Page {
        let mut page = Page::new(title.clone(), translations.clone(), groups);
        page.insert_all(self.entries(title, translations));
        page
    }

    /// Export the stored entries as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.storage)?)
    }

    /// Import entries from JSON produced by `to_json`
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        tracing::debug!("Imported {} entries", entries.len());
        Ok(Self::from_entries(entries))
    }
}

impl FromIterator<Entry> for Lexicon {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl Extend<Entry> for Lexicon {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        self.storage.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a Entry;
    type IntoIter = std::collections::btree_set::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::expression::Expression;
    use crate::synoset::Synoset;
    use tracing_subscriber::EnvFilter;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn lang(name: &str) -> Language {
        Language::new(name).unwrap()
    }

    fn english() -> Language {
        lang("English")
    }

    fn german() -> Language {
        lang("German")
    }

    fn norwegian() -> Language {
        lang("Norwegian")
    }

    fn word(text: &str, language: Language) -> Expression {
        Expression::new(text, language, Group::new("Word").unwrap()).unwrap()
    }

    fn phrase(text: &str, language: Language) -> Expression {
        Expression::new(text, language, Group::new("Phrase").unwrap()).unwrap()
    }

    fn synoset(expressions: Vec<Expression>) -> Synoset {
        Synoset::from_expressions(expressions).unwrap()
    }

    /// English, German and Norwegian sample vocabulary
    fn create_test_lexicon() -> Lexicon {
        let entries = vec![
            Entry::single(
                word("tree", english()),
                word("Baum", german()).with_context("der"),
            ),
            Entry::new(
                word("car", english()),
                synoset(vec![
                    word("Auto", german()).with_context("das"),
                    word("PKW", german()).with_context("der"),
                ]),
            ),
            Entry::single(word("much", english()), word("viel", german())),
            Entry::single(word("many", english()), word("viele", german())),
            Entry::new(
                word("live", english()),
                synoset(vec![word("leben", german()), word("wohnen", german())]),
            ),
            Entry::new(
                word("hallo", german()),
                synoset(vec![
                    word("hei", norwegian()),
                    phrase("Hvordan går det?", norwegian()),
                ]),
            ),
            Entry::single(
                word("Baum", german()).with_context("der"),
                word("tre", norwegian()).with_context("et"),
            ),
            Entry::single(
                word("PKW", german()).with_context("der"),
                word("bil", norwegian()).with_context("en"),
            ),
            Entry::single(word("viele", german()), word("mange", norwegian())),
            Entry::new(
                word("leben", german()),
                synoset(vec![word("bor", norwegian()), word("lever", norwegian())]),
            ),
            Entry::new(
                word("hei", norwegian()),
                synoset(vec![
                    word("hello", english()),
                    phrase("How are you doing?", english()),
                ]),
            ),
        ];
        Lexicon::from_entries(entries)
    }

    fn text_pairs(entries: &[Entry]) -> BTreeSet<(String, String)> {
        entries
            .iter()
            .flat_map(|entry| {
                entry
                    .translations()
                    .iter()
                    .map(|t| (entry.title().text().to_string(), t.text().to_string()))
            })
            .collect()
    }

    fn flipped_text_pairs(entries: &[Entry]) -> BTreeSet<(String, String)> {
        text_pairs(entries)
            .into_iter()
            .map(|(title, translation)| (translation, title))
            .collect()
    }

    #[test]
    fn test_sample_vocabulary_english_to_norwegian() {
        init_tracing();
        let lexicon = create_test_lexicon();

        let result = lexicon.entries(&english(), &norwegian());

        let rendered: Vec<(String, Vec<String>)> = result
            .iter()
            .map(|entry| {
                (
                    entry.title().text().to_string(),
                    entry
                        .translations()
                        .iter()
                        .map(|t| t.text().to_string())
                        .collect(),
                )
            })
            .collect();

        let expected: Vec<(String, Vec<String>)> = vec![
            ("How are you doing?", vec!["hei"]),
            ("car", vec!["bil"]),
            ("hello", vec!["hei"]),
            ("live", vec!["bor", "lever"]),
            ("many", vec!["mange"]),
            ("tree", vec!["tre"]),
        ]
        .into_iter()
        .map(|(title, translations)| {
            (
                title.to_string(),
                translations.into_iter().map(String::from).collect(),
            )
        })
        .collect();

        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_transitive_translation() {
        let lexicon = Lexicon::from_entries(vec![
            Entry::single(word("hello", english()), word("moin", german())),
            Entry::single(word("moin", german()), word("hei", norwegian())),
        ]);

        let result = lexicon.entries(&english(), &norwegian());

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title().text(), "hello");
        assert!(result[0].translations().contains(&word("hei", norwegian())));
    }

    #[test]
    fn test_direct_pair_shortcut() {
        let direct = Entry::single(word("tree", english()), word("Baum", german()));
        let reversed = Entry::single(word("Auto", german()), word("car", english()));
        let lexicon = Lexicon::from_entries(vec![direct.clone(), reversed]);

        let result = lexicon.entries(&english(), &german());

        assert_eq!(
            result,
            vec![
                Entry::single(word("car", english()), word("Auto", german())),
                direct,
            ]
        );
    }

    #[test]
    fn test_symmetry() {
        let lexicon = create_test_lexicon();
        let languages = [english(), german(), norwegian()];

        for a in &languages {
            for b in &languages {
                if a == b {
                    continue;
                }
                let forward = lexicon.entries(a, b);
                let backward = lexicon.entries(b, a);
                assert_eq!(
                    text_pairs(&forward),
                    flipped_text_pairs(&backward),
                    "{} -> {} disagrees with {} -> {}",
                    a,
                    b,
                    b,
                    a
                );
            }
        }
    }

    #[test]
    fn test_no_duplicates_and_sorted() {
        let lexicon = create_test_lexicon();

        for (a, b) in [
            (english(), norwegian()),
            (norwegian(), english()),
            (german(), english()),
        ] {
            let result = lexicon.entries(&a, &b);
            assert!(result.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(result, lexicon.entries(&a, &b));
        }
    }

    #[test]
    fn test_query_does_not_mutate() {
        let lexicon = create_test_lexicon();
        let before = lexicon.clone();

        let _ = lexicon.entries(&english(), &norwegian());
        let _ = lexicon.entries(&norwegian(), &german());

        assert_eq!(lexicon, before);
    }

    #[test]
    fn test_cycle_with_unreachable_destination() {
        let danish = lang("Danish");
        let lexicon = Lexicon::from_entries(vec![
            Entry::single(word("hello", english()), word("moin", german())),
            Entry::single(word("moin", german()), word("hei", norwegian())),
            Entry::single(word("hei", norwegian()), word("hello", english())),
        ]);

        assert!(lexicon.entries(&english(), &danish).is_empty());
    }

    #[test]
    fn test_insert_and_remove() {
        let mut lexicon = Lexicon::new();
        let entry = Entry::single(word("tree", english()), word("Baum", german()));

        assert!(lexicon.insert(entry.clone()));
        assert!(!lexicon.insert(entry.clone()));
        assert_eq!(lexicon.len(), 1);
        assert!(lexicon.contains(&entry));

        assert!(lexicon.remove(&entry));
        assert!(!lexicon.remove(&entry));
        assert!(lexicon.is_empty());
    }

    #[test]
    fn test_extend_and_collect() {
        let mut lexicon: Lexicon = vec![Entry::single(
            word("tree", english()),
            word("Baum", german()),
        )]
        .into_iter()
        .collect();

        lexicon.extend(vec![
            Entry::single(word("tree", english()), word("Baum", german())),
            Entry::single(word("car", english()), word("Auto", german())),
        ]);

        assert_eq!(lexicon.len(), 2);
        assert_eq!((&lexicon).into_iter().count(), 2);
    }

    #[test]
    fn test_filtered_by_group() {
        let lexicon = create_test_lexicon();
        let phrases = lexicon.filtered_by_group(&Group::new("Phrase").unwrap());

        assert!(phrases.is_empty());

        let words = lexicon.filtered_by_group(&Group::new("Word").unwrap());
        assert_eq!(words.len(), lexicon.len());
    }

    #[test]
    fn test_page() {
        let lexicon = create_test_lexicon();

        let page = lexicon.page(
            &english(),
            &norwegian(),
            BTreeSet::from([Group::new("Phrase").unwrap()]),
        );
        assert_eq!(page.len(), 1);
        assert_eq!(page.entries()[0].title().text(), "How are you doing?");

        let page = lexicon.page(&english(), &norwegian(), BTreeSet::new());
        assert_eq!(page.len(), lexicon.entries(&english(), &norwegian()).len());
        assert!(page.entries().iter().all(|e| page.accepts(e)));
    }

    #[test]
    fn test_page_groups_follow_result_titles() {
        let lexicon = Lexicon::from_entries(vec![
            Entry::new(
                word("hei", norwegian()),
                synoset(vec![
                    word("hello", english()),
                    phrase("How are you doing?", english()),
                ]),
            ),
            Entry::single(word("moin", german()), phrase("Good morning", english())),
            Entry::single(word("moin", german()), word("morn", norwegian())),
        ]);
        let phrases = BTreeSet::from([Group::new("Phrase").unwrap()]);

        let page = lexicon.page(&english(), &norwegian(), phrases.clone());

        assert_eq!(
            text_pairs(page.entries()),
            BTreeSet::from([
                ("Good morning".to_string(), "morn".to_string()),
                ("How are you doing?".to_string(), "hei".to_string()),
            ])
        );

        let query = TranslationQuery::new(english(), norwegian())
            .with_groups(phrases.into_iter().collect());
        assert_eq!(lexicon.query(&query).entries, page.entries());
    }

    #[test]
    fn test_config_caps_apply() {
        let lexicon = Lexicon::from_entries(vec![
            Entry::single(word("hello", english()), word("moin", german())),
            Entry::single(word("moin", german()), word("hei", norwegian())),
        ])
        .with_config(LexiconConfig::new().with_max_expansion_rounds(1));

        let query = TranslationQuery::new(english(), norwegian());
        let result = lexicon.query(&query);
        assert!(!result.stats.truncated);
        assert_eq!(result.entries.len(), 1);

        let capped = lexicon.with_config(LexiconConfig::new().with_max_processing_pairs(1));
        let query = TranslationQuery::new(english(), norwegian()).with_max_rounds(0);
        let result = capped.query(&query);
        assert!(result.stats.truncated);
        assert!(result.entries.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let lexicon = create_test_lexicon();

        let json = lexicon.to_json().unwrap();
        let restored = Lexicon::from_json(&json).unwrap();

        assert_eq!(restored, lexicon);
        assert_eq!(
            restored.entries(&english(), &norwegian()),
            lexicon.entries(&english(), &norwegian())
        );
    }

    #[test]
    fn test_json_rejects_invalid_values() {
        let json = r#"[{
            "title": {"text": "", "language": "English", "group": "Word"},
            "translations": {"language": "German", "synonyms": []}
        }]"#;

        assert!(matches!(
            Lexicon::from_json(json),
            Err(Error::Serialization(_))
        ));
    }
}
