//! Translation closure - transitive translation queries over entries

use crate::entry::Entry;
use crate::expression::{Expression, Group};
use crate::language::Language;
use crate::synoset::Synoset;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Translation query builder (follows TraversalQuery pattern)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationQuery {
    /// Language of the result entries' titles
    pub title: Language,

    /// Language of the result entries' translations
    pub translations: Language,

    /// Only return result entries whose title is in one of these groups (empty = all)
    ///
    /// Applied to the result, after flipping and chaining, so the closure
    /// itself always runs over every stored entry.
    #[serde(default)]
    pub groups: Vec<Group>,

    /// Stop expanding after this many rounds (None = until done)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rounds: Option<usize>,

    /// Stop expanding once more than this many processing pairs are live (None = no cap)
    ///
    /// Pairs are kept per distinct chain, so on dense lexicons the live count
    /// can grow exponentially with the number of rounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pairs: Option<usize>,
}

impl TranslationQuery {
    /// Create a query for entries titled in `title`, translated into `translations`
    pub fn new(title: Language, translations: Language) -> Self {
        Self {
            title,
            translations,
            groups: Vec::new(),
            max_rounds: None,
            max_pairs: None,
        }
    }

    /// Restrict the result to entries titled in the given groups
    pub fn with_groups(mut self, groups: Vec<Group>) -> Self {
        self.groups = groups;
        self
    }

    /// Cap the number of expansion rounds
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// Cap the number of live processing pairs
    pub fn with_max_pairs(mut self, pairs: usize) -> Self {
        self.max_pairs = Some(pairs);
        self
    }

    fn admits(&self, entry: &Entry) -> bool {
        self.groups.is_empty() || self.groups.contains(entry.title().group())
    }
}

/// Result of a translation query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Sorted, duplicate-free result entries
    pub entries: Vec<Entry>,

    /// Statistics
    pub stats: ClosureStats,
}

/// Closure statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureStats {
    /// Stored entries already in the requested direction
    pub direct: usize,
    /// Entries obtained by flipping stored entries of the reversed pair
    pub flipped: usize,
    /// Processing pairs seeded from source-language entries
    pub seeded_pairs: usize,
    /// Expansion rounds run
    pub rounds: usize,
    /// Pairs dropped because no path continued from them
    pub dropped_pairs: usize,
    /// Entries built from chains through other languages
    pub synthesized: usize,
    /// Whether a resource cap cut the expansion short
    pub truncated: bool,
}

/// A source expression and the current end of its translation chain
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct ProcessingPair {
    source: Expression,
    hop: Expression,
    /// Whether `hop` is already in the destination language
    finished: bool,
    /// Positions in the deduplicated candidate pool consumed along this chain
    used: BTreeSet<usize>,
}

/// Translation closure engine
pub struct ClosureEngine;

impl ClosureEngine {
    /// Execute a translation query against a set of stored entries
    ///
    /// Pure: the stored entries are only read. Entries are split into those
    /// usable directly (possibly after flipping) and those that have to be
    /// chained through other languages; chains are expanded along every
    /// branch until they reach the destination language or run dry.
    ///
    /// Duplicate entries in `entries` are collapsed before partitioning. Every
    /// distinct chain is followed, so the work can grow exponentially on dense
    /// lexicons; the query's `max_rounds` and `max_pairs` caps bound it.
    pub fn execute<'a, I>(query: &TranslationQuery, entries: I) -> TranslationResult
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let origin = &query.title;
        let destination = &query.translations;
        let mut stats = ClosureStats::default();

        tracing::debug!(
            "Executing translation query: title={}, translations={}, groups={:?}",
            origin,
            destination,
            query.groups
        );

        let mut remaining: Vec<&Entry> = entries.into_iter().collect();
        remaining.sort();
        remaining.dedup();

        let mut complete: BTreeSet<Entry> = BTreeSet::new();
        for entry in carve(&mut remaining, |e| e.languages() == (origin, destination)) {
            stats.direct += 1;
            complete.insert(entry.clone());
        }

        if origin == destination {
            tracing::debug!("Title and translation language are equal, skipping closure");
            return Self::build_result(query, complete, Vec::new(), stats);
        }

        for entry in carve(&mut remaining, |e| e.languages() == (destination, origin)) {
            for flipped in entry.flipped() {
                stats.flipped += 1;
                complete.insert(flipped);
            }
        }

        let mut incomplete: Vec<Entry> = carve(&mut remaining, |e| e.title().language() == origin)
            .into_iter()
            .cloned()
            .collect();
        incomplete.extend(
            carve(&mut remaining, |e| e.translations().language() == origin)
                .into_iter()
                .flat_map(Entry::flipped),
        );

        let mut pairs: Vec<ProcessingPair> = incomplete
            .iter()
            .flat_map(|entry| {
                entry.translations().iter().map(move |translation| ProcessingPair {
                    source: entry.title().clone(),
                    finished: translation.language() == destination,
                    hop: translation.clone(),
                    used: BTreeSet::new(),
                })
            })
            .collect();
        stats.seeded_pairs = pairs.len();

        tracing::debug!(
            "Partitioned entries: direct={}, flipped={}, seeded_pairs={}, pool={}",
            stats.direct,
            stats.flipped,
            stats.seeded_pairs,
            remaining.len()
        );

        let pool = remaining;
        while pairs.iter().any(|p| !p.finished) {
            if query.max_rounds.is_some_and(|max| stats.rounds >= max)
                || query.max_pairs.is_some_and(|max| pairs.len() > max)
            {
                tracing::warn!(
                    "Translation query {} -> {} truncated after {} rounds with {} live pairs",
                    origin,
                    destination,
                    stats.rounds,
                    pairs.len()
                );
                stats.truncated = true;
                pairs.retain(|p| p.finished);
                break;
            }

            stats.rounds += 1;
            pairs = Self::expand(pairs, &pool, destination, &mut stats);

            tracing::trace!(
                "Round {}: {} pairs live, {} finished",
                stats.rounds,
                pairs.len(),
                pairs.iter().filter(|p| p.finished).count()
            );
        }

        let synthesized = Self::synthesize(pairs, destination);
        stats.synthesized = synthesized.len();

        Self::build_result(query, complete, synthesized, stats)
    }

    /// Advance every unfinished pair by one hop
    fn expand(
        pairs: Vec<ProcessingPair>,
        pool: &[&Entry],
        destination: &Language,
        stats: &mut ClosureStats,
    ) -> Vec<ProcessingPair> {
        let mut next = Vec::with_capacity(pairs.len());

        for pair in pairs {
            if pair.finished {
                next.push(pair);
                continue;
            }

            let associated: Vec<usize> = pool
                .iter()
                .enumerate()
                .filter(|(index, entry)| !pair.used.contains(index) && entry.contains(&pair.hop))
                .map(|(index, _)| index)
                .collect();

            // No way forward: this source expression does not reach the destination
            if associated.is_empty() {
                stats.dropped_pairs += 1;
                continue;
            }

            let mut used = pair.used.clone();
            used.extend(associated.iter().copied());

            for &index in &associated {
                for candidate in pool[index].counterparts(&pair.hop) {
                    next.push(ProcessingPair {
                        source: pair.source.clone(),
                        finished: candidate.language() == destination,
                        hop: candidate,
                        used: used.clone(),
                    });
                }
            }
        }

        next.sort();
        next.dedup();
        next
    }

    /// Group finished pairs by source expression into entries
    fn synthesize(pairs: Vec<ProcessingPair>, destination: &Language) -> Vec<Entry> {
        let mut grouped: BTreeMap<Expression, Synoset> = BTreeMap::new();

        for pair in pairs.into_iter().filter(|p| p.finished) {
            grouped
                .entry(pair.source)
                .or_insert_with(|| Synoset::new(destination.clone()))
                .insert(pair.hop);
        }

        grouped
            .into_iter()
            .map(|(source, translations)| Entry::new(source, translations))
            .collect()
    }

    /// Build result from the direct and synthesized entries in the query's groups
    fn build_result(
        query: &TranslationQuery,
        complete: BTreeSet<Entry>,
        synthesized: Vec<Entry>,
        stats: ClosureStats,
    ) -> TranslationResult {
        let mut entries = complete;
        entries.extend(synthesized);
        entries.retain(|entry| query.admits(entry));

        tracing::debug!(
            "Translation query produced {} entries ({} synthesized, {} rounds, {} dropped pairs)",
            entries.len(),
            stats.synthesized,
            stats.rounds,
            stats.dropped_pairs
        );

        TranslationResult {
            entries: entries.into_iter().collect(),
            stats,
        }
    }
}

/// Remove and return the entries matching `predicate`, keeping the rest in place
fn carve<'a>(remaining: &mut Vec<&'a Entry>, predicate: impl Fn(&Entry) -> bool) -> Vec<&'a Entry> {
    let (carved, rest): (Vec<&Entry>, Vec<&Entry>) =
        std::mem::take(remaining).into_iter().partition(|e| predicate(*e));
    *remaining = rest;
    carved
}
