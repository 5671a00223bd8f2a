//! Census state: object counts, soup scores, sample soups and retained
//! objects
//!
//! Mutations made after a checkpoint are journalled so a page found to
//! contain a pathological object can be undone in time proportional to the
//! page rather than to the whole census.

use crate::analysis::code::ObjectCode;
use crate::io::configuration::SAMPLE_LIMIT;
use crate::search::scoring::points;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Identifier of a soup within a haul
pub type SoupId = u64;

/// Object kept for deferred inspection: oversized or pathological clusters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetainedObject {
    /// Descriptor the object was counted under
    pub code: ObjectCode,
    /// Soup that produced it
    pub soup: SoupId,
    /// Live cells, relative to `offset`
    pub cells: Vec<(i32, i32)>,
    /// Top-left corner of the live cells on the page
    pub offset: (i32, i32),
}

/// Inverse of one census mutation
#[derive(Clone, Debug)]
enum Undo {
    Count(ObjectCode, u64),
    Score(SoupId, u64),
    Sample(ObjectCode),
    Retain,
}

/// Accumulated census of a haul
#[derive(Default, Debug)]
pub struct Census {
    counts: HashMap<ObjectCode, u64>,
    scores: HashMap<SoupId, u64>,
    samples: HashMap<ObjectCode, Vec<SoupId>>,
    retained: Vec<RetainedObject>,
    journal: Option<Vec<Undo>>,
}

impl Census {
    /// Create an empty census
    pub fn new() -> Self {
        Self::default()
    }

    fn log(&mut self, undo: Undo) {
        if let Some(journal) = self.journal.as_mut() {
            journal.push(undo);
        }
    }

    /// Add `count` occurrences of `code`; a zero count is ignored
    pub fn increment(&mut self, code: &ObjectCode, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(code.clone()).or_insert(0) += count;
        self.log(Undo::Count(code.clone(), count));
    }

    /// Credit `soup` with one `code`: remember it as a sample and award its
    /// points
    pub fn award(&mut self, soup: SoupId, code: &ObjectCode) {
        let samples = self.samples.entry(code.clone()).or_default();
        if samples.len() < SAMPLE_LIMIT && !samples.contains(&soup) {
            samples.push(soup);
            self.log(Undo::Sample(code.clone()));
        }

        let value = points(code);
        if value > 0 {
            *self.scores.entry(soup).or_insert(0) += value;
            self.log(Undo::Score(soup, value));
        }
    }

    /// Count one `code` found in `soup` and credit the soup for it
    pub fn record(&mut self, soup: SoupId, code: &ObjectCode) {
        self.increment(code, 1);
        self.award(soup, code);
    }

    /// Keep an object for deferred inspection
    pub fn retain(&mut self, object: RetainedObject) {
        self.retained.push(object);
        self.log(Undo::Retain);
    }

    /// Start journalling; an open journal is discarded
    pub fn checkpoint(&mut self) {
        self.journal = Some(Vec::new());
    }

    /// Accept every mutation since the checkpoint
    pub fn commit(&mut self) {
        self.journal = None;
    }

    /// Undo every mutation since the checkpoint
    ///
    /// Returns the number of mutations undone; zero without a checkpoint.
    pub fn rollback(&mut self) -> usize {
        let Some(journal) = self.journal.take() else {
            return 0;
        };
        let undone = journal.len();
        for undo in journal.into_iter().rev() {
            match undo {
                Undo::Count(code, count) => {
                    if let Some(total) = self.counts.get_mut(&code) {
                        *total = total.saturating_sub(count);
                        if *total == 0 {
                            self.counts.remove(&code);
                        }
                    }
                }
                Undo::Score(soup, value) => {
                    if let Some(score) = self.scores.get_mut(&soup) {
                        *score = score.saturating_sub(value);
                        if *score == 0 {
                            self.scores.remove(&soup);
                        }
                    }
                }
                Undo::Sample(code) => {
                    if let Some(samples) = self.samples.get_mut(&code) {
                        samples.pop();
                        if samples.is_empty() {
                            self.samples.remove(&code);
                        }
                    }
                }
                Undo::Retain => {
                    self.retained.pop();
                }
            }
        }
        undone
    }

    /// Keep only the `limit` best-scoring soups
    ///
    /// Ties at the cut are broken towards lower soup ids. Commits any open
    /// journal, since dropped scores cannot be restored.
    pub fn compact_scores(&mut self, limit: usize) {
        self.commit();
        if self.scores.len() <= limit {
            return;
        }
        let kept = self.top_scores(limit);
        self.scores = kept.into_iter().collect();
    }

    /// Forget everything
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Occurrences of `code`
    pub fn count(&self, code: &ObjectCode) -> u64 {
        self.counts.get(code).copied().unwrap_or(0)
    }

    /// Every counted object, most common first and ties in code order
    pub fn sorted_counts(&self) -> Vec<(&ObjectCode, u64)> {
        let mut counts: Vec<(&ObjectCode, u64)> =
            self.counts.iter().map(|(code, &n)| (code, n)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts
    }

    /// Total number of objects counted
    pub fn total_objects(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct objects
    pub fn distinct_objects(&self) -> usize {
        self.counts.len()
    }

    /// Score of a soup
    pub fn score(&self, soup: SoupId) -> u64 {
        self.scores.get(&soup).copied().unwrap_or(0)
    }

    /// The `limit` best soups, best first and ties by soup id
    pub fn top_scores(&self, limit: usize) -> Vec<(SoupId, u64)> {
        let mut scores: Vec<(SoupId, u64)> =
            self.scores.iter().map(|(&soup, &score)| (soup, score)).collect();
        scores.sort_by_key(|&(soup, score)| (Reverse(score), soup));
        scores.truncate(limit);
        scores
    }

    /// Soups in which `code` was first seen
    pub fn samples(&self, code: &ObjectCode) -> &[SoupId] {
        self.samples.get(code).map_or(&[], Vec::as_slice)
    }

    /// Objects retained for deferred inspection
    pub fn retained(&self) -> &[RetainedObject] {
        &self.retained
    }
}
