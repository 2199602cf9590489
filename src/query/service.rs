//! Load, index and query phases over a [`HashIndex`].
//!
//! The phases run strictly in order. [`Indexer`] accepts vocabulary words
//! and is consumed by [`Indexer::index`], which returns the [`QueryService`]
//! that answers lookups. There is no way back to the load phase.

use crate::index::stats::IndexStats;
use crate::index::table::HashIndex;
use crate::index::types::{Entry, Offset, WordOccurrences};
use crate::utils::find_all;
use crate::utils::progress::matching_bar;
use std::time::Instant;
use tracing::{debug, info};

/// Load phase: collects the vocabulary
#[derive(Debug, Clone, Default)]
pub struct Indexer {
    index: HashIndex,
}

impl Indexer {
    pub fn new(bucket_count: usize) -> Self {
        Self {
            index: HashIndex::new(bucket_count),
        }
    }

    /// Register every word. Duplicates collapse into a single entry.
    pub fn load<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut seen = 0usize;
        for word in words {
            self.index.register(word.as_ref());
            seen += 1;
        }
        debug!(words = seen, distinct = self.index.len(), "vocabulary loaded");
    }

    /// Number of distinct words registered so far
    pub fn vocabulary_len(&self) -> usize {
        self.index.len()
    }

    /// Run the matcher for every registered word against `corpus`
    pub fn index(self, corpus: &[u8]) -> QueryService {
        self.index_with_progress(corpus, false)
    }

    /// Same as [`Indexer::index`], drawing a progress bar on stderr when
    /// `show_progress` is set
    pub fn index_with_progress(mut self, corpus: &[u8], show_progress: bool) -> QueryService {
        let started = Instant::now();
        let total = self.index.len();
        let progress = show_progress.then(|| matching_bar(total));

        let mut total_matches = 0usize;
        for entry in self.index.entries_mut() {
            let offsets = find_all(corpus, entry.key());
            debug!(word = %String::from_utf8_lossy(entry.key()), matches = offsets.len(), "matched");
            total_matches += offsets.len();
            entry.set_occurrences(offsets);

            if let Some(ref pb) = progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        info!(
            words = total,
            corpus_bytes = corpus.len(),
            matches = total_matches,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "index built"
        );

        QueryService { index: self.index }
    }
}

/// Presence-aware query result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The word is not in the vocabulary
    Unknown,
    /// The word is indexed; the slice may be empty
    Found(&'a [Offset]),
}

impl<'a> Lookup<'a> {
    pub fn offsets(&self) -> &'a [Offset] {
        match *self {
            Lookup::Unknown => &[],
            Lookup::Found(offsets) => offsets,
        }
    }

    pub fn is_indexed(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// Query phase: answers lookups from the populated index
#[derive(Debug, Clone)]
pub struct QueryService {
    index: HashIndex,
}

impl QueryService {
    /// Offsets for `word`.
    ///
    /// An empty slice covers both an unknown word and a known word with no
    /// matches; use [`QueryService::lookup`] to tell them apart.
    pub fn query(&self, word: impl AsRef<[u8]>) -> &[Offset] {
        self.index.get(word.as_ref())
    }

    pub fn lookup(&self, word: impl AsRef<[u8]>) -> Lookup<'_> {
        match self.index.entry(word.as_ref()) {
            Some(entry) => Lookup::Found(entry.occurrences()),
            None => Lookup::Unknown,
        }
    }

    pub fn occurrences<'a>(&'a self, word: &'a [u8]) -> WordOccurrences<'a> {
        let lookup = self.lookup(word);
        WordOccurrences {
            word,
            indexed: lookup.is_indexed(),
            offsets: lookup.offsets(),
        }
    }

    /// Drop `word` from the index. Returns true if it was present.
    pub fn remove(&mut self, word: impl AsRef<[u8]>) -> bool {
        let word = word.as_ref();
        let removed = self.index.remove(word);
        debug!(word = %String::from_utf8_lossy(word), removed, "remove");
        removed
    }

    /// All `(word, offsets)` pairs, sorted by word bytes
    pub fn entries(&self) -> Vec<WordOccurrences<'_>> {
        let mut pairs: Vec<_> = self
            .index
            .entries()
            .map(|entry: &Entry| WordOccurrences {
                word: entry.key(),
                indexed: true,
                offsets: entry.occurrences(),
            })
            .collect();
        pairs.sort_by(|a, b| a.word.cmp(b.word));
        pairs
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats::collect(&self.index)
    }
}
