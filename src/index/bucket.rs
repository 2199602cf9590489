use crate::index::types::{Entry, Offset};
use std::collections::VecDeque;

/// Chain of entries sharing one hash slot.
///
/// New keys go to the front, so iteration order is most recent first.
/// Keys are unique within a bucket.
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    entries: VecDeque<Entry>,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offsets recorded for `key`, or an empty slice if it is absent
    pub fn lookup(&self, key: &[u8]) -> &[Offset] {
        self.entry(key).map(Entry::occurrences).unwrap_or(&[])
    }

    pub fn entry(&self, key: &[u8]) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.key() == key)
    }

    pub fn entry_mut(&mut self, key: &[u8]) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.key() == key)
    }

    /// Append `offset` to an existing key, or prepend a new entry holding it
    pub fn insert_or_append(&mut self, key: &[u8], offset: Offset) {
        if let Some(entry) = self.entry_mut(key) {
            entry.push(offset);
            return;
        }
        self.entries.push_front(Entry::with_offset(key, offset));
    }

    /// Prepend an unmatched entry for `key` unless it is already present.
    /// Returns true when a new entry was created.
    pub fn register(&mut self, key: &[u8]) -> bool {
        if self.entry(key).is_some() {
            return false;
        }
        self.entries.push_front(Entry::registered(key));
        true
    }

    /// Drop the entry for `key`. Returns true if one was removed.
    pub fn remove(&mut self, key: &[u8]) -> bool {
        match self.entries.iter().position(|entry| entry.key() == key) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entry> {
        self.entries.iter_mut()
    }
}
