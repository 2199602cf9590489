use crate::index::bucket::Bucket;
use crate::index::types::{Entry, Offset};

/// Sum of the key's bytes modulo `bucket_count`.
///
/// `bucket_count` must be non-zero; [`HashIndex`] guarantees that.
#[inline]
pub fn bucket_for(key: &[u8], bucket_count: usize) -> usize {
    key.iter()
        .fold(0usize, |sum, &byte| sum.wrapping_add(byte as usize))
        % bucket_count
}

/// Fixed-size array of chained buckets.
///
/// The bucket count is chosen at construction and never changes, so a key
/// always lives in the bucket [`bucket_for`] selects for it.
#[derive(Debug, Clone)]
pub struct HashIndex {
    buckets: Vec<Bucket>,
}

impl HashIndex {
    /// Create an index with `bucket_count` buckets (at least one)
    pub fn new(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        Self {
            buckets: vec![Bucket::new(); bucket_count],
        }
    }

    pub fn hash(&self, key: &[u8]) -> usize {
        bucket_for(key, self.buckets.len())
    }

    pub fn insert(&mut self, key: &[u8], offset: Offset) {
        let slot = self.hash(key);
        self.buckets[slot].insert_or_append(key, offset);
    }

    /// Register `key` with no offsets yet. Returns true if it was new.
    pub fn register(&mut self, key: &[u8]) -> bool {
        let slot = self.hash(key);
        self.buckets[slot].register(key)
    }

    pub fn remove(&mut self, key: &[u8]) -> bool {
        let slot = self.hash(key);
        self.buckets[slot].remove(key)
    }

    /// Offsets for `key`; absent keys give an empty slice
    pub fn get(&self, key: &[u8]) -> &[Offset] {
        self.buckets[self.hash(key)].lookup(key)
    }

    pub fn entry(&self, key: &[u8]) -> Option<&Entry> {
        self.buckets[self.hash(key)].entry(key)
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        self.entry(key).is_some()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Bucket::is_empty)
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Every entry, bucket by bucket
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.buckets.iter().flat_map(Bucket::iter)
    }

    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut Entry> {
        self.buckets.iter_mut().flat_map(Bucket::iter_mut)
    }
}

impl Default for HashIndex {
    fn default() -> Self {
        Self::new(crate::index::types::DEFAULT_BUCKET_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic_and_in_range() {
        let index = HashIndex::new(7);
        for key in ["", "a", "ab", "ba", "hello", "привет", "a much longer key"].map(str::as_bytes) {
            let slot = index.hash(key);
            assert!(slot < 7);
            assert_eq!(slot, index.hash(key));
            assert_eq!(slot, bucket_for(key, 7));
        }
    }

    #[test]
    fn test_zero_buckets_clamped() {
        let mut index = HashIndex::new(0);
        assert_eq!(index.bucket_count(), 1);
        index.insert(b"word", 3);
        assert_eq!(index.get(b"word"), &[3]);
    }

    #[test]
    fn test_entries_live_in_their_hashed_bucket() {
        let mut index = HashIndex::new(5);
        for key in ["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta"] {
            index.register(key.as_bytes());
        }
        // non-ASCII and non-UTF-8 keys hash by their raw bytes
        for key in ["caf\u{e9}".as_bytes(), b"caf\xe9", b"\xff\xfe"] {
            index.register(key);
        }

        for (slot, bucket) in index.buckets().iter().enumerate() {
            for entry in bucket.iter() {
                assert_eq!(index.hash(entry.key()), slot);
            }
        }
    }

    #[test]
    fn test_colliding_keys_chain() {
        // anagrams have the same byte sum
        let mut index = HashIndex::new(10);
        index.insert(b"ab", 0);
        index.insert(b"ba", 1);
        assert_eq!(index.hash(b"ab"), index.hash(b"ba"));

        assert_eq!(index.get(b"ab"), &[0]);
        assert_eq!(index.get(b"ba"), &[1]);
        assert_eq!(index.buckets()[index.hash(b"ab")].len(), 2);

        index.remove(b"ab");
        assert!(index.get(b"ab").is_empty());
        assert_eq!(index.get(b"ba"), &[1]);
    }

    #[test]
    fn test_register_many_times_keeps_one_entry() {
        let mut index = HashIndex::new(3);
        for _ in 0..5 {
            index.register(b"repeat");
        }
        index.register(b"other");
        assert_eq!(index.len(), 2);
        assert_eq!(index.entries().filter(|e| e.key() == b"repeat").count(), 1);
    }

    #[test]
    fn test_get_absent_key_is_empty() {
        let index = HashIndex::new(4);
        assert!(index.get(b"nothing").is_empty());
        assert!(!index.contains(b"nothing"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_entries_mut_overwrites() {
        let mut index = HashIndex::new(4);
        index.register(b"one");
        index.register(b"two");

        for entry in index.entries_mut() {
            let len = entry.key().len();
            entry.set_occurrences(vec![len]);
        }

        assert_eq!(index.get(b"one"), &[3]);
        assert_eq!(index.get(b"two"), &[3]);
    }
}
