use serde::{Serialize, Serializer};

/// Zero-based byte offset into the corpus where a match begins
pub type Offset = usize;

/// Bucket count used when neither the config nor the CLI picks one
pub const DEFAULT_BUCKET_COUNT: usize = 100;

/// A single vocabulary record: a word and the offsets it was found at.
///
/// Keys are raw bytes, compared exactly against the corpus.
///
/// `occurrences` is `None` between registration and the index pass, so a
/// word that has not been matched yet is never confused with a word that
/// was matched and found nowhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: Vec<u8>,
    occurrences: Option<Vec<Offset>>,
}

impl Entry {
    /// Entry for a word that is known but not matched yet
    pub fn registered(key: &[u8]) -> Self {
        Self {
            key: key.to_vec(),
            occurrences: None,
        }
    }

    /// Entry holding a single offset
    pub fn with_offset(key: &[u8], offset: Offset) -> Self {
        Self {
            key: key.to_vec(),
            occurrences: Some(vec![offset]),
        }
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Offsets in insertion order; empty while the entry is unmatched
    pub fn occurrences(&self) -> &[Offset] {
        self.occurrences.as_deref().unwrap_or(&[])
    }

    pub fn is_matched(&self) -> bool {
        self.occurrences.is_some()
    }

    pub fn push(&mut self, offset: Offset) {
        self.occurrences.get_or_insert_with(Vec::new).push(offset);
    }

    /// Replace the occurrence list wholesale
    pub fn set_occurrences(&mut self, offsets: Vec<Offset>) {
        self.occurrences = Some(offsets);
    }
}

/// One `(word, offsets)` pair as handed to output and serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordOccurrences<'a> {
    #[serde(serialize_with = "serialize_lossy")]
    pub word: &'a [u8],
    pub indexed: bool,
    pub offsets: &'a [Offset],
}

impl WordOccurrences<'_> {
    /// The word for display; invalid UTF-8 becomes U+FFFD
    pub fn display_word(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(self.word)
    }
}

fn serialize_lossy<S: Serializer>(bytes: &&[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}
