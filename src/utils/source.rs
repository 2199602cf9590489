//! Reading the vocabulary and the corpus from storage.

use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::{self, File};
use std::ops::Deref;
use std::path::Path;

/// Bytes that separate words: space, `\t`, `\n`, `\v`, `\f` and `\r`.
///
/// Anything else, including non-ASCII bytes, is part of a word.
#[inline]
pub fn is_word_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Split raw input into separator-delimited tokens, keeping input order.
///
/// Words are kept as raw bytes so they match the corpus byte for byte,
/// whatever its encoding.
pub fn split_words(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    content
        .split(|&byte| is_word_separator(byte))
        .filter(|word| !word.is_empty())
}

/// Split a word list into owned words
pub fn split_vocabulary(content: &[u8]) -> Vec<Vec<u8>> {
    split_words(content).map(<[u8]>::to_vec).collect()
}

/// Read a word list file
pub fn read_vocabulary(path: &Path) -> Result<Vec<Vec<u8>>> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    let words = split_vocabulary(&bytes);
    tracing::debug!(path = %path.display(), words = words.len(), "read vocabulary");
    Ok(words)
}

/// The text being indexed, held immutably for the lifetime of the index.
///
/// Files are memory-mapped. Empty files cannot be mapped and are kept as an
/// empty buffer instead.
pub struct Corpus {
    data: CorpusData,
}

enum CorpusData {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Corpus {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open text file {}", path.display()))?;
        let len = file
            .metadata()
            .with_context(|| format!("Failed to stat text file {}", path.display()))?
            .len();

        let data = if len == 0 {
            CorpusData::Owned(Vec::new())
        } else {
            let mmap = unsafe { Mmap::map(&file) }
                .with_context(|| format!("Failed to map text file {}", path.display()))?;
            CorpusData::Mapped(mmap)
        };

        tracing::debug!(path = %path.display(), bytes = len, "opened corpus");
        Ok(Self { data })
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            data: CorpusData::Owned(bytes.into()),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match &self.data {
            CorpusData::Mapped(mmap) => &mmap[..],
            CorpusData::Owned(bytes) => bytes.as_slice(),
        }
    }
}

impl Deref for Corpus {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_vocabulary() {
        let words = split_vocabulary(b"  alpha beta\n\tgamma\r\nalpha \x0b\x0c\n");
        assert_eq!(words, vec![b"alpha".to_vec(), b"beta".to_vec(), b"gamma".to_vec(), b"alpha".to_vec()]);
        assert!(split_vocabulary(b" \n\t ").is_empty());
    }

    #[test]
    fn test_split_keeps_non_ascii_bytes() {
        // Latin-1 e-acute and a UTF-8 no-break space are word bytes
        let words = split_vocabulary(b"caf\xe9 a\xc2\xa0b");
        assert_eq!(words, vec![b"caf\xe9".to_vec(), b"a\xc2\xa0b".to_vec()]);
    }

    #[test]
    fn test_read_vocabulary_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "ab\naba\n").unwrap();

        assert_eq!(read_vocabulary(&path).unwrap(), vec![b"ab".to_vec(), b"aba".to_vec()]);
    }

    #[test]
    fn test_read_latin1_vocabulary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, b"caf\xe9\nna\xefve\n").unwrap();

        let words = read_vocabulary(&path).unwrap();
        assert_eq!(words, vec![b"caf\xe9".to_vec(), b"na\xefve".to_vec()]);
    }

    #[test]
    fn test_read_vocabulary_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_vocabulary(&dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read word list"));
    }

    #[test]
    fn test_corpus_open_mapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text.txt");
        fs::write(&path, b"ababab").unwrap();

        let corpus = Corpus::open(&path).unwrap();
        assert_eq!(&*corpus, b"ababab");
    }

    #[test]
    fn test_corpus_open_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, b"").unwrap();

        let corpus = Corpus::open(&path).unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_corpus_keeps_raw_bytes() {
        let corpus = Corpus::from_bytes(vec![0xff, b'a', 0x00, b'b']);
        assert_eq!(corpus.as_bytes(), &[0xff, b'a', 0x00, b'b']);
    }
}
