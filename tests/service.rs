//! Library-level checks of the load, index and query phases.

use wordloc::index::{HashIndex, IndexStats};
use wordloc::query::{Indexer, Lookup};
use wordloc::utils::{find_all, read_vocabulary, split_vocabulary, Corpus};

const TEXT: &str = "the cat sat on the mat; the cathedral had cats and a catalogue";

fn vocabulary() -> Vec<Vec<u8>> {
    split_vocabulary(b"the cat cat mat at cathedral dog the")
}

#[test]
fn test_query_matches_find_all_for_every_word() {
    let mut indexer = Indexer::new(13);
    indexer.load(vocabulary());
    let service = indexer.index(TEXT.as_bytes());

    for word in vocabulary() {
        assert_eq!(
            service.query(&word),
            find_all(TEXT.as_bytes(), &word),
            "word {}",
            String::from_utf8_lossy(&word)
        );
    }
}

#[test]
fn test_duplicate_words_leave_one_entry_each() {
    let mut indexer = Indexer::new(13);
    indexer.load(vocabulary());
    assert_eq!(indexer.vocabulary_len(), 6);

    let service = indexer.index(TEXT.as_bytes());
    let words: Vec<String> = service.entries().iter().map(|e| e.display_word().into_owned()).collect();
    assert_eq!(words, vec!["at", "cat", "cathedral", "dog", "mat", "the"]);
}

#[test]
fn test_offsets_point_at_the_word() {
    let mut indexer = Indexer::new(5);
    indexer.load(vocabulary());
    let service = indexer.index(TEXT.as_bytes());

    for pair in service.entries() {
        let mut previous = None;
        for &offset in pair.offsets {
            assert_eq!(&TEXT.as_bytes()[offset..offset + pair.word.len()], pair.word);
            assert!(previous.is_none_or(|p| p < offset), "offsets ascend");
            previous = Some(offset);
        }
    }
}

#[test]
fn test_unknown_and_unmatched_words() {
    let mut indexer = Indexer::new(13);
    indexer.load(vocabulary());
    let service = indexer.index(TEXT.as_bytes());

    // collapsed on query
    assert!(service.query("dog").is_empty());
    assert!(service.query("bird").is_empty());

    // distinguished on lookup
    assert_eq!(service.lookup("dog"), Lookup::Found(&[]));
    assert_eq!(service.lookup("bird"), Lookup::Unknown);
}

#[test]
fn test_removed_word_queries_empty() {
    let mut indexer = Indexer::new(13);
    indexer.load(vocabulary());
    let mut service = indexer.index(TEXT.as_bytes());

    assert!(!service.query("cat").is_empty());
    service.remove("cat");
    assert!(service.query("cat").is_empty());
    // neighbours are untouched
    assert_eq!(service.query("cathedral"), &[28]);
}

#[test]
fn test_index_works_on_mapped_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("text.txt");
    std::fs::write(&path, TEXT).unwrap();

    let corpus = Corpus::open(&path).unwrap();
    let mut indexer = Indexer::new(13);
    indexer.load(["the"]);
    let service = indexer.index(&corpus);

    assert_eq!(service.query("the"), &[0, 15, 24, 30]);
}

#[test]
fn test_stats_reflect_index_contents() {
    let mut indexer = Indexer::new(4);
    indexer.load(vocabulary());
    let service = indexer.index(TEXT.as_bytes());

    let stats = service.stats();
    assert_eq!(stats.bucket_count, 4);
    assert_eq!(stats.word_count, 6);
    assert_eq!(stats.chain_lengths.iter().sum::<usize>(), 4);

    let mut index = HashIndex::new(4);
    for word in vocabulary() {
        index.register(&word);
    }
    assert_eq!(IndexStats::collect(&index).word_count, stats.word_count);
}

#[test]
fn test_latin1_vocabulary_against_latin1_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.txt");
    let text = dir.path().join("text.txt");
    std::fs::write(&words, b"caf\xe9\n").unwrap();
    std::fs::write(&text, b"un caf\xe9 noir").unwrap();

    let mut indexer = Indexer::new(13);
    indexer.load(read_vocabulary(&words).unwrap());
    let corpus = Corpus::open(&text).unwrap();
    let service = indexer.index(&corpus);

    assert_eq!(service.query(b"caf\xe9"), &[3]);
}
