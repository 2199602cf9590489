//! # wordloc - word occurrence index
//!
//! wordloc loads a fixed vocabulary, scans a text corpus once per word and
//! answers "at which byte offsets does this word occur?" from the
//! precomputed index.
//!
//! ## Architecture
//!
//! - [`index`] - Chained hash index mapping words to their offsets
//! - [`query`] - Load, index and query phases over the hash index
//! - [`utils`] - Substring matcher, file sources, configuration
//! - [`output`] - Result formatting (plain, highlighted context, JSON)
//! - [`repl`] - Interactive read-eval loop
//!
//! ## Quick Start
//!
//! ```
//! use wordloc::query::Indexer;
//!
//! let mut indexer = Indexer::new(100);
//! indexer.load(["ab", "aba"]);
//!
//! let service = indexer.index(b"ababab");
//! assert_eq!(service.query("ab"), &[0, 2, 4]);
//! assert_eq!(service.query("aba"), &[0, 2]);
//! assert!(service.query("xyz").is_empty());
//! ```
//!
//! Matching is byte-exact: no case folding, no tokenization of the corpus.
//! Every vocabulary word is matched on its own with a failure-table scan,
//! so overlapping occurrences are all reported.

pub mod index;
pub mod output;
pub mod query;
pub mod repl;
pub mod utils;
