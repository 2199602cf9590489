//! Utility functions and data structures.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration file in the application data directory
//! - [`matcher`] - Failure-table substring search
//! - [`progress`] - Progress bar, no-op without the `progress` feature
//! - [`source`] - Word list and corpus loading
//!
//! ## Key Functions
//!
//! ```
//! use wordloc::utils::{find_all, split_vocabulary};
//!
//! let words = split_vocabulary(b"aa\nab");
//! assert_eq!(words, vec![b"aa".to_vec(), b"ab".to_vec()]);
//!
//! assert_eq!(find_all(b"aaaa", b"aa"), vec![0, 1, 2]);
//! ```

pub mod app_data;
pub mod matcher;
pub mod progress;
pub mod source;

pub use app_data::*;
pub use matcher::*;
pub use source::*;
