//! Exact substring search driven by a failure table.
//!
//! Runs in O(text + pattern) time regardless of alphabet and reports every
//! match, overlapping ones included.

use crate::index::types::Offset;

/// Build the failure table for `pattern`.
///
/// `failure[i]` is the length of the longest proper prefix of the pattern
/// that is also a suffix of `pattern[..=i]`.
pub fn failure_table(pattern: &[u8]) -> Vec<usize> {
    let mut failure = vec![0usize; pattern.len()];
    let mut len = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            failure[i] = len;
            i += 1;
        } else if len != 0 {
            len = failure[len - 1];
        } else {
            failure[i] = 0;
            i += 1;
        }
    }

    failure
}

/// Every offset at which `pattern` starts in `text`, in ascending order.
///
/// An empty pattern matches nowhere.
pub fn find_all(text: &[u8], pattern: &[u8]) -> Vec<Offset> {
    let mut matches = Vec::new();
    if pattern.is_empty() || pattern.len() > text.len() {
        return matches;
    }

    let failure = failure_table(pattern);
    let mut i = 0;
    let mut j = 0;

    while i < text.len() {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == pattern.len() {
                matches.push(i - j);
                j = failure[j - 1];
            }
        } else if j != 0 {
            j = failure[j - 1];
        } else {
            i += 1;
        }
    }

    matches
}
