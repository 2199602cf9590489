//! Progress reporting for the index phase.
//!
//! With the `progress` feature the bar is drawn by `indicatif`; without it
//! every call is a no-op and nothing is written.

#[cfg(feature = "progress")]
pub use indicatif::{ProgressBar, ProgressStyle};

#[cfg(not(feature = "progress"))]
pub use self::noop::*;

const MATCHING_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} words {msg}";

/// Bar that advances once per vocabulary word matched against the corpus
pub fn matching_bar(words: usize) -> ProgressBar {
    let pb = ProgressBar::new(words as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(MATCHING_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░  "),
    );
    pb.set_message("Matching words...");
    pb
}

#[cfg(not(feature = "progress"))]
mod noop {
    /// Stand-in bar; counts nothing and draws nothing
    #[derive(Clone)]
    pub struct ProgressBar;

    impl ProgressBar {
        pub fn new(_len: u64) -> Self {
            ProgressBar
        }

        pub fn set_style(&self, _style: ProgressStyle) {}
        pub fn set_message(&self, _msg: impl Into<std::borrow::Cow<'static, str>>) {}
        pub fn inc(&self, _delta: u64) {}
        pub fn finish_and_clear(&self) {}
    }

    pub struct ProgressStyle;

    impl ProgressStyle {
        pub fn default_bar() -> Self {
            ProgressStyle
        }

        pub fn template(self, _template: &str) -> Result<Self, std::convert::Infallible> {
            Ok(self)
        }

        pub fn progress_chars(self, _chars: &str) -> Self {
            self
        }
    }
}
