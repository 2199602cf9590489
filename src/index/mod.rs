pub mod bucket;
pub mod stats;
pub mod table;
pub mod types;

pub use bucket::Bucket;
pub use stats::IndexStats;
pub use table::HashIndex;
pub use types::*;
