pub mod service;

pub use service::{Indexer, Lookup, QueryService};
