use crate::index::bucket::Bucket;
use crate::index::table::HashIndex;
use serde::Serialize;
use std::io::{self, Write};

/// Occupancy summary of a [`HashIndex`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexStats {
    pub bucket_count: usize,
    pub word_count: usize,
    pub used_buckets: usize,
    pub longest_chain: usize,
    pub total_occurrences: usize,
    pub load_factor: f64,
    /// `chain_lengths[n]` is the number of buckets holding exactly `n` words
    pub chain_lengths: Vec<usize>,
}

impl IndexStats {
    pub fn collect(index: &HashIndex) -> Self {
        let buckets = index.buckets();
        let longest_chain = buckets.iter().map(Bucket::len).max().unwrap_or(0);

        let mut chain_lengths = vec![0usize; longest_chain + 1];
        for bucket in buckets {
            chain_lengths[bucket.len()] += 1;
        }

        let word_count = index.len();
        Self {
            bucket_count: buckets.len(),
            word_count,
            used_buckets: buckets.iter().filter(|b| !b.is_empty()).count(),
            longest_chain,
            total_occurrences: index.entries().map(|e| e.occurrences().len()).sum(),
            load_factor: word_count as f64 / buckets.len() as f64,
            chain_lengths,
        }
    }
}

/// Display index statistics
pub fn write_stats<W: Write>(out: &mut W, stats: &IndexStats) -> io::Result<()> {
    writeln!(out, "Index Statistics")?;
    writeln!(out, "================")?;
    writeln!(out)?;
    writeln!(out, "Words:            {}", stats.word_count)?;
    writeln!(out, "Occurrences:      {}", stats.total_occurrences)?;
    writeln!(out, "Buckets:          {}", stats.bucket_count)?;
    writeln!(out, "Used buckets:     {}", stats.used_buckets)?;
    writeln!(out, "Load factor:      {:.2}", stats.load_factor)?;
    writeln!(out, "Longest chain:    {}", stats.longest_chain)?;

    writeln!(out)?;
    writeln!(out, "Chain lengths:")?;
    for (len, count) in stats.chain_lengths.iter().enumerate() {
        if *count > 0 {
            writeln!(out, "  {:3} words  {} buckets", len, count)?;
        }
    }

    Ok(())
}
