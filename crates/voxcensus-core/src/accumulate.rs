//! Cross-chunk accumulation of results and the global block-name union.

use std::collections::BTreeSet;

use crate::aggregate::ChunkResult;

/// Collects per-chunk results in traversal order and tracks the union of all
/// block names seen, which becomes the output table's dynamic column set.
#[derive(Debug, Default)]
pub struct RunAccumulator {
    results: Vec<ChunkResult>,
    names: BTreeSet<String>,
}

impl RunAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result and unions its block names into the global set.
    pub fn add(&mut self, result: ChunkResult) {
        for name in result.block_counts.keys() {
            if !self.names.contains(name) {
                self.names.insert(name.clone());
            }
        }
        self.results.push(result);
    }

    /// Number of results accumulated so far.
    pub fn processed(&self) -> usize {
        self.results.len()
    }

    /// Consumes the accumulator, yielding results in traversal order and the
    /// lexicographically sorted union of block names.
    pub fn finalize(self) -> (Vec<ChunkResult>, Vec<String>) {
        (self.results, self.names.into_iter().collect())
    }
}
