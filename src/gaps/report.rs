//! Scan summaries built on top of [`find_gaps`](super::find_gaps).

use std::collections::HashSet;

use serde::Serialize;

use super::{gap_runs, range_width};

/// Summary of one identifier-column scan.
///
/// Produced by [`GapReport::scan`]; never mutated afterwards. `lo`/`hi` are
/// `None` when the input was empty, in which case `missing` and `runs` are
/// empty and `density` is 1.0 (nothing observed, nothing missing).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapReport {
    /// Number of distinct identifiers observed.
    pub distinct: usize,
    /// Smallest observed identifier.
    pub lo: Option<i64>,
    /// Largest observed identifier.
    pub hi: Option<i64>,
    /// Every missing identifier, ascending.
    pub missing: Vec<i64>,
    /// Missing identifiers coalesced into inclusive `(start, end)` runs.
    pub runs: Vec<(i64, i64)>,
    /// Fraction of the observed range that is populated, in `0.0..=1.0`.
    pub density: f64,
}

impl GapReport {
    /// Scan a collection of identifiers and summarize its gaps.
    ///
    /// Total over all finite inputs: empty and singleton collections yield a
    /// report with no gaps rather than an error.
    pub fn scan(ids: &[i64]) -> Self {
        let present: HashSet<i64> = ids.iter().copied().collect();
        let distinct = present.len();

        let lo = present.iter().min().copied();
        let hi = present.iter().max().copied();

        let missing = match (lo, hi) {
            (Some(lo), Some(hi)) if lo < hi => {
                let mut missing = Vec::new();
                for candidate in lo..=hi {
                    if !present.contains(&candidate) {
                        missing.push(candidate);
                    }
                }
                missing
            }
            _ => Vec::new(),
        };

        let density = match (lo, hi) {
            (Some(lo), Some(hi)) => distinct as f64 / range_width(lo, hi) as f64,
            _ => 1.0,
        };

        let runs = gap_runs(&missing);

        Self {
            distinct,
            lo,
            hi,
            missing,
            runs,
            density,
        }
    }

    /// True when the scanned range has no holes.
    pub fn is_dense(&self) -> bool {
        self.missing.is_empty()
    }

    /// Number of missing identifiers.
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }
}
