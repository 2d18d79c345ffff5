//! Pattern counts over paired simulation runs.
//!
//! This module implements the two counting analyses used to check the
//! simulation output against the published tallies:
//!
//! 1. **CC counts**: runs whose full (1-mut) cladogram splits into
//!    exactly two clades, bucketed by how balanced the split is
//!    (minority clade above 1% / above 30% of the total) and whether
//!    both clades carry a large polytomy.
//!
//! 2. **AB counts**: runs bucketed by the biggest 2-mut clade landing
//!    between 30% and 70% of the total leaf count, then by the base
//!    polytomy and the biggest clade's own polytomy clearing the
//!    threshold.
//!
//! Totals and the base polytomy always come from the 1-mut cladogram:
//! the 2-mut files only record the clades hit by a second mutation.
//!
//! The third AB counter is known to come out different from the
//! published number; the comparisons below are kept exactly as the
//! analysis defines them rather than tuned to match.

use crate::sim::Sim;

/// Polytomy threshold used by the published analysis.
pub const MIN_POLYTOMY: usize = 100;

/// Counters from the CC analysis, in reporting order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CcCounts {
    /// Runs with exactly two clades, both of size >= 2.
    pub count: usize,
    /// ... where the smaller clade exceeds 1% of the total.
    pub min_over_1perc: usize,
    /// ... where the smaller clade exceeds 30% of the total.
    pub min_over_30perc: usize,
    /// ... where additionally both clades have a polytomy at the threshold.
    pub two_polytomies: usize,
}

impl CcCounts {
    pub fn as_tuple(&self) -> (usize, usize, usize, usize) {
        (
            self.count,
            self.min_over_1perc,
            self.min_over_30perc,
            self.two_polytomies,
        )
    }
}

/// Counters from the AB analysis, in reporting order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AbCounts {
    /// Runs whose biggest 2-mut clade holds 30-70% of all leaves.
    pub biggest_30_to_70perc: usize,
    /// ... where the base polytomy is at the threshold.
    pub base_polytomy: usize,
    /// ... where the biggest clade's own polytomy is at the threshold too.
    pub two_polytomies: usize,
}

impl AbCounts {
    pub fn as_tuple(&self) -> (usize, usize, usize) {
        (
            self.biggest_30_to_70perc,
            self.base_polytomy,
            self.two_polytomies,
        )
    }
}

/// Scan the 1-mut cladogram of every sim for balanced two-clade splits.
///
/// Runs without exactly two clades, or with a singleton (or empty)
/// clade, are skipped entirely. Size fractions use real division; the
/// 1% and 30% comparisons are strict.
pub fn cc_counts(sims: &[Sim], min_polytomy: usize) -> CcCounts {
    let mut counts = CcCounts::default();

    for sim in sims {
        let cg = &sim.one_mut;

        let [a, b] = cg.clades.as_slice() else {
            continue;
        };

        if a.size < 2 || b.size < 2 {
            continue;
        }

        counts.count += 1;

        let total = (a.size + b.size) as f64;
        let min_size = a.size.min(b.size) as f64;

        if min_size > 0.01 * total {
            counts.min_over_1perc += 1;
        }

        if min_size > 0.3 * total {
            counts.min_over_30perc += 1;
            if a.polytomy_size() >= min_polytomy && b.polytomy_size() >= min_polytomy {
                counts.two_polytomies += 1;
            }
        }
    }

    counts
}

/// Scan the 2-mut cladogram of every sim for a dominant-but-not-too-
/// dominant biggest clade.
///
/// Sims whose 2-mut cladogram records no clades are skipped. The
/// 30-70% band is inclusive on both ends, measured against the 1-mut
/// leaf total.
pub fn ab_counts(sims: &[Sim], min_polytomy: usize) -> AbCounts {
    let mut counts = AbCounts::default();

    for sim in sims {
        let Some(biggest) = sim.two_muts.biggest_clade() else {
            continue;
        };

        let num_leaves = sim.one_mut.num_leaves() as f64;
        let base_polytomy_size = sim.one_mut.polytomy_size();

        let size = biggest.size as f64;
        if 0.3 * num_leaves <= size && size <= 0.7 * num_leaves {
            counts.biggest_30_to_70perc += 1;

            if base_polytomy_size >= min_polytomy {
                counts.base_polytomy += 1;

                if biggest.polytomy_size() >= min_polytomy {
                    counts.two_polytomies += 1;
                }
            }
        }
    }

    counts
}
