//! Flat cladogram summaries parsed from simulation output.
//!
//! # Overview
//! A simulation run is summarized as a flat list of clades. Each clade
//! records its leaf count and the sizes of the sub-partitions found
//! inside it. There is no recursive tree structure here: the analyses
//! only ever look one level down, so a `Cladogram` is just an ordered
//! list of `Clade` summaries tagged with the run it came from.
//!
//! # Example
//! A file `42_clade_analysis.txt` containing
//! ```text
//! 60 [30, 20, 10]
//! 40 [25, 15]
//! ```
//! becomes a `Cladogram` with `run = 42`, two clades, 100 leaves in
//! total, and a polytomy size (clade count) of 2.

/// One clade within a cladogram: a partition of `size` individuals,
/// itself partitioned into sub-clades of the recorded sizes.
///
/// Immutable after construction. The order of `subclade_sizes` is
/// whatever the input file gave us; nothing downstream depends on it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Clade {
    /// Number of leaves (individuals) in this clade.
    pub size: usize,

    /// Sizes of the immediate sub-partitions discovered within the clade.
    pub subclade_sizes: Vec<usize>,
}

impl Clade {
    pub fn new(size: usize, subclade_sizes: Vec<usize>) -> Self {
        Clade { size, subclade_sizes }
    }

    /// Number of immediate sub-partitions within this clade.
    ///
    /// # Example
    /// ```
    /// # use rust_python_clade_counts::cladogram::Clade;
    /// let clade = Clade::new(37, vec![5, 12, 20]);
    /// assert_eq!(clade.polytomy_size(), 3);
    /// ```
    #[inline]
    pub fn polytomy_size(&self) -> usize {
        self.subclade_sizes.len()
    }
}

/// The clade summary of one simulation run.
///
/// # Fields
/// - `run`: integer identifier shared by the 1-mut and 2-mut files of
///   the same simulation execution
/// - `num_muts`: which dataset family this came from (1 or 2)
/// - `clades`: clades in file order
///
/// Immutable after construction. File order of `clades` carries no
/// meaning beyond reproducibility.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cladogram {
    /// Run identifier, taken from the leading integer of the file name.
    pub run: usize,

    /// Dataset family tag: 1 for 1-mutation files, 2 for 2-mutation files.
    pub num_muts: u8,

    /// Clades in the order they appeared in the file.
    pub clades: Vec<Clade>,
}

impl Cladogram {
    pub fn new(run: usize, num_muts: u8, clades: Vec<Clade>) -> Self {
        Cladogram { run, num_muts, clades }
    }

    /// Total leaf count: the sum of all clade sizes.
    ///
    /// For a 1-mut cladogram this is the whole population, since the
    /// 1-mut files record every clade. The 2-mut files only record the
    /// clades hit by a second mutation, so their sum is a subset count.
    ///
    /// # Example
    /// ```
    /// # use rust_python_clade_counts::cladogram::{Clade, Cladogram};
    /// let cg = Cladogram::new(1, 1, vec![
    ///     Clade::new(60, vec![30, 30]),
    ///     Clade::new(40, vec![40]),
    /// ]);
    /// assert_eq!(cg.num_leaves(), 100);
    /// ```
    #[inline]
    pub fn num_leaves(&self) -> usize {
        self.clades.iter().map(|c| c.size).sum()
    }

    /// Number of clades, i.e. the size of the base polytomy.
    #[inline]
    pub fn polytomy_size(&self) -> usize {
        self.clades.len()
    }

    /// The clade with the largest size, or `None` if there are no clades.
    ///
    /// Ties go to the first occurrence in file order: the running best
    /// starts at the first clade with a zero-size sentinel and is only
    /// replaced on a strictly larger size.
    ///
    /// # Example
    /// ```
    /// # use rust_python_clade_counts::cladogram::{Clade, Cladogram};
    /// let cg = Cladogram::new(1, 2, vec![
    ///     Clade::new(50, vec![25, 25]),
    ///     Clade::new(50, vec![50]),
    ///     Clade::new(20, vec![]),
    /// ]);
    /// // First of the two size-50 clades wins the tie.
    /// assert_eq!(cg.biggest_clade().unwrap().polytomy_size(), 2);
    /// ```
    pub fn biggest_clade(&self) -> Option<&Clade> {
        let mut best = self.clades.first()?;
        let mut best_size = 0;
        for clade in &self.clades {
            if clade.size > best_size {
                best = clade;
                best_size = clade.size;
            }
        }
        Some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cladogram(sizes: &[(usize, &[usize])]) -> Cladogram {
        let clades = sizes
            .iter()
            .map(|&(size, subs)| Clade::new(size, subs.to_vec()))
            .collect();
        Cladogram::new(7, 1, clades)
    }

    #[test]
    fn polytomy_size_counts_subclades() {
        let clade = Clade::new(10, vec![4, 3, 2, 1]);
        assert_eq!(clade.polytomy_size(), 4);
        assert_eq!(Clade::new(10, vec![]).polytomy_size(), 0);
    }

    #[test]
    fn num_leaves_sums_clade_sizes() {
        let cg = cladogram(&[(60, &[30, 30]), (40, &[40]), (5, &[])]);
        assert_eq!(cg.num_leaves(), 105);
        assert_eq!(cg.polytomy_size(), 3);
    }

    #[test]
    fn num_leaves_empty_cladogram_is_zero() {
        let cg = cladogram(&[]);
        assert_eq!(cg.num_leaves(), 0);
        assert_eq!(cg.polytomy_size(), 0);
    }

    #[test]
    fn biggest_clade_finds_maximum() {
        let cg = cladogram(&[(10, &[5]), (80, &[40, 40]), (30, &[])]);
        assert_eq!(cg.biggest_clade().unwrap().size, 80);
    }

    #[test]
    fn biggest_clade_tie_goes_to_first() {
        let cg = cladogram(&[(10, &[1, 2]), (50, &[3]), (50, &[4, 5, 6])]);
        let biggest = cg.biggest_clade().unwrap();
        assert_eq!(biggest.size, 50);
        // The size-50 clade at index 1 is kept, not the later one.
        assert_eq!(biggest.subclade_sizes, vec![3]);
    }

    #[test]
    fn biggest_clade_empty_is_none() {
        assert!(cladogram(&[]).biggest_clade().is_none());
    }

    #[test]
    fn biggest_clade_all_zero_sizes_keeps_first() {
        let cg = cladogram(&[(0, &[1]), (0, &[2, 3])]);
        // Sentinel never beaten: the first clade is returned.
        assert_eq!(cg.biggest_clade().unwrap().subclade_sizes, vec![1]);
    }
}
