//! Python binding layer for the clade-count analyses.
//!
//! Exposes the load / pair / count pipeline to Python so the counts
//! can be checked from a notebook without going through the binary.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::counts::{ab_counts, cc_counts, MIN_POLYTOMY};
use crate::io::parse_dir;
use crate::sim::make_sims;

/// Compute the CC and AB clade counts for one dataset.
///
/// Args:
///     one_mut_dir: Directory of 1-mutation cladogram files
///     two_muts_dir: Directory of 2-mutation cladogram files
///     min_polytomy: Polytomy threshold (default: 100)
///
/// Returns:
///     A tuple of (cc_counts, ab_counts) where:
///     - cc_counts is the 4-tuple (count, 1perc, 30perc, two_polytomies)
///     - ab_counts is the 3-tuple (30perc, polytomy, two_polytomies)
///
/// Raises:
///     ValueError: If a directory is missing, a file is malformed, or
///     the two datasets cannot be paired by run id
#[pyfunction]
#[pyo3(signature = (one_mut_dir, two_muts_dir, min_polytomy=MIN_POLYTOMY))]
fn clade_counts(
    one_mut_dir: String,
    two_muts_dir: String,
    min_polytomy: usize,
) -> PyResult<((usize, usize, usize, usize), (usize, usize, usize))> {
    let one_mut = parse_dir(&one_mut_dir, 1)
        .map_err(|e| PyValueError::new_err(format!("Failed to load 1-mut dataset: {}", e)))?;
    let two_muts = parse_dir(&two_muts_dir, 2)
        .map_err(|e| PyValueError::new_err(format!("Failed to load 2-mut dataset: {}", e)))?;

    let sims = make_sims(one_mut, two_muts)
        .map_err(|e| PyValueError::new_err(format!("Failed to pair datasets: {}", e)))?;

    Ok((
        cc_counts(&sims, min_polytomy).as_tuple(),
        ab_counts(&sims, min_polytomy).as_tuple(),
    ))
}

/// Python module definition
#[pymodule]
fn rust_python_clade_counts(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(clade_counts, m)?)?;
    Ok(())
}
