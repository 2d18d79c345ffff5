//! Pairing of 1-mut and 2-mut cladograms into per-run sims.

use std::collections::HashMap;

use itertools::Itertools;
use thiserror::Error;

use crate::cladogram::Cladogram;

/// Errors raised while pairing the two datasets.
#[derive(Debug, Error)]
pub enum PairingError {
    #[error("run {run} has no cladogram in the 2-mut dataset")]
    MissingRun { run: usize },

    #[error("duplicate run {run} in the {num_muts}-mut dataset")]
    DuplicateRun { run: usize, num_muts: u8 },
}

/// One simulation run: its 1-mut and 2-mut cladograms side by side.
///
/// The 1-mut cladogram records every clade of the run; the 2-mut one
/// only the clades hit by a second mutation. The AB analysis reads
/// totals from the former while scanning the latter.
#[derive(Clone, Debug)]
pub struct Sim {
    pub run: usize,
    pub one_mut: Cladogram,
    pub two_muts: Cladogram,
}

/// Join the two collections by run id into sims sorted ascending by run.
///
/// The 1-mut dataset is authoritative for the run universe: every
/// 1-mut run must have a 2-mut counterpart (`MissingRun` otherwise),
/// while 2-mut-only runs are dropped. A run id appearing twice within
/// one collection is rejected outright instead of letting one file
/// silently shadow the other.
pub fn make_sims(
    one_mut: Vec<Cladogram>,
    two_muts: Vec<Cladogram>,
) -> Result<Vec<Sim>, PairingError> {
    let mut one = index_by_run(one_mut)?;
    let mut two = index_by_run(two_muts)?;

    let runs: Vec<usize> = one.keys().copied().sorted().collect();

    let mut ret = Vec::with_capacity(runs.len());
    for run in runs {
        let one_mut = one.remove(&run).expect("run taken from the 1-mut index");
        let two_muts = two
            .remove(&run)
            .ok_or(PairingError::MissingRun { run })?;
        ret.push(Sim { run, one_mut, two_muts });
    }

    Ok(ret)
}

fn index_by_run(cladograms: Vec<Cladogram>) -> Result<HashMap<usize, Cladogram>, PairingError> {
    let mut map = HashMap::with_capacity(cladograms.len());
    for cg in cladograms {
        let run = cg.run;
        let num_muts = cg.num_muts;
        if map.insert(run, cg).is_some() {
            return Err(PairingError::DuplicateRun { run, num_muts });
        }
    }
    Ok(map)
}
