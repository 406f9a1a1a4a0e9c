//! Grouping of near-equal eigenvalues into degenerate levels.
//!
//! Eigenvalues that are equal by symmetry come out of a dense
//! decomposition differing by a few ulps, so grouping needs a tolerance.
//! Each eigenvalue is compared with its immediate predecessor only. A run
//! of values that creeps upward in steps smaller than the tolerance is
//! therefore one level, even when its ends are further apart than the
//! tolerance.

use crate::error::{HuckelError, Result};

/// One energy level and how many orbitals share it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyLevel {
    /// Representative eigenvalue of the level.
    pub energy: f64,
    /// Number of eigenvalues grouped into the level.
    pub degeneracy: usize,
}

impl EnergyLevel {
    pub fn new(energy: f64, degeneracy: usize) -> Self {
        Self { energy, degeneracy }
    }
}

/// Group an ascending eigenvalue sequence into levels.
///
/// Walks adjacent pairs `(v[i], v[i+1])`. When `v[i]` lies strictly inside
/// `(v[i+1] - tolerance, v[i+1] + tolerance)` the running count grows;
/// otherwise the level `(v[i], count)` is closed and the count resets. The
/// last value always closes the final level. The representative energy is
/// therefore the last member of each run.
///
/// Fails with [`HuckelError::EmptySpectrum`] on empty input.
pub fn classify(eigenvalues: &[f64], tolerance: f64) -> Result<Vec<EnergyLevel>> {
    let last = *eigenvalues.last().ok_or(HuckelError::EmptySpectrum)?;

    let mut levels = Vec::new();
    let mut count = 1;
    for pair in eigenvalues.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        if next - tolerance < current && current < next + tolerance {
            count += 1;
        } else {
            levels.push(EnergyLevel::new(current, count));
            count = 1;
        }
    }
    levels.push(EnergyLevel::new(last, count));
    Ok(levels)
}

/// Total number of orbitals across `levels`.
pub fn total_degeneracy(levels: &[EnergyLevel]) -> usize {
    levels.iter().map(|l| l.degeneracy).sum()
}
