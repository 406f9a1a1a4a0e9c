//! End-to-end Hückel analysis.
//!
//! Pipeline: optional validation → Hamiltonian spectrum → degeneracy
//! grouping. Each call is independent and all-or-nothing; batch helpers
//! fan independent topologies out over the rayon pool when the
//! `parallel` feature is enabled. A single decomposition is never split.

use log::debug;

use crate::config::HuckelConfig;
use crate::degeneracy::{classify, EnergyLevel};
use crate::error::Result;
use crate::spectral::solve_with;
use crate::topology::{self, AdjacencyMatrix, TopologyKind};

/// Energy levels of `adjacency` under `config`, lowest energy first.
pub fn analyze(adjacency: &AdjacencyMatrix, config: &HuckelConfig) -> Result<Vec<EnergyLevel>> {
    if config.validate {
        topology::validate(adjacency)?;
    }
    let eigenvalues = solve_with(adjacency, config)?;
    let levels = classify(&eigenvalues, config.tolerance)?;
    debug!(
        "{} eigenvalues grouped into {} levels (tol = {:e})",
        eigenvalues.len(),
        levels.len(),
        config.tolerance
    );
    Ok(levels)
}

/// Analyse independent topologies. Results keep input order.
pub fn analyze_batch(
    matrices: &[AdjacencyMatrix],
    config: &HuckelConfig,
) -> Vec<Result<Vec<EnergyLevel>>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        matrices.par_iter().map(|m| analyze(m, config)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        matrices.iter().map(|m| analyze(m, config)).collect()
    }
}

/// One entry of a polyene size scan.
#[derive(Debug)]
pub struct ScanResult {
    pub kind: TopologyKind,
    pub n_atoms: usize,
    pub levels: Result<Vec<EnergyLevel>>,
}

/// Analyse a generated topology family over a range of sizes.
///
/// Sizes below the family minimum produce an `InvalidArgument` entry
/// rather than aborting the scan.
pub fn scan(kind: TopologyKind, sizes: &[usize], config: &HuckelConfig) -> Vec<ScanResult> {
    let run = |&n: &usize| ScanResult {
        kind,
        n_atoms: n,
        levels: kind.build(n).and_then(|m| analyze(&m, config)),
    };
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        sizes.par_iter().map(run).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        sizes.iter().map(run).collect()
    }
}
