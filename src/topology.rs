//! Adjacency matrices for conjugated topologies.
//!
//! Generators for the canonical polyenes (open chain and ring), a
//! pass-through for matrices that come from elsewhere, and an edge-list
//! constructor for hand-made molecules.

use std::fmt;
use std::str::FromStr;

use nalgebra::DMatrix;

use crate::error::{HuckelError, Result};

/// Square 0/1 connectivity matrix, one row per atom.
pub type AdjacencyMatrix = DMatrix<f64>;

/// Generated topology families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyKind {
    /// Open polyene chain.
    Linear,
    /// Ring (annulene).
    Cyclic,
}

impl TopologyKind {
    /// Smallest atom count for which the topology is meaningful.
    pub fn min_atoms(self) -> usize {
        match self {
            TopologyKind::Linear => 1,
            TopologyKind::Cyclic => 3,
        }
    }

    /// Label string (for output formatting).
    pub fn label(self) -> &'static str {
        match self {
            TopologyKind::Linear => "linear",
            TopologyKind::Cyclic => "cyclic",
        }
    }

    /// Build the adjacency matrix for `n` atoms, rejecting sizes below
    /// [`min_atoms`](Self::min_atoms).
    pub fn build(self, n: usize) -> Result<AdjacencyMatrix> {
        if n < self.min_atoms() {
            return Err(HuckelError::InvalidArgument(format!(
                "a {} polyene needs at least {} atoms, got {}",
                self.label(),
                self.min_atoms(),
                n
            )));
        }
        Ok(match self {
            TopologyKind::Linear => linear_chain(n),
            TopologyKind::Cyclic => cycle(n),
        })
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for TopologyKind {
    type Err = HuckelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" | "chain" => Ok(TopologyKind::Linear),
            "cyclic" | "cycle" => Ok(TopologyKind::Cyclic),
            other => Err(HuckelError::InvalidArgument(format!(
                "unknown topology '{other}', expected 'linear' or 'cyclic'"
            ))),
        }
    }
}

/// Build a generated topology from raw command-line strings.
///
/// Fails with [`HuckelError::InvalidArgument`] when the kind is unknown or
/// the atom count is missing, non-numeric or too small for the kind.
pub fn build_topology(kind: &str, n: Option<&str>) -> Result<AdjacencyMatrix> {
    let kind: TopologyKind = kind.parse()?;
    let raw = n.ok_or_else(|| {
        HuckelError::InvalidArgument(format!(
            "you must supply the number of atoms, e.g. `huckel {kind} 5`"
        ))
    })?;
    let n: usize = raw.trim().parse().map_err(|_| {
        HuckelError::InvalidArgument(format!(
            "atom count must be a positive integer, got '{raw}'"
        ))
    })?;
    kind.build(n)
}

/// Path graph on `n` atoms: bonds (i, i+1) for every i.
///
/// `n = 1` gives the 1×1 zero matrix.
pub fn linear_chain(n: usize) -> AdjacencyMatrix {
    let mut mat = DMatrix::zeros(n, n);
    for i in 1..n {
        mat[(i - 1, i)] = 1.0;
        mat[(i, i - 1)] = 1.0;
    }
    mat
}

/// Cycle graph on `n` atoms: the chain plus the bond closing atom n−1
/// back onto atom 0.
///
/// The closing bond is added on top of the chain, so for n = 1 the single
/// atom gets a diagonal entry of 2 and for n = 2 the one bond has weight 2.
/// Only n ≥ 3 is a real ring.
pub fn cycle(n: usize) -> AdjacencyMatrix {
    let mut mat = linear_chain(n);
    if n > 0 {
        mat[(0, n - 1)] += 1.0;
        mat[(n - 1, 0)] += 1.0;
    }
    mat
}

/// Identity pass-through for a matrix built or loaded elsewhere.
/// No validation.
pub fn from_external(matrix: AdjacencyMatrix) -> AdjacencyMatrix {
    matrix
}

/// Build an adjacency matrix from an undirected edge list.
///
/// Repeated edges are idempotent. Panics if an index is `>= n`.
pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> AdjacencyMatrix {
    let mut mat = DMatrix::zeros(n, n);
    for &(i, j) in edges {
        mat[(i, j)] = 1.0;
        mat[(j, i)] = 1.0;
    }
    mat
}

/// Number of bonds: non-zero entries strictly above the diagonal.
pub fn edge_count(matrix: &AdjacencyMatrix) -> usize {
    let n = matrix.nrows().min(matrix.ncols());
    let mut count = 0;
    for i in 0..n {
        for j in (i + 1)..matrix.ncols() {
            if matrix[(i, j)] != 0.0 {
                count += 1;
            }
        }
    }
    count
}

/// Check that `matrix` describes a simple undirected graph: square,
/// symmetric, zero diagonal, entries in {0, 1}.
pub fn validate(matrix: &AdjacencyMatrix) -> Result<()> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(HuckelError::InvalidTopology(format!(
            "adjacency matrix is {rows}x{cols}, not square"
        )));
    }
    for i in 0..rows {
        if matrix[(i, i)] != 0.0 {
            return Err(HuckelError::InvalidTopology(format!(
                "atom {i} is bonded to itself"
            )));
        }
        for j in 0..cols {
            let a = matrix[(i, j)];
            if a != 0.0 && a != 1.0 {
                return Err(HuckelError::InvalidTopology(format!(
                    "entry ({i}, {j}) = {a} is not 0 or 1"
                )));
            }
            if a != matrix[(j, i)] {
                return Err(HuckelError::InvalidTopology(format!(
                    "bond ({i}, {j}) is not symmetric"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_symmetric_zero_diagonal(m: &AdjacencyMatrix) -> bool {
        let n = m.nrows();
        (0..n).all(|i| m[(i, i)] == 0.0)
            && (0..n).all(|i| (0..n).all(|j| m[(i, j)] == m[(j, i)]))
    }

    #[test]
    fn linear_chain_structure() {
        for n in 1..=12 {
            let m = linear_chain(n);
            assert_eq!(m.shape(), (n, n));
            assert!(is_symmetric_zero_diagonal(&m), "chain of {} not symmetric", n);
            assert_eq!(edge_count(&m), n - 1, "chain of {} has wrong bond count", n);
        }
    }

    #[test]
    fn single_atom_chain_is_zero() {
        let m = linear_chain(1);
        assert_eq!(m.shape(), (1, 1));
        assert_eq!(m[(0, 0)], 0.0);
    }

    #[test]
    fn cycle_structure() {
        for n in 3..=12 {
            let m = cycle(n);
            assert!(is_symmetric_zero_diagonal(&m), "ring of {} not symmetric", n);
            assert_eq!(edge_count(&m), n, "ring of {} has wrong bond count", n);
            assert_eq!(m[(0, n - 1)], 1.0);
            assert_eq!(m[(n - 1, 0)], 1.0);
        }
    }

    #[test]
    fn degenerate_small_cycles() {
        assert_eq!(cycle(1)[(0, 0)], 2.0);
        let two = cycle(2);
        assert_eq!(two[(0, 1)], 2.0);
        assert_eq!(two[(1, 0)], 2.0);
    }

    #[test]
    fn from_external_is_identity() {
        let m = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(from_external(m.clone()), m);
    }

    #[test]
    fn from_edges_matches_cycle() {
        let n = 6;
        let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
        assert_eq!(from_edges(n, &edges), cycle(n));
    }

    #[test]
    fn kind_parsing_accepts_aliases() {
        assert_eq!("linear".parse::<TopologyKind>().unwrap(), TopologyKind::Linear);
        assert_eq!("chain".parse::<TopologyKind>().unwrap(), TopologyKind::Linear);
        assert_eq!("cyclic".parse::<TopologyKind>().unwrap(), TopologyKind::Cyclic);
        assert_eq!("cycle".parse::<TopologyKind>().unwrap(), TopologyKind::Cyclic);
        assert!(matches!(
            "benzene".parse::<TopologyKind>(),
            Err(HuckelError::InvalidArgument(_))
        ));
    }

    #[test]
    fn build_topology_happy_path() {
        assert_eq!(build_topology("linear", Some("5")).unwrap(), linear_chain(5));
        assert_eq!(build_topology("cyclic", Some("6")).unwrap(), cycle(6));
    }

    #[test]
    fn build_topology_rejects_bad_counts() {
        for (kind, n) in [
            ("linear", None),
            ("linear", Some("five")),
            ("linear", Some("-3")),
            ("linear", Some("0")),
            ("cyclic", Some("2")),
            ("cyclic", None),
        ] {
            assert!(
                matches!(build_topology(kind, n), Err(HuckelError::InvalidArgument(_))),
                "{} {:?} should be rejected",
                kind,
                n
            );
        }
    }

    #[test]
    fn validate_accepts_generated_topologies() {
        assert!(validate(&linear_chain(7)).is_ok());
        assert!(validate(&cycle(7)).is_ok());
    }

    #[test]
    fn validate_rejects_malformed() {
        let asymmetric = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 0.0]);
        let self_loop = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 0.0]);
        let weighted = DMatrix::from_row_slice(2, 2, &[0.0, 0.5, 0.5, 0.0]);
        let rectangular = DMatrix::<f64>::zeros(2, 3);
        for m in [asymmetric, self_loop, weighted, rectangular] {
            assert!(matches!(validate(&m), Err(HuckelError::InvalidTopology(_))));
        }
    }
}
