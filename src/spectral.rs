//! Hückel Hamiltonian and its spectrum.
//!
//! The Hamiltonian is the adjacency matrix scaled by the sign of β
//! (H = −A by default: α = 0, β = −1). Eigenvalues are computed by dense
//! decomposition (nalgebra) and returned sorted ascending.
//!
//! Symmetric Hamiltonians always go through `SymmetricEigen`. Only a
//! non-symmetric square matrix reaches the general real-Schur routine,
//! which runs under an iteration cap and reports
//! [`HuckelError::NoConvergence`] instead of looping.
//!
//! # Closed forms
//!
//! For the generated polyenes the adjacency spectrum is known exactly:
//!
//! ```text
//! chain of n atoms:  x_k = 2 cos(kπ / (n+1)),  k = 1..n
//! ring of n atoms:   x_k = 2 cos(2πk / n),     k = 0..n-1
//! ```
//!
//! [`verify_chain_spectrum`] and [`verify_cycle_spectrum`] compare the
//! numerical result against these formulas.

use std::f64::consts::PI;

use log::{debug, warn};
use nalgebra::{DMatrix, Schur, SymmetricEigen};
use num_complex::Complex;

use crate::config::{EigenRoutine, HuckelConfig, SignConvention};
use crate::error::{HuckelError, Result};
use crate::topology::{cycle, linear_chain, AdjacencyMatrix};

/// Imaginary parts above this are reported before being discarded.
const IMAGINARY_WARN_THRESHOLD: f64 = 1e-9;

/// Iteration cap for the real-Schur routine.
pub const MAX_SCHUR_ITERATIONS: usize = 10_000;

/// Hückel Hamiltonian for `adjacency` under `sign`.
pub fn hamiltonian(adjacency: &AdjacencyMatrix, sign: SignConvention) -> DMatrix<f64> {
    adjacency * sign.hamiltonian_factor()
}

/// Eigenvalues of H = −A, sorted ascending.
///
/// Symmetric input is diagonalised directly; non-symmetric square input
/// goes through the general routine and keeps only real parts.
/// Fails with [`HuckelError::Dimension`] if `adjacency` is not square.
pub fn solve(adjacency: &AdjacencyMatrix) -> Result<Vec<f64>> {
    solve_with(adjacency, &HuckelConfig::default())
}

/// Eigenvalues of the Hamiltonian built with `config.sign`, computed by
/// `config.routine`, sorted ascending.
pub fn solve_with(adjacency: &AdjacencyMatrix, config: &HuckelConfig) -> Result<Vec<f64>> {
    let (rows, cols) = adjacency.shape();
    if rows != cols {
        return Err(HuckelError::Dimension { rows, cols });
    }
    if rows == 0 {
        return Ok(Vec::new());
    }

    let h = hamiltonian(adjacency, config.sign);
    let routine = match config.routine {
        EigenRoutine::General if is_symmetric(&h) => EigenRoutine::Symmetric,
        other => other,
    };
    let mut vals: Vec<f64> = match routine {
        EigenRoutine::General => {
            let complex = general_eigenvalues(h)?;
            let max_imag = complex.iter().map(|z| z.im.abs()).fold(0.0_f64, f64::max);
            if max_imag > IMAGINARY_WARN_THRESHOLD {
                warn!(
                    "discarding imaginary eigenvalue parts up to {:.3e}; is the adjacency matrix symmetric?",
                    max_imag
                );
            }
            complex.into_iter().map(|z| z.re).collect()
        }
        EigenRoutine::Symmetric => SymmetricEigen::new(h).eigenvalues.iter().copied().collect(),
    };
    vals.sort_by(|a, b| a.total_cmp(b));
    debug!("solved {}x{} Hamiltonian ({:?})", rows, cols, routine);
    Ok(vals)
}

/// Exact transpose equality.
fn is_symmetric(h: &DMatrix<f64>) -> bool {
    let n = h.nrows();
    (0..n).all(|i| (0..i).all(|j| h[(i, j)] == h[(j, i)]))
}

/// All eigenvalues of a square matrix via bounded real Schur decomposition.
fn general_eigenvalues(h: DMatrix<f64>) -> Result<Vec<Complex<f64>>> {
    let dim = h.nrows();
    let schur = Schur::try_new(h, f64::EPSILON, MAX_SCHUR_ITERATIONS).ok_or(
        HuckelError::NoConvergence {
            dim,
            iterations: MAX_SCHUR_ITERATIONS,
        },
    )?;
    Ok(schur.complex_eigenvalues().iter().copied().collect())
}

/// Closed-form adjacency eigenvalues of the n-atom chain, sorted ascending.
pub fn analytic_chain_spectrum(n: usize) -> Vec<f64> {
    let mut vals: Vec<f64> = (1..=n)
        .map(|k| 2.0 * (k as f64 * PI / (n as f64 + 1.0)).cos())
        .collect();
    vals.sort_by(|a, b| a.total_cmp(b));
    vals
}

/// Closed-form adjacency eigenvalues of the n-atom ring, sorted ascending.
pub fn analytic_cycle_spectrum(n: usize) -> Vec<f64> {
    let mut vals: Vec<f64> = (0..n)
        .map(|k| 2.0 * (2.0 * PI * k as f64 / n as f64).cos())
        .collect();
    vals.sort_by(|a, b| a.total_cmp(b));
    vals
}

/// Largest deviation between a numerical Hamiltonian spectrum (H = −A)
/// and the negated closed-form adjacency spectrum.
fn max_deviation(numerical: &[f64], analytic_adjacency: &[f64]) -> f64 {
    let mut expected: Vec<f64> = analytic_adjacency.iter().map(|x| -x).collect();
    expected.sort_by(|a, b| a.total_cmp(b));
    numerical
        .iter()
        .zip(expected.iter())
        .map(|(n, a)| (n - a).abs())
        .fold(0.0_f64, f64::max)
}

/// Max error of the solved n-atom chain spectrum against the closed form.
pub fn verify_chain_spectrum(n: usize) -> Result<f64> {
    let numerical = solve(&linear_chain(n))?;
    Ok(max_deviation(&numerical, &analytic_chain_spectrum(n)))
}

/// Max error of the solved n-atom ring spectrum against the closed form.
pub fn verify_cycle_spectrum(n: usize) -> Result<f64> {
    let numerical = solve(&cycle(n))?;
    Ok(max_deviation(&numerical, &analytic_cycle_spectrum(n)))
}
