//! Error types for topology construction, loading and spectral analysis.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised anywhere in the Hückel pipeline.
#[derive(Debug, Error)]
pub enum HuckelError {
    /// Bad command-level input: unknown mode, missing or invalid atom count.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Adjacency file does not exist.
    #[error("No adjacency matrix found at {}", .0.display())]
    NotFound(PathBuf),

    /// Malformed adjacency table.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A non-square matrix reached the eigenvalue solver.
    #[error("Matrix must be square, got {rows}x{cols}")]
    Dimension { rows: usize, cols: usize },

    /// The general eigenvalue routine hit its iteration cap.
    #[error("Eigenvalue routine did not converge for a {dim}x{dim} matrix within {iterations} iterations")]
    NoConvergence { dim: usize, iterations: usize },

    /// Adjacency matrix rejected by explicit validation.
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    /// Degeneracy classification needs at least one eigenvalue.
    #[error("Cannot classify an empty eigenvalue sequence")]
    EmptySpectrum,

    /// Any other failure while reading an adjacency file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, HuckelError>;
