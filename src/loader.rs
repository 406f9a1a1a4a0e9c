//! Adjacency tables stored as plain text.
//!
//! One matrix row per line, columns separated by any whitespace. Blank
//! lines and lines starting with `#` are skipped.
//!
//! ```text
//! # allyl
//! 0 1 0
//! 1 0 1
//! 0 1 0
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use nalgebra::DMatrix;

use crate::error::{HuckelError, Result};
use crate::topology::AdjacencyMatrix;

/// Extension tried when a topology name does not resolve as given.
pub const TABLE_EXTENSION: &str = "txt";

/// Parse a whitespace-delimited square table.
pub fn parse_table(text: &str) -> Result<AdjacencyMatrix> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut width = 0;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let row = trimmed
            .split_whitespace()
            .map(|tok| match tok.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                Ok(_) => Err(HuckelError::Parse {
                    line,
                    message: format!("'{tok}' is not a finite number"),
                }),
                Err(_) => Err(HuckelError::Parse {
                    line,
                    message: format!("'{tok}' is not a number"),
                }),
            })
            .collect::<Result<Vec<f64>>>()?;

        if rows.is_empty() {
            width = row.len();
        } else if row.len() != width {
            return Err(HuckelError::Parse {
                line,
                message: format!("expected {} columns, found {}", width, row.len()),
            });
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(HuckelError::Parse {
            line: 0,
            message: "table is empty".into(),
        });
    }
    if rows.len() != width {
        return Err(HuckelError::Parse {
            line: 0,
            message: format!("table is {}x{}, not square", rows.len(), width),
        });
    }

    let n = rows.len();
    let data: Vec<f64> = rows.into_iter().flatten().collect();
    Ok(DMatrix::from_row_slice(n, n, &data))
}

/// Read and parse an adjacency table from `path`.
pub fn load_topology(path: impl AsRef<Path>) -> Result<AdjacencyMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => HuckelError::NotFound(path.to_path_buf()),
        _ => HuckelError::Io(e),
    })?;
    let matrix = parse_table(&text)?;
    debug!("loaded {}x{} adjacency table from {}", matrix.nrows(), matrix.ncols(), path.display());
    Ok(matrix)
}

/// Resolve a topology name to an existing file: `name` as given, then
/// `name.txt`.
pub fn resolve_topology_path(name: impl AsRef<Path>) -> Result<PathBuf> {
    let name = name.as_ref();
    if name.is_file() {
        return Ok(name.to_path_buf());
    }
    let mut with_ext = name.as_os_str().to_owned();
    with_ext.push(".");
    with_ext.push(TABLE_EXTENSION);
    let with_ext = PathBuf::from(with_ext);
    if with_ext.is_file() {
        Ok(with_ext)
    } else {
        Err(HuckelError::NotFound(name.to_path_buf()))
    }
}
