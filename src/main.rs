//! Hückel energy table for a polyene or a stored topology.
//!
//! ```text
//! huckel linear 5
//! huckel cyclic 6
//! huckel data/cube
//! ```

use std::process::ExitCode;

use clap::Parser;
use log::info;

use huckel::analysis::analyze;
use huckel::config::{EigenRoutine, HuckelConfig, SignConvention, DEFAULT_TOLERANCE};
use huckel::error::Result;
use huckel::loader::{load_topology, resolve_topology_path};
use huckel::report::render_table;
use huckel::topology::{build_topology, AdjacencyMatrix, TopologyKind};

/// Hückel molecular-orbital energies and degeneracies
#[derive(Parser, Debug)]
#[command(name = "huckel")]
#[command(author, version, about)]
struct Cli {
    /// `linear`, `cyclic`, or the name of an adjacency table file
    /// (`.txt` is appended if the name does not exist as given)
    mode: String,

    /// Number of atoms (linear and cyclic modes)
    n: Option<String>,

    /// Eigenvalues closer than this to their neighbour are degenerate
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Reject non-symmetric or non-0/1 adjacency matrices
    #[arg(long)]
    strict: bool,

    /// Always use the symmetric eigensolver, even for non-symmetric input
    #[arg(long)]
    symmetric: bool,

    /// Build H = +A instead of H = -A
    #[arg(long)]
    positive_beta: bool,
}

impl Cli {
    fn config(&self) -> HuckelConfig {
        let routine = if self.symmetric {
            EigenRoutine::Symmetric
        } else {
            EigenRoutine::General
        };
        let sign = if self.positive_beta {
            SignConvention::PositiveBeta
        } else {
            SignConvention::NegativeBeta
        };
        HuckelConfig::default()
            .with_tolerance(self.tolerance)
            .with_routine(routine)
            .with_sign(sign)
            .with_validation(self.strict)
    }

    /// Title line and adjacency matrix for the requested mode.
    fn topology(&self) -> Result<(String, AdjacencyMatrix)> {
        match self.mode.parse::<TopologyKind>() {
            Ok(kind) => {
                let matrix = build_topology(&self.mode, self.n.as_deref())?;
                let title = format!(
                    "The Hückel energies for {} polyene with {} carbons.",
                    kind,
                    matrix.nrows()
                );
                Ok((title, matrix))
            }
            Err(_) => {
                let path = resolve_topology_path(&self.mode)?;
                let matrix = load_topology(&path)?;
                Ok((format!("The Hückel energies for {}.", self.mode), matrix))
            }
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let config = cli.config();
    let (title, matrix) = cli.topology()?;
    info!("analysing {}x{} adjacency matrix", matrix.nrows(), matrix.ncols());
    let levels = analyze(&matrix, &config)?;
    Ok(format!("{}\n\n{}", title, render_table(&levels, config.sign)))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
