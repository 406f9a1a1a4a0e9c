//! # huckel
//!
//! Hückel molecular-orbital energies from atom connectivity.
//!
//! ```text
//! adjacency A (topology)
//!   ↓ H = −A  (α = 0, β = −1)
//! eigenvalues, ascending (spectral)
//!   ↓ neighbour-tolerance grouping
//! (energy, degeneracy) levels (degeneracy)
//!   ↓
//! α + xβ table (report)
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use huckel::prelude::*;
//!
//! let benzene = cycle(6);
//! let levels = analyze(&benzene, &HuckelConfig::default()).unwrap();
//! print!("{}", render_table(&levels, SignConvention::NegativeBeta));
//! ```
//!
//! ## References
//!
//! - Hückel (1931), "Quantentheoretische Beiträge zum Benzolproblem"
//! - Coulson & Rushbrooke (1940), "Note on the method of molecular orbitals"

pub mod error;
pub mod config;
pub mod topology;
pub mod spectral;
pub mod degeneracy;
pub mod loader;
pub mod analysis;
pub mod report;

pub mod prelude {
    pub use crate::analysis::*;
    pub use crate::config::*;
    pub use crate::degeneracy::*;
    pub use crate::error::*;
    pub use crate::loader::*;
    pub use crate::report::*;
    pub use crate::spectral::*;
    pub use crate::topology::*;
}
