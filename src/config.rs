//! Analysis parameters.
//!
//! Every knob that earlier drafts of the tool hardcoded lives here:
//! the degeneracy tolerance, the sign of the resonance integral, which
//! dense eigenvalue routine to use, and whether adjacency matrices are
//! validated before solving.

/// Default degeneracy tolerance.
///
/// Large enough to absorb rounding in an O(n³) dense decomposition of a
/// 0/1 matrix, small enough to keep physically distinct levels apart for
/// molecules of a few hundred atoms.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Sign of the resonance integral β used to build the Hamiltonian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignConvention {
    /// H = −A. Energies come out in units of |β| with β < 0, so the most
    /// bonding orbital has the lowest eigenvalue.
    #[default]
    NegativeBeta,
    /// H = +A. Eigenvalues are the β coefficients directly.
    PositiveBeta,
}

impl SignConvention {
    /// Factor applied to the adjacency matrix to form the Hamiltonian.
    pub fn hamiltonian_factor(self) -> f64 {
        match self {
            SignConvention::NegativeBeta => -1.0,
            SignConvention::PositiveBeta => 1.0,
        }
    }

    /// Map a Hamiltonian eigenvalue to x in E = α + xβ.
    pub fn beta_coefficient(self, energy: f64) -> f64 {
        energy * self.hamiltonian_factor()
    }
}

/// Dense eigenvalue routine used by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EigenRoutine {
    /// Symmetric decomposition when H is symmetric, otherwise bounded real
    /// Schur decomposition with imaginary parts discarded.
    #[default]
    General,
    /// Symmetric eigendecomposition. Only reads the lower triangle, so
    /// non-symmetric input gives the spectrum of a different matrix.
    Symmetric,
}

/// Configuration for a Hückel analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct HuckelConfig {
    /// Neighbour distance below which eigenvalues are grouped.
    pub tolerance: f64,
    /// Sign of β in the Hamiltonian.
    pub sign: SignConvention,
    /// Eigenvalue routine.
    pub routine: EigenRoutine,
    /// Reject non-symmetric / non-0-1 adjacency matrices before solving.
    pub validate: bool,
}

impl HuckelConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_sign(mut self, sign: SignConvention) -> Self {
        self.sign = sign;
        self
    }

    pub fn with_routine(mut self, routine: EigenRoutine) -> Self {
        self.routine = routine;
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Validated input, symmetric solver.
    pub fn strict() -> Self {
        Self::default()
            .with_validation(true)
            .with_routine(EigenRoutine::Symmetric)
    }
}

impl Default for HuckelConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            sign: SignConvention::NegativeBeta,
            routine: EigenRoutine::General,
            validate: false,
        }
    }
}
