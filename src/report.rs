//! Console table of energy levels.
//!
//! Energies are written as `α+xβ` with x to three decimals. Rows follow
//! the level order, lowest energy first.

use crate::config::SignConvention;
use crate::degeneracy::EnergyLevel;

/// Width of the energy column.
const ENERGY_WIDTH: usize = 10;
/// Width of the centred degeneracy column.
const DEGENERACY_WIDTH: usize = 10;

/// x in E = α + xβ for `level`.
pub fn beta_coefficient(level: &EnergyLevel, sign: SignConvention) -> f64 {
    let x = sign.beta_coefficient(level.energy);
    // Anything that prints as ±0.000 is a non-bonding level; show it as +0.000.
    if (x * 1000.0).round() == 0.0 {
        0.0
    } else {
        x
    }
}

/// Header line of the table.
pub fn header() -> String {
    format!("{:<width$} Degeneracy", "Energy", width = ENERGY_WIDTH)
}

/// One table row.
pub fn format_row(level: &EnergyLevel, sign: SignConvention) -> String {
    let energy = format!("α{:+.3}β", beta_coefficient(level, sign));
    format!(
        "{:<ew$} {:^dw$}",
        energy,
        level.degeneracy,
        ew = ENERGY_WIDTH,
        dw = DEGENERACY_WIDTH
    )
}

/// Full table: header followed by one row per level.
pub fn render_table(levels: &[EnergyLevel], sign: SignConvention) -> String {
    let mut out = header();
    out.push('\n');
    for level in levels {
        out.push_str(format_row(level, sign).trim_end());
        out.push('\n');
    }
    out
}
