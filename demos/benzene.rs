//! Benzene: the textbook degenerate Hückel spectrum.
//!
//! Run with:
//!   cargo run --example benzene

use huckel::prelude::*;

fn main() -> Result<()> {
    let config = HuckelConfig::default();
    let benzene = cycle(6);

    let eigenvalues = solve(&benzene)?;
    println!("Eigenvalues of H = -A (units of |β|): {:?}", eigenvalues);
    println!();

    let levels = classify(&eigenvalues, config.tolerance)?;
    print!("{}", render_table(&levels, config.sign));
    println!();
    println!(
        "{} levels, {} orbitals",
        levels.len(),
        total_degeneracy(&levels)
    );
    Ok(())
}
