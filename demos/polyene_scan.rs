//! Polyene scan: level structure of chains and rings by size.
//!
//! Run with:
//!   cargo run --example polyene_scan

use huckel::prelude::*;

fn main() {
    let sizes: Vec<usize> = (2..=12).collect();
    let config = HuckelConfig::default();

    println!("{:<8} {:>6} {:>8} {:>10} {:>10}", "Kind", "N", "Levels", "Lowest", "Highest");
    println!("{:-<46}", "");

    for kind in [TopologyKind::Linear, TopologyKind::Cyclic] {
        for r in scan(kind, &sizes, &config) {
            match r.levels {
                Ok(levels) => {
                    let lowest = levels.first().map(|l| l.energy).unwrap_or(f64::NAN);
                    let highest = levels.last().map(|l| l.energy).unwrap_or(f64::NAN);
                    println!(
                        "{:<8} {:>6} {:>8} {:>10.4} {:>10.4}",
                        r.kind, r.n_atoms, levels.len(), lowest, highest
                    );
                }
                Err(e) => println!("{:<8} {:>6}  skipped: {}", r.kind, r.n_atoms, e),
            }
        }
        println!("{:-<46}", "");
    }
}
