//! End-to-end: topology → spectrum → levels → table.

use std::path::PathBuf;

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use huckel::prelude::*;

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn shape(levels: &[EnergyLevel]) -> Vec<usize> {
    levels.iter().map(|l| l.degeneracy).collect()
}

/// Erdős–Rényi graph with a fixed seed, as a 0/1 adjacency matrix.
fn random_graph(rng: &mut StdRng, n: usize, density: f64) -> AdjacencyMatrix {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen::<f64>() < density {
                edges.push((i, j));
            }
        }
    }
    from_edges(n, &edges)
}

#[test]
fn benzene_levels() {
    let eigenvalues = solve(&cycle(6)).unwrap();
    let levels = classify(&eigenvalues, DEFAULT_TOLERANCE).unwrap();
    assert_eq!(shape(&levels), vec![1, 2, 2, 1]);
    for (level, expected) in levels.iter().zip([-2.0, -1.0, 1.0, 2.0]) {
        assert_abs_diff_eq!(level.energy, expected, epsilon = 1e-9);
    }
    assert_eq!(total_degeneracy(&levels), 6);
}

#[test]
fn butadiene_levels() {
    let levels = classify(&solve(&linear_chain(4)).unwrap(), DEFAULT_TOLERANCE).unwrap();
    assert_eq!(shape(&levels), vec![1, 1, 1, 1]);
    // ±1.618, ±0.618 in units of |β|
    let golden = (1.0 + 5.0_f64.sqrt()) / 2.0;
    assert_abs_diff_eq!(levels[0].energy, -golden, epsilon = 1e-9);
    assert_abs_diff_eq!(levels[1].energy, -(golden - 1.0), epsilon = 1e-9);
}

#[test]
fn degeneracies_sum_to_dimension_for_polyenes() {
    let config = HuckelConfig::default();
    for n in 1..=20 {
        let levels = analyze(&linear_chain(n), &config).unwrap();
        assert_eq!(total_degeneracy(&levels), n, "chain {}", n);
    }
    for n in 3..=20 {
        let levels = analyze(&cycle(n), &config).unwrap();
        assert_eq!(total_degeneracy(&levels), n, "ring {}", n);
    }
}

#[test]
fn degeneracies_sum_to_dimension_for_random_graphs() {
    let mut rng = StdRng::seed_from_u64(42);
    for config in [HuckelConfig::default(), HuckelConfig::strict()] {
        for _ in 0..25 {
            let n = rng.gen_range(1..=16);
            let m = random_graph(&mut rng, n, 0.3);
            let levels = analyze(&m, &config).unwrap();
            assert_eq!(total_degeneracy(&levels), n);
            assert!(levels.windows(2).all(|w| w[0].energy < w[1].energy));
        }
    }
}

#[test]
fn rings_pair_up_except_extremes() {
    // Even rings: ±2 single, everything else doubly degenerate.
    let levels = analyze(&cycle(8), &HuckelConfig::default()).unwrap();
    assert_eq!(shape(&levels), vec![1, 2, 2, 2, 1]);
    // Odd rings: lowest level single, the rest doubly degenerate.
    let levels = analyze(&cycle(7), &HuckelConfig::default()).unwrap();
    assert_eq!(shape(&levels), vec![1, 2, 2, 2]);
}

#[test]
fn bundled_tetrahedron() {
    let m = load_topology(data_file("tetrahedron.txt")).unwrap();
    assert_eq!(edge_count(&m), 6);
    let levels = analyze(&m, &HuckelConfig::strict()).unwrap();
    assert_eq!(shape(&levels), vec![1, 3]);
    assert_abs_diff_eq!(levels[0].energy, -3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(levels[1].energy, 1.0, epsilon = 1e-9);
}

#[test]
fn bundled_cube() {
    let m = load_topology(data_file("cube.txt")).unwrap();
    assert_eq!(edge_count(&m), 12);
    let levels = analyze(&m, &HuckelConfig::default()).unwrap();
    assert_eq!(shape(&levels), vec![1, 3, 3, 1]);
    for (level, expected) in levels.iter().zip([-3.0, -1.0, 1.0, 3.0]) {
        assert_abs_diff_eq!(level.energy, expected, epsilon = 1e-9);
    }
}

#[test]
fn bundled_octahedron_resolves_without_extension() {
    let path = resolve_topology_path(data_file("octahedron")).unwrap();
    assert!(path.ends_with("octahedron.txt"));
    let levels = analyze(&load_topology(path).unwrap(), &HuckelConfig::default()).unwrap();
    assert_eq!(shape(&levels), vec![1, 3, 2]);
    assert_abs_diff_eq!(levels[0].energy, -4.0, epsilon = 1e-9);
}

#[test]
fn bundled_icosahedron() {
    let m = load_topology(data_file("icosahedron.txt")).unwrap();
    assert_eq!(m.nrows(), 12);
    assert_eq!(edge_count(&m), 30);
    let levels = analyze(&m, &HuckelConfig::strict()).unwrap();
    assert_eq!(shape(&levels), vec![1, 3, 5, 3]);
    let root5 = 5.0_f64.sqrt();
    for (level, expected) in levels.iter().zip([-5.0, -root5, 1.0, root5]) {
        assert_abs_diff_eq!(level.energy, expected, epsilon = 1e-9);
    }
}

#[test]
fn bundled_dodecahedron() {
    let m = load_topology(data_file("dodecahedron.txt")).unwrap();
    assert_eq!(m.nrows(), 20);
    assert_eq!(edge_count(&m), 30);
    let levels = analyze(&m, &HuckelConfig::default()).unwrap();
    assert_eq!(shape(&levels), vec![1, 3, 5, 4, 4, 3]);
    let root5 = 5.0_f64.sqrt();
    for (level, expected) in levels.iter().zip([-3.0, -root5, -1.0, 0.0, 2.0, root5]) {
        assert_abs_diff_eq!(level.energy, expected, epsilon = 1e-9);
    }
}

#[test]
fn bundled_buckminsterfullerene() {
    let m = load_topology(data_file("c60.txt")).unwrap();
    assert_eq!(m.nrows(), 60);
    assert_eq!(edge_count(&m), 90);
    assert!(validate(&m).is_ok());
    let levels = analyze(&m, &HuckelConfig::default()).unwrap();
    assert_eq!(levels.len(), 15);
    assert_eq!(total_degeneracy(&levels), 60);
    assert_eq!(
        shape(&levels),
        vec![1, 3, 5, 3, 4, 9, 5, 3, 3, 5, 3, 5, 4, 4, 3]
    );
    assert_abs_diff_eq!(levels[0].energy, -3.0, epsilon = 1e-9);
    // Accidental ninefold level at x = 1 (h_g and g_g coincide).
    assert_abs_diff_eq!(levels[5].energy, -1.0, epsilon = 1e-9);
}

#[test]
fn benzene_table() {
    let levels = analyze(&build_topology("cyclic", Some("6")).unwrap(), &HuckelConfig::default())
        .unwrap();
    let table = render_table(&levels, SignConvention::NegativeBeta);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines[0], "Energy     Degeneracy");
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("α+2.000β"));
    assert!(lines[2].starts_with("α+1.000β"));
    assert!(lines[3].starts_with("α-1.000β"));
    assert!(lines[4].starts_with("α-2.000β"));
    assert!(lines[2].trim_end().ends_with('2'));
}

#[test]
fn batch_matches_individual_runs() {
    let config = HuckelConfig::default();
    let matrices: Vec<AdjacencyMatrix> = (3..12).map(cycle).collect();
    let batch = analyze_batch(&matrices, &config);
    for (m, result) in matrices.iter().zip(batch) {
        assert_eq!(result.unwrap(), analyze(m, &config).unwrap());
    }
}
