use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

fn assert_unit(p: Point) {
    assert!((0.0..1.0).contains(&p.x), "x = {} outside [0, 1)", p.x);
    assert!((0.0..1.0).contains(&p.y), "y = {} outside [0, 1)", p.y);
}

// ============================================================================
// Sequences
// ============================================================================

#[test]
fn test_max_less_than_one() {
    assert!(MAX_LESS_THAN_ONE < 1.0);
    assert_eq!(MAX_LESS_THAN_ONE, f32::from_bits(0x3f7f_ffff));
}

#[test]
fn test_to_unit_uses_top_24_bits() {
    assert_eq!(to_unit_f32(0), 0.0);
    assert_eq!(to_unit_f32(0x8000_0000), 0.5);
    assert_eq!(to_unit_f32(0x0000_00ff), 0.0);
    assert_eq!(to_unit_f32(u32::MAX), MAX_LESS_THAN_ONE);
}

#[test]
fn test_van_der_corput_first_terms() {
    let values: Vec<f32> = (0..4).map(|i| van_der_corput(i, 0)).collect();
    assert_eq!(values, vec![0.0, 0.5, 0.25, 0.75]);
    // A scramble flips the leading bit
    assert_eq!(van_der_corput(0, 0x8000_0000), 0.5);
}

#[test]
fn test_sobol2_first_terms() {
    let values: Vec<f32> = (0..4).map(|i| sobol2(i, 0)).collect();
    assert_eq!(values, vec![0.0, 0.5, 0.75, 0.25]);
}

#[test]
fn test_scrambled_radical_inverses_are_deterministic_and_in_range() {
    for scramble in [0x9e37_79b9u32, 0x85eb_ca6b] {
        let mut vdc_strata = [false; 4096];
        let mut sobol_strata = [false; 4096];
        for i in 0..4096u32 {
            let vdc = van_der_corput(i, scramble);
            let sobol = sobol2(i, scramble);
            assert_eq!(vdc.to_bits(), van_der_corput(i, scramble).to_bits());
            assert_eq!(sobol.to_bits(), sobol2(i, scramble).to_bits());
            assert!((0.0..1.0).contains(&vdc), "van_der_corput({i}) = {vdc}");
            assert!((0.0..1.0).contains(&sobol), "sobol2({i}) = {sobol}");

            // XOR scrambling permutes the strata, so the first 2^12 terms still
            // land in distinct 1/4096 intervals.
            let vdc_cell = (vdc * 4096.0) as usize;
            let sobol_cell = (sobol * 4096.0) as usize;
            assert!(!vdc_strata[vdc_cell], "vdc({i}) reused a stratum");
            assert!(!sobol_strata[sobol_cell], "sobol2({i}) reused a stratum");
            vdc_strata[vdc_cell] = true;
            sobol_strata[sobol_cell] = true;
        }
    }
    // The top of the index range stays inside [0, 1) as well
    for i in (u32::MAX - 64)..=u32::MAX {
        assert!(van_der_corput(i, 0x9e37_79b9) < 1.0);
        assert!(sobol2(i, 0x85eb_ca6b) < 1.0);
    }
}

#[test]
fn test_sample02_first_points_are_stratified() {
    // The first 2^k points of a (0,2)-sequence put one point in every 2^a x 2^b box.
    let points: Vec<Point> = (0..16).map(|i| sample02(i, 0, 0)).collect();
    let mut seen = [false; 16];
    for p in &points {
        assert_unit(*p);
        let cell = (p.y * 4.0) as usize * 4 + (p.x * 4.0) as usize;
        assert!(!seen[cell], "two points share cell {cell}");
        seen[cell] = true;
    }
}

#[test]
fn test_r_sequence_is_deterministic_and_in_range() {
    for i in 0..10_000u64 {
        let p = r_sequence(i, 0.5);
        assert_eq!(p, r_sequence(i, 0.5));
        assert_unit(p);
    }
    assert_eq!(r_sequence(0, 0.5), Point::new(0.5, 0.5));
}

#[test]
fn test_r_sequence_large_index_stays_in_range() {
    for i in [u32::MAX as u64, u64::MAX / 3, u64::MAX] {
        assert_unit(r_sequence(i, 0.5));
    }
}

#[test]
fn test_r_sequence_covers_the_square() {
    let mut counts = [0usize; 64];
    for i in 0..6400u64 {
        let p = r_sequence(i, 0.5);
        counts[(p.y * 8.0) as usize * 8 + (p.x * 8.0) as usize] += 1;
    }
    for &c in &counts {
        assert!((80..=120).contains(&c), "{counts:?}");
    }
}

#[test]
fn test_fibonacci_lattice_rows_are_evenly_spaced() {
    let total = 89;
    for i in 0..total {
        let p = fibonacci_lattice(i, total);
        assert_unit(p);
        assert_eq!(p.y, (i as f64 / total as f64) as f32);
    }
    assert_eq!(fibonacci_lattice(0, total).x, 0.5);
}

#[test]
fn test_point_sequence_default_is_r_sequence() {
    let sequence = PointSequence::default();
    assert_eq!(sequence, PointSequence::RSequence { seed: 0.5 });
    assert_eq!(sequence.point(7, 100), r_sequence(7, 0.5));
}

#[test]
fn test_point_sequence_dispatch() {
    let sobol = PointSequence::Sobol02 { seed0: 3, seed1: 9 };
    assert_eq!(sobol.point(5, 10), sample02(5, 3, 9));
    let fibonacci = PointSequence::Fibonacci;
    assert_eq!(fibonacci.point(5, 10), fibonacci_lattice(5, 10));
}

// ============================================================================
// Canonical uniform
// ============================================================================

#[test]
fn test_canonical_in_unit_range() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..10_000 {
        let u = canonical(&mut rng);
        assert!((0.0..1.0).contains(&u));
    }
}

// ============================================================================
// Multijitter
// ============================================================================

#[test]
fn test_multijitter_empty_when_dimension_zero() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(multijitter(0, 4, &mut rng).is_empty());
    assert!(multijitter(4, 0, &mut rng).is_empty());
}

#[test]
fn test_multijitter_is_deterministic_for_seed() {
    let a = multijitter(5, 3, &mut StdRng::seed_from_u64(42));
    let b = multijitter(5, 3, &mut StdRng::seed_from_u64(42));
    let c = multijitter(5, 3, &mut StdRng::seed_from_u64(43));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_multijitter_4x4_strata() {
    let mut rng = StdRng::seed_from_u64(7);
    let points = multijitter(4, 4, &mut rng);
    assert_eq!(points.len(), 16);

    let mut fine_x = [0usize; 16];
    let mut fine_y = [0usize; 16];
    let mut cells = [0usize; 16];
    for p in &points {
        assert_unit(*p);
        fine_x[(p.x * 16.0) as usize] += 1;
        fine_y[(p.y * 16.0) as usize] += 1;
        cells[(p.y * 4.0) as usize * 4 + (p.x * 4.0) as usize] += 1;
    }
    assert!(fine_x.iter().all(|&c| c == 1), "x strata {fine_x:?}");
    assert!(fine_y.iter().all(|&c| c == 1), "y strata {fine_y:?}");
    assert!(cells.iter().all(|&c| c == 1), "coarse cells {cells:?}");
}

#[test]
fn test_multijitter_rectangular_strata() {
    let (n, m) = (3, 5);
    for seed in 0..20 {
        let points = multijitter(n, m, &mut StdRng::seed_from_u64(seed));
        let mut fine_x = vec![0usize; n * m];
        let mut fine_y = vec![0usize; n * m];
        for p in &points {
            assert_unit(*p);
            fine_x[(p.x * (n * m) as f32) as usize] += 1;
            fine_y[(p.y * (n * m) as f32) as usize] += 1;
        }
        assert!(fine_x.iter().all(|&c| c == 1), "seed {seed}: {fine_x:?}");
        assert!(fine_y.iter().all(|&c| c == 1), "seed {seed}: {fine_y:?}");
    }
}

// ============================================================================
// Triangle filter
// ============================================================================

#[test]
fn test_triangle_filter_endpoints() {
    assert_eq!(triangle_filter(0.0, 2.0), -1.0);
    assert!(triangle_filter(0.5, 2.0).abs() < 1e-6);
    assert!(triangle_filter(MAX_LESS_THAN_ONE, 2.0) < 1.0);
}

#[test]
fn test_triangle_filter_bounds_and_density() {
    let extent = 1.0;
    let mut rng = StdRng::seed_from_u64(12345);
    let mut bins = [0usize; 10];
    for _ in 0..10_000 {
        let offset = triangle_filter(canonical(&mut rng), extent);
        assert!((-0.5..0.5).contains(&offset), "offset {offset}");
        bins[((offset + 0.5) * 10.0) as usize] += 1;
    }
    // Expected bin masses: 2, 6, 10, 14, 18 percent rising toward the center
    for i in 0..4 {
        assert!(bins[i] < bins[i + 1], "left side rising: {bins:?}");
        assert!(bins[9 - i] < bins[8 - i], "right side falling: {bins:?}");
    }
}

#[test]
fn test_triangle_filter_is_symmetric() {
    for i in 1..100 {
        let u = i as f32 / 200.0;
        let left = triangle_filter(u, 1.0);
        let right = triangle_filter(1.0 - u, 1.0);
        assert!((left + right).abs() < 1e-5, "u = {u}: {left} vs {right}");
    }
}
