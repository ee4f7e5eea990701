//! Deterministic low-discrepancy sequences.
//!
//! All functions are pure: the same inputs always produce the same point.

use serde::{Deserialize, Serialize};

use super::{clamp_unit, Point};

/// Plastic number, the unique real root of `x^3 = x + 1`.
const PLASTIC: f64 = 1.324_717_957_244_746_025_96;
const GOLDEN_RATIO: f64 = 1.618_033_988_749_894_848_2;

/// Interprets the top 24 bits of `bits` as a fixed-point fraction.
#[inline]
pub fn to_unit_f32(bits: u32) -> f32 {
    (bits >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
}

/// Radical inverse in base 2, scrambled by XOR.
#[inline]
pub fn van_der_corput(index: u32, scramble: u32) -> f32 {
    to_unit_f32(index.reverse_bits() ^ scramble)
}

/// Second dimension of the Sobol (0,2)-sequence.
#[inline]
pub fn sobol2(mut index: u32, seed: u32) -> f32 {
    let mut result = seed;
    let mut v = 1u32 << 31;
    while index != 0 {
        if index & 1 != 0 {
            result ^= v;
        }
        index >>= 1;
        v ^= v >> 1;
    }
    to_unit_f32(result)
}

/// Point `index` of the scrambled (0,2)-sequence.
#[inline]
pub fn sample02(index: u32, seed0: u32, seed1: u32) -> Point {
    Point::new(van_der_corput(index, seed0), sobol2(index, seed1))
}

/// Point `index` of the R2 sequence, offset by `seed`.
///
/// Evaluated in `f64` so large indices keep their precision before narrowing.
pub fn r_sequence(index: u64, seed: f64) -> Point {
    let a1 = 1.0 / PLASTIC;
    let a2 = 1.0 / (PLASTIC * PLASTIC);
    let n = index as f64;
    Point::new(frac_unit(seed + n * a1), frac_unit(seed + n * a2))
}

/// Point `index` of a `total`-point Fibonacci lattice.
pub fn fibonacci_lattice(index: u64, total: u64) -> Point {
    debug_assert!(
        index < total,
        "index {index} outside lattice of {total} points"
    );
    let n = index as f64;
    Point::new(
        frac_unit(0.5 + n * GOLDEN_RATIO),
        clamp_unit((n / total as f64) as f32),
    )
}

#[inline]
fn frac_unit(x: f64) -> f32 {
    clamp_unit((x - x.floor()) as f32)
}

/// Point generator used by the reconstructor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointSequence {
    /// [`r_sequence`] with the given offset.
    RSequence { seed: f64 },
    /// [`sample02`]. Indices are truncated to 32 bits.
    Sobol02 { seed0: u32, seed1: u32 },
    /// [`fibonacci_lattice`] sized to the sample count.
    Fibonacci,
}

impl Default for PointSequence {
    fn default() -> Self {
        Self::RSequence { seed: 0.5 }
    }
}

impl PointSequence {
    /// Point `index` out of `total`.
    pub fn point(&self, index: u64, total: u64) -> Point {
        match *self {
            Self::RSequence { seed } => r_sequence(index, seed),
            Self::Sobol02 { seed0, seed1 } => sample02(index as u32, seed0, seed1),
            Self::Fibonacci => fibonacci_lattice(index, total),
        }
    }
}
