//! Point generators for Monte Carlo reconstruction.
//!
//! Every generator produces coordinates in `[0, 1) x [0, 1)`. Strictly below one is a
//! hard guarantee: values that would round up are clamped to [`MAX_LESS_THAN_ONE`].
//!
//! - [`sequence`]: deterministic low-discrepancy sequences (van der Corput, Sobol,
//!   R2, Fibonacci lattice).
//! - [`multijitter`]: stratified point sets drawn from a caller-owned rng.
//! - [`filter`]: importance warps turning uniform numbers into filter offsets.

pub mod filter;
pub mod multijitter;
pub mod sequence;

#[cfg(test)]
mod tests;

use rand::Rng;

pub use filter::triangle_filter;
pub use multijitter::multijitter;
pub use sequence::{
    fibonacci_lattice, r_sequence, sample02, sobol2, to_unit_f32, van_der_corput, PointSequence,
};

/// A sample position in normalized image coordinates.
pub type Point = glam::Vec2;

/// Largest `f32` strictly below one (`0x1.fffffep-1`).
pub const MAX_LESS_THAN_ONE: f32 = 1.0 - f32::EPSILON / 2.0;

/// Uniform `f32` in `[0, 1)` from `rng`.
///
/// The redraw loop never runs with rand's float sampling; it keeps the half-open range
/// a property of this function rather than of the rng backend.
#[inline]
pub fn canonical<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    loop {
        let u: f32 = rng.random();
        if u < 1.0 {
            return u;
        }
    }
}

#[inline]
pub(crate) fn clamp_unit(value: f32) -> f32 {
    value.min(MAX_LESS_THAN_ONE)
}
