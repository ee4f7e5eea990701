//! The value bound for pixels that flow through sampling and reconstruction.

use std::ops::{Add, AddAssign, Div, Mul};

/// Pixel value accepted by the sampling and reconstruction code.
///
/// Only the operations reconstruction needs: accumulate with `+`, weight with `* f32`,
/// normalise with `/ f32`, and `Default` as the additive identity ("black"). Blanket
/// implemented, so `f32`, `glam::Vec3` and `glam::Vec4` all qualify.
pub trait Color:
    Copy
    + Default
    + Add<Output = Self>
    + AddAssign
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
{
}

impl<T> Color for T where
    T: Copy
        + Default
        + Add<Output = T>
        + AddAssign
        + Mul<f32, Output = T>
        + Div<f32, Output = T>
{
}

/// `a` at `t = 0`, `b` at `t = 1`.
#[inline]
pub fn lerp<C: Color>(a: C, b: C, t: f32) -> C {
    a * (1.0 - t) + b * t
}
