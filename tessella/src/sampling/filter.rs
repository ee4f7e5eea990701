//! Importance warps for reconstruction filters.

/// Warps a uniform `u` in `[0, 1)` to an offset distributed by a triangle (tent) filter
/// of total width `extent`, centered on zero.
///
/// Uses the exact inverse CDF, so the result lies in `[-extent / 2, extent / 2)`.
#[inline]
pub fn triangle_filter(u: f32, extent: f32) -> f32 {
    debug_assert!((0.0..1.0).contains(&u), "u = {u} outside [0, 1)");

    let v = if u < 0.5 {
        (2.0 * u).sqrt() - 1.0
    } else {
        1.0 - (2.0 * (1.0 - u)).sqrt()
    };
    debug_assert!((-1.0..1.0).contains(&v), "triangle warp produced {v}");

    let unit = (v + 1.0) * 0.5;
    debug_assert!((0.0..1.0).contains(&unit));

    unit * extent - extent * 0.5
}
