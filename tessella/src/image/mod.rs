//! Point sampling and direct resizing of tiled images.
//!
//! Sample positions are normalized `(s, t)` in `[0, 1)`. Texel `(i, j)` of a `w x h`
//! image sits at `(i / w, j / h)`: the corner convention. A destination pixel `(x, y)`
//! is therefore sampled at `(x / w_dst, y / h_dst)`, and a sample at `(s, t)` lands in
//! the bucket `(floor(s * w), floor(t * h))`.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::color::{lerp, Color};
use crate::sampling::MAX_LESS_THAN_ONE;
use crate::tiled::TiledArray2D;

/// An image is a tiled array of pixel values.
pub type Image<C> = TiledArray2D<C>;

/// Lookup used by [`resize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResizeFilter {
    /// Nearest texel, rounding to the closest grid point.
    Nearest,
    /// 4-tap bilinear blend, clamped at the last row and column.
    #[default]
    Bilinear,
}

#[inline]
fn debug_assert_unit(s: f32, t: f32) {
    debug_assert!((0.0..1.0).contains(&s), "s = {s} outside [0, 1)");
    debug_assert!((0.0..1.0).contains(&t), "t = {t} outside [0, 1)");
}

/// Nearest texel to `(s, t)`, clamped to the image.
#[inline]
pub fn sample_nearest<C: Color>(image: &Image<C>, s: f32, t: f32) -> C {
    debug_assert_unit(s, t);
    let x = ((s * image.width() as f32).round() as usize).min(image.width() - 1);
    let y = ((t * image.height() as f32).round() as usize).min(image.height() - 1);
    *image.get(x, y)
}

/// Bilinear interpolation at `(s, t)`.
///
/// The four taps are `(x0, y0)`, `(x0 + 1, y0)`, `(x0, y0 + 1)`, `(x0 + 1, y0 + 1)` with
/// `x0 = floor(s * w)`. Taps past the last column or row are clamped to it.
#[inline]
pub fn sample_bilinear<C: Color>(image: &Image<C>, s: f32, t: f32) -> C {
    debug_assert_unit(s, t);
    let max_x = image.width() - 1;
    let max_y = image.height() - 1;

    let u = s * image.width() as f32;
    let v = t * image.height() as f32;
    let u_floor = u.floor();
    let v_floor = v.floor();
    let fx = u - u_floor;
    let fy = v - v_floor;

    let x0 = (u_floor as usize).min(max_x);
    let y0 = (v_floor as usize).min(max_y);
    let x1 = (x0 + 1).min(max_x);
    let y1 = (y0 + 1).min(max_y);

    let top = lerp(*image.get(x0, y0), *image.get(x1, y0), fx);
    let bottom = lerp(*image.get(x0, y1), *image.get(x1, y1), fx);
    lerp(top, bottom, fy)
}

/// Resamples `image` to `width x height` with one lookup per destination pixel.
///
/// # Panics
///
/// Panics if `width` or `height` is zero.
pub fn resize<C: Color>(
    image: &Image<C>,
    width: usize,
    height: usize,
    filter: ResizeFilter,
) -> Image<C> {
    tracing::debug!(
        src_width = image.width(),
        src_height = image.height(),
        width,
        height,
        ?filter,
        "Resizing image"
    );
    Image::from_fn(width, height, |x, y| {
        let s = (x as f32 / width as f32).min(MAX_LESS_THAN_ONE);
        let t = (y as f32 / height as f32).min(MAX_LESS_THAN_ONE);
        match filter {
            ResizeFilter::Nearest => sample_nearest(image, s, t),
            ResizeFilter::Bilinear => sample_bilinear(image, s, t),
        }
    })
}
