//! Pixel lookup strategies used while reconstructing.
//!
//! A [`PixelSampler`] decides what color the reconstructor sees at a sample position.
//! The simple lookups read the source directly; the filtered ones average several
//! bilinear reads around the position, which antialiases when downscaling.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::image::{sample_bilinear, sample_nearest, Image};
use crate::sampling::{multijitter, triangle_filter, Point};

/// Width of the triangle filter in normalized image units.
pub const DEFAULT_TRIANGLE_EXTENT: f32 = 0.05;

/// Offset draws per coordinate before a Gaussian tap falls back to the center.
const MAX_REJECTION_ATTEMPTS: usize = 64;

/// Color lookup at a normalized position `(s, t)` in `[0, 1)`.
///
/// Takes `&mut self` so implementations can advance random state. Randomized lookups
/// borrow a caller-owned rng; seeding it is the caller's decision.
pub trait PixelSampler<C: Color> {
    fn sample(&mut self, image: &Image<C>, s: f32, t: f32) -> C;
}

/// Single bilinear read.
#[derive(Debug, Clone, Copy, Default)]
pub struct BilinearLookup;

impl<C: Color> PixelSampler<C> for BilinearLookup {
    #[inline]
    fn sample(&mut self, image: &Image<C>, s: f32, t: f32) -> C {
        sample_bilinear(image, s, t)
    }
}

/// Single nearest-texel read.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestLookup;

impl<C: Color> PixelSampler<C> for NearestLookup {
    #[inline]
    fn sample(&mut self, image: &Image<C>, s: f32, t: f32) -> C {
        sample_nearest(image, s, t)
    }
}

fn check_extent(extent: f32) -> Result<()> {
    if extent.is_finite() && extent > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidExtent { extent })
    }
}

#[inline]
fn in_unit(s: f32, t: f32) -> bool {
    (0.0..1.0).contains(&s) && (0.0..1.0).contains(&t)
}

/// Averages bilinear reads at normally distributed offsets.
///
/// The offset standard deviation is `3 * extent`. Offsets leaving the image are redrawn;
/// after [`MAX_REJECTION_ATTEMPTS`] misses the tap uses the unjittered coordinate.
pub struct GaussianLookup<'a, R: ?Sized> {
    samples: usize,
    rng: &'a mut R,
    normal: Normal<f32>,
}

impl<'a, R: Rng + ?Sized> GaussianLookup<'a, R> {
    /// # Panics
    ///
    /// Panics if `samples` is zero.
    pub fn new(samples: usize, extent: f32, rng: &'a mut R) -> Result<Self> {
        assert!(samples > 0, "GaussianLookup needs at least one sample");
        check_extent(extent)?;
        let normal = Normal::new(0.0, 3.0 * extent).map_err(|_| Error::InvalidExtent { extent })?;
        Ok(Self {
            samples,
            rng,
            normal,
        })
    }

    fn jitter(&mut self, center: f32) -> f32 {
        for _ in 0..MAX_REJECTION_ATTEMPTS {
            let v = center + self.normal.sample(&mut *self.rng);
            if (0.0..1.0).contains(&v) {
                return v;
            }
        }
        center
    }
}

impl<C: Color, R: Rng + ?Sized> PixelSampler<C> for GaussianLookup<'_, R> {
    fn sample(&mut self, image: &Image<C>, s: f32, t: f32) -> C {
        let mut sum = C::default();
        for _ in 0..self.samples {
            let x = self.jitter(s);
            let y = self.jitter(t);
            sum += sample_bilinear(image, x, y);
        }
        sum / self.samples as f32
    }
}

/// Sums the taps that stay inside the image. Returns the default color when none do.
fn triangle_average<C: Color>(
    image: &Image<C>,
    s: f32,
    t: f32,
    extent: f32,
    points: impl IntoIterator<Item = Point>,
) -> C {
    let mut sum = C::default();
    let mut taken = 0u32;
    for p in points {
        let x = s + triangle_filter(p.x, extent);
        let y = t + triangle_filter(p.y, extent);
        if !in_unit(x, y) {
            continue;
        }
        sum += sample_bilinear(image, x, y);
        taken += 1;
    }
    if taken > 0 {
        sum / taken as f32
    } else {
        sum
    }
}

/// Triangle-filtered lookup with a fresh `n x n` multijittered set per call.
pub struct TriangleLookup<'a, R: ?Sized> {
    points_per_axis: usize,
    extent: f32,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> TriangleLookup<'a, R> {
    pub fn new(points_per_axis: usize, extent: f32, rng: &'a mut R) -> Result<Self> {
        check_extent(extent)?;
        Ok(Self {
            points_per_axis,
            extent,
            rng,
        })
    }

    pub fn points_per_axis(&self) -> usize {
        self.points_per_axis
    }
}

impl<C: Color, R: Rng + ?Sized> PixelSampler<C> for TriangleLookup<'_, R> {
    fn sample(&mut self, image: &Image<C>, s: f32, t: f32) -> C {
        let n = self.points_per_axis;
        let points = multijitter(n, n, &mut *self.rng);
        triangle_average(image, s, t, self.extent, points)
    }
}

/// Triangle-filtered lookup that reads consecutive points from one pregenerated pool.
///
/// Each call consumes `samples_per_lookup` points. When the cursor reaches the end of the
/// pool it wraps to the start.
#[derive(Debug, Clone)]
pub struct SharedTriangleLookup {
    samples_per_lookup: usize,
    extent: f32,
    pool: Vec<Point>,
    cursor: usize,
}

impl SharedTriangleLookup {
    /// # Panics
    ///
    /// Panics if `pool` is empty.
    pub fn new(samples_per_lookup: usize, extent: f32, pool: Vec<Point>) -> Result<Self> {
        assert!(
            !pool.is_empty(),
            "SharedTriangleLookup needs a non-empty point pool"
        );
        check_extent(extent)?;
        Ok(Self {
            samples_per_lookup,
            extent,
            pool,
            cursor: 0,
        })
    }

    /// Index of the next pool point to be consumed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    fn next_point(&mut self) -> Point {
        let p = self.pool[self.cursor];
        self.cursor += 1;
        if self.cursor == self.pool.len() {
            tracing::trace!(pool = self.pool.len(), "Shared triangle pool wrapped");
            self.cursor = 0;
        }
        p
    }
}

impl<C: Color> PixelSampler<C> for SharedTriangleLookup {
    fn sample(&mut self, image: &Image<C>, s: f32, t: f32) -> C {
        let extent = self.extent;
        let count = self.samples_per_lookup;
        triangle_average(image, s, t, extent, (0..count).map(|_| self.next_point()))
    }
}
