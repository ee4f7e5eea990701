use crate::color::Color;
use crate::image::Image;
use crate::sampling::Point;
use crate::tiled::TiledArray2D;

/// Per-pixel color sums and hit counts for scatter-accumulate-normalize reconstruction.
#[derive(Debug, Clone)]
pub struct Accumulator<C> {
    sums: Image<C>,
    counts: TiledArray2D<u32>,
}

impl<C: Color> Accumulator<C> {
    /// Zeroed accumulator for a `width x height` output.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            sums: Image::new(width, height),
            counts: TiledArray2D::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.sums.width()
    }

    pub fn height(&self) -> usize {
        self.sums.height()
    }

    /// Pixel whose cell contains `point`: `floor(p * size)`, clamped to the last row/column.
    #[inline]
    pub fn bucket(&self, point: Point) -> (usize, usize) {
        let x = ((point.x * self.width() as f32) as usize).min(self.width() - 1);
        let y = ((point.y * self.height() as f32) as usize).min(self.height() - 1);
        (x, y)
    }

    /// Adds `value` to the pixel containing `point`.
    #[inline]
    pub fn splat(&mut self, point: Point, value: C) {
        let (x, y) = self.bucket(point);
        self.add(x, y, value);
    }

    #[inline]
    pub fn add(&mut self, x: usize, y: usize, value: C) {
        *self.sums.get_mut(x, y) += value;
        *self.counts.get_mut(x, y) += 1;
    }

    #[inline]
    pub fn count(&self, x: usize, y: usize) -> u32 {
        *self.counts.get(x, y)
    }

    /// Total number of samples added so far.
    pub fn total_count(&self) -> u64 {
        self.counts.iter().map(|(_, _, &c)| c as u64).sum()
    }

    /// Folds another partial accumulator of the same shape into this one.
    pub fn merge(&mut self, other: &Self) {
        assert_eq!(
            (self.width(), self.height()),
            (other.width(), other.height()),
            "Accumulator dimensions must match"
        );
        // Same shape means same layout, so slots line up one to one.
        let sums = self.sums.storage_mut();
        for (dst, &src) in sums.iter_mut().zip(other.sums.storage()) {
            *dst += src;
        }
        let counts = self.counts.storage_mut();
        for (dst, &src) in counts.iter_mut().zip(other.counts.storage()) {
            *dst += src;
        }
    }

    /// Divides every sum by its count. Pixels no sample landed in keep the default value.
    pub fn finalize(self) -> Image<C> {
        let Self { mut sums, counts } = self;
        let mut empty = 0usize;
        for (sum, &count) in sums.storage_mut().iter_mut().zip(counts.storage()) {
            if count > 0 {
                *sum = *sum / count as f32;
            } else {
                // Padding slots also land here; they hold the default already.
                *sum = C::default();
                empty += 1;
            }
        }
        let empty = empty - (sums.capacity() - sums.len());

        if empty > 0 {
            tracing::warn!(
                empty_pixels = empty,
                width = sums.width(),
                height = sums.height(),
                "Reconstruction left pixels without samples"
            );
        } else {
            tracing::debug!(
                width = sums.width(),
                height = sums.height(),
                "Every output pixel received samples"
            );
        }
        sums
    }
}
