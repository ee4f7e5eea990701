//! Monte Carlo image reconstruction.
//!
//! Resamples an image to a new resolution by scattering sample positions over the output,
//! looking up the source color at each position through a [`PixelSampler`], and averaging
//! the colors that land in each output pixel.
//!
//! # Pipeline
//!
//! 1. Point `i` of the configured [`PointSequence`](crate::sampling::PointSequence) gives a
//!    position `p` in `[0, 1)^2`.
//! 2. `p` falls into output pixel `(floor(p.x * w), floor(p.y * h))`.
//! 3. The sampler reads the source around `p`; the color is added to that pixel.
//! 4. Each pixel is divided by its hit count. Pixels nothing landed in stay at the
//!    default color; low sample counts make that visible and it is logged, not patched.
//!
//! The bucket always comes from the unjittered position, so filtered samplers blur the
//! lookup but never move a sample to a neighboring output pixel.

mod accumulator;
mod config;
pub mod sampler;


pub use accumulator::Accumulator;
pub use config::{suggested_sample_count, ReconstructConfig};
pub use sampler::{
    BilinearLookup, GaussianLookup, NearestLookup, PixelSampler, SharedTriangleLookup,
    TriangleLookup, DEFAULT_TRIANGLE_EXTENT,
};

use crate::color::Color;
use crate::image::Image;

/// Reconstructs `image` at `config.width x config.height`.
///
/// # Panics
///
/// Panics if the configured output shape is empty.
pub fn reconstruct<C, S>(
    config: &ReconstructConfig,
    image: &Image<C>,
    sampler: &mut S,
) -> Image<C>
where
    C: Color,
    S: PixelSampler<C> + ?Sized,
{
    config.validate();
    tracing::info!(
        src_width = image.width(),
        src_height = image.height(),
        width = config.width,
        height = config.height,
        samples = config.samples,
        samples_per_pixel = config.samples_per_pixel(),
        sequence = ?config.sequence,
        "Reconstructing image"
    );

    let mut accumulator = Accumulator::new(config.width, config.height);
    for i in 0..config.samples {
        let p = config.sequence.point(i, config.samples);
        let value = sampler.sample(image, p.x, p.y);
        accumulator.splat(p, value);
    }
    accumulator.finalize()
}
