//! Tessella - tiled image storage and Monte Carlo image reconstruction.
//!
//! - [`TiledArray2D`]: a fixed-shape 2D container laid out as square tiles with
//!   Morton-ordered cells inside each tile, so 2D neighbors stay close in memory.
//! - Low-discrepancy and stratified point generators in [`sampling`].
//! - [`reconstruct`](reconstruct::reconstruct): resamples an image by scattering sample
//!   positions over the output and averaging filtered lookups per output pixel.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tessella::prelude::*;
//!
//! let source = Image::from_fn(64, 64, |x, y| ((x ^ y) & 1) as f32);
//! let config = ReconstructConfig::new(96, 96, suggested_sample_count(96, 96) as u64);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut lookup = TriangleLookup::new(2, DEFAULT_TRIANGLE_EXTENT, &mut rng)?;
//! let output = reconstruct(&config, &source, &mut lookup);
//! ```

mod color;
mod error;
pub mod image;
pub mod reconstruct;
pub mod sampling;
pub mod tiled;

pub mod prelude;

// ============================================================================
// Storage
// ============================================================================

pub use error::{Error, Result};
pub use tiled::{
    plan_assignment, AllocPolicy, AssignPlan, TileCoord, TileLayout, TiledArray2D, DEFAULT_LOG_TILE,
};

// ============================================================================
// Images
// ============================================================================

pub use color::{lerp, Color};
pub use image::{resize, sample_bilinear, sample_nearest, Image, ResizeFilter};

// ============================================================================
// Sampling
// ============================================================================

pub use sampling::{canonical, multijitter, triangle_filter, Point, PointSequence};

// ============================================================================
// Reconstruction
// ============================================================================

pub use reconstruct::{
    reconstruct, suggested_sample_count, Accumulator, BilinearLookup, GaussianLookup, NearestLookup,
    PixelSampler, ReconstructConfig, SharedTriangleLookup, TriangleLookup, DEFAULT_TRIANGLE_EXTENT,
};
