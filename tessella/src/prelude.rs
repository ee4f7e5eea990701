//! Common imports.
//!
//! ```rust,ignore
//! use tessella::prelude::*;
//! ```

pub use crate::{AllocPolicy, Color, Error, Image, TiledArray2D};

pub use crate::{resize, sample_bilinear, sample_nearest, ResizeFilter};

pub use crate::{
    reconstruct, suggested_sample_count, BilinearLookup, GaussianLookup, NearestLookup,
    PixelSampler, PointSequence, ReconstructConfig, SharedTriangleLookup, TriangleLookup,
    DEFAULT_TRIANGLE_EXTENT,
};
