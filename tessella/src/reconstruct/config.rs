use serde::{Deserialize, Serialize};

use crate::sampling::PointSequence;

/// Configuration for [`reconstruct`](super::reconstruct).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReconstructConfig {
    /// Output width in pixels.
    pub width: usize,
    /// Output height in pixels.
    pub height: usize,
    /// Total number of samples scattered over the output, not per pixel.
    /// Zero is valid and produces an all-default image.
    pub samples: u64,
    /// Generator for sample positions.
    #[serde(default)]
    pub sequence: PointSequence,
}

impl ReconstructConfig {
    pub fn new(width: usize, height: usize, samples: u64) -> Self {
        Self {
            width,
            height,
            samples,
            sequence: PointSequence::default(),
        }
    }

    /// Set the point generator.
    pub fn with_sequence(mut self, sequence: PointSequence) -> Self {
        self.sequence = sequence;
        self
    }

    /// Average number of samples landing in each output pixel.
    pub fn samples_per_pixel(&self) -> f64 {
        self.samples as f64 / (self.width * self.height) as f64
    }

    /// Panics if the output shape is empty.
    pub fn validate(&self) {
        assert!(
            self.width > 0 && self.height > 0,
            "output dimensions must be non-zero, got {}x{}",
            self.width,
            self.height
        );
    }
}

/// Size of the shared filter pool for a `width x height` output: `(2 * max(w, h))^2`.
pub fn suggested_sample_count(width: usize, height: usize) -> usize {
    let side = 2 * width.max(height);
    side * side
}
