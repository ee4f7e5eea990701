use std::collections::TryReserveError;

use thiserror::Error;

/// Errors from the fallible construction paths.
///
/// Precondition violations on the infallible paths (zero dimensions, out-of-range
/// coordinates) panic instead; these variants exist for callers that asked for
/// [`AllocPolicy::Fallible`](crate::AllocPolicy::Fallible).
#[derive(Debug, Error)]
pub enum Error {
    #[error("Array dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("Tiled storage for {width}x{height} overflows usize")]
    CapacityOverflow { width: usize, height: usize },

    #[error("Failed to allocate {slots} slots: {source}")]
    Allocation {
        slots: usize,
        source: TryReserveError,
    },

    #[error("Filter extent must be finite and positive, got {extent}")]
    InvalidExtent { extent: f32 },
}

pub type Result<T> = std::result::Result<T, Error>;
