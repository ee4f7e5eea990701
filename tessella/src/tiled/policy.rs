use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How a [`TiledArray2D`](super::TiledArray2D) obtains its backing storage.
///
/// The policy is chosen explicitly at construction and travels with the array: clones
/// keep it, assignment adopts the source's policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AllocPolicy {
    /// Allocate like `Vec`: failure aborts the process.
    #[default]
    Infallible,
    /// Reserve with `try_reserve_exact` and report failure as [`Error::Allocation`].
    Fallible,
}

/// Outcome of [`plan_assignment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignPlan {
    /// Copy element-wise into the existing buffer.
    Reuse,
    /// Release the existing buffer and allocate a new one under the source's policy.
    Reallocate,
}

/// Decides whether assigning one array into another may keep the destination buffer.
///
/// Storage is only reused when both the shape and the policy are unchanged.
pub fn plan_assignment(shape_changed: bool, policy_changed: bool) -> AssignPlan {
    if shape_changed || policy_changed {
        AssignPlan::Reallocate
    } else {
        AssignPlan::Reuse
    }
}

impl AllocPolicy {
    /// Empty vector able to hold `slots` elements without reallocating.
    pub(crate) fn allocate<T>(self, slots: usize) -> Result<Vec<T>> {
        match self {
            AllocPolicy::Infallible => Ok(Vec::with_capacity(slots)),
            AllocPolicy::Fallible => {
                let mut data = Vec::new();
                data.try_reserve_exact(slots)
                    .map_err(|source| Error::Allocation { slots, source })?;
                Ok(data)
            }
        }
    }
}
