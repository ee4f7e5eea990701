//! Tile-major 2D storage with Morton ordering inside each tile.
//!
//! A row-major buffer keeps horizontal neighbours adjacent but puts vertical neighbours a
//! full row apart. [`TiledArray2D`] instead stores square tiles contiguously and walks
//! each tile in Z-order, so any small 2D neighbourhood (a bilinear footprint, a filter
//! window) touches only a few cache lines.

mod layout;
pub mod morton;
mod policy;


use std::ops::{Index, IndexMut};
use std::slice::ChunksExactMut;

pub use layout::{TileCoord, TileLayout, MAX_LOG_TILE};
pub use policy::{plan_assignment, AllocPolicy, AssignPlan};

use crate::error::{Error, Result};

/// Default `log2` tile edge: 16x16 tiles.
pub const DEFAULT_LOG_TILE: u32 = 4;

/// Fixed-shape 2D container stored as `2^LOG_TILE`-sided tiles.
///
/// The backing buffer is padded up to whole tiles in each dimension. Padding slots hold
/// constructed values (the fill value or `T::default()`) but are never reachable through
/// coordinate accessors.
///
/// # Concurrency
///
/// The array has no internal synchronization.
/// - Shared references may be read from any number of threads (`Sync` when `T: Sync`).
/// - Concurrent writes are only sound to disjoint cells; [`tiles_mut`](Self::tiles_mut)
///   hands out one non-overlapping slice per tile for that purpose.
/// - Reallocating assignment, [`take`](Self::take), [`swap`](Self::swap) and drop need
///   exclusive access, which `&mut self` and ownership already enforce.
#[derive(Debug)]
pub struct TiledArray2D<T, const LOG_TILE: u32 = 4> {
    data: Vec<T>,
    layout: TileLayout,
    policy: AllocPolicy,
}

impl<T, const LOG_TILE: u32> TiledArray2D<T, LOG_TILE> {
    fn assert_shape(width: usize, height: usize) {
        assert!(
            width > 0 && height > 0,
            "TiledArray2D dimensions must be non-zero, got {width}x{height}"
        );
    }

    fn checked_layout(width: usize, height: usize) -> Result<TileLayout> {
        if width == 0 || height == 0 {
            return Err(Error::ZeroDimension { width, height });
        }
        let layout = TileLayout::new(width, height, LOG_TILE);
        layout
            .checked_capacity()
            .ok_or(Error::CapacityOverflow { width, height })?;
        Ok(layout)
    }

    fn from_storage(layout: TileLayout, policy: AllocPolicy, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), layout.capacity());
        tracing::debug!(
            width = layout.width(),
            height = layout.height(),
            slots = data.len(),
            tiles_x = layout.tiles_x(),
            tiles_y = layout.tiles_y(),
            ?policy,
            "Allocated tiled storage"
        );
        Self {
            data,
            layout,
            policy,
        }
    }

    /// Builds an array by calling `f(x, y)` for every logical cell.
    ///
    /// Cells are visited in storage order, not row-major order. Padding slots are filled
    /// with `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self
    where
        T: Default,
    {
        Self::assert_shape(width, height);
        let layout = TileLayout::new(width, height, LOG_TILE);
        let data = (0..layout.capacity())
            .map(|i| match layout.coords_of(i) {
                Some((x, y)) => f(x, y),
                None => T::default(),
            })
            .collect();
        Self::from_storage(layout, AllocPolicy::Infallible, data)
    }

    /// Converts scanline (row-major) pixels into tiled storage.
    ///
    /// # Panics
    ///
    /// Panics if a dimension is zero or `pixels.len() != width * height`.
    pub fn from_row_major(width: usize, height: usize, pixels: Vec<T>) -> Self
    where
        T: Default,
    {
        Self::assert_shape(width, height);
        assert_eq!(
            pixels.len(),
            width * height,
            "pixels length must equal width * height"
        );
        let layout = TileLayout::new(width, height, LOG_TILE);
        let mut data: Vec<T> = (0..layout.capacity()).map(|_| T::default()).collect();
        for (i, value) in pixels.into_iter().enumerate() {
            data[layout.storage_index(i % width, i / width)] = value;
        }
        Self::from_storage(layout, AllocPolicy::Infallible, data)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.layout.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.layout.height()
    }

    /// Number of logical cells, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.width() * self.height()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of backing slots including tile padding.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn policy(&self) -> AllocPolicy {
        self.policy
    }

    #[inline]
    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    /// Raw slots in storage order, padding included.
    #[inline]
    pub fn storage(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn storage_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Cell at `(x, y)`. Bounds are the caller's responsibility and are only asserted in
    /// debug builds; in release an out-of-range coordinate may alias a padding slot.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.layout.storage_index(x, y)]
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let idx = self.layout.storage_index(x, y);
        &mut self.data[idx]
    }

    /// Logical cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let layout = self.layout;
        (0..layout.height()).flat_map(move |y| {
            (0..layout.width()).map(move |x| (x, y, &self.data[layout.storage_index(x, y)]))
        })
    }

    /// Logical cells in storage order, skipping padding.
    pub fn iter_storage(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let layout = self.layout;
        self.data
            .iter()
            .enumerate()
            .filter_map(move |(i, value)| layout.coords_of(i).map(|(x, y)| (x, y, value)))
    }

    /// One mutable slice per tile, in tile order. Slices include padding slots of edge
    /// tiles; use [`TileLayout::coords_of`] to tell them apart.
    pub fn tiles_mut(&mut self) -> ChunksExactMut<'_, T> {
        let tile_area = self.layout.tile_area();
        self.data.chunks_exact_mut(tile_area)
    }

    /// Exchanges contents, shape and policy with `other` in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Moves the contents out, leaving `self` as an empty 0x0 array.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl<T: Clone, const LOG_TILE: u32> TiledArray2D<T, LOG_TILE> {
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self::assert_shape(width, height);
        let layout = TileLayout::new(width, height, LOG_TILE);
        let data = vec![value; layout.capacity()];
        Self::from_storage(layout, AllocPolicy::Infallible, data)
    }

    /// Fallible counterpart of [`filled`](Self::filled) under an explicit policy.
    pub fn try_filled_with_policy(
        width: usize,
        height: usize,
        value: T,
        policy: AllocPolicy,
    ) -> Result<Self> {
        let layout = Self::checked_layout(width, height)?;
        let slots = layout.capacity();
        let mut data = policy.allocate(slots)?;
        data.resize(slots, value);
        Ok(Self::from_storage(layout, policy, data))
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Copies the logical cells out in row-major order.
    pub fn to_row_major(&self) -> Vec<T> {
        let mut pixels = Vec::with_capacity(self.len());
        pixels.extend(self.iter().map(|(_, _, value)| value.clone()));
        pixels
    }

    /// Copy of this array whose storage is obtained under `policy`.
    pub fn clone_with_policy(&self, policy: AllocPolicy) -> Result<Self> {
        let mut data = policy.allocate(self.data.len())?;
        data.extend_from_slice(&self.data);
        Ok(Self {
            data,
            layout: self.layout,
            policy,
        })
    }

    /// Makes `self` a copy of `source`, following [`plan_assignment`].
    ///
    /// A reallocation honours `source`'s policy, so under [`AllocPolicy::Fallible`] a
    /// failed reservation leaves `self` untouched and returns the error.
    pub fn try_assign_from(&mut self, source: &Self) -> Result<()> {
        match self.assignment_plan(source) {
            AssignPlan::Reuse => self.data.clone_from_slice(&source.data),
            AssignPlan::Reallocate => {
                let mut data = source.policy.allocate(source.data.len())?;
                data.extend_from_slice(&source.data);
                self.data = data;
                self.layout = source.layout;
                self.policy = source.policy;
            }
        }
        Ok(())
    }

    /// Infallible form of [`try_assign_from`](Self::try_assign_from); a reallocation
    /// aborts on allocation failure regardless of policy.
    pub fn assign_from(&mut self, source: &Self) {
        match self.assignment_plan(source) {
            AssignPlan::Reuse => self.data.clone_from_slice(&source.data),
            AssignPlan::Reallocate => {
                self.data = source.data.clone();
                self.layout = source.layout;
                self.policy = source.policy;
            }
        }
    }

    fn assignment_plan(&self, source: &Self) -> AssignPlan {
        let shape_changed = self.width() != source.width() || self.height() != source.height();
        let plan = plan_assignment(shape_changed, self.policy != source.policy);
        tracing::trace!(?plan, shape_changed, "Assigning tiled array");
        plan
    }
}

impl<T: Default + Clone, const LOG_TILE: u32> TiledArray2D<T, LOG_TILE> {
    /// Array of `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, T::default())
    }

    /// Fallible counterpart of [`new`](Self::new) under an explicit policy.
    pub fn try_new_with_policy(width: usize, height: usize, policy: AllocPolicy) -> Result<Self> {
        Self::try_filled_with_policy(width, height, T::default(), policy)
    }
}

impl<T, const LOG_TILE: u32> Default for TiledArray2D<T, LOG_TILE> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            layout: TileLayout::new(0, 0, LOG_TILE),
            policy: AllocPolicy::default(),
        }
    }
}

impl<T: Clone, const LOG_TILE: u32> Clone for TiledArray2D<T, LOG_TILE> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            layout: self.layout,
            policy: self.policy,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

/// Shapes and logical cells must match; padding and policy are ignored.
impl<T: PartialEq, const LOG_TILE: u32> PartialEq for TiledArray2D<T, LOG_TILE> {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self
                .iter()
                .zip(other.iter())
                .all(|((_, _, a), (_, _, b))| a == b)
    }
}

impl<T, const LOG_TILE: u32> Index<(usize, usize)> for TiledArray2D<T, LOG_TILE> {
    type Output = T;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        self.get(x, y)
    }
}

impl<T, const LOG_TILE: u32> IndexMut<(usize, usize)> for TiledArray2D<T, LOG_TILE> {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        self.get_mut(x, y)
    }
}
