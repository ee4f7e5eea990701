//! Tile decomposition and the storage index mapping.

use super::morton;

/// Largest supported `log2` tile edge. Intra-tile offsets are interleaved as `u16`.
pub const MAX_LOG_TILE: u32 = 15;

/// A logical coordinate split into its tile and the offset inside that tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub tile_x: usize,
    pub tile_y: usize,
    pub offset_x: u16,
    pub offset_y: u16,
}

/// Maps `(x, y)` coordinates of a `width x height` grid onto tile-major storage.
///
/// Tiles are `2^log_tile` cells on a side and are laid out row by row. Inside a tile,
/// cells follow Morton order, so the storage index is
/// `(tile_y * tiles_x + tile_x) * tile_area + morton(offset_x, offset_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    width: usize,
    height: usize,
    log_tile: u32,
    tiles_x: usize,
    tiles_y: usize,
}

impl TileLayout {
    /// Layout for a grid. Zero dimensions give an empty layout with no tiles.
    ///
    /// # Panics
    ///
    /// Panics if `log_tile` exceeds [`MAX_LOG_TILE`].
    pub fn new(width: usize, height: usize, log_tile: u32) -> Self {
        assert!(
            log_tile <= MAX_LOG_TILE,
            "log_tile ({log_tile}) exceeds MAX_LOG_TILE ({MAX_LOG_TILE})"
        );
        let edge = 1usize << log_tile;
        Self {
            width,
            height,
            log_tile,
            tiles_x: width.div_ceil(edge),
            tiles_y: height.div_ceil(edge),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn tile_edge(&self) -> usize {
        1 << self.log_tile
    }

    #[inline]
    pub fn tile_area(&self) -> usize {
        1 << (2 * self.log_tile)
    }

    #[inline]
    pub fn tiles_x(&self) -> usize {
        self.tiles_x
    }

    #[inline]
    pub fn tiles_y(&self) -> usize {
        self.tiles_y
    }

    /// Number of padded slots backing the grid.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.tiles_x * self.tiles_y * self.tile_area()
    }

    /// Like [`capacity`](Self::capacity) but `None` on overflow.
    pub fn checked_capacity(&self) -> Option<usize> {
        self.tiles_x
            .checked_mul(self.tiles_y)?
            .checked_mul(self.tile_area())
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    pub fn decompose(&self, x: usize, y: usize) -> TileCoord {
        let mask = self.tile_edge() - 1;
        TileCoord {
            tile_x: x >> self.log_tile,
            tile_y: y >> self.log_tile,
            offset_x: (x & mask) as u16,
            offset_y: (y & mask) as u16,
        }
    }

    #[inline]
    pub fn recompose(&self, coord: TileCoord) -> (usize, usize) {
        (
            (coord.tile_x << self.log_tile) | coord.offset_x as usize,
            (coord.tile_y << self.log_tile) | coord.offset_y as usize,
        )
    }

    /// Storage slot of `(x, y)`. The caller guarantees `(x, y)` is inside the grid.
    #[inline]
    pub fn storage_index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            self.contains(x, y),
            "({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        let coord = self.decompose(x, y);
        let tile_index = coord.tile_y * self.tiles_x + coord.tile_x;
        let local = morton::encode_u16(coord.offset_x, coord.offset_y) as usize;
        debug_assert!(local < self.tile_area());
        (tile_index << (2 * self.log_tile)) + local
    }

    /// Logical coordinate stored at `index`, or `None` for padding slots and indices
    /// past the end of storage.
    pub fn coords_of(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.capacity() {
            return None;
        }
        let tile_index = index >> (2 * self.log_tile);
        let local = index & (self.tile_area() - 1);
        let (offset_x, offset_y) = morton::decode_u32(local as u32);
        let (x, y) = self.recompose(TileCoord {
            tile_x: tile_index % self.tiles_x,
            tile_y: tile_index / self.tiles_x,
            offset_x,
            offset_y,
        });
        self.contains(x, y).then_some((x, y))
    }
}
