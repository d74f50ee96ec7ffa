//! Occupancy module - static obstacle bitset for a level
//!
//! The map covers a `width x height` grid and stores one bit per cell in a
//! fixed-size array (no allocation). Cell (x, y) lives at bit `y * width + x`.
//! Bits are only ever set during level setup; there is no destructible terrain.
//!
//! The map tracks interior obstacles only. Out-of-range coordinates report as
//! not blocked from [`OccupancyMap::is_blocked`]; movement validation goes
//! through [`OccupancyMap::is_walkable`], which also rejects them.

use crate::types::{Vec2, MAP_CAPACITY};

const WORDS: usize = MAP_CAPACITY.div_ceil(64);

/// Blocked/free flags for every cell of a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyMap {
    width: u16,
    height: u16,
    bits: [u64; WORDS],
}

impl OccupancyMap {
    /// Create an all-free map.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or the grid exceeds
    /// [`MAP_CAPACITY`] cells.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "occupancy map must not be empty");
        assert!(
            (width as usize) * (height as usize) <= MAP_CAPACITY,
            "{}x{} grid exceeds occupancy capacity of {} cells",
            width,
            height,
            MAP_CAPACITY
        );
        Self {
            width,
            height,
            bits: [0; WORDS],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Flat cell index, or None when outside the grid.
    #[inline(always)]
    fn index(&self, pos: Vec2) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some((pos.y as usize) * (self.width as usize) + (pos.x as usize))
    }

    /// Whether `pos` lies within `[0, width) x [0, height)`.
    pub fn in_bounds(&self, pos: Vec2) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width as i32 && pos.y < self.height as i32
    }

    /// Mark a cell as a static obstacle.
    /// Returns false if out of bounds.
    pub fn mark_blocked(&mut self, pos: Vec2) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.bits[i / 64] |= 1u64 << (i % 64);
                true
            }
            None => false,
        }
    }

    /// Whether an in-bounds cell holds a static obstacle.
    pub fn is_blocked(&self, pos: Vec2) -> bool {
        match self.index(pos) {
            Some(i) => self.bits[i / 64] & (1u64 << (i % 64)) != 0,
            None => false,
        }
    }

    /// In bounds and not blocked: a legal destination for anything that moves.
    pub fn is_walkable(&self, pos: Vec2) -> bool {
        self.in_bounds(pos) && !self.is_blocked(pos)
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> u32 {
        self.bits.iter().map(|w| w.count_ones()).sum()
    }
}
