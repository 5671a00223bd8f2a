//! Dense bit rasters of bounded regions, read when canonising shapes and
//! packed into cache keys

use crate::life::universe::Rect;
use bitvec::prelude::*;
use std::fmt;

/// Dense bit raster of a bounded region
///
/// Snapshots a rectangle of a universe so repeated reads (eight
/// orientations per phase when canonising) avoid hash lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    bits: BitVec<u64, Lsb0>,
    width: usize,
    height: usize,
}

impl Raster {
    /// Create an empty raster
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![u64, Lsb0; 0; width * height],
            width,
            height,
        }
    }

    /// Rasterise the live cells that fall inside `rect`
    ///
    /// Coordinates are taken relative to the rectangle's top-left corner.
    pub fn from_cells(cells: &[(i32, i32)], rect: Rect) -> Self {
        let mut raster = Self::new(rect.width.max(0) as usize, rect.height.max(0) as usize);
        for &(x, y) in cells {
            raster.set(x - rect.x, y - rect.y, true);
        }
        raster
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then_some(x + self.width * y)
    }

    /// Read a cell; anything outside the raster is dead
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y)
            .and_then(|i| self.bits.get(i).as_deref().copied())
            .unwrap_or(false)
    }

    /// Write a cell; writes outside the raster are ignored
    pub fn set(&mut self, x: i32, y: i32, value: bool) {
        if let Some(i) = self.index(x, y) {
            self.bits.set(i, value);
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.bits.count_ones()
    }

    /// Live cells as coordinates in row-major order
    pub fn live_cells(&self) -> Vec<(i32, i32)> {
        self.bits
            .iter_ones()
            .map(|i| ((i % self.width) as i32, (i / self.width) as i32))
            .collect()
    }

    /// Pack the raster into a word, bit `x + width * y` per cell
    ///
    /// Returns `None` when the raster has more than 64 cells.
    pub fn pack(&self) -> Option<u64> {
        match self.bits.len() {
            0 => Some(0),
            1..=64 => Some(self.bits.load_le::<u64>()),
            _ => None,
        }
    }
}

impl fmt::Display for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.bits.chunks(self.width.max(1)) {
            for bit in row {
                f.write_str(if *bit { "o" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
