//! Segmentation of a coalesced page into clusters
//!
//! Every 8-connected island of non-vacuum cells is removed from the page in
//! turn. Its live cells form the cluster; the dead markers around them only
//! serve to join the pieces of one object together.

use crate::life::universe::{Rect, Universe};
use crate::search::cache::ObjectKey;
use crate::search::census::SoupId;

/// Placement of soups on a page
///
/// Soup `i` of a page is drawn at `(spacing * (i % side), spacing * (i / side))`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLayout {
    /// Soups per row and column
    pub side: usize,
    /// Distance between neighbouring soups
    pub spacing: i64,
    /// Identifier of the first soup on the page
    pub first: SoupId,
}

impl PageLayout {
    /// Offset at which soup `index` of the page is drawn
    ///
    /// Offsets beyond the `i32` range saturate at its bounds.
    pub fn position(&self, index: usize) -> (i32, i32) {
        let side = self.side.max(1);
        let offset = |slot: usize| {
            let scaled = i64::try_from(slot)
                .map_or(i64::MAX, |slot| self.spacing.saturating_mul(slot));
            i32::try_from(scaled).unwrap_or(if scaled < 0 { i32::MIN } else { i32::MAX })
        };
        (offset(index % side), offset(index / side))
    }

    /// Soup whose ash is nearest to `(x, y)`
    pub fn soup_at(&self, x: i32, y: i32) -> SoupId {
        let last = self.side.saturating_sub(1) as f64;
        let cell = |v: i32| (v as f64 / self.spacing.max(1) as f64 + 0.5).floor().clamp(0.0, last);
        self.first + (cell(x) + cell(y) * self.side as f64) as SoupId
    }
}

/// A cluster awaiting identification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingCluster {
    /// Soup the cluster belongs to
    pub soup: SoupId,
    /// Live cells relative to `offset`
    pub cells: Vec<(i32, i32)>,
    /// Top-left corner of the live cells on the page
    pub offset: (i32, i32),
    /// Cache key, for clusters that fit in the cache box
    pub key: Option<ObjectKey>,
}

impl PendingCluster {
    /// Build a cluster from live cells in page coordinates
    ///
    /// Returns `None` for an island without live cells.
    pub fn from_live_cells(live: &[(i32, i32)], layout: &PageLayout) -> Option<Self> {
        let rect = Rect::from_cells(live.iter().copied())?;
        let cells: Vec<(i32, i32)> = live
            .iter()
            .map(|&(x, y)| (x - rect.x, y - rect.y))
            .collect();
        Some(Self {
            soup: layout.soup_at(rect.x, rect.y),
            key: ObjectKey::new(&cells),
            cells,
            offset: (rect.x, rect.y),
        })
    }

    /// Live population
    pub fn population(&self) -> usize {
        self.cells.len()
    }
}

/// Remove every island from `universe` and return the clusters with live
/// cells, in row-major order of their first cell
pub fn segment(universe: &mut dyn Universe, layout: &PageLayout) -> Vec<PendingCluster> {
    let mut clusters = Vec::new();
    for (x, y, _) in universe.cells() {
        if universe.get_cell(x, y) == 0 {
            continue;
        }
        let live: Vec<(i32, i32)> = universe
            .take_island(x, y)
            .into_iter()
            .filter(|&(_, _, state)| state % 2 == 1)
            .map(|(cx, cy, _)| (cx, cy))
            .collect();
        if let Some(cluster) = PendingCluster::from_live_cells(&live, layout) {
            clusters.push(cluster);
        }
    }
    clusters
}
