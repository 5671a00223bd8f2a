//! Adaptive choice of the page size
//!
//! Larger pages amortise the fixed cost of coalescing and segmenting, but
//! need wider spacing and longer coalescence. Each round of pages starts by
//! sampling the sizes around the current optimum in rotation, and the round
//! ends by moving the optimum towards the size with the lowest mean delay.

use crate::io::configuration::{MIN_PAGE_SIZE, PAGES_PER_ROUND, SAMPLED_PAGES};
use crate::search::census::SoupId;
use std::time::Duration;

/// A page to process: `side * side` soups starting at `first`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    /// Identifier of the first soup
    pub first: SoupId,
    /// Soups per row and column
    pub side: usize,
    /// Index of the page within its round
    pub index: usize,
}

impl Page {
    /// Number of soups on the page
    pub const fn soups(&self) -> u64 {
        (self.side * self.side) as u64
    }
}

/// Hands out pages until a haul is complete, tuning their size
#[derive(Clone, Debug)]
pub struct PageScheduler {
    optimal: usize,
    target: u64,
    processed: u64,
    index: usize,
    delays: [Duration; 3],
}

impl PageScheduler {
    /// Schedule `target` soups, starting with pages of side `initial`
    pub fn new(initial: usize, target: u64) -> Self {
        Self {
            optimal: initial.max(1),
            target,
            processed: 0,
            index: 0,
            delays: [Duration::ZERO; 3],
        }
    }

    /// Current optimal page side
    pub const fn optimal(&self) -> usize {
        self.optimal
    }

    /// Soups processed so far
    pub const fn processed(&self) -> u64 {
        self.processed
    }

    /// Whether the haul is complete
    pub const fn is_finished(&self) -> bool {
        self.processed >= self.target
    }

    /// Next page to process, or `None` once the haul is complete
    ///
    /// The first pages of a round sample the optimum and its neighbours;
    /// the side shrinks so the haul is never overrun.
    pub fn next_page(&self) -> Option<Page> {
        if self.is_finished() {
            return None;
        }
        let mut side = if self.index < SAMPLED_PAGES {
            (self.optimal + self.index % 3).saturating_sub(1).max(1)
        } else {
            self.optimal
        };
        let remaining = self.target - self.processed;
        while side > 1 && (side * side) as u64 > remaining {
            side -= 1;
        }
        Some(Page {
            first: self.processed,
            side,
            index: self.index,
        })
    }

    /// Record a processed page and its mean per-soup delay
    ///
    /// Returns `true` when the page ended a round, which is the moment to
    /// compact the score table.
    pub fn complete(&mut self, page: Page, mean_delay: Duration) -> bool {
        if page.index < SAMPLED_PAGES {
            if let Some(slot) = self.delays.get_mut(page.index % 3) {
                *slot += mean_delay;
            }
        }
        self.processed += page.soups();
        self.index += 1;

        let round_over = self.index >= PAGES_PER_ROUND || self.is_finished();
        if round_over {
            if !self.is_finished() {
                self.retune();
            }
            self.index = 0;
            self.delays = [Duration::ZERO; 3];
        }
        round_over
    }

    /// Move the optimum towards the fastest sampled size
    fn retune(&mut self) {
        let [smaller, current, larger] = self.delays;
        let mut optimal = self.optimal;
        if smaller < current {
            optimal = self.optimal.saturating_sub(1);
        }
        if larger < current && larger < smaller {
            optimal = self.optimal + 1;
        }
        self.optimal = optimal.max(MIN_PAGE_SIZE);
    }
}
