//! Stabilisation detection for evolving soups
//!
//! Three escalating phases: cheap population plateaus, then region hash
//! cycles confirmed by re-running the candidate period, then a long
//! fast-forward past whatever transient remains. A false positive here is
//! caught later by the census engine's error correction.

use crate::io::configuration::{
    CYCLE_CONFIRMATIONS, CYCLE_FAILED_PERIOD, CYCLE_REGION_RADIUS, FALLBACK_STEP_SIZE,
    MIN_CYCLE_STEP_SIZE, PLATEAU_COARSE_PERIOD, PLATEAU_COARSE_STEP_SIZE, PLATEAU_FINE_PERIOD,
    PLATEAU_FINE_STEP_SIZE, PLATEAU_LENGTH, PLATEAU_SECURITY, PLATEAU_SHORT_ATTEMPTS,
    PLATEAU_SHORT_PERIOD, StabilityConfig,
};
use crate::life::universe::{Rect, Universe};
use log::debug;

/// Run `universe` until it is (almost certainly) periodic
///
/// Returns the binary logarithm of the number of generations the ash
/// should be coalesced for: larger for longer periods.
pub fn stabilise(universe: &mut dyn Universe, config: &StabilityConfig) -> u32 {
    if settles_quickly(universe, PLATEAU_SHORT_PERIOD, PLATEAU_SHORT_ATTEMPTS) {
        return PLATEAU_FINE_STEP_SIZE;
    }

    if population_plateau(universe, PLATEAU_FINE_PERIOD, PLATEAU_SECURITY, PLATEAU_LENGTH) {
        return PLATEAU_FINE_STEP_SIZE;
    }

    if population_plateau(universe, PLATEAU_COARSE_PERIOD, PLATEAU_SECURITY, PLATEAU_LENGTH) {
        return PLATEAU_COARSE_STEP_SIZE;
    }

    if let Some(step) = hash_cycle(universe, config) {
        return step;
    }

    debug!(
        "No cycle after {} generations, skipping 2^{} generations",
        universe.generation(),
        config.fallback_exponent
    );
    universe.fast_forward(1 << config.fallback_exponent);
    FALLBACK_STEP_SIZE
}

/// Catches soups that settle into low-period oscillators within a few
/// hundred generations
fn settles_quickly(universe: &mut dyn Universe, period: u64, attempts: usize) -> bool {
    for _ in 0..attempts {
        let Some(rect) = universe.bounding_rect() else {
            return true;
        };
        let pop0 = universe.population();
        universe.run(period);
        let hash1 = universe.hash_region(rect);
        let pop1 = universe.population();
        universe.run(period);
        let hash2 = universe.hash_region(rect);
        let pop2 = universe.population();

        if hash1 == hash2 && pop0 == pop1 && pop1 == pop2 {
            if universe.bounding_rect() == Some(rect) {
                return true;
            }

            // Something left the box; give it time to leave for good
            let span = rect.length() as u64;
            universe.run((2 * (span / period) + 1) * period);
            let hash3 = universe.hash_region(rect);
            if hash3 == hash2 && universe.population() == pop2 {
                return true;
            }
        }
    }
    false
}

/// Whether the population repeats `security` times in a row when sampled
/// every `period` generations
fn population_plateau(
    universe: &mut dyn Universe,
    period: u64,
    security: usize,
    length: usize,
) -> bool {
    let mut depth = 0;
    let mut previous = 0;
    for _ in 0..length {
        universe.run(period);
        let current = universe.population();
        if current == previous {
            depth += 1;
        } else {
            depth = 0;
        }
        previous = current;
        if depth == security {
            return true;
        }
    }
    false
}

/// Region hashes taken so far, sorted by hash
#[derive(Debug, Default)]
pub struct HashHistory {
    seen: Vec<(u64, u64)>,
}

impl HashHistory {
    /// Create an empty history
    pub const fn new() -> Self {
        Self { seen: Vec::new() }
    }

    /// Record `hash` taken at `generation`
    ///
    /// Returns the generation the hash was first taken at if it has been
    /// seen before; otherwise remembers it and returns `None`.
    pub fn record(&mut self, hash: u64, generation: u64) -> Option<u64> {
        let pos = self.seen.partition_point(|&(h, _)| h < hash);
        match self.seen.get(pos) {
            Some(&(h, first)) if h == hash => Some(first),
            _ => {
                self.seen.insert(pos, (hash, generation));
                None
            }
        }
    }
}

/// Look for a repeated region hash; returns the step size on success
fn hash_cycle(universe: &mut dyn Universe, config: &StabilityConfig) -> Option<u32> {
    let region = Rect::centred(CYCLE_REGION_RADIUS);
    let mut history = HashHistory::new();

    for _ in 0..config.cycle_iterations {
        universe.run(config.cycle_step);
        let hash = universe.hash_region(region);
        if let Some(first) = history.record(hash, universe.generation()) {
            let elapsed = universe.generation() - first;
            let period = confirm_period(universe, elapsed);
            return Some(MIN_CYCLE_STEP_SIZE.max(1 + period.ilog2()));
        }
    }
    None
}

/// Re-run a candidate period; a population change means the cycle was
/// spurious and a long period is assumed instead
fn confirm_period(universe: &mut dyn Universe, period: u64) -> u64 {
    let mut previous = universe.population();
    for _ in 0..CYCLE_CONFIRMATIONS {
        universe.run(period);
        let current = universe.population();
        if current != previous {
            return period.max(CYCLE_FAILED_PERIOD);
        }
        previous = current;
    }
    period
}
