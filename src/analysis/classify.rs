//! Object classification of isolated clusters
//!
//! A cluster is run in a fresh universe until it exactly repeats itself.
//! Repeating in place makes it a still life or oscillator, repeating
//! elsewhere a spaceship; never repeating sends it to the growth analysers.

use crate::analysis::canon::canonise;
use crate::analysis::code::{ObjectCode, Oversized};
use crate::analysis::growth::{linear_growth, power_law_growth};
use crate::io::configuration::ClassifierConfig;
use crate::life::universe::Universe;
use log::warn;

/// Outcome of the absolute cycle test
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    /// Nothing to test
    Empty,
    /// Repeats in place after the given number of generations
    Static(u64),
    /// Repeats displaced after the given number of generations
    Moving(u64),
    /// No repetition within the search bound
    Unresolved,
}

impl Period {
    /// Signed period: negative for moving objects
    pub const fn signed(self) -> Option<i64> {
        match self {
            Self::Static(p) => Some(p as i64),
            Self::Moving(p) => Some(-(p as i64)),
            Self::Empty | Self::Unresolved => None,
        }
    }
}

/// Result of classifying a cluster
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// The cluster had no live cells
    Nothing,
    /// The cluster was identified
    Identified(ObjectCode),
}

/// Detect an absolute cycle: the exact initial pattern recurring, possibly
/// translated
///
/// Unlike an eventual-cycle test this rejects patterns that only become
/// periodic after a transient.
pub fn bijective_period(universe: &mut dyn Universe, max_steps: u64) -> Period {
    let initial_population = universe.population();
    let Some(initial_rect) = universe.bounding_rect() else {
        return Period::Empty;
    };
    let initial_hash = universe.hash_region(initial_rect);

    for i in 0..max_steps {
        universe.run(1);
        if universe.population() != initial_population {
            continue;
        }
        let Some(rect) = universe.bounding_rect() else {
            continue;
        };
        if universe.hash_region(rect) == initial_hash {
            return if rect == initial_rect {
                Period::Static(i + 1)
            } else {
                Period::Moving(i + 1)
            };
        }
    }
    Period::Unresolved
}

/// Classify the cluster of `population` live cells held in `universe`
pub fn classify(
    universe: &mut dyn Universe,
    population: usize,
    config: &ClassifierConfig,
) -> Classification {
    let period = bijective_period(universe, config.max_period);

    let code = match period {
        Period::Empty => return Classification::Nothing,
        Period::Unresolved => linear_growth(universe, config.linear_max_period)
            .or_else(|| {
                power_law_growth(universe, config.power_step_exponent, config.power_samples)
                    .map(ObjectCode::PowerLawGrowth)
            })
            .unwrap_or_else(|| {
                warn!("Unresolved growth in a cluster of {population} cells");
                ObjectCode::Pathological
            }),
        Period::Moving(4) => match spaceship_union(universe) {
            Some((light, middle, heavy)) => ObjectCode::SpaceshipUnion {
                light,
                middle,
                heavy,
            },
            None => bounded_code(universe, period, population),
        },
        Period::Static(_) | Period::Moving(_) => bounded_code(universe, period, population),
    };

    Classification::Identified(code)
}

/// Canonical code of a periodic object, falling back to an oversized
/// descriptor when no phase fits the canonical box
fn bounded_code(universe: &mut dyn Universe, period: Period, population: usize) -> ObjectCode {
    let Some(signed) = period.signed() else {
        return ObjectCode::Pathological;
    };
    match canonise(universe, signed.unsigned_abs()) {
        Some(shape) => ObjectCode::bounded(signed, population, shape),
        None => ObjectCode::Oversized(match period {
            Period::Static(1) => Oversized::StillLife(population),
            Period::Moving(p) => Oversized::Spaceship(p),
            _ => Oversized::Oscillator(signed.unsigned_abs()),
        }),
    }
}

/// Canonical code of `cells`, or `None` if they are not periodic within
/// `max_period` generations or too large to canonise
pub fn canonical_code(
    template: &dyn Universe,
    cells: &[(i32, i32)],
    max_period: u64,
) -> Option<ObjectCode> {
    let mut universe = template.spawn();
    universe.put_cells(cells, 0, 0);
    let signed = bijective_period(universe.as_mut(), max_period).signed()?;
    let shape = canonise(universe.as_mut(), signed.unsigned_abs())?;
    Some(ObjectCode::bounded(signed, cells.len(), shape))
}

// Live-cell degree histograms of the two phases of each standard spaceship
// over two consecutive generations
const HWSS_A: [i64; 18] = [1, 4, 6, 2, 0, 0, 0, 0, 0, 0, 0, 0, 4, 4, 6, 1, 2, 1];
const MWSS_A: [i64; 18] = [2, 2, 5, 2, 0, 0, 0, 0, 0, 0, 0, 0, 4, 4, 4, 1, 2, 0];
const LWSS_A: [i64; 18] = [1, 2, 4, 2, 0, 0, 0, 0, 0, 0, 0, 0, 4, 4, 2, 2, 0, 0];
const HWSS_B: [i64; 18] = [0, 0, 0, 4, 4, 6, 1, 2, 1, 1, 4, 6, 2, 0, 0, 0, 0, 0];
const MWSS_B: [i64; 18] = [0, 0, 0, 4, 4, 4, 1, 2, 0, 2, 2, 5, 2, 0, 0, 0, 0, 0];
const LWSS_B: [i64; 18] = [0, 0, 0, 4, 4, 2, 2, 0, 0, 1, 2, 4, 2, 0, 0, 0, 0, 0];

/// Live cells of each degree (live neighbour count)
fn degree_histogram(universe: &dyn Universe) -> [i64; 9] {
    let mut counts = [0i64; 9];
    for (x, y) in universe.live_cells() {
        let mut degree = 0usize;
        for ny in y - 1..=y + 1 {
            for nx in x - 1..=x + 1 {
                if (nx, ny) != (x, y) && universe.get_cell(nx, ny) % 2 == 1 {
                    degree += 1;
                }
            }
        }
        if let Some(slot) = counts.get_mut(degree) {
            *slot += 1;
        }
    }
    counts
}

/// Degree histograms of the next two generations, concatenated
fn degree_histogram_pair(universe: &mut dyn Universe) -> [i64; 18] {
    let mut pair = [0i64; 18];
    universe.run(1);
    let first = degree_histogram(universe);
    universe.run(1);
    let second = degree_histogram(universe);
    for (slot, value) in pair.iter_mut().zip(first.iter().chain(second.iter())) {
        *slot = *value;
    }
    pair
}

fn exact_half(value: i64) -> Option<i64> {
    (value % 2 == 0).then_some(value / 2)
}

/// Counts of light, middle and heavyweight spaceships if the universe holds
/// nothing but a disjoint union of them
///
/// Advances the universe four generations.
pub fn spaceship_union(universe: &mut dyn Universe) -> Option<(u64, u64, u64)> {
    let observed = degree_histogram_pair(universe);
    if degree_histogram_pair(universe) != observed {
        return None;
    }
    let at = |i: usize| observed.get(i).copied().unwrap_or(0);

    let heavy_a = at(17);
    let middle_a = exact_half(at(16))? - heavy_a;
    let light_a = exact_half(at(15) - heavy_a - middle_a)?;
    let heavy_b = at(8);
    let middle_b = exact_half(at(7))? - heavy_b;
    let light_b = exact_half(at(6) - heavy_b - middle_b)?;

    let counts = [heavy_a, middle_a, light_a, heavy_b, middle_b, light_b];
    if counts.iter().any(|&c| c < 0) || counts.iter().all(|&c| c == 0) {
        return None;
    }

    let tables = [HWSS_A, MWSS_A, LWSS_A, HWSS_B, MWSS_B, LWSS_B];
    let mut expected = [0i64; 18];
    for (count, table) in counts.iter().zip(tables.iter()) {
        for (slot, value) in expected.iter_mut().zip(table.iter()) {
            *slot += count * value;
        }
    }
    if expected != observed {
        return None;
    }

    Some((
        (light_a + light_b) as u64,
        (middle_a + middle_b) as u64,
        (heavy_a + heavy_b) as u64,
    ))
}
