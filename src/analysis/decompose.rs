//! Separation of pseudo-objects into their pure components
//!
//! Stationary objects are split with an infection procedure: one live cell
//! of each island is infected, the infection percolates through the island
//! and crosses only the bridges the rule itself would use, and the fully
//! infected island is then marked resolved. Islands of the final universe
//! are the pure components. Moving objects are only separated
//! geometrically, after a few generations of coalescence.

use crate::analysis::classify::canonical_code;
use crate::analysis::code::ObjectCode;
use crate::io::configuration::{INFECTION_GENERATIONS, MOVING_COALESCE_GENERATIONS};
use crate::io::error::{Result, computation_error};
use crate::life::universe::{RuleTable, Universe};

/// Split the object held in `universe` into canonised components
///
/// Components are listed in row-major order of their first cell. The
/// universe is left empty.
///
/// # Errors
///
/// Returns a computation error if some component cannot be canonised
/// within `max_period` generations.
pub fn decompose(
    universe: &mut dyn Universe,
    moving: bool,
    max_period: u64,
) -> Result<Vec<ObjectCode>> {
    if moving {
        universe.set_rule(RuleTable::Coalesce);
        universe.run(MOVING_COALESCE_GENERATIONS);
    } else {
        separate_islands(universe);
    }

    let mut components = Vec::new();
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
        if !live.is_empty() {
            components.push(live);
        }
    }

    let template = universe.spawn();
    components
        .iter()
        .map(|cells| {
            canonical_code(template.as_ref(), cells, max_period).ok_or_else(|| {
                computation_error(
                    "decompose",
                    &format!("component of {} cells has no canonical code", cells.len()),
                )
            })
        })
        .collect()
}

/// Infect and resolve every island under the rule's own dynamics
fn separate_islands(universe: &mut dyn Universe) {
    universe.set_rule(RuleTable::Contagious);
    universe.run(INFECTION_GENERATIONS);

    for (x, y, _) in universe.cells() {
        let state = universe.get_cell(x, y);
        if state == 0 || state > 2 {
            continue;
        }
        universe.set_cell(x, y, state + 2);

        let mut previous = 0;
        let mut current = universe.population();
        while previous != current {
            universe.set_rule(RuleTable::Percolate);
            universe.run(INFECTION_GENERATIONS);
            universe.set_rule(RuleTable::Contagious);
            universe.run(INFECTION_GENERATIONS);
            previous = current;
            current = universe.population();
        }

        universe.set_rule(RuleTable::Eradicate);
        universe.run(1);
    }
}

