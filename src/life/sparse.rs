//! Reference universe backed by a hash map of non-vacuum cells

use crate::life::rule::Rule;
use crate::life::universe::{Junk, Rect, RegionHash, RuleTable, Universe, normalise};
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

/// Number of generation fingerprints remembered while fast-forwarding
const FINGERPRINT_WINDOW: usize = 1 << 12;

/// Neighbourhood summary of a single position
#[derive(Clone, Copy, Debug, Default)]
struct Tally {
    /// Live neighbours (odd states)
    live: u32,
    /// Infected live neighbours (state 3)
    infected_live: u32,
    /// Whether any neighbour is infected (state 3 or 4)
    infected: bool,
}

/// Unbounded universe storing only non-vacuum cells
///
/// Simple enough to serve as the reference engine for every rule table;
/// runs stop early once a fixed point is reached.
#[derive(Clone, Debug)]
pub struct SparseUniverse {
    rule: Rule,
    table: RuleTable,
    cells: HashMap<(i32, i32), u8>,
    generation: u64,
}

impl SparseUniverse {
    /// Create an empty universe running `rule`
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            table: RuleTable::Life,
            cells: HashMap::new(),
            generation: 0,
        }
    }

    /// Create a universe holding live `cells`
    pub fn with_cells(rule: Rule, cells: &[(i32, i32)]) -> Self {
        let mut universe = Self::new(rule);
        universe.put_cells(cells, 0, 0);
        universe
    }

    fn tallies(&self) -> HashMap<(i32, i32), Tally> {
        let mut tallies: HashMap<(i32, i32), Tally> = HashMap::with_capacity(self.cells.len() * 4);
        for (&(x, y), &state) in &self.cells {
            let live = state % 2 == 1;
            let infected = state == 3 || state == 4;
            if !live && !infected {
                continue;
            }
            tallies.entry((x, y)).or_default();
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let tally = tallies.entry((x + dx, y + dy)).or_default();
                    if live {
                        tally.live += 1;
                    }
                    if state == 3 {
                        tally.infected_live += 1;
                    }
                    tally.infected |= infected;
                }
            }
        }
        tallies
    }

    fn next_state(&self, state: u8, tally: Tally) -> u8 {
        let rule = &self.rule;
        let live = tally.live;
        match self.table {
            RuleTable::Life => {
                let alive = if state % 2 == 1 {
                    rule.survives(live)
                } else {
                    rule.births(live)
                };
                u8::from(alive)
            }
            RuleTable::Coalesce => match state {
                0 | 2 if rule.births(live) => 1,
                1 if rule.survives(live) => 1,
                1 => 2,
                0 if rule.min_birth().is_some_and(|m| live >= m) => 2,
                other => other,
            },
            RuleTable::Contagious => match state {
                0 if rule.births(tally.infected_live) && tally.infected_live < live => 4,
                0 | 2 if rule.births(live) => 1,
                4 if rule.births(live) => 3,
                6 if rule.births(live) => 5,
                1 | 3 | 5 if rule.survives(live) => state,
                1 | 3 | 5 => state + 1,
                other => other,
            },
            RuleTable::Percolate => match state {
                2 | 4 | 6 if tally.infected => 4,
                1 | 3 | 5 if tally.infected => 3,
                other => other,
            },
            RuleTable::Eradicate => match state {
                4 => 6,
                3 => 5,
                other => other,
            },
            RuleTable::Expunge(_) => state,
        }
    }

    /// Advance one generation, returning whether any cell changed
    fn step(&mut self) -> bool {
        if let RuleTable::Expunge(junk) = self.table {
            return self.expunge(junk);
        }

        // Cells away from live and infected cells never change state
        let changes: Vec<((i32, i32), u8)> = self
            .tallies()
            .into_iter()
            .filter_map(|(pos, tally)| {
                let state = self.cells.get(&pos).copied().unwrap_or(0);
                let new_state = self.next_state(state, tally);
                (new_state != state).then_some((pos, new_state))
            })
            .collect();

        for &((x, y), state) in &changes {
            self.set_cell(x, y, state);
        }
        !changes.is_empty()
    }

    /// Delete the live cells of every island matching `junk`
    fn expunge(&mut self, junk: Junk) -> bool {
        let variants: HashSet<Vec<(i32, i32)>> = junk.variants().into_iter().collect();
        let mut seen: HashSet<(i32, i32)> = HashSet::new();
        let mut doomed: Vec<(i32, i32)> = Vec::new();

        let mut starts: Vec<(i32, i32)> = self.cells.keys().copied().collect();
        starts.sort_unstable();
        for start in starts {
            if !seen.insert(start) {
                continue;
            }
            let mut island = vec![start];
            let mut live = Vec::new();
            while let Some((x, y)) = island.pop() {
                if self.cells.get(&(x, y)).is_some_and(|s| s % 2 == 1) {
                    live.push((x, y));
                }
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        let n = (x + dx, y + dy);
                        if self.cells.contains_key(&n) && seen.insert(n) {
                            island.push(n);
                        }
                    }
                }
            }
            if variants.contains(&normalise(live.iter().copied())) {
                doomed.extend(live);
            }
        }

        for pos in &doomed {
            self.cells.remove(pos);
        }
        !doomed.is_empty()
    }

    /// Position-dependent fingerprint of the whole universe
    fn fingerprint(&self) -> u64 {
        self.cells.iter().fold(0u64, |acc, (pos, state)| {
            let mut hasher = DefaultHasher::new();
            pos.hash(&mut hasher);
            state.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        })
    }
}

impl Universe for SparseUniverse {
    fn rule(&self) -> Rule {
        self.rule
    }

    fn set_rule(&mut self, table: RuleTable) {
        if table == RuleTable::Life && self.table != RuleTable::Life {
            // Only live cells survive a switch back to two states
            self.cells.retain(|_, state| *state % 2 == 1);
            for state in self.cells.values_mut() {
                *state = 1;
            }
        }
        self.table = table;
    }

    fn rule_table(&self) -> RuleTable {
        self.table
    }

    fn run(&mut self, generations: u64) {
        for done in 0..generations {
            let changed = self.step();
            if !changed || (self.table.is_idempotent() && done == 0) {
                self.generation += generations - done;
                return;
            }
            self.generation += 1;
        }
    }

    fn fast_forward(&mut self, generations: u64) {
        let mut seen: HashMap<u64, u64> = HashMap::new();
        let mut remaining = generations;
        while remaining > 0 {
            let print = self.fingerprint();
            if let Some(&first) = seen.get(&print) {
                let period = self.generation - first;
                let skipped = remaining - remaining % period;
                self.generation += skipped;
                remaining -= skipped;
                seen.clear();
                if remaining == 0 {
                    break;
                }
            }
            if seen.len() >= FINGERPRINT_WINDOW {
                seen.clear();
            }
            seen.insert(print, self.generation);
            if !self.step() {
                self.generation += remaining;
                return;
            }
            self.generation += 1;
            remaining -= 1;
        }
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn population(&self) -> usize {
        self.cells.len()
    }

    fn bounding_rect(&self) -> Option<Rect> {
        Rect::from_cells(self.cells.keys().copied())
    }

    fn cells(&self) -> Vec<(i32, i32, u8)> {
        let mut cells: Vec<(i32, i32, u8)> = self
            .cells
            .iter()
            .map(|(&(x, y), &state)| (x, y, state))
            .collect();
        cells.sort_unstable_by_key(|&(x, y, _)| (y, x));
        cells
    }

    fn get_cell(&self, x: i32, y: i32) -> u8 {
        self.cells.get(&(x, y)).copied().unwrap_or(0)
    }

    fn set_cell(&mut self, x: i32, y: i32, state: u8) {
        if state == 0 {
            self.cells.remove(&(x, y));
        } else {
            self.cells.insert((x, y), state);
        }
    }

    fn cells_in(&self, rect: Rect) -> Vec<(i32, i32, u8)> {
        let mut cells: Vec<(i32, i32, u8)> = self
            .cells
            .iter()
            .filter(|&(&(x, y), _)| rect.contains(x, y))
            .map(|(&(x, y), &state)| (x, y, state))
            .collect();
        cells.sort_unstable_by_key(|&(x, y, _)| (y, x));
        cells
    }

    fn hash_region(&self, rect: Rect) -> RegionHash {
        let mut hasher = DefaultHasher::new();
        for (x, y, state) in self.cells_in(rect) {
            (x - rect.x, y - rect.y, state).hash(&mut hasher);
        }
        hasher.finish()
    }

    fn clear(&mut self) {
        self.cells.clear();
        self.generation = 0;
    }

    fn spawn(&self) -> Box<dyn Universe> {
        Box::new(Self::new(self.rule))
    }
}
