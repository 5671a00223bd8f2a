//! Simulation engine contract and the auxiliary rule tables used by the census

use crate::life::rule::Rule;

/// Axis-aligned rectangle of cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Leftmost column
    pub x: i32,
    /// Topmost row
    pub y: i32,
    /// Number of columns
    pub width: i32,
    /// Number of rows
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `2 * radius` centred on the origin
    pub const fn centred(radius: i32) -> Self {
        Self::new(-radius, -radius, 2 * radius, 2 * radius)
    }

    /// Whether `(x, y)` lies inside the rectangle
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }

    /// Smallest rectangle covering every coordinate, or `None` when empty
    pub fn from_cells<I>(cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        let mut bounds: Option<(i32, i32, i32, i32)> = None;
        for (x, y) in cells {
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x), b.max(y)),
            });
        }
        bounds.map(|(l, t, r, b)| Self::new(l, t, r - l + 1, b - t + 1))
    }

    /// Longer side
    pub fn length(&self) -> i32 {
        self.width.max(self.height)
    }
}

/// Small patterns removed wholesale before segmentation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Junk {
    /// A single live cell
    Dot,
    /// The 2x2 block
    Block,
    /// The period 2 blinker
    Blinker,
    /// The six-cell beehive
    Beehive,
    /// The period 4 glider
    Glider,
}

impl Junk {
    /// Junk removed on every page, in the order it is expunged
    pub const STATIONARY: [Self; 4] = [Self::Dot, Self::Block, Self::Blinker, Self::Beehive];

    /// Live cells in each occurrence
    pub const fn cells(self) -> i64 {
        match self {
            Self::Dot => 1,
            Self::Block => 4,
            Self::Blinker => 3,
            Self::Beehive => 6,
            Self::Glider => 5,
        }
    }

    /// Object code recorded for each removed occurrence
    pub const fn code(self) -> &'static str {
        match self {
            Self::Dot => "xs1_1",
            Self::Block => "xs4_33",
            Self::Blinker => "xp2_7",
            Self::Beehive => "xs6_696",
            Self::Glider => "xq4_153",
        }
    }

    /// Period the shape must have for removal to be sound
    pub const fn period(self) -> u64 {
        match self {
            Self::Dot | Self::Block | Self::Beehive => 1,
            Self::Blinker => 2,
            Self::Glider => 4,
        }
    }

    /// One phase of the shape at the origin
    pub fn seed(self) -> Vec<(i32, i32)> {
        self.phases().into_iter().next().unwrap_or_default()
    }

    fn phases(self) -> Vec<Vec<(i32, i32)>> {
        match self {
            Self::Dot => vec![vec![(0, 0)]],
            Self::Block => vec![vec![(0, 0), (1, 0), (0, 1), (1, 1)]],
            Self::Blinker => vec![vec![(0, 0), (1, 0), (2, 0)]],
            Self::Beehive => vec![vec![(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)]],
            Self::Glider => vec![
                vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
                vec![(0, 0), (2, 0), (1, 1), (2, 1), (1, 2)],
                vec![(2, 0), (0, 1), (2, 1), (1, 2), (2, 2)],
                vec![(0, 0), (1, 1), (2, 1), (0, 2), (1, 2)],
            ],
        }
    }

    /// Every phase and orientation, translated to the origin and sorted
    pub fn variants(self) -> Vec<Vec<(i32, i32)>> {
        let mut variants: Vec<Vec<(i32, i32)>> = self
            .phases()
            .iter()
            .flat_map(|phase| {
                ORIENTATIONS
                    .iter()
                    .map(move |&(a, b, c, d)| {
                        normalise(phase.iter().map(|&(x, y)| (a * x + b * y, c * x + d * y)))
                    })
            })
            .collect();
        variants.sort();
        variants.dedup();
        variants
    }
}

/// Matrices of the eight rigid transformations of the square
pub const ORIENTATIONS: [(i32, i32, i32, i32); 8] = [
    (1, 0, 0, 1),
    (-1, 0, 0, 1),
    (1, 0, 0, -1),
    (-1, 0, 0, -1),
    (0, 1, 1, 0),
    (0, -1, 1, 0),
    (0, 1, -1, 0),
    (0, -1, -1, 0),
];

/// Translate cells so the bounding box starts at the origin, then sort
pub fn normalise<I>(cells: I) -> Vec<(i32, i32)>
where
    I: IntoIterator<Item = (i32, i32)>,
{
    let cells: Vec<(i32, i32)> = cells.into_iter().collect();
    let Some(rect) = Rect::from_cells(cells.iter().copied()) else {
        return Vec::new();
    };
    let mut shifted: Vec<(i32, i32)> = cells
        .into_iter()
        .map(|(x, y)| (x - rect.x, y - rect.y))
        .collect();
    shifted.sort_unstable();
    shifted
}

/// Transition tables a universe can run
///
/// States: 0 is vacuum, odd states are live, even non-zero states are dead
/// cells that remember having been part of an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleTable {
    /// The primary rule on two states
    Life,
    /// Historical variant that marks dead and bridging cells with state 2
    Coalesce,
    /// Historical variant that carries infection (states 3 and 4) across
    /// cells whose births depend on infected neighbours
    Contagious,
    /// Spreads infection to every non-vacuum cell of an island
    Percolate,
    /// Turns infected cells into resolved cells (states 5 and 6)
    Eradicate,
    /// Deletes the live cells of isolated copies of a junk shape
    Expunge(Junk),
}

impl RuleTable {
    /// Whether one generation already reaches a fixed point, so running the
    /// table again changes nothing
    pub const fn is_idempotent(self) -> bool {
        matches!(self, Self::Eradicate | Self::Expunge(_))
    }
}

/// Translation-independent hash of a region's contents
pub type RegionHash = u64;

/// A multi-state cellular automaton universe
///
/// The census drives every simulation through this trait so the engine
/// can be swapped without touching the analysis code.
pub trait Universe {
    /// Primary rule governing `RuleTable::Life`
    fn rule(&self) -> Rule;

    /// Select the transition table used by subsequent runs
    fn set_rule(&mut self, table: RuleTable);

    /// Transition table currently selected
    fn rule_table(&self) -> RuleTable;

    /// Advance `generations` generations
    fn run(&mut self, generations: u64);

    /// Advance a large number of generations as quickly as possible
    fn fast_forward(&mut self, generations: u64) {
        self.run(generations);
    }

    /// Generations run since creation or the last `clear`
    fn generation(&self) -> u64;

    /// Number of non-vacuum cells
    fn population(&self) -> usize;

    /// Bounding rectangle of all non-vacuum cells
    fn bounding_rect(&self) -> Option<Rect>;

    /// All non-vacuum cells in row-major order
    fn cells(&self) -> Vec<(i32, i32, u8)>;

    /// Non-vacuum cells inside `rect`, in row-major order
    fn cells_in(&self, rect: Rect) -> Vec<(i32, i32, u8)> {
        self.cells()
            .into_iter()
            .filter(|&(x, y, _)| rect.contains(x, y))
            .collect()
    }

    /// State of a single cell
    fn get_cell(&self, x: i32, y: i32) -> u8;

    /// Overwrite a single cell
    fn set_cell(&mut self, x: i32, y: i32, state: u8);

    /// Hash of the contents of `rect`, relative to its top-left corner
    fn hash_region(&self, rect: Rect) -> RegionHash;

    /// Remove every cell and reset the generation counter
    fn clear(&mut self);

    /// Fresh empty universe with the same primary rule
    fn spawn(&self) -> Box<dyn Universe>;

    /// Set live cells offset by `(dx, dy)`
    fn put_cells(&mut self, cells: &[(i32, i32)], dx: i32, dy: i32) {
        for &(x, y) in cells {
            self.set_cell(x + dx, y + dy, 1);
        }
    }

    /// Remove and return the 8-connected island of non-vacuum cells
    /// containing `(x, y)`, in discovery order
    fn take_island(&mut self, x: i32, y: i32) -> Vec<(i32, i32, u8)> {
        let state = self.get_cell(x, y);
        if state == 0 {
            return Vec::new();
        }
        self.set_cell(x, y, 0);

        let mut island = vec![(x, y, state)];
        let mut marker = 0;
        while let Some(&(cx, cy, _)) = island.get(marker) {
            marker += 1;
            for ny in cy - 1..=cy + 1 {
                for nx in cx - 1..=cx + 1 {
                    let neighbour = self.get_cell(nx, ny);
                    if neighbour != 0 {
                        island.push((nx, ny, neighbour));
                        self.set_cell(nx, ny, 0);
                    }
                }
            }
        }
        island
    }

    /// Coordinates of live cells in row-major order
    fn live_cells(&self) -> Vec<(i32, i32)> {
        self.cells()
            .into_iter()
            .filter(|&(_, _, state)| state % 2 == 1)
            .map(|(x, y, _)| (x, y))
            .collect()
    }
}
