//! Deterministic soup generation from SHA-256 digests
//!
//! A soup is the digest of `root ++ index`, read most significant bit first
//! onto a small bitmap whose shape depends on the symmetry, then completed by
//! the symmetry's reflections and rotations and finally inflated.

use crate::io::error::{Result, SearchError};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Base symmetry groups of a soup
///
/// Suffixes name the centre of symmetry: `Cell` is centred on a cell,
/// `Edge` on the midpoint of an edge and `Vertex` on a corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// Asymmetric 16x16 soup
    C1,
    /// Half-turn about a cell (`C2_1`)
    C2Cell,
    /// Half-turn about an edge (`C2_2`)
    C2Edge,
    /// Half-turn about a vertex (`C2_4`)
    C2Vertex,
    /// Quarter-turn about a cell (`C4_1`)
    C4Cell,
    /// Quarter-turn about a vertex (`C4_4`)
    C4Vertex,
    /// One orthogonal mirror through cells (`D2_+1`)
    D2PlusCell,
    /// One orthogonal mirror between cells (`D2_+2`)
    D2PlusEdge,
    /// One diagonal mirror (`D2_x`)
    D2Diagonal,
    /// Two orthogonal mirrors through a cell (`D4_+1`)
    D4PlusCell,
    /// Two orthogonal mirrors meeting on an edge (`D4_+2`)
    D4PlusEdge,
    /// Two orthogonal mirrors meeting on a vertex (`D4_+4`)
    D4PlusVertex,
    /// Two diagonal mirrors through a cell (`D4_x1`)
    D4DiagonalCell,
    /// Two diagonal mirrors through a vertex (`D4_x4`)
    D4DiagonalVertex,
    /// Full symmetry of the square about a cell (`D8_1`)
    D8Cell,
    /// Full symmetry of the square about a vertex (`D8_4`)
    D8Vertex,
    /// Asymmetric 32x8 soup (`8x32`)
    Strip8x32,
    /// Asymmetric 64x4 soup (`4x64`)
    Strip4x64,
    /// Asymmetric 128x2 soup (`2x128`)
    Strip2x128,
    /// Asymmetric 256x1 soup (`1x256`)
    Strip1x256,
    /// 256x1 soup mirrored between cells (`1x256X2`)
    Strip1x256Even,
    /// 256x1 soup mirrored through a cell (`1x256X2+1`)
    Strip1x256Odd,
    /// 16x16 soup tiled into a 32x32 square (`32x32`)
    Tile32x32,
    /// Plain 16x16 soup (`25p`)
    Percent25,
    /// 16x16 soup overlaid with its quarter-turn (`75p`)
    Percent75,
}

impl Symmetry {
    /// Every supported base symmetry
    pub const ALL: [Self; 25] = [
        Self::C1,
        Self::C2Cell,
        Self::C2Edge,
        Self::C2Vertex,
        Self::C4Cell,
        Self::C4Vertex,
        Self::D2PlusCell,
        Self::D2PlusEdge,
        Self::D2Diagonal,
        Self::D4PlusCell,
        Self::D4PlusEdge,
        Self::D4PlusVertex,
        Self::D4DiagonalCell,
        Self::D4DiagonalVertex,
        Self::D8Cell,
        Self::D8Vertex,
        Self::Strip8x32,
        Self::Strip4x64,
        Self::Strip2x128,
        Self::Strip1x256,
        Self::Strip1x256Even,
        Self::Strip1x256Odd,
        Self::Tile32x32,
        Self::Percent25,
        Self::Percent75,
    ];

    /// Conventional label, e.g. `D4_+2`
    pub const fn label(self) -> &'static str {
        match self {
            Self::C1 => "C1",
            Self::C2Cell => "C2_1",
            Self::C2Edge => "C2_2",
            Self::C2Vertex => "C2_4",
            Self::C4Cell => "C4_1",
            Self::C4Vertex => "C4_4",
            Self::D2PlusCell => "D2_+1",
            Self::D2PlusEdge => "D2_+2",
            Self::D2Diagonal => "D2_x",
            Self::D4PlusCell => "D4_+1",
            Self::D4PlusEdge => "D4_+2",
            Self::D4PlusVertex => "D4_+4",
            Self::D4DiagonalCell => "D4_x1",
            Self::D4DiagonalVertex => "D4_x4",
            Self::D8Cell => "D8_1",
            Self::D8Vertex => "D8_4",
            Self::Strip8x32 => "8x32",
            Self::Strip4x64 => "4x64",
            Self::Strip2x128 => "2x128",
            Self::Strip1x256 => "1x256",
            Self::Strip1x256Even => "1x256X2",
            Self::Strip1x256Odd => "1x256X2+1",
            Self::Tile32x32 => "32x32",
            Self::Percent25 => "25p",
            Self::Percent75 => "75p",
        }
    }

    /// Digest bytes per bitmap row
    const fn bytes_per_row(self) -> usize {
        match self {
            Self::Strip8x32 => 4,
            Self::Strip4x64 => 8,
            Self::Strip2x128 => 16,
            Self::Strip1x256 | Self::Strip1x256Even | Self::Strip1x256Odd => 32,
            _ => 2,
        }
    }

    /// 0 without a diagonal mirror, 1 with one, 2 with two
    const fn diagonal_mirrors(self) -> u8 {
        match self {
            Self::D2Diagonal | Self::D8Cell | Self::D8Vertex => 1,
            Self::D4DiagonalCell | Self::D4DiagonalVertex => 2,
            _ => 0,
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Symmetry {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|sym| sym.label() == s)
            .ok_or_else(|| SearchError::InvalidSymmetry {
                symmetry: s.to_string(),
            })
    }
}

/// A base symmetry with its inflation level and pseudo-object flag
///
/// Written as `i` once per inflation level followed by either the base
/// label or `Pseudo_<label>_Test`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SymmetrySpec {
    /// Base symmetry group
    pub base: Symmetry,
    /// Number of times every cell is blown up into a 2x2 block
    pub inflation: u32,
    /// Whether pseudo-objects are kept whole instead of decomposed
    pub pseudo: bool,
}

impl Default for SymmetrySpec {
    fn default() -> Self {
        Self {
            base: Symmetry::C1,
            inflation: 0,
            pseudo: false,
        }
    }
}

impl FromStr for SymmetrySpec {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SearchError::InvalidSymmetry {
            symmetry: s.to_string(),
        };

        let body = s.trim_start_matches('i');
        let inflation = u32::try_from(s.len() - body.len()).map_err(|_| invalid())?;

        let (label, pseudo) = match body
            .strip_prefix("Pseudo_")
            .and_then(|rest| rest.strip_suffix("_Test"))
        {
            Some(label) => (label, true),
            None => (body, false),
        };

        let base = label.parse::<Symmetry>().map_err(|_| invalid())?;
        Ok(Self {
            base,
            inflation,
            pseudo,
        })
    }
}

impl fmt::Display for SymmetrySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.inflation {
            f.write_str("i")?;
        }
        if self.pseudo {
            write!(f, "Pseudo_{}_Test", self.base)
        } else {
            write!(f, "{}", self.base)
        }
    }
}

/// A generated soup and its identifier within the haul
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Soup {
    id: u64,
    cells: Vec<(i32, i32)>,
}

impl Soup {
    /// Generate soup `id` of the haul rooted at `root`
    pub fn generate(root: &str, id: u64, symmetry: &SymmetrySpec) -> Self {
        Self {
            id,
            cells: generate(&seed(root, id), symmetry),
        }
    }

    /// Index of the soup within its haul
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Live cells, possibly with repeats where symmetric images coincide
    pub fn cells(&self) -> &[(i32, i32)] {
        &self.cells
    }
}

/// String hashed to produce soup `id` of a haul
pub fn seed(root: &str, id: u64) -> String {
    format!("{root}{id}")
}

/// Live cells of the soup hashed from `seed`
///
/// Cells are emitted in a fixed order, and symmetric images that coincide
/// are emitted more than once.
pub fn generate(seed: &str, symmetry: &SymmetrySpec) -> Vec<(i32, i32)> {
    let digest = Sha256::digest(seed.as_bytes());
    let sym = symmetry.base;
    let per_row = sym.bytes_per_row();
    let diagonal = sym.diagonal_mirrors();

    let mut cells = Vec::new();
    for (j, byte) in digest.iter().enumerate() {
        for k in 0..8 {
            if byte & (1 << (7 - k)) == 0 {
                continue;
            }
            let x = (k + 8 * (j % per_row)) as i32;
            let y = (j / per_row) as i32;

            if diagonal == 0 || x >= y {
                cells.push((x, y));
            } else if sym == Symmetry::D4DiagonalCell {
                cells.push((y, -x));
            } else if sym == Symmetry::D4DiagonalVertex {
                cells.push((y, -x - 1));
            }

            match sym {
                Symmetry::Strip1x256Odd => cells.push((-x, y)),
                Symmetry::Strip1x256Even => cells.push((-1 - x, y)),
                Symmetry::Tile32x32 => {
                    cells.extend([(x + 16, y), (x, y + 16), (x + 16, y + 16)]);
                }
                Symmetry::Percent75 => cells.push((16 - y, x)),
                Symmetry::D4DiagonalCell if x == y => cells.push((y, -x)),
                Symmetry::D4DiagonalVertex if x == y => cells.push((y, -x - 1)),
                _ => {}
            }
        }
    }

    if diagonal >= 1 {
        append_images(&mut cells, |(a, b)| (b, a));
        if diagonal == 2 {
            if sym == Symmetry::D4DiagonalCell {
                append_images(&mut cells, |(a, b)| (-b, -a));
            } else {
                append_images(&mut cells, |(a, b)| (-b - 1, -a - 1));
            }
            return inflate(cells, symmetry.inflation);
        }
    }

    match sym {
        Symmetry::D2PlusCell | Symmetry::D4PlusCell | Symmetry::D4PlusEdge => {
            append_images(&mut cells, |(a, b)| (a, -b));
        }
        Symmetry::D2PlusEdge | Symmetry::D4PlusVertex => {
            append_images(&mut cells, |(a, b)| (a, -b - 1));
        }
        _ => {}
    }

    match sym {
        Symmetry::D4PlusCell => append_images(&mut cells, |(a, b)| (-a, b)),
        Symmetry::D4PlusEdge | Symmetry::D4PlusVertex => {
            append_images(&mut cells, |(a, b)| (-a - 1, b));
        }
        _ => {}
    }

    match sym {
        Symmetry::C2Cell | Symmetry::C4Cell | Symmetry::D8Cell => {
            append_images(&mut cells, |(a, b)| (-a, -b));
        }
        Symmetry::C2Edge => append_images(&mut cells, |(a, b)| (-a, -b - 1)),
        Symmetry::C2Vertex | Symmetry::C4Vertex | Symmetry::D8Vertex => {
            append_images(&mut cells, |(a, b)| (-a - 1, -b - 1));
        }
        _ => {}
    }

    match sym {
        Symmetry::C4Cell | Symmetry::D8Cell => append_images(&mut cells, |(a, b)| (b, -a)),
        Symmetry::C4Vertex | Symmetry::D8Vertex => {
            append_images(&mut cells, |(a, b)| (b, -a - 1));
        }
        _ => {}
    }

    inflate(cells, symmetry.inflation)
}

/// Append the image of every current cell under `map`
fn append_images<F>(cells: &mut Vec<(i32, i32)>, map: F)
where
    F: Fn((i32, i32)) -> (i32, i32),
{
    let images: Vec<(i32, i32)> = cells.iter().map(|&c| map(c)).collect();
    cells.extend(images);
}

fn inflate(mut cells: Vec<(i32, i32)>, levels: u32) -> Vec<(i32, i32)> {
    for _ in 0..levels {
        cells = cells
            .into_iter()
            .flat_map(|(a, b)| {
                [
                    (2 * a, 2 * b),
                    (2 * a + 1, 2 * b),
                    (2 * a, 2 * b + 1),
                    (2 * a + 1, 2 * b + 1),
                ]
            })
            .collect();
    }
    cells
}
