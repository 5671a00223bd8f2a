//! Canonical shape strings for bounded patterns
//!
//! A phase is cut into horizontal bands five cells tall. Each column of a
//! band becomes one base-36 character whose bits are the column's cells, top
//! cell lowest. Runs of empty columns are shortened: one is `0`, two `w`,
//! three `x`, and `y` followed by a character for four or more. Bands are
//! separated by `z`. Among the eight orientations of every phase in one
//! period, the shortest string wins and ties go to the lexicographically
//! smallest.

use crate::io::configuration::{CANONICAL_BAND, CANONICAL_BOX};
use crate::io::error::{Result, malformed_code};
use crate::life::raster::Raster;
use crate::life::universe::Universe;
use std::cmp::Ordering;

const SYMBOLS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Canonise the pattern in `universe` over `period` generations
///
/// Returns `Some("0")` for an empty universe and `None` when the pattern
/// never fits in a 40x40 box. The universe is advanced `period`
/// generations (fewer if it empties).
pub fn canonise(universe: &mut dyn Universe, period: u64) -> Option<String> {
    let mut best: Option<String> = None;

    for _ in 0..period {
        let Some(rect) = universe.bounding_rect() else {
            return Some("0".to_string());
        };
        if rect.width <= CANONICAL_BOX && rect.height <= CANONICAL_BOX {
            let raster = Raster::from_cells(&universe.live_cells(), rect);
            for candidate in orientations(&raster) {
                best = Some(match best {
                    Some(current) if !is_better(&candidate, &current) => current,
                    _ => candidate,
                });
            }
        }
        universe.run(1);
    }

    best
}

/// Whether `a` is strictly better than `b`
fn is_better(a: &str, b: &str) -> bool {
    compare(a, b) == Ordering::Less
}

/// Shorter strings first, then lexicographic order
pub fn compare(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn orientations(raster: &Raster) -> impl Iterator<Item = String> + '_ {
    let w = raster.width() as i32;
    let h = raster.height() as i32;
    let frames = [
        (w, h, 0, 0, 1, 0, 0, 1),
        (w, h, w - 1, 0, -1, 0, 0, 1),
        (w, h, 0, h - 1, 1, 0, 0, -1),
        (w, h, w - 1, h - 1, -1, 0, 0, -1),
        (h, w, 0, 0, 0, 1, 1, 0),
        (h, w, w - 1, 0, 0, -1, 1, 0),
        (h, w, 0, h - 1, 0, 1, -1, 0),
        (h, w, w - 1, h - 1, 0, -1, -1, 0),
    ];
    frames
        .into_iter()
        .map(move |(length, breadth, ox, oy, a, b, c, d)| {
            encode(raster, length, breadth, (ox, oy), (a, b, c, d))
        })
}

/// Encode one orientation; `(a, b, c, d)` maps (column, row) offsets to
/// raster offsets from `origin`
fn encode(
    raster: &Raster,
    length: i32,
    breadth: i32,
    origin: (i32, i32),
    (a, b, c, d): (i32, i32, i32, i32),
) -> String {
    let mut out = String::new();
    let bands = (breadth - 1) / CANONICAL_BAND + 1;

    for v in 0..bands {
        if v != 0 {
            out.push('z');
        }
        let mut zeroes = 0usize;
        for u in 0..length {
            let mut column = 0usize;
            for w in 0..CANONICAL_BAND {
                let row = CANONICAL_BAND * v + w;
                let x = origin.0 + a * u + b * row;
                let y = origin.1 + c * u + d * row;
                column = (column >> 1) + 16 * usize::from(raster.get(x, y));
            }
            if column == 0 {
                zeroes += 1;
                continue;
            }
            match zeroes {
                0 => {}
                1 => out.push('0'),
                2 => out.push('w'),
                3 => out.push('x'),
                n => {
                    out.push('y');
                    out.push(symbol(n - 4));
                }
            }
            zeroes = 0;
            out.push(symbol(column));
        }
    }
    out
}

fn symbol(value: usize) -> char {
    SYMBOLS.get(value).map_or('?', |&b| char::from(b))
}

fn value_of(c: char) -> Option<usize> {
    c.to_digit(36).map(|v| v as usize)
}

/// Decode a canonical shape back into live cells
///
/// # Errors
///
/// Returns `MalformedCode` for characters outside `[0-9a-z]` or a `y`
/// escape without a following count.
pub fn decode(shape: &str) -> Result<Vec<(i32, i32)>> {
    let bad = |reason: &str| malformed_code(&shape, &reason);
    let mut cells = Vec::new();
    let mut columns: Vec<usize> = Vec::new();
    let mut band = 0;
    let mut chars = shape.chars();

    while let Some(c) = chars.next() {
        let value = value_of(c).ok_or_else(|| bad("unexpected character"))?;
        match value {
            0..32 => columns.push(value),
            32 => columns.extend([0, 0]),
            33 => columns.extend([0, 0, 0]),
            34 => {
                let run = chars
                    .next()
                    .and_then(value_of)
                    .ok_or_else(|| bad("'y' must be followed by a run length"))?;
                columns.extend(std::iter::repeat_n(0, 4 + run));
            }
            _ => {
                flush_band(&columns, band, &mut cells);
                columns.clear();
                band += 1;
            }
        }
    }
    flush_band(&columns, band, &mut cells);
    Ok(cells)
}

/// Emit the live cells of one band of packed columns
fn flush_band(columns: &[usize], band: i32, cells: &mut Vec<(i32, i32)>) {
    for (u, &column) in columns.iter().enumerate() {
        for j in 0..CANONICAL_BAND {
            if column & (1 << j) != 0 {
                cells.push((u as i32, CANONICAL_BAND * band + j));
            }
        }
    }
}
