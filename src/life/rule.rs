//! Outer-totalistic Life-like rules in birth/survival notation

use crate::io::error::{Result, SearchError};
use std::fmt;

/// A radius-1 outer-totalistic rule stored as neighbour-count bitmasks
///
/// Bit `n` of `birth` is set when a vacuum cell with `n` live neighbours
/// becomes live; bit `n` of `survival` when a live cell with `n` live
/// neighbours stays live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    /// Birth conditions
    pub birth: u16,
    /// Survival conditions
    pub survival: u16,
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

impl Rule {
    /// Conway's Game of Life, B3/S23
    pub const fn conway() -> Self {
        Self {
            birth: 1 << 3,
            survival: (1 << 2) | (1 << 3),
        }
    }

    /// Parse `B3/S23`, `b3s23`, `B36/S23` and similar notations
    ///
    /// # Errors
    ///
    /// Returns `InvalidRule` for malformed strings and for rules with `B0`,
    /// which have no finite soups.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = |reason: &str| SearchError::InvalidRule {
            rule: text.to_string(),
            reason: reason.to_string(),
        };

        let lower = text.trim().to_ascii_lowercase();
        let body = lower
            .strip_prefix('b')
            .ok_or_else(|| invalid("expected a leading 'B'"))?;
        let (birth_str, survival_str) = body
            .split_once('s')
            .ok_or_else(|| invalid("expected an 'S' section"))?;
        let birth_str = birth_str.strip_suffix('/').unwrap_or(birth_str);

        let birth = parse_counts(birth_str).ok_or_else(|| invalid("birth counts must be digits 0-8"))?;
        let survival =
            parse_counts(survival_str).ok_or_else(|| invalid("survival counts must be digits 0-8"))?;

        if birth & 1 != 0 {
            return Err(invalid("B0 rules are not supported"));
        }

        Ok(Self { birth, survival })
    }

    /// Whether a vacuum cell with `neighbours` live neighbours is born
    pub const fn births(&self, neighbours: u32) -> bool {
        neighbours <= 8 && (self.birth >> neighbours) & 1 == 1
    }

    /// Whether a live cell with `neighbours` live neighbours survives
    pub const fn survives(&self, neighbours: u32) -> bool {
        neighbours <= 8 && (self.survival >> neighbours) & 1 == 1
    }

    /// Smallest neighbour count that causes a birth, if any
    pub fn min_birth(&self) -> Option<u32> {
        (1..=8).find(|&n| self.births(n))
    }

    /// Whether the standard glider can exist in this rule
    ///
    /// Only rules with S2, S3, not S1, not S4, not B4 and not B5 keep the
    /// glider intact, which is what glider expunging relies on.
    pub const fn gliders_exist(&self) -> bool {
        self.survives(2)
            && self.survives(3)
            && !self.survives(1)
            && !self.survives(4)
            && !self.births(4)
            && !self.births(5)
    }

    /// Rule in `B3/S23` form
    pub fn slashed(&self) -> String {
        format!("B{}/S{}", digits(self.birth), digits(self.survival))
    }

    /// Rule in `B3S23` form, used in census records
    pub fn alphanumeric(&self) -> String {
        format!("B{}S{}", digits(self.birth), digits(self.survival))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slashed())
    }
}

impl std::str::FromStr for Rule {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_counts(s: &str) -> Option<u16> {
    let mut mask = 0u16;
    for ch in s.chars() {
        let n = ch.to_digit(10)?;
        if n > 8 {
            return None;
        }
        mask |= 1 << n;
    }
    Some(mask)
}

fn digits(mask: u16) -> String {
    (0..=8)
        .filter(|&n| (mask >> n) & 1 == 1)
        .map(|n| char::from(b'0' + n as u8))
        .collect()
}
