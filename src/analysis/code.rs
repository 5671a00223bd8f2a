//! Object codes: the census vocabulary
//!
//! Every object the census counts is identified by one of these codes.
//! Bounded objects carry a canonical shape string (`xs4_33`, `xp2_7`,
//! `xq4_153`); unbounded or unresolvable objects carry a descriptor.

use crate::io::error::{Result, malformed_code};
use std::fmt;
use std::str::FromStr;

/// Growth classes distinguished by the power-law analyser
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GrowthClass {
    /// Log-log slope in [1.10, 1.65)
    Replicator,
    /// Log-log slope in [1.65, 2.05)
    Linear,
    /// Log-log slope in [2.05, 2.8)
    Explosive,
    /// Log-log slope of 2.8 or more
    Quadratic,
}

impl GrowthClass {
    const fn label(self) -> &'static str {
        match self {
            Self::Replicator => "REPLICATOR",
            Self::Linear => "LINEAR",
            Self::Explosive => "EXPLOSIVE",
            Self::Quadratic => "QUADRATIC",
        }
    }
}

/// Bounded objects too large to canonise in any phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Oversized {
    /// Still life with the given population
    StillLife(usize),
    /// Oscillator with the given period
    Oscillator(u64),
    /// Spaceship with the given period
    Spaceship(u64),
}

/// Identifier of a counted object
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectCode {
    /// `xs<population>_<shape>`
    StillLife {
        /// Live cells
        population: usize,
        /// Canonical shape
        shape: String,
    },
    /// `xp<period>_<shape>`
    Oscillator {
        /// Period
        period: u64,
        /// Canonical shape
        shape: String,
    },
    /// `xq<period>_<shape>`
    Spaceship {
        /// Period
        period: u64,
        /// Canonical shape
        shape: String,
    },
    /// `yl<period>_<secondary>_<rate>_<digest>`
    LinearGrowth {
        /// Period of the population's first difference
        period: usize,
        /// Period of the second difference
        secondary: usize,
        /// Population gained per period
        rate: i64,
        /// MD5 of the growth moments
        digest: String,
    },
    /// `zz_<CLASS>`
    PowerLawGrowth(GrowthClass),
    /// `PATHOLOGICAL`
    Pathological,
    /// `ov_s<N>`, `ov_p<P>` or `ov_q<P>`
    Oversized(Oversized),
    /// `USS_<light>_<middle>_<heavy>`
    SpaceshipUnion {
        /// Lightweight spaceships
        light: u64,
        /// Middleweight spaceships
        middle: u64,
        /// Heavyweight spaceships
        heavy: u64,
    },
}

impl ObjectCode {
    /// The glider
    pub fn glider() -> Self {
        Self::Spaceship {
            period: 4,
            shape: "153".to_string(),
        }
    }

    /// The lightweight spaceship
    pub fn lwss() -> Self {
        Self::Spaceship {
            period: 4,
            shape: "6frc".to_string(),
        }
    }

    /// The middleweight spaceship
    pub fn mwss() -> Self {
        Self::Spaceship {
            period: 4,
            shape: "27dee6".to_string(),
        }
    }

    /// The heavyweight spaceship
    pub fn hwss() -> Self {
        Self::Spaceship {
            period: 4,
            shape: "27deee6".to_string(),
        }
    }

    /// Build the code of a bounded object from its signed period
    ///
    /// Positive periods are stationary, negative periods are moving.
    pub fn bounded(period: i64, population: usize, shape: String) -> Self {
        match period {
            1 => Self::StillLife { population, shape },
            p if p > 0 => Self::Oscillator {
                period: p.unsigned_abs(),
                shape,
            },
            p => Self::Spaceship {
                period: p.unsigned_abs(),
                shape,
            },
        }
    }

    /// Canonical shape, if any
    pub fn shape(&self) -> Option<&str> {
        match self {
            Self::StillLife { shape, .. }
            | Self::Oscillator { shape, .. }
            | Self::Spaceship { shape, .. } => Some(shape),
            _ => None,
        }
    }

    /// Period of a canonised object (1 for still lifes)
    pub const fn period(&self) -> Option<u64> {
        match self {
            Self::StillLife { .. } => Some(1),
            Self::Oscillator { period, .. } | Self::Spaceship { period, .. } => Some(*period),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StillLife { population, shape } => write!(f, "xs{population}_{shape}"),
            Self::Oscillator { period, shape } => write!(f, "xp{period}_{shape}"),
            Self::Spaceship { period, shape } => write!(f, "xq{period}_{shape}"),
            Self::LinearGrowth {
                period,
                secondary,
                rate,
                digest,
            } => write!(f, "yl{period}_{secondary}_{rate}_{digest}"),
            Self::PowerLawGrowth(class) => write!(f, "zz_{}", class.label()),
            Self::Pathological => f.write_str("PATHOLOGICAL"),
            Self::Oversized(Oversized::StillLife(n)) => write!(f, "ov_s{n}"),
            Self::Oversized(Oversized::Oscillator(p)) => write!(f, "ov_p{p}"),
            Self::Oversized(Oversized::Spaceship(p)) => write!(f, "ov_q{p}"),
            Self::SpaceshipUnion {
                light,
                middle,
                heavy,
            } => write!(f, "USS_{light}_{middle}_{heavy}"),
        }
    }
}

impl FromStr for ObjectCode {
    type Err = crate::io::error::SearchError;

    fn from_str(s: &str) -> Result<Self> {
        let bad = |reason: &str| malformed_code(&s, &reason);
        let number = |text: &str| -> Result<u64> {
            text.parse::<u64>().map_err(|_| bad("expected a number"))
        };

        if s == "PATHOLOGICAL" {
            return Ok(Self::Pathological);
        }

        if let Some(class) = s.strip_prefix("zz_") {
            let class = match class {
                "REPLICATOR" => GrowthClass::Replicator,
                "LINEAR" => GrowthClass::Linear,
                "EXPLOSIVE" => GrowthClass::Explosive,
                "QUADRATIC" => GrowthClass::Quadratic,
                _ => return Err(bad("unknown growth class")),
            };
            return Ok(Self::PowerLawGrowth(class));
        }

        if let Some(rest) = s.strip_prefix("ov_") {
            let (kind, value) = rest.split_at_checked(1).ok_or_else(|| bad("empty descriptor"))?;
            let value = number(value)?;
            return match kind {
                "s" => Ok(Self::Oversized(Oversized::StillLife(value as usize))),
                "p" => Ok(Self::Oversized(Oversized::Oscillator(value))),
                "q" => Ok(Self::Oversized(Oversized::Spaceship(value))),
                _ => Err(bad("unknown oversized kind")),
            };
        }

        if let Some(rest) = s.strip_prefix("USS_") {
            let counts: Vec<u64> = rest.split('_').map(number).collect::<Result<_>>()?;
            let &[light, middle, heavy] = counts.as_slice() else {
                return Err(bad("expected three spaceship counts"));
            };
            return Ok(Self::SpaceshipUnion {
                light,
                middle,
                heavy,
            });
        }

        if let Some(rest) = s.strip_prefix("yl") {
            let parts: Vec<&str> = rest.split('_').collect();
            let &[period, secondary, rate, digest] = parts.as_slice() else {
                return Err(bad("expected four linear-growth fields"));
            };
            return Ok(Self::LinearGrowth {
                period: number(period)? as usize,
                secondary: number(secondary)? as usize,
                rate: rate.parse().map_err(|_| bad("expected a growth rate"))?,
                digest: digest.to_string(),
            });
        }

        let (prefix, shape) = s.split_once('_').ok_or_else(|| bad("missing '_'"))?;
        if shape.is_empty()
            || !shape
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        {
            return Err(bad("shape must be lowercase alphanumeric"));
        }
        let shape = shape.to_string();

        match prefix.split_at_checked(2) {
            Some(("xs", n)) => Ok(Self::StillLife {
                population: number(n)? as usize,
                shape,
            }),
            Some(("xp", p)) => Ok(Self::Oscillator {
                period: number(p)?,
                shape,
            }),
            Some(("xq", p)) => Ok(Self::Spaceship {
                period: number(p)?,
                shape,
            }),
            _ => Err(bad("unknown prefix")),
        }
    }
}
