//! Classification of infinite-growth patterns

use crate::analysis::code::{GrowthClass, ObjectCode};
use crate::io::configuration::{SLOPE_EXPLOSIVE, SLOPE_LINEAR, SLOPE_REPLICATOR, SLOPE_UNIDENTIFIED};
use crate::life::universe::Universe;
use crate::math::digest::md5_hex;
use crate::math::periodicity::deep_period;
use crate::math::regression::slope_of_points;

/// Identify a linear-growth pattern (gun, puffer, rake, ...)
///
/// Samples the population for `3 * max_period` generations, finds the
/// period `p` of its linear interleaving and the period `q` of the
/// per-period increments, then fingerprints the increments over `q`
/// generations. Returns `None` if no such periods exist or the pattern
/// does not actually grow.
pub fn linear_growth(universe: &mut dyn Universe, max_period: usize) -> Option<ObjectCode> {
    let populations: Vec<i64> = (0..3 * max_period)
        .map(|_| {
            universe.run(1);
            universe.population() as i64
        })
        .collect();

    let period = deep_period(&populations, max_period, 1)?;

    let increments: Vec<i64> = populations
        .iter()
        .zip(populations.iter().skip(period))
        .take(2 * max_period)
        .map(|(a, b)| b - a)
        .collect();
    let secondary = deep_period(&increments, max_period, 0)?;

    let (mut rate, mut squares, mut cubes) = (0i64, 0i64, 0i64);
    for (a, b) in populations
        .iter()
        .zip(populations.iter().skip(secondary))
        .take(period)
    {
        let delta = b - a;
        rate += delta;
        squares += delta * delta;
        cubes += delta * delta * delta;
    }

    if rate == 0 {
        return None;
    }

    Some(ObjectCode::LinearGrowth {
        period,
        secondary,
        rate,
        digest: md5_hex(&format!("{squares}#{cubes}")),
    })
}

/// Bucket the growth exponent of a pattern whose population follows a
/// power law
///
/// Samples the cumulative population every `2^step_exponent` generations
/// and regresses `ln(cumulative + 1)` on `ln(sample)` over the second half.
pub fn power_law_growth(
    universe: &mut dyn Universe,
    step_exponent: u32,
    samples: usize,
) -> Option<GrowthClass> {
    let mut cumulative = universe.population() as f64;
    let mut points = Vec::with_capacity(samples / 2);

    for i in 1..samples {
        universe.fast_forward(1 << step_exponent);
        cumulative += universe.population() as f64;
        if 2 * i > samples {
            points.push(((i as f64).ln(), (cumulative + 1.0).ln()));
        }
    }

    classify_slope(slope_of_points(&points)?)
}

/// Map a log-log slope to its growth class
pub fn classify_slope(slope: f64) -> Option<GrowthClass> {
    if slope < SLOPE_UNIDENTIFIED {
        None
    } else if slope < SLOPE_REPLICATOR {
        Some(GrowthClass::Replicator)
    } else if slope < SLOPE_LINEAR {
        Some(GrowthClass::Linear)
    } else if slope < SLOPE_EXPLOSIVE {
        Some(GrowthClass::Explosive)
    } else {
        Some(GrowthClass::Quadratic)
    }
}
