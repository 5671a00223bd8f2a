//! Exact period detection for interleaved polynomial sequences
//!
//! A sequence is an interleaving of `p` polynomials of degree `d` when, for
//! every start index, the `(d + 1)`-th finite difference of the samples taken
//! every `p` terms vanishes. Linear-growth patterns (guns, puffers, rakes)
//! produce populations of exactly this form once their transient has passed.

use num_traits::{PrimInt, Signed};

/// Smallest period `p < max_period` for which `sequence` is an interleaving of
/// degree-`degree` polynomials over the first `max_period` start indices
///
/// Returns `None` if no such period exists or the sequence is too short to
/// test a candidate.
pub fn deep_period<T>(sequence: &[T], max_period: usize, degree: usize) -> Option<usize>
where
    T: PrimInt + Signed,
{
    (1..max_period).find(|&p| {
        (0..max_period).all(|i| vanishes(sequence, i, p, degree).unwrap_or(false))
    })
}

/// Whether the repeated finite difference starting at `start` with stride
/// `stride` is zero; `None` if the samples run off the end
fn vanishes<T>(sequence: &[T], start: usize, stride: usize, degree: usize) -> Option<bool>
where
    T: PrimInt + Signed,
{
    let mut diffs: Vec<T> = (0..degree + 2)
        .map(|j| sequence.get(start + j * stride).copied())
        .collect::<Option<_>>()?;

    for _ in 0..=degree {
        for k in 0..diffs.len() - 1 {
            let next = *diffs.get(k + 1)?;
            let slot = diffs.get_mut(k)?;
            *slot = *slot - next;
        }
        diffs.pop();
    }

    diffs.first().map(|d| d.is_zero())
}
