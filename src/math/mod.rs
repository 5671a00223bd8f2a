//! Numerical helpers for growth analysis

/// MD5 hex digests
pub mod digest;
/// Exact period detection over interleaved polynomial sequences
pub mod periodicity;
/// Least-squares slope fitting
pub mod regression;
