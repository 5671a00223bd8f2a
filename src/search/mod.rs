//! Census engine and the state it accumulates

/// Object cache and memoised decompositions
pub mod cache;
/// Object counts, soup scores and rollback
pub mod census;
/// Page processing and error correction
pub mod engine;
/// Adaptive page sizing
pub mod scheduler;
/// Points and common names
pub mod scoring;
/// Segmentation of pages into clusters
pub mod segment;
