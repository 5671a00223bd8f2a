//! Analysis of soups and the objects they leave behind

/// Canonical shape encoding and decoding
pub mod canon;
/// Object classification: cycle detection and spaceship unions
pub mod classify;
/// Object codes and their textual form
pub mod code;
/// Separation of pseudo-objects into pure components
pub mod decompose;
/// Linear and power-law growth analysis
pub mod growth;
/// Deterministic soup generation
pub mod soup;
/// Stabilisation detection
pub mod stabilise;
