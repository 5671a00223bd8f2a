//! Cellular automaton rules and the simulation engine used by the census

/// Dense bit rasters of bounded regions
pub mod raster;
/// Outer-totalistic birth/survival rules
pub mod rule;
/// Hash-map backed reference universe
pub mod sparse;
/// Engine contract, rectangles and auxiliary rule tables
pub mod universe;
