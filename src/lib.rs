//! Random soup search and object census for Life-like cellular automata
//!
//! Soups are generated deterministically from a root string, run until
//! they stabilise, and their ash is segmented into objects. Every object is
//! identified by a canonical code and counted; soups earn points for rare
//! objects. Results are summarised in a textual census record per haul.

#![forbid(unsafe_code)]

/// Soup generation and object analysis: canonisation, classification,
/// decomposition and growth detection
pub mod analysis;
/// Command line, configuration, errors, progress and census records
pub mod io;
/// Rules and the universes that simulate them
pub mod life;
/// Period detection, regression and digests
pub mod math;
/// Census engine, caches, scoring and page scheduling
pub mod search;

pub use io::error::{Result, SearchError};
