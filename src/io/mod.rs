//! Input/output: command line, configuration, errors, progress and census
//! records

/// Command-line interface and the search runner
pub mod cli;
/// Named constants and tunable budgets
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Progress display
pub mod progress;
/// Census record rendering, verification and output
pub mod record;
