//! Search constants and runtime configuration defaults

// Stabilisation phase I: population plateau checks
/// Generations per step of the short-transient hash check
pub const PLATEAU_SHORT_PERIOD: u64 = 12;
/// Attempts made by the short-transient hash check
pub const PLATEAU_SHORT_ATTEMPTS: usize = 10;
/// Generations per step of the fine population plateau check
pub const PLATEAU_FINE_PERIOD: u64 = 12;
/// Generations per step of the coarse population plateau check
pub const PLATEAU_COARSE_PERIOD: u64 = 30;
/// Consecutive unchanged populations required to accept a plateau
pub const PLATEAU_SECURITY: usize = 30;
/// Maximum steps spent looking for a plateau
pub const PLATEAU_LENGTH: usize = 200;

// Stabilisation phase II: region hash cycles
/// Generations between successive region hashes
pub const CYCLE_STEP: u64 = 30;
/// Maximum number of region hashes taken before falling back
pub const CYCLE_ITERATIONS: usize = 4000;
/// Half-width of the square region hashed while searching for cycles
pub const CYCLE_REGION_RADIUS: i32 = 2000;
/// Re-runs of a candidate period that must preserve the population
pub const CYCLE_CONFIRMATIONS: usize = 20;
/// Period assumed when a candidate cycle fails confirmation
pub const CYCLE_FAILED_PERIOD: u64 = 4000;

// Stabilisation phase III
/// Binary logarithm of the generations skipped when no cycle is found
pub const FALLBACK_EXPONENT: u32 = 16;
/// Step size reported after the fallback skip
pub const FALLBACK_STEP_SIZE: u32 = 12;
/// Step size reported by the plateau checks on the fine period
pub const PLATEAU_FINE_STEP_SIZE: u32 = 4;
/// Step size reported by the plateau check on the coarse period
pub const PLATEAU_COARSE_STEP_SIZE: u32 = 5;
/// Smallest step size ever reported for a confirmed cycle
pub const MIN_CYCLE_STEP_SIZE: u32 = 3;

// Object classification
/// Generations searched by the bijective period test
pub const MAX_BIJECTIVE_PERIOD: u64 = 1000;
/// Maximum period considered by the linear-growth analyser
pub const LINEAR_MAX_PERIOD: usize = 1500;
/// Binary logarithm of the power-law analyser's sampling interval
pub const POWER_STEP_EXPONENT: u32 = 8;
/// Number of population samples taken by the power-law analyser
pub const POWER_SAMPLES: usize = 1500;
/// Largest bounding box side that can be canonised
pub const CANONICAL_BOX: i32 = 40;
/// Number of rows packed into one canonical-code character
pub const CANONICAL_BAND: i32 = 5;

// Power-law slope buckets
/// Slopes below this are left unidentified
pub const SLOPE_UNIDENTIFIED: f64 = 1.10;
/// Slopes below this are replicators
pub const SLOPE_REPLICATOR: f64 = 1.65;
/// Slopes below this are linear growth
pub const SLOPE_LINEAR: f64 = 2.05;
/// Slopes below this are explosive; anything above is quadratic
pub const SLOPE_EXPLOSIVE: f64 = 2.8;

// Decomposition
/// Generations of each contagion or percolation pass
pub const INFECTION_GENERATIONS: u64 = 4096;
/// Generations of geometric coalescence for moving objects
pub const MOVING_COALESCE_GENERATIONS: u64 = 8;
/// Spaceships with periods below this are decomposed
pub const DECOMPOSE_SPACESHIP_PERIOD: u64 = 10;

// Census engine
/// Side of the largest bounding box eligible for the object cache
pub const CACHE_KEY_BOX: i32 = 7;
/// Maximum sample soups remembered per object
pub const SAMPLE_LIMIT: usize = 10;
/// Soup scores retained when compacting the score table
pub const TOP_SCORES: usize = 100;
/// Fixed margin added to the soup spacing on a page
pub const PAGE_MARGIN: i64 = 1000;
/// Binary logarithm of the generations run during error correction
pub const ERROR_CORRECTION_EXPONENT: u32 = 18;
/// Extra soup spacing used during error correction
pub const ERROR_CORRECTION_MARGIN: i64 = 1 << 19;
/// Minimum step size used during error correction
pub const ERROR_CORRECTION_STEP_SIZE: u32 = 12;
/// Step size every page starts from before stabilisation raises it
pub const INITIAL_STEP_SIZE: u32 = 3;

// Page scheduling
/// Default square root of the number of soups per page
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Smallest square root of soups per page the tuner may choose
pub const MIN_PAGE_SIZE: usize = 5;
/// Pages per tuning round
pub const PAGES_PER_ROUND: usize = 1000;
/// Pages at the start of each round spent sampling page sizes
pub const SAMPLED_PAGES: usize = 150;

// Search defaults
/// Default rule searched
pub const DEFAULT_RULE: &str = "B3/S23";
/// Default soup symmetry
pub const DEFAULT_SYMMETRY: &str = "C1";
/// Default number of soups per haul
pub const DEFAULT_SOUPS: u64 = 1_000_000;
/// Default number of hauls
pub const DEFAULT_HAULS: u64 = 1;
/// Length of generated root seeds
pub const ROOT_LENGTH: usize = 12;
/// Characters used for generated root seeds
pub const ROOT_ALPHABET: &str = "abcdefghijkmnpqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ23456789";
/// Version string written into census records
pub const RECORD_VERSION: &str = "v1.2 soupcensus";
/// Most common objects logged at the end of a haul
pub const SUMMARY_OBJECTS: usize = 10;
/// Filename prefix of census records
pub const RECORD_PREFIX: &str = "search_";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Budgets of the stabilisation detector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StabilityConfig {
    /// Maximum region hashes taken in phase II
    pub cycle_iterations: usize,
    /// Generations between region hashes in phase II
    pub cycle_step: u64,
    /// Binary logarithm of the fallback skip
    pub fallback_exponent: u32,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            cycle_iterations: CYCLE_ITERATIONS,
            cycle_step: CYCLE_STEP,
            fallback_exponent: FALLBACK_EXPONENT,
        }
    }
}

/// Budgets of the object classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Generations searched for an absolute cycle
    pub max_period: u64,
    /// Largest period the linear-growth analyser looks for
    pub linear_max_period: usize,
    /// Binary logarithm of the power-law sampling interval
    pub power_step_exponent: u32,
    /// Number of power-law samples
    pub power_samples: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            max_period: MAX_BIJECTIVE_PERIOD,
            linear_max_period: LINEAR_MAX_PERIOD,
            power_step_exponent: POWER_STEP_EXPONENT,
            power_samples: POWER_SAMPLES,
        }
    }
}

/// Complete configuration of a census engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Stabilisation budgets
    pub stability: StabilityConfig,
    /// Classification budgets
    pub classifier: ClassifierConfig,
    /// Whether pathological pages are rolled back and reprocessed
    pub error_correction: bool,
    /// Binary logarithm of the generations run during error correction
    pub error_correction_exponent: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            stability: StabilityConfig::default(),
            classifier: ClassifierConfig::default(),
            error_correction: true,
            error_correction_exponent: ERROR_CORRECTION_EXPONENT,
        }
    }
}
