//! Tests for search constants and configuration defaults

#[cfg(test)]
mod tests {
    use soupcensus::io::configuration::{
        CACHE_KEY_BOX, CANONICAL_BOX, ClassifierConfig, DEFAULT_PAGE_SIZE, EngineConfig,
        MAX_BIJECTIVE_PERIOD, MIN_PAGE_SIZE, PAGES_PER_ROUND, SAMPLE_LIMIT, SAMPLED_PAGES,
        SLOPE_EXPLOSIVE, SLOPE_LINEAR, SLOPE_REPLICATOR, SLOPE_UNIDENTIFIED, StabilityConfig,
        TOP_SCORES,
    };

    // Tests the cache box fits in a 64-bit key
    // Verified by enlarging the cache box to 8
    #[test]
    fn test_cache_key_fits_in_word() {
        assert!(CACHE_KEY_BOX * CACHE_KEY_BOX <= 64);
        assert!(CACHE_KEY_BOX < CANONICAL_BOX);
    }

    // Tests the growth slope buckets are increasing
    // Verified by swapping the linear and explosive bounds
    #[test]
    fn test_slope_buckets_ordered() {
        assert!(SLOPE_UNIDENTIFIED < SLOPE_REPLICATOR);
        assert!(SLOPE_REPLICATOR < SLOPE_LINEAR);
        assert!(SLOPE_LINEAR < SLOPE_EXPLOSIVE);
    }

    // Tests page scheduling constants are consistent
    // Verified by sampling more pages than a round holds
    #[test]
    fn test_page_constants() {
        assert!(SAMPLED_PAGES < PAGES_PER_ROUND);
        assert_eq!(SAMPLED_PAGES % 3, 0);
        assert!(MIN_PAGE_SIZE <= DEFAULT_PAGE_SIZE);
    }

    // Tests record limits
    // Verified by changing constant values
    #[test]
    fn test_record_limits() {
        assert_eq!(SAMPLE_LIMIT, 10);
        assert_eq!(TOP_SCORES, 100);
    }

    // Tests defaults are built from the named constants
    // Verified by disabling error correction by default
    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!(config.error_correction);
        assert_eq!(config.classifier, ClassifierConfig::default());
        assert_eq!(config.classifier.max_period, MAX_BIJECTIVE_PERIOD);
        assert_eq!(config.stability, StabilityConfig::default());
        assert!(config.stability.cycle_step > 0);
    }
}
