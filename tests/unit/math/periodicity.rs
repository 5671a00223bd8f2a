//! Tests for interleaved polynomial period detection

#[cfg(test)]
mod tests {
    use soupcensus::math::periodicity::deep_period;

    // Tests a plain arithmetic progression has period 1
    // Verified by skipping the final difference
    #[test]
    fn test_linear_sequence() {
        let seq: Vec<i64> = (0..40).map(|i| 3 * i + 7).collect();
        assert_eq!(deep_period(&seq, 10, 1), Some(1));
        assert_eq!(deep_period(&seq, 10, 0), None);
    }

    // Tests two interleaved progressions are found at period 2
    // Verified by starting the period search at 2
    #[test]
    fn test_interleaved_sequence() {
        let seq: Vec<i64> = (0..60)
            .map(|i| if i % 2 == 0 { 5 * i } else { -i + 100 })
            .collect();
        assert_eq!(deep_period(&seq, 10, 1), Some(2));
    }

    // Tests a periodic sequence is found with degree zero
    // Verified by differencing one extra time
    #[test]
    fn test_constant_interleaving() {
        let seq: Vec<i32> = (0..30)
            .map(|i| match i % 3 {
                0 => 4,
                1 => 9,
                _ => 1,
            })
            .collect();
        assert_eq!(deep_period(&seq, 5, 0), Some(3));
    }

    // Tests short or irregular sequences have no period
    // Verified by treating missing samples as zero
    #[test]
    fn test_no_period() {
        let squares: Vec<i64> = (0..40).map(|i| i * i * i).collect();
        assert_eq!(deep_period(&squares, 10, 1), None);
        assert_eq!(deep_period(&[1i64, 2, 3], 10, 1), None);
    }
}
