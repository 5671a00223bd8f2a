//! Tests for canonical shape strings and their decoding

#[cfg(test)]
mod tests {
    use soupcensus::analysis::canon::{canonise, compare, decode};
    use soupcensus::life::rule::Rule;
    use soupcensus::life::sparse::SparseUniverse;
    use std::cmp::Ordering;

    fn universe(cells: &[(i32, i32)]) -> SparseUniverse {
        SparseUniverse::with_cells(Rule::conway(), cells)
    }

    // Tests the block canonises to its two full columns
    // Verified by emitting the top cell as the highest bit
    #[test]
    fn test_canonise_block() {
        let mut u = universe(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(canonise(&mut u, 1).as_deref(), Some("33"));
    }

    // Tests the vertical phase of the blinker wins as the shorter string
    // Verified by only inspecting the first phase
    #[test]
    fn test_canonise_prefers_shortest_orientation() {
        let mut u = universe(&[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(canonise(&mut u, 2).as_deref(), Some("7"));
    }

    // Tests the glider canonises to its familiar code over one period
    // Verified by comparing candidates lexicographically only
    #[test]
    fn test_canonise_glider() {
        let mut u = universe(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        assert_eq!(canonise(&mut u, 4).as_deref(), Some("153"));
    }

    // Tests canonisation does not depend on position or orientation
    // Verified by skipping the transposed frames
    #[test]
    fn test_canonise_orientation_invariant() {
        // Boat in two different orientations and positions
        let mut a = universe(&[(0, 0), (1, 0), (0, 1), (2, 1), (1, 2)]);
        let mut b = universe(&[(11, 20), (12, 20), (10, 21), (12, 21), (11, 22)]);
        let ca = canonise(&mut a, 1);
        assert_eq!(ca.as_deref(), Some("253"));
        assert_eq!(ca, canonise(&mut b, 1));
    }

    // Tests an empty universe canonises to "0"
    // Verified by returning None for empty universes
    #[test]
    fn test_canonise_empty() {
        let mut u = universe(&[]);
        assert_eq!(canonise(&mut u, 3).as_deref(), Some("0"));
    }

    // Tests patterns wider than the canonical box are rejected
    // Verified by raising the box limit
    #[test]
    fn test_canonise_oversized() {
        let mut u = universe(&[(0, 0), (1, 0), (0, 1), (1, 1), (60, 0), (61, 0), (60, 1), (61, 1)]);
        assert_eq!(canonise(&mut u, 1), None);
    }

    // Tests tall orientations are split into bands of five rows
    // Verified by packing six rows into one character
    #[test]
    fn test_canonise_uses_bands() {
        let mut u = universe(&[(0, 0), (1, 0), (0, 1), (1, 1), (7, 0), (8, 0), (7, 1), (8, 1)]);
        assert_eq!(canonise(&mut u, 1).as_deref(), Some("33zcc"));
    }

    // Tests shorter strings compare first and ties fall back to text order
    // Verified by comparing text before length
    #[test]
    fn test_compare_orders_by_length_first() {
        assert_eq!(compare("zz", "123"), Ordering::Less);
        assert_eq!(compare("153", "351"), Ordering::Less);
        assert_eq!(compare("33", "33"), Ordering::Equal);
    }

    // Tests decoding expands columns, gaps and band separators
    // Verified by placing band rows in the wrong order
    #[test]
    fn test_decode_shapes() {
        let mut block = decode("33").unwrap();
        block.sort_unstable();
        assert_eq!(block, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);

        assert_eq!(decode("1y01").unwrap(), vec![(0, 0), (5, 0)]);
        assert_eq!(decode("1z1").unwrap(), vec![(0, 0), (0, 5)]);
        assert_eq!(decode("1w1").unwrap(), vec![(0, 0), (3, 0)]);
    }

    // Tests a canonical shape re-canonises to itself
    // Verified by dropping the last column while decoding
    #[test]
    fn test_decode_then_canonise_is_stable() {
        let cells = decode("3pq3qp3").unwrap();
        assert_eq!(cells.len(), 18);
        let mut u = universe(&cells);
        assert_eq!(canonise(&mut u, 1).as_deref(), Some("3pq3qp3"));
    }

    // Tests malformed shapes are rejected
    // Verified by skipping characters that are not base 36
    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode("3!3").is_err());
        assert!(decode("1y").is_err());
        assert!(decode("y").is_err());
    }

    // Tests the last band is emitted without a trailing separator
    // Verified by only emitting bands at a 'z'
    #[test]
    fn test_decode_final_band() {
        assert_eq!(decode("1y01").unwrap(), vec![(0, 0), (5, 0)]);
        assert_eq!(decode("1z1").unwrap(), vec![(0, 0), (0, 5)]);
    }
}
