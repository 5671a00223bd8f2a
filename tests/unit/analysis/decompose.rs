//! Tests for splitting pseudo-objects into pure components

#[cfg(test)]
mod tests {
    use soupcensus::SearchError;
    use soupcensus::analysis::code::ObjectCode;
    use soupcensus::analysis::decompose::decompose;
    use soupcensus::life::rule::Rule;
    use soupcensus::life::sparse::SparseUniverse;
    use soupcensus::life::universe::Universe;

    fn block_at(dx: i32, dy: i32) -> Vec<(i32, i32)> {
        vec![(dx, dy), (dx + 1, dy), (dx, dy + 1), (dx + 1, dy + 1)]
    }

    // Tests separated still lifes come back as separate components
    // Verified by canonising the whole universe as one object
    #[test]
    fn test_decompose_distant_blocks() {
        let mut cells = block_at(0, 0);
        cells.extend(block_at(10, 0));
        let mut u = SparseUniverse::with_cells(Rule::conway(), &cells);

        let parts = decompose(&mut u, false, 100).unwrap();
        let block: ObjectCode = "xs4_33".parse().unwrap();
        assert_eq!(parts, vec![block.clone(), block]);
        assert_eq!(u.population(), 0);
    }

    // Tests a single pure still life decomposes to itself
    // Verified by dropping components that were infected first
    #[test]
    fn test_decompose_pure_object() {
        let boat = [(0, 0), (1, 0), (0, 1), (2, 1), (1, 2)];
        let mut u = SparseUniverse::with_cells(Rule::conway(), &boat);
        let parts = decompose(&mut u, false, 100).unwrap();
        assert_eq!(parts, vec!["xs5_253".parse::<ObjectCode>().unwrap()]);
    }

    // Tests moving objects are separated geometrically
    // Verified by running the primary rule instead of coalescing
    #[test]
    fn test_decompose_moving() {
        let mut cells = vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        cells.extend([(31, 0), (32, 1), (30, 2), (31, 2), (32, 2)]);
        let mut u = SparseUniverse::with_cells(Rule::conway(), &cells);

        let parts = decompose(&mut u, true, 100).unwrap();
        assert_eq!(parts, vec![ObjectCode::glider(), ObjectCode::glider()]);
    }

    // Tests a component that never repeats makes the decomposition fail
    // Verified by skipping components without a period
    #[test]
    fn test_decompose_fails_on_unperiodic_component() {
        // R-pentomino takes over a thousand generations to settle
        let cells = [(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)];
        let mut u = SparseUniverse::with_cells(Rule::conway(), &cells);
        u.set_cell(40, 40, 1);
        u.set_cell(41, 40, 1);
        u.set_cell(40, 41, 1);
        u.set_cell(41, 41, 1);
        assert!(matches!(
            decompose(&mut u, true, 10),
            Err(SearchError::Computation { operation: "decompose", .. })
        ));
    }
}
