//! Tests for rectangles, junk shapes and the default universe methods

#[cfg(test)]
mod tests {
    use soupcensus::life::rule::Rule;
    use soupcensus::life::sparse::SparseUniverse;
    use soupcensus::life::universe::{Junk, Rect, RuleTable, Universe, normalise};

    // Tests bounding rectangles of cell lists
    // Verified by using exclusive right edges
    #[test]
    fn test_rect_from_cells() {
        assert_eq!(
            Rect::from_cells([(3, 4), (-1, 6), (2, 2)]),
            Some(Rect::new(-1, 2, 5, 5))
        );
        assert_eq!(Rect::from_cells(std::iter::empty()), None);
    }

    // Tests containment is half-open and the centred constructor
    // Verified by including the far edge
    #[test]
    fn test_rect_contains() {
        let rect = Rect::centred(2);
        assert_eq!(rect, Rect::new(-2, -2, 4, 4));
        assert!(rect.contains(-2, -2));
        assert!(rect.contains(1, 1));
        assert!(!rect.contains(2, 0));
        assert_eq!(Rect::new(0, 0, 3, 7).length(), 7);
    }

    // Tests normalisation moves cells to the origin and sorts them
    // Verified by skipping the sort
    #[test]
    fn test_normalise() {
        assert_eq!(
            normalise([(5, 5), (4, 6), (4, 5)]),
            vec![(0, 0), (0, 1), (1, 0)]
        );
        assert!(normalise(std::iter::empty()).is_empty());
    }

    // Tests junk variants cover every orientation without duplicates
    // Verified by omitting the transposed orientations
    #[test]
    fn test_junk_variants() {
        assert_eq!(Junk::Dot.variants().len(), 1);
        assert_eq!(Junk::Block.variants().len(), 1);
        assert_eq!(Junk::Blinker.variants().len(), 2);
        assert_eq!(Junk::Beehive.variants().len(), 2);

        let gliders = Junk::Glider.variants();
        assert!(gliders.contains(&vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]));
        assert!(gliders.iter().all(|v| v.len() == 5));
    }

    // Tests junk metadata agrees with its seed shape
    // Verified by giving the blinker period 1
    #[test]
    fn test_junk_metadata() {
        for junk in [Junk::Dot, Junk::Block, Junk::Blinker, Junk::Beehive, Junk::Glider] {
            assert_eq!(junk.seed().len() as i64, junk.cells());
            let prefix = if junk.period() == 1 { "xs" } else { "x" };
            assert!(junk.code().starts_with(prefix));
        }
        assert_eq!(Junk::STATIONARY.first(), Some(&Junk::Dot));
        assert_eq!(Junk::Glider.period(), 4);
    }

    // Tests only the resolution tables are idempotent
    // Verified by marking percolation idempotent
    #[test]
    fn test_idempotent_tables() {
        assert!(RuleTable::Eradicate.is_idempotent());
        assert!(RuleTable::Expunge(Junk::Block).is_idempotent());
        assert!(!RuleTable::Percolate.is_idempotent());
        assert!(!RuleTable::Life.is_idempotent());
    }

    // Tests taking an island removes exactly one connected component
    // Verified by using 4-connectivity
    #[test]
    fn test_take_island() {
        let mut u = SparseUniverse::with_cells(Rule::conway(), &[(0, 0), (1, 1), (5, 5)]);
        u.set_cell(2, 2, 2);
        let mut island = u.take_island(0, 0);
        island.sort_unstable();
        assert_eq!(island, vec![(0, 0, 1), (1, 1, 1), (2, 2, 2)]);
        assert_eq!(u.cells(), vec![(5, 5, 1)]);
        assert!(u.take_island(9, 9).is_empty());
    }

    // Tests putting cells with an offset and reading them back
    // Verified by ignoring the vertical offset
    #[test]
    fn test_put_cells_with_offset() {
        let mut u = SparseUniverse::new(Rule::conway());
        u.put_cells(&[(0, 0), (1, 0)], 10, 20);
        assert_eq!(u.live_cells(), vec![(10, 20), (11, 20)]);
        assert_eq!(u.get_cell(11, 20), 1);
        assert_eq!(u.get_cell(1, 0), 0);
        u.set_rule(RuleTable::Coalesce);
        u.set_cell(12, 20, 2);
        assert_eq!(u.live_cells().len(), 2);
    }

    // Tests region queries keep markers and stop at the far edges
    // Verified by including the far edge of the rectangle
    #[test]
    fn test_cells_in() {
        let mut u = SparseUniverse::new(Rule::conway());
        u.put_cells(&[(0, 0), (1, 0), (0, 1), (5, 5)], 0, 0);
        u.set_cell(1, 1, 2);
        assert_eq!(
            u.cells_in(Rect::new(0, 0, 2, 2)),
            vec![(0, 0, 1), (1, 0, 1), (0, 1, 1), (1, 1, 2)]
        );
        assert_eq!(u.cells_in(Rect::new(1, 0, 4, 5)), vec![(1, 0, 1), (1, 1, 2)]);
        assert!(u.cells_in(Rect::new(6, 6, 3, 3)).is_empty());
    }
}
