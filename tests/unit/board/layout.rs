//! Tests for layout branching, partial-group bookkeeping and frozen keys

#[cfg(test)]
mod tests {
    use rummisolve::algorithm::cache::ValidityCache;
    use rummisolve::board::group::Group;
    use rummisolve::board::layout::Layout;
    use rummisolve::board::tile::Tile;

    fn tile(text: &str) -> Tile {
        text.parse().expect("test tile is valid")
    }

    fn layout(groups: &[&str], cache: &mut ValidityCache) -> Layout {
        Layout::from_groups(
            groups
                .iter()
                .map(|text| Group::from_tiles(Tile::parse_list(text).expect("valid tiles"))),
            cache,
        )
    }

    // Tests that the partial count tracks groups that are not strictly valid
    // Verified by counting every appended group as partial
    #[test]
    fn test_partial_count_on_append_group() {
        let mut cache = ValidityCache::new();
        let board = layout(&["r1 r2 r3", "b7 y7"], &mut cache);

        assert_eq!(board.partial_groups(), 1);
        assert!(!board.is_complete());
        assert_eq!(board.tiles().len(), 5);
    }

    // Tests that finishing a group decrements the partial count
    // Verified by never decrementing partial_groups in append_tile_at
    #[test]
    fn test_append_tile_completes_group() {
        let mut cache = ValidityCache::new();
        let mut board = layout(&["b7 y7"], &mut cache);

        board
            .append_tile_at(tile("k7"), 0, &mut cache)
            .expect("group 0 exists");
        assert!(board.is_complete());
        assert_eq!(board.tiles().len(), 3);
    }

    // Tests that a bad group index is reported, not ignored
    // Verified by appending to the last group on a bad index
    #[test]
    fn test_append_tile_bad_index() {
        let mut cache = ValidityCache::new();
        let mut board = layout(&["r1 r2 r3"], &mut cache);

        let error = board
            .append_tile_at(tile("r4"), 3, &mut cache)
            .expect_err("index 3 does not exist");
        assert!(error.to_string().contains("out of bounds"));
        assert_eq!(board.tiles().len(), 3);
    }

    // Tests that breaking a finished group is treated as a defect
    // Verified by removing the assertion in append_tile_at
    #[test]
    #[should_panic(expected = "broke the finished group")]
    fn test_append_tile_breaking_group_panics() {
        let mut cache = ValidityCache::new();
        let mut board = layout(&["r1 r2 r3"], &mut cache);
        let _ = board.append_tile_at(tile("b9"), 0, &mut cache);
    }

    // Tests that placement positions come out in ascending index order
    // Verified by reversing the enumeration in places_for
    #[test]
    fn test_places_for_ascending() {
        let mut cache = ValidityCache::new();
        let board = layout(&["r4 r5 r6", "k9", "r7 b7 y7"], &mut cache);

        let red: Vec<usize> = board.places_for(tile("r7"), true, &mut cache).collect();
        assert_eq!(red, vec![0]);

        let black: Vec<usize> = board.places_for(tile("k7"), true, &mut cache).collect();
        assert_eq!(black, vec![2]);

        let high: Vec<usize> = board.places_for(tile("k10"), true, &mut cache).collect();
        assert_eq!(high, vec![1]);
    }

    // Tests that branching leaves the source layout untouched
    // Verified by appending to self before cloning in branch
    #[test]
    fn test_branch_is_copy_on_write() {
        let mut cache = ValidityCache::new();
        let board = layout(&["r1 r2", "r5 r6"], &mut cache);

        let branches = board.branch(tile("r3"), true, &mut cache);
        assert_eq!(branches.len(), 1);
        assert_eq!(board.tiles().len(), 4);
        assert_eq!(board.partial_groups(), 2);

        let grown = branches.first().expect("one branch");
        assert_eq!(grown.tiles().len(), 5);
        assert_eq!(grown.partial_groups(), 1);
    }

    // Tests that a singleton group is added as a new partial group
    // Verified by appending the singleton to group 0
    #[test]
    fn test_with_singleton() {
        let mut cache = ValidityCache::new();
        let board = layout(&["r1 r2 r3"], &mut cache);

        let next = board.with_singleton(tile("k2"), &mut cache);
        assert_eq!(next.groups().len(), 2);
        assert_eq!(next.partial_groups(), 1);
        assert_eq!(board.groups().len(), 1);
    }

    // Tests that keys respect group order unless canonical order is requested
    // Verified by always sorting groups in key
    #[test]
    fn test_key_order_sensitivity() {
        let mut cache = ValidityCache::new();
        let forward = layout(&["r1 r2 r3", "b1 y1 k1"], &mut cache);
        let backward = layout(&["b1 y1 k1", "r1 r2 r3"], &mut cache);

        assert_ne!(forward.key(false), backward.key(false));
        assert_eq!(forward.key(true), backward.key(true));
        assert_ne!(forward, backward);
    }

    // Tests the board display listing
    // Verified by omitting the empty marker
    #[test]
    fn test_display() {
        let mut cache = ValidityCache::new();
        assert_eq!(Layout::new().to_string(), "Board: (empty)");

        let board = layout(&["r1 r2 r3"], &mut cache);
        assert_eq!(board.to_string(), "Board:\n\tRun: r1, r2, r3");
    }
}
