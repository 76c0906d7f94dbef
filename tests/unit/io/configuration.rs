//! Tests for domain constants, search ceilings and game defaults

#[cfg(test)]
mod tests {
    use rummisolve::board::tile::Kind;
    use rummisolve::io::configuration::{
        DEFAULT_DUPLICATES, DEFAULT_HAND_SIZE, DEFAULT_PLAYERS, KIND_COUNT, MAX_INCOMPLETE_DEPTH,
        MAX_PARTIAL_GROUPS, MAX_RANK, MIN_GROUP_SIZE, PROGRESS_BAR_WIDTH, SNAPSHOT_VERSION,
        TILE_IDENTITIES,
    };

    // Tests the reference tile domain
    // Verified by adding a fifth kind
    #[test]
    fn test_tile_domain() {
        assert_eq!(KIND_COUNT, 4);
        assert_eq!(Kind::ALL.len(), KIND_COUNT);
        assert_eq!(MAX_RANK, 13);
        assert_eq!(TILE_IDENTITIES, 52);
    }

    // Tests the minimum group size
    // Verified by lowering the size to two
    #[test]
    fn test_min_group_size() {
        assert_eq!(MIN_GROUP_SIZE, 3);
    }

    // Tests the pruning ceilings
    // Verified by changing ceiling values
    #[test]
    fn test_search_ceilings() {
        assert_eq!(MAX_INCOMPLETE_DEPTH, 3);
        assert_eq!(MAX_PARTIAL_GROUPS, 1);
    }

    // Tests that the default table can be dealt from the default supply
    // Verified by raising the hand size past the supply
    #[test]
    fn test_default_table_fits_supply() {
        assert_eq!(DEFAULT_DUPLICATES, 2);
        let dealt = DEFAULT_PLAYERS * DEFAULT_HAND_SIZE;
        assert!(dealt < TILE_IDENTITIES * DEFAULT_DUPLICATES);
    }

    // Tests display and snapshot settings
    // Verified by changing width value
    #[test]
    fn test_display_and_snapshot_settings() {
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
        assert_eq!(SNAPSHOT_VERSION, 1);
    }
}
