//! Tests for tile identity bitset membership and extraction

#[cfg(test)]
mod tests {
    use rummisolve::algorithm::bitset::TileBitset;
    use rummisolve::board::tile::Tile;

    fn tiles(text: &str) -> Vec<Tile> {
        Tile::parse_list(text).expect("test tiles are valid")
    }

    // Tests that a new bitset is empty
    // Verified by initializing the bit vector with ones
    #[test]
    fn test_new_is_empty() {
        let bitset = TileBitset::new();
        assert!(bitset.is_empty());
        assert_eq!(bitset.count(), 0);
        assert_eq!(bitset, TileBitset::default());
    }

    // Tests that insert reports whether the identity was fresh
    // Verified by always returning true from insert
    #[test]
    fn test_insert_reports_fresh() {
        let mut bitset = TileBitset::new();
        let red_one = "r1".parse().expect("valid tile");

        assert!(bitset.insert(red_one));
        assert!(!bitset.insert(red_one));
        assert!(bitset.contains(red_one));
        assert_eq!(bitset.count(), 1);
    }

    // Tests that duplicate tiles collapse to one identity
    // Verified by counting tiles instead of set bits
    #[test]
    fn test_from_tiles_collapses_duplicates() {
        let pool = tiles("r1 r1 b2 k13 b2");
        let bitset = TileBitset::from_tiles(&pool);
        assert_eq!(bitset.count(), 3);
    }

    // Tests that extraction returns identities in tile order
    // Verified by computing the rank as index / MAX_RANK
    #[test]
    fn test_to_vec_in_identity_order() {
        let bitset = TileBitset::from_tiles(&tiles("k13 r2 y7 b1"));
        assert_eq!(bitset.to_vec(), tiles("r2 b1 y7 k13"));
        assert_eq!(
            bitset.to_string(),
            "TileBitset(4 tiles: [r2, b1, y7, k13])"
        );
    }
}
