//! Tests for the depth-first solver, its caching and its pruning ceilings

#[cfg(test)]
mod tests {
    use rummisolve::algorithm::cache::SolveOutcome;
    use rummisolve::algorithm::solver::{Solver, SolverConfig};
    use rummisolve::board::group::Group;
    use rummisolve::board::layout::Layout;
    use rummisolve::board::rules::is_valid;
    use rummisolve::board::tile::Tile;
    use rummisolve::io::error::{AlgorithmError, InfeasibleReason};

    fn tiles(text: &str) -> Vec<Tile> {
        Tile::parse_list(text).expect("test tiles are valid")
    }

    fn sorted(mut pool: Vec<Tile>) -> Vec<Tile> {
        pool.sort_unstable();
        pool
    }

    fn assert_valid_groups(layout: &Layout) {
        for group in layout.groups() {
            assert!(is_valid(group.tiles(), false), "{group} is not finished");
        }
    }

    fn reason(error: &AlgorithmError) -> Option<InfeasibleReason> {
        match error {
            AlgorithmError::Infeasible { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    // Tests that a single run is placed as one finished group
    // Verified by accepting layouts with partial groups as solutions
    #[test]
    fn test_solve_single_run() {
        let mut solver = Solver::default();
        let layout = solver.solve(&tiles("r3 r1 r2")).expect("r1 r2 r3 is a run");

        assert_eq!(layout.groups(), [Group::from_tiles(tiles("r1 r2 r3"))]);
        assert!(layout.is_complete());
    }

    // Tests that a set is found just like a run
    // Verified by branching in strict mode only
    #[test]
    fn test_solve_single_set() {
        let mut solver = Solver::default();
        let layout = solver.solve(&tiles("r1 b1 y1")).expect("r1 b1 y1 is a set");
        assert_eq!(layout.groups().len(), 1);
        assert!(layout.is_complete());
    }

    // Tests that a solution uses exactly the input multiset
    // Verified by skipping the last remaining tile in the search
    #[test]
    fn test_solve_two_groups_uses_every_tile() {
        let mut solver = Solver::default();
        let pool = tiles("k10 r1 k9 r2 k11 r3");
        let layout = solver.solve(&pool).expect("two disjoint runs");

        assert_eq!(layout.groups().len(), 2);
        assert_eq!(sorted(layout.tiles().to_vec()), sorted(pool));
        assert!(layout.is_complete());
    }

    // Tests that small multisets are infeasible without searching
    // Verified by lowering the size check to two tiles
    #[test]
    fn test_too_few_tiles() {
        let mut solver = Solver::default();
        for pool in [Vec::new(), tiles("r1"), tiles("r1 r2")] {
            let error = solver.solve(&pool).expect_err("fewer than three tiles");
            assert_eq!(reason(&error), Some(InfeasibleReason::TooFewTiles));
        }
        assert_eq!(solver.stats.solves, 0);
        assert!(solver.result_cache().is_empty());
    }

    // Tests that the pre-filter names the isolated tile and caches it
    // Verified by running the search before the pre-filter
    #[test]
    fn test_prefilter_rejects_isolated_tile() {
        let mut solver = Solver::default();
        let error = solver.solve(&tiles("r1 r2 r4")).expect_err("r4 is isolated");

        let isolated = "r4".parse().expect("valid tile");
        assert_eq!(reason(&error), Some(InfeasibleReason::Isolated(isolated)));
        assert_eq!(solver.stats.prefilter_rejections, 1);
        assert_eq!(solver.stats.nodes_expanded, 0);
        assert_eq!(solver.result_cache().len(), 1);
    }

    // Tests that an exhausted search is reported and memoized
    // Verified by forgetting the provisional entry on exhaustion
    #[test]
    fn test_search_exhausted_is_memoized() {
        let mut solver = Solver::default();
        let pool = tiles("r1 r2 b5 b6");

        let error = solver.solve(&pool).expect_err("no group of three exists");
        assert_eq!(reason(&error), Some(InfeasibleReason::SearchExhausted));
        let expanded = solver.stats.nodes_expanded;
        assert!(expanded > 0);

        let cached = solver.solve(&pool).expect_err("cached failure");
        assert!(cached.is_infeasible());
        assert_eq!(solver.stats.result_hits, 1);
        assert_eq!(solver.stats.nodes_expanded, expanded);
    }

    // Tests that a repeated solve is answered from the result cache
    // Verified by skipping the lookup before searching
    #[test]
    fn test_solve_is_idempotent() {
        let mut solver = Solver::default();
        let first = solver.solve(&tiles("y4 y5 y6 y7")).expect("a run of four");
        let expanded = solver.stats.nodes_expanded;

        let second = solver.solve(&tiles("y7 y6 y5 y4")).expect("cached run");
        assert_eq!(first, second);
        assert_eq!(solver.stats.nodes_expanded, expanded);
        assert_eq!(solver.stats.result_hits, 1);
        assert_eq!(solver.result_cache().stats.hits, 1);

        let key = sorted(tiles("y4 y5 y6 y7"));
        let recorded = solver
            .result_cache()
            .entries()
            .find(|(entry, _)| *entry == key.as_slice())
            .map(|(_, outcome)| outcome.clone());
        assert_eq!(recorded, Some(SolveOutcome::Solved(first)));
    }

    // Tests inserting tiles into an existing layout
    // Verified by solving only the new tiles in insert
    #[test]
    fn test_insert_completes_partial_board() {
        let mut solver = Solver::default();
        let board = Layout::from_groups(
            [Group::from_tiles(tiles("r1 r2"))],
            solver.validity_cache_mut(),
        );

        let next = solver
            .insert(&board, &tiles("r3"))
            .expect("r3 completes the run");
        assert_eq!(next.groups(), [Group::from_tiles(tiles("r1 r2 r3"))]);
        assert_eq!(board.tiles().len(), 2);
    }

    // Tests that the incomplete-depth ceiling cuts deep unfinished branches
    // Verified by comparing depth with >= instead of >
    #[test]
    fn test_incomplete_depth_ceiling() {
        let config = SolverConfig {
            max_incomplete_depth: 1,
            ..SolverConfig::default()
        };
        let mut solver = Solver::new(config);
        let error = solver
            .solve(&tiles("r1 r2 r3"))
            .expect_err("a run needs two unfinished placements");
        assert_eq!(reason(&error), Some(InfeasibleReason::SearchExhausted));

        let mut relaxed = Solver::new(SolverConfig {
            max_incomplete_depth: 2,
            ..SolverConfig::default()
        });
        assert!(relaxed.solve(&tiles("r1 r2 r3")).is_ok());
    }

    // Tests that no layout may hold more partial groups than the ceiling
    // Verified by skipping the partial group check
    #[test]
    fn test_partial_group_ceiling() {
        let mut solver = Solver::new(SolverConfig {
            max_partial_groups: 0,
            ..SolverConfig::default()
        });
        let error = solver
            .solve(&tiles("r1 r2 r3"))
            .expect_err("every first placement is a partial group");
        assert_eq!(reason(&error), Some(InfeasibleReason::SearchExhausted));
    }

    // Tests the default ceiling of one unfinished group on interleaved runs
    // Verified by raising the default partial group ceiling to two
    #[test]
    fn test_default_partial_group_ceiling() {
        let pool = tiles("r1 b5 r2 b6 r3 b7");

        let mut solver = Solver::default();
        assert_eq!(solver.config().max_partial_groups, 1);
        let layout = solver.solve(&pool).expect("two runs, built one at a time");
        assert_eq!(layout.groups().len(), 2);
        assert_valid_groups(&layout);

        // States holding two unfinished groups are only counted when the ceiling admits them
        let mut relaxed = Solver::new(SolverConfig {
            max_partial_groups: 2,
            ..SolverConfig::default()
        });
        if let Err(error) = relaxed.solve(&pool) {
            assert!(error.is_infeasible(), "{error}");
        }
        assert!(relaxed.stats.states_explored > solver.stats.states_explored);
    }

    // Tests that an exhausted node budget errors and is not memoized
    // Verified by recording the provisional failure on budget errors
    #[test]
    fn test_node_budget() {
        let mut solver = Solver::new(SolverConfig {
            node_budget: Some(0),
            ..SolverConfig::default()
        });
        let error = solver
            .solve(&tiles("r1 r2 r3"))
            .expect_err("budget of zero nodes");

        assert!(matches!(
            error,
            AlgorithmError::SearchBudgetExceeded { budget: 0, .. }
        ));
        assert!(!error.is_infeasible());
        assert!(solver.result_cache().is_empty());
    }

    // Tests that canonical group order still finds solutions
    // Verified by sorting tiles inside groups away in the canonical key
    #[test]
    fn test_canonical_order_solves() {
        let mut solver = Solver::new(SolverConfig {
            canonical_group_order: true,
            ..SolverConfig::default()
        });
        let layout = solver
            .solve(&tiles("b2 b3 b4 r8 y8 k8"))
            .expect("a run and a set");
        assert_eq!(layout.groups().len(), 2);
        assert!(solver.config().canonical_group_order);
    }

    // Tests that caches survive handing them out and back in
    // Verified by starting with_caches from empty caches
    #[test]
    fn test_with_caches_keeps_results() {
        let mut solver = Solver::default();
        let first = solver.solve(&tiles("r5 r6 r7")).expect("a run");
        let (validity, results) = solver.into_caches();

        let mut warm = Solver::with_caches(SolverConfig::default(), validity, results);
        let second = warm.solve(&tiles("r7 r6 r5")).expect("cached run");
        assert_eq!(first, second);
        assert_eq!(warm.stats.nodes_expanded, 0);
        assert!(!warm.validity_cache().is_empty());
    }
}
