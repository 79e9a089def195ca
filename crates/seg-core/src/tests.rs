//! Unit tests for seg-core primitives.

#[cfg(test)]
mod agent {
    use crate::{AgentType, Cell, ConfigIssue, SatisfactionState, SegError};

    #[test]
    fn symbols_and_aliases_parse() {
        assert_eq!(AgentType::try_from('o').unwrap(), AgentType::TypeA);
        assert_eq!(AgentType::try_from('A').unwrap(), AgentType::TypeA);
        assert_eq!(AgentType::try_from('x').unwrap(), AgentType::TypeB);
        assert_eq!(AgentType::try_from('B').unwrap(), AgentType::TypeB);
        assert_eq!(AgentType::try_from('_').unwrap(), AgentType::Empty);
    }

    #[test]
    fn unknown_symbol_rejected() {
        match AgentType::try_from('?') {
            Err(SegError::InvalidConfiguration(ConfigIssue::UnknownSymbol('?'))) => {}
            other => panic!("expected UnknownSymbol, got {other:?}"),
        }
    }

    #[test]
    fn fresh_cell_is_unset() {
        let cell = Cell::new(AgentType::TypeB);
        assert_eq!(cell.satisfaction, SatisfactionState::Unset);
        assert!(cell.is_occupied());
        assert!(!cell.is_mobile(), "unset occupied cell is not mobile");
    }

    #[test]
    fn mobility_rules() {
        let empty = Cell::new(AgentType::Empty);
        assert!(empty.is_mobile());

        let mut unhappy = Cell::new(AgentType::TypeA);
        unhappy.satisfaction = SatisfactionState::NotSatisfied;
        assert!(unhappy.is_mobile());

        let mut happy = Cell::new(AgentType::TypeA);
        happy.satisfaction = SatisfactionState::Satisfied;
        assert!(!happy.is_mobile());

        // Empty stays mobile whatever stale state it carries.
        let mut stale = Cell::new(AgentType::Empty);
        stale.satisfaction = SatisfactionState::Satisfied;
        assert!(stale.is_mobile());
    }

    #[test]
    fn display() {
        assert_eq!(AgentType::TypeA.to_string(), "a");
        assert_eq!(AgentType::Empty.to_string(), "empty");
        assert_eq!(SatisfactionState::NotSatisfied.to_string(), "not_satisfied");
    }
}

#[cfg(test)]
mod board {
    use crate::{AgentType, Board, Cell, ConfigIssue, Coord, SatisfactionState, SegError};

    fn cells(kinds: &[AgentType]) -> Vec<Cell> {
        kinds.iter().copied().map(Cell::new).collect()
    }

    #[test]
    fn from_cells_checks_length() {
        let err = Board::from_cells(3, cells(&[AgentType::Empty; 8])).unwrap_err();
        match err {
            SegError::InvalidConfiguration(ConfigIssue::SequenceLength { expected, got }) => {
                assert_eq!((expected, got), (9, 8));
            }
            other => panic!("expected SequenceLength, got {other:?}"),
        }
    }

    #[test]
    fn from_cells_rejects_zero_side() {
        assert!(matches!(
            Board::from_cells(0, vec![]),
            Err(SegError::InvalidConfiguration(ConfigIssue::ZeroSideLength))
        ));
    }

    #[test]
    fn row_major_addressing() {
        use AgentType::*;
        let board = Board::from_cells(2, cells(&[TypeA, TypeB, Empty, TypeA])).unwrap();
        assert_eq!(board[Coord::new(0, 1)].kind, TypeB);
        assert_eq!(board[Coord::new(1, 0)].kind, Empty);
        assert_eq!(board.index_of(Coord::new(1, 1)), 3);
        assert_eq!(board.coord_of(2), Coord::new(1, 0));
        assert!(board.get(Coord::new(2, 0)).is_none());

        let rows: Vec<Vec<AgentType>> = board
            .rows()
            .map(|r| r.iter().map(|c| c.kind).collect())
            .collect();
        assert_eq!(rows, vec![vec![TypeA, TypeB], vec![Empty, TypeA]]);
    }

    #[test]
    fn clone_is_independent() {
        use AgentType::*;
        let original = Board::from_cells(2, cells(&[TypeA, TypeB, Empty, TypeA])).unwrap();
        let mut copy = original.clone();
        copy[Coord::new(0, 0)].satisfaction = SatisfactionState::Satisfied;
        assert_eq!(original[Coord::new(0, 0)].satisfaction, SatisfactionState::Unset);
    }

    #[test]
    fn counts() {
        use AgentType::*;
        let mut board = Board::from_cells(2, cells(&[TypeA, TypeB, Empty, TypeA])).unwrap();
        let tc = board.type_counts();
        assert_eq!((tc.type_a, tc.type_b, tc.empty), (2, 1, 1));
        assert_eq!(tc.total(), 4);

        board[Coord::new(0, 0)].satisfaction = SatisfactionState::NotSatisfied;
        board[Coord::new(1, 0)].satisfaction = SatisfactionState::NotSatisfied; // empty: ignored
        assert_eq!(board.count_state(SatisfactionState::NotSatisfied), 1);
        assert_eq!(board.count_state(SatisfactionState::Unset), 2);
    }
}

#[cfg(all(test, feature = "serde"))]
mod board_serde {
    use crate::{AgentType, Board, Cell};

    #[test]
    fn round_trips_through_json() {
        let cells = [AgentType::TypeA, AgentType::Empty, AgentType::TypeB, AgentType::TypeA]
            .into_iter()
            .map(Cell::new)
            .collect();
        let board = Board::from_cells(2, cells).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn rejects_zero_side() {
        let err = serde_json::from_str::<Board>(r#"{"side":0,"cells":[]}"#).unwrap_err();
        assert!(err.to_string().contains("side length must be at least 1"), "{err}");
    }

    #[test]
    fn rejects_wrong_cell_count() {
        let cell = r#"{"kind":"TypeA","satisfaction":"Unset"}"#;
        let json = format!(r#"{{"side":2,"cells":[{cell},{cell},{cell}]}}"#);
        let err = serde_json::from_str::<Board>(&json).unwrap_err();
        assert!(err.to_string().contains("does not match board size 4"), "{err}");
    }
}

#[cfg(test)]
mod neighbors {
    use proptest::prelude::*;

    use crate::{AgentType, Board, Cell, Coord, neighbors_of};

    fn empty_board(side: usize) -> Board {
        Board::from_cells(side, vec![Cell::new(AgentType::Empty); side * side]).unwrap()
    }

    #[test]
    fn counts_on_4x4() {
        let board = empty_board(4);
        assert_eq!(neighbors_of(&board, 0, 0).count(), 3, "corner");
        assert_eq!(neighbors_of(&board, 0, 1).count(), 5, "edge");
        assert_eq!(neighbors_of(&board, 1, 1).count(), 8, "interior");
        assert_eq!(neighbors_of(&board, 3, 3).count(), 3, "far corner");
        assert_eq!(neighbors_of(&board, 2, 3).count(), 5, "right edge");
    }

    #[test]
    fn centre_excluded_and_block_clipped() {
        let board = empty_board(4);
        let coords: Vec<Coord> = board.neighbor_coords(Coord::new(0, 1)).collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 2),
                Coord::new(1, 0),
                Coord::new(1, 1),
                Coord::new(1, 2),
            ]
        );
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        let board = empty_board(1);
        assert_eq!(neighbors_of(&board, 0, 0).count(), 0);
    }

    #[test]
    fn out_of_bounds_centre_yields_nothing() {
        let board = empty_board(3);
        assert_eq!(neighbors_of(&board, 3, 0).count(), 0);
    }

    #[test]
    fn yields_references_into_board() {
        use AgentType::*;
        let kinds = [TypeA, TypeB, Empty, TypeA];
        let board =
            Board::from_cells(2, kinds.iter().copied().map(Cell::new).collect()).unwrap();
        let mut seen: Vec<AgentType> = neighbors_of(&board, 0, 0).map(|c| c.kind).collect();
        seen.sort_by_key(|k| k.symbol());
        assert_eq!(seen, vec![Empty, TypeA, TypeB]);
    }

    proptest! {
        #[test]
        fn count_matches_clipped_block(
            (side, r, c) in (1usize..12).prop_flat_map(|n| (Just(n), 0..n, 0..n))
        ) {
            let board = empty_board(side);
            let span = |x: usize| (x + 1).min(side - 1) - x.saturating_sub(1) + 1;
            let expected = span(r) * span(c) - 1;
            prop_assert_eq!(neighbors_of(&board, r, c).count(), expected);
            for n in board.neighbor_coords(Coord::new(r, c)) {
                prop_assert!(board.contains(n));
                prop_assert!(n.row.abs_diff(r) <= 1 && n.col.abs_diff(c) <= 1);
            }
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{AgentType, ConfigIssue, ModelConfig, RunConfig, SegError};

    fn issue(cfg: &ModelConfig) -> ConfigIssue {
        match cfg.validate() {
            Err(SegError::InvalidConfiguration(i)) => i,
            Ok(()) => panic!("expected validation failure for {cfg:?}"),
        }
    }

    #[test]
    fn default_is_valid() {
        let cfg = ModelConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.side_length, 40);
        assert_eq!(cfg.threshold(AgentType::TypeA), Some(0.7));
        assert_eq!(cfg.threshold(AgentType::TypeB), Some(0.66));
        assert_eq!(cfg.threshold(AgentType::Empty), None);
    }

    #[test]
    fn fractions_over_one_rejected() {
        let mut cfg = ModelConfig::default();
        cfg.type_a.population_fraction = 0.6;
        cfg.type_b.population_fraction = 0.5;
        assert!(matches!(issue(&cfg), ConfigIssue::FractionsExceedOne { .. }));
    }

    #[test]
    fn out_of_range_values_rejected() {
        let mut cfg = ModelConfig::default();
        cfg.type_a.population_fraction = -0.1;
        assert_eq!(issue(&cfg), ConfigIssue::FractionOutOfRange(-0.1));

        let mut cfg = ModelConfig::default();
        cfg.type_b.satisfaction_threshold = 1.5;
        assert_eq!(issue(&cfg), ConfigIssue::ThresholdOutOfRange(1.5));

        let mut cfg = ModelConfig::default();
        cfg.side_length = 0;
        assert_eq!(issue(&cfg), ConfigIssue::ZeroSideLength);
    }

    #[test]
    fn nan_fraction_rejected() {
        let mut cfg = ModelConfig::default();
        cfg.type_a.population_fraction = f64::NAN;
        assert!(matches!(issue(&cfg), ConfigIssue::FractionOutOfRange(_)));
    }

    #[test]
    fn snapshot_interval() {
        let run = RunConfig { snapshot_interval: 3, ..RunConfig::default() };
        assert!(run.is_snapshot(0));
        assert!(!run.is_snapshot(1));
        assert!(run.is_snapshot(6));

        let never = RunConfig { snapshot_interval: 0, ..RunConfig::default() };
        assert!(!never.is_snapshot(0));
    }
}

#[cfg(test)]
mod rng {
    use crate::{Permuter, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let items: Vec<u32> = (0..50).collect();
        let a = SimRng::new(12345).uniform_permutation(&items);
        let b = SimRng::new(12345).uniform_permutation(&items);
        assert_eq!(a, b);
    }

    #[test]
    fn permutation_is_a_bijection() {
        let items: Vec<u32> = (0..100).collect();
        let mut out = SimRng::new(7).uniform_permutation(&items);
        assert_ne!(out, items, "100 elements should not come back in order");
        out.sort_unstable();
        assert_eq!(out, items);
    }

    #[test]
    fn works_through_mut_ref() {
        fn shuffle_with<P: Permuter>(mut p: P, items: &mut [i32]) {
            p.shuffle(items);
        }
        let mut rng = SimRng::new(1);
        let mut v = vec![1, 2, 3];
        shuffle_with(&mut rng, &mut v);
        v.sort_unstable();
        assert_eq!(v, vec![1, 2, 3]);
    }
}
