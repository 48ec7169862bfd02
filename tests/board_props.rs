use hotseat_battleship::{Board, Coord, Orientation, RejectedAction, GRID_SIZE};
use proptest::prelude::*;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_second_shot_always_rejected(row in 0usize..14, col in 0usize..14) {
        let mut board = Board::new(GRID_SIZE);
        board.place_vessel(Coord::new(4, 4), 4, Orientation::Horizontal).unwrap();
        let coord = Coord::new(row, col);
        match board.shoot(coord) {
            Ok(_) => prop_assert_eq!(
                board.shoot(coord).unwrap_err(),
                RejectedAction::AlreadyShot(coord)
            ),
            Err(_) => prop_assert!(!board.is_playable(coord)),
        }
    }

    #[test]
    fn prop_adjusted_start_fits_when_length_fits(
        row in 1usize..=10,
        col in 1usize..=10,
        len in 1usize..=5,
        o in orientation(),
    ) {
        let board = Board::new(GRID_SIZE);
        let start = board.adjust_for_edge(Coord::new(row, col), len, o);
        prop_assert!(board.is_placement_valid(start, len, o));
        // adjustment only ever moves along the vessel's axis
        match o {
            Orientation::Horizontal => prop_assert_eq!(start.row, row),
            Orientation::Vertical => prop_assert_eq!(start.col, col),
        }
    }

    #[test]
    fn prop_rejected_placement_leaves_board_unchanged(
        first in (1usize..=10, 1usize..=10, 1usize..=5, orientation()),
        second in (0usize..=12, 0usize..=12, 0usize..=6, orientation()),
    ) {
        let mut board = Board::new(GRID_SIZE);
        let (r, c, len, o) = first;
        let _ = board.place_vessel(Coord::new(r, c), len, o);
        let before = board.clone();
        let (r, c, len, o) = second;
        let start = Coord::new(r, c);
        let valid = board.is_placement_valid(start, len, o);
        let placed = board.place_vessel(start, len, o);
        prop_assert_eq!(valid, placed.is_ok());
        if !valid {
            prop_assert_eq!(board, before);
        }
    }

    #[test]
    fn prop_sunk_iff_all_segments_hit(
        len in 1usize..=5,
        shots in proptest::collection::vec(0usize..5, 0..6),
    ) {
        let mut board = Board::new(GRID_SIZE);
        let id = board.place_vessel(Coord::new(2, 2), len, Orientation::Vertical).unwrap();
        let mut hit = vec![false; len];
        for s in shots {
            if s < len {
                let _ = board.shoot(Coord::new(2 + s, 2));
                hit[s] = true;
            }
        }
        prop_assert_eq!(board.is_sunk(id), hit.iter().all(|h| *h));
    }
}
