use hotseat_battleship::{
    Board, Coord, Orientation, RejectedAction, ShotOutcome, TileState, TileView, VesselId,
    GRID_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn c(row: usize, col: usize) -> Coord {
    Coord::new(row, col)
}

#[test]
fn test_label_border_is_not_playable() {
    let board = Board::new(GRID_SIZE);
    assert!(!board.is_playable(c(0, 0)));
    assert!(!board.is_playable(c(0, 5)));
    assert!(!board.is_playable(c(5, 0)));
    assert!(board.is_playable(c(1, 1)));
    assert!(board.is_playable(c(10, 10)));
    assert!(!board.is_playable(c(11, 3)));
    assert_eq!(board.playable_coords().count(), 100);
}

#[test]
fn test_shoot_hit_then_rejected() {
    let mut board = Board::new(GRID_SIZE);
    board.place_vessel(c(2, 2), 2, Orientation::Horizontal).unwrap();

    assert_eq!(board.shoot(c(2, 2)).unwrap(), ShotOutcome::Hit { sunk: false });
    assert_eq!(
        board.shoot(c(2, 2)).unwrap_err(),
        RejectedAction::AlreadyShot(c(2, 2))
    );
    // final segment sinks
    assert_eq!(board.shoot(c(2, 3)).unwrap(), ShotOutcome::Hit { sunk: true });
    assert!(board.is_sunk(VesselId(0)));
    assert!(board.all_sunk());
}

#[test]
fn test_shoot_miss_then_rejected() {
    let mut board = Board::new(GRID_SIZE);
    assert_eq!(board.shoot(c(4, 7)).unwrap(), ShotOutcome::Miss);
    assert_eq!(
        board.shoot(c(4, 7)).unwrap_err(),
        RejectedAction::AlreadyShot(c(4, 7))
    );
    assert_eq!(board.tile(c(4, 7)).unwrap().state(), TileState::WaterShot);
}

#[test]
fn test_shoot_outside_playing_area_is_rejected() {
    let mut board = Board::new(GRID_SIZE);
    assert_eq!(
        board.shoot(c(0, 3)).unwrap_err(),
        RejectedAction::NotPlayable(c(0, 3))
    );
    assert_eq!(
        board.shoot(c(11, 3)).unwrap_err(),
        RejectedAction::OutOfBounds(c(11, 3))
    );
    assert_eq!(
        board.shoot(c(usize::MAX, 3)).unwrap_err(),
        RejectedAction::OutOfBounds(c(usize::MAX, 3))
    );
    assert_eq!(board.unshot_coords().count(), 100);
}

#[test]
fn test_overlap_is_rejected_without_side_effects() {
    let mut board = Board::new(GRID_SIZE);
    board.place_vessel(c(3, 3), 3, Orientation::Vertical).unwrap();
    let before = board.clone();

    assert!(!board.is_placement_valid(c(4, 1), 4, Orientation::Horizontal));
    assert_eq!(
        board.place_vessel(c(4, 1), 4, Orientation::Horizontal).unwrap_err(),
        RejectedAction::Overlap(c(4, 3))
    );
    assert_eq!(board, before);
    assert!(board.is_placement_valid(c(6, 3), 4, Orientation::Horizontal));
}

#[test]
fn test_placement_validity_checks_bounds() {
    let board = Board::new(GRID_SIZE);
    assert_eq!(
        board.check_placement(c(1, 8), 5, Orientation::Horizontal).unwrap_err(),
        RejectedAction::OutOfBounds(c(1, 11))
    );
    assert_eq!(
        board.check_placement(c(9, 2), 3, Orientation::Vertical).unwrap_err(),
        RejectedAction::OutOfBounds(c(11, 2))
    );
    assert_eq!(
        board.check_placement(c(0, 2), 1, Orientation::Vertical).unwrap_err(),
        RejectedAction::NotPlayable(c(0, 2))
    );
    assert_eq!(
        board.check_placement(c(2, 2), 0, Orientation::Vertical).unwrap_err(),
        RejectedAction::InvalidLength(0)
    );
    assert!(board.is_placement_valid(c(1, 6), 5, Orientation::Horizontal));
}

#[test]
fn test_adjust_for_edge_slides_back_to_fit() {
    let board = Board::new(GRID_SIZE);
    assert_eq!(board.adjust_for_edge(c(3, 9), 5, Orientation::Horizontal), c(3, 6));
    assert_eq!(board.adjust_for_edge(c(3, 10), 5, Orientation::Horizontal), c(3, 6));
    assert_eq!(board.adjust_for_edge(c(10, 4), 3, Orientation::Vertical), c(8, 4));
    // already fits
    assert_eq!(board.adjust_for_edge(c(3, 6), 5, Orientation::Horizontal), c(3, 6));
    assert_eq!(board.adjust_for_edge(c(10, 10), 1, Orientation::Horizontal), c(10, 10));
    // off-board starts are left for validation to reject
    assert_eq!(board.adjust_for_edge(c(20, 3), 2, Orientation::Vertical), c(20, 3));
}

#[test]
fn test_sunk_only_after_every_segment_hit() {
    let mut board = Board::new(GRID_SIZE);
    let id = board.place_vessel(c(5, 2), 3, Orientation::Vertical).unwrap();
    board.shoot(c(5, 2)).unwrap();
    board.shoot(c(7, 2)).unwrap();
    assert!(!board.is_sunk(id));
    assert_eq!(board.shoot(c(6, 2)).unwrap(), ShotOutcome::Hit { sunk: true });
    assert!(board.is_sunk(id));
}

#[test]
fn test_tile_views_hide_unshot_ships() {
    let mut board = Board::new(GRID_SIZE);
    board.place_vessel(c(1, 1), 2, Orientation::Horizontal).unwrap();
    board.shoot(c(1, 1)).unwrap();
    board.shoot(c(9, 9)).unwrap();

    assert_eq!(board.view(c(1, 1), false), Some(TileView::Hit));
    assert_eq!(board.view(c(1, 2), false), Some(TileView::Unchanged));
    assert_eq!(board.view(c(1, 2), true), Some(TileView::HasShip));
    assert_eq!(board.view(c(9, 9), false), Some(TileView::Miss));
    assert_eq!(board.view(c(30, 30), true), None);
}

#[test]
fn test_random_placement_fills_fleet() {
    let mut board = Board::new(GRID_SIZE);
    let mut rng = SmallRng::seed_from_u64(42);
    for len in 1..=5 {
        let (start, orientation) = board.random_placement(&mut rng, len).unwrap();
        board.place_vessel(start, len, orientation).unwrap();
    }
    assert_eq!(board.unshot_ship_coords().count(), 15);
    assert_eq!(board.vessels().len(), 5);
}

#[test]
fn test_random_placement_finds_last_slot() {
    // 2x2 playing area with three tiles taken leaves one slot for a 1-tile vessel
    let mut board = Board::new(3);
    board.place_vessel(c(1, 1), 2, Orientation::Horizontal).unwrap();
    board.place_vessel(c(2, 1), 1, Orientation::Horizontal).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        board.random_placement(&mut rng, 1).map(|(start, _)| start),
        Some(c(2, 2))
    );
    assert_eq!(board.random_placement(&mut rng, 2), None);
}
