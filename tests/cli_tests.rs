use hotseat_battleship::cli::{coord_to_string, parse_command, parse_coord, render_board};
use hotseat_battleship::{Board, Coord, Difficulty, Input, Orientation, Screen, GRID_SIZE};

#[test]
fn test_parse_coord() {
    assert_eq!(parse_coord("A5"), Some(Coord::new(5, 1)));
    assert_eq!(parse_coord(" j10 "), Some(Coord::new(10, 10)));
    assert_eq!(parse_coord("A0"), None);
    assert_eq!(parse_coord("5A"), None);
    assert_eq!(parse_coord(""), None);
    assert_eq!(parse_coord("A+5"), None);
    assert_eq!(parse_coord("A-5"), None);
    assert_eq!(coord_to_string(Coord::new(10, 10)), "J10");
}

#[test]
fn test_parse_command_per_screen() {
    assert_eq!(
        parse_command("play", Screen::MainMenu),
        Some(vec![Input::OpenShipSelection])
    );
    assert_eq!(
        parse_command("Hard", Screen::Settings),
        Some(vec![Input::SelectDifficulty(Difficulty::Hard)])
    );
    assert_eq!(
        parse_command("3", Screen::ShipSelection),
        Some(vec![Input::SelectShipCount(3)])
    );
    assert_eq!(
        parse_command("B3", Screen::Playing),
        Some(vec![Input::PointAt(Some(Coord::new(3, 2))), Input::Confirm])
    );
    assert_eq!(
        parse_command("", Screen::Playing),
        Some(vec![Input::AcknowledgeSwap])
    );
    assert_eq!(parse_command("quit", Screen::Playing), Some(vec![Input::Exit]));
    assert_eq!(parse_command("hard", Screen::MainMenu), None);
    assert_eq!(parse_command("nonsense", Screen::Playing), None);
}

#[test]
fn test_render_board_hides_ships() {
    let mut board = Board::new(GRID_SIZE);
    board.place_vessel(Coord::new(1, 1), 2, Orientation::Horizontal).unwrap();
    board.shoot(Coord::new(1, 1)).unwrap();

    let hidden = render_board(&board, false);
    assert!(hidden.contains('X'));
    assert!(!hidden.contains('S'));
    assert!(render_board(&board, true).contains('S'));
}

#[test]
fn test_render_wide_board_does_not_panic() {
    let board = Board::new(200);
    let rendered = render_board(&board, false);
    let header = rendered.lines().next().unwrap();
    assert!(header.contains('Z'));
    assert!(header.contains('?'));
    assert_eq!(coord_to_string(Coord::new(3, 27)), "(3, 27)");
}
