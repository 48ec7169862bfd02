//! Command-line helpers for the terminal driver
//!
//! This module provides:
//! - Coordinate parsing and formatting (`A5`, `J10`)
//! - Line command parsing into game [`Input`]s
//! - Text rendering of boards and game status

use std::fmt::Write;

use crate::ai::Difficulty;
use crate::board::Board;
use crate::common::{Coord, PlayerId};
use crate::game::{Game, Screen};
use crate::placement::PlacementProgress;
use crate::tile::TileView;
use crate::Input;

/// Letter for a playable column, `None` past `Z`.
fn column_letter(col: usize) -> Option<char> {
    let offset = u8::try_from(col.checked_sub(1)?).ok().filter(|o| *o < 26)?;
    Some((b'A' + offset) as char)
}

/// Format a board coordinate as column letter plus row number.
pub fn coord_to_string(coord: Coord) -> String {
    match column_letter(coord.col) {
        Some(letter) => format!("{}{}", letter, coord.row),
        None => format!("{}", coord),
    }
}

/// Parse `A5`-style input into a board coordinate. Column `A` and row `1`
/// are the first playable column and row.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize + 1;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: usize = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(Coord::new(row, col))
}

/// Translate one line of user input into game inputs for the current screen.
pub fn parse_command(line: &str, screen: Screen) -> Option<Vec<Input>> {
    let line = line.trim();
    let lower = line.to_ascii_lowercase();
    let inputs = match (screen, lower.as_str()) {
        (_, "quit" | "exit") => vec![Input::Exit],
        (Screen::MainMenu, "play") => vec![Input::OpenShipSelection],
        (Screen::MainMenu, "settings") => vec![Input::OpenSettings],
        (Screen::Settings | Screen::ShipSelection, "back") => vec![Input::Back],
        (Screen::Settings, "easy") => vec![Input::SelectDifficulty(Difficulty::Easy)],
        (Screen::Settings, "medium") => vec![Input::SelectDifficulty(Difficulty::Medium)],
        (Screen::Settings, "hard") => vec![Input::SelectDifficulty(Difficulty::Hard)],
        (Screen::Settings, "off" | "disabled") => {
            vec![Input::SelectDifficulty(Difficulty::Disabled)]
        }
        (Screen::ShipSelection, "start") => vec![Input::StartGame],
        (Screen::ShipSelection, n) => vec![Input::SelectShipCount(n.parse().ok()?)],
        (Screen::Playing, "r" | "rotate") => vec![Input::ToggleOrientation],
        (Screen::Playing, "ok" | "") => vec![Input::AcknowledgeSwap],
        (Screen::Playing, _) => {
            let coord = parse_coord(line)?;
            vec![Input::PointAt(Some(coord)), Input::Confirm]
        }
        _ => return None,
    };
    Some(inputs)
}

/// Render one board with coordinate labels. Unshot ships only show when
/// `reveal` is set. Columns past `Z` are labelled `?`.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("    ");
    for col in 1..board.size() {
        let _ = write!(out, " {}", column_letter(col).unwrap_or('?'));
    }
    out.push('\n');
    for row in 1..board.size() {
        let _ = write!(out, "  {:2}", row);
        for col in 1..board.size() {
            let ch = match board.view(Coord::new(row, col), reveal) {
                Some(TileView::Hit) => 'X',
                Some(TileView::Miss) => 'o',
                Some(TileView::HasShip) => 'S',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Status line and both boards for the current frame.
pub fn render_game(game: &Game) -> String {
    let mut out = String::new();
    match game.screen() {
        Screen::MainMenu => {
            if let Some(winner) = game.last_winner() {
                let _ = writeln!(out, "Last game won by {}", winner);
            }
            out.push_str("Main menu: play | settings | quit\n");
        }
        Screen::Settings => {
            let _ = writeln!(
                out,
                "Opponent: {:?}. Choose easy | medium | hard | off, or back",
                game.config().difficulty
            );
        }
        Screen::ShipSelection => {
            let _ = writeln!(
                out,
                "Ships: {}. Enter 1-5 to change, start, or back",
                game.config().ship_count
            );
        }
        Screen::Playing => render_playing(game, &mut out),
        Screen::Exited => out.push_str("Goodbye\n"),
    }
    out
}

fn render_playing(game: &Game, out: &mut String) {
    for player in [PlayerId::One, PlayerId::Two] {
        let _ = writeln!(
            out,
            "{} board ({} hits to sink):",
            player,
            game.hit_budget(player)
        );
        out.push_str(&render_board(game.board(player), game.ships_visible(player)));
    }
    if game.turns().swap_waiting() {
        let _ = writeln!(out, "Swap seats, then {} enters ok", game.turns().active());
        return;
    }
    match game.placement().progress() {
        PlacementProgress::Placing { player, ship_size } => {
            let _ = writeln!(
                out,
                "{}: place your {}-tile ship ({:?}, r to rotate), e.g. A5",
                player,
                ship_size,
                game.cursor().orientation()
            );
        }
        PlacementProgress::Complete => {
            let _ = writeln!(out, "{}: fire at a tile, e.g. C7", game.turns().active());
        }
    }
}
