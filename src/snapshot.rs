//! Serializable view of a game for renderers and tooling.

use serde::Serialize;

use crate::ai::Difficulty;
use crate::board::Board;
use crate::common::{Coord, Orientation, PlayerId};
use crate::game::{Game, Screen};
use crate::placement::PlacementProgress;
use crate::ship::VesselId;
use crate::tile::TileView;

/// Tile views of one board, row-major, label border included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub size: usize,
    pub tiles: Vec<Vec<TileView>>,
    pub vessels_sunk: usize,
}

impl BoardSnapshot {
    pub fn capture(board: &Board, reveal_ships: bool) -> Self {
        let size = board.size();
        let tiles = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| {
                        board
                            .view(Coord::new(row, col), reveal_ships)
                            .unwrap_or(TileView::Unchanged)
                    })
                    .collect()
            })
            .collect();
        let vessels_sunk = (0..board.vessels().len())
            .filter(|i| board.is_sunk(VesselId(*i)))
            .count();
        Self {
            size,
            tiles,
            vessels_sunk,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub screen: Screen,
    pub difficulty: Difficulty,
    pub ship_count: usize,
    pub active_player: PlayerId,
    pub swap_waiting: bool,
    pub placement: PlacementProgress,
    pub hit_budget: [usize; 2],
    pub boards: [BoardSnapshot; 2],
    pub cursor: Option<Coord>,
    pub orientation: Orientation,
    pub last_winner: Option<PlayerId>,
}

impl Game {
    /// Capture what a renderer needs for the current frame. Ship positions are
    /// only included for fleets [`Game::ships_visible`] allows.
    pub fn snapshot(&self) -> GameSnapshot {
        let capture = |p: PlayerId| BoardSnapshot::capture(self.board(p), self.ships_visible(p));
        GameSnapshot {
            screen: self.screen(),
            difficulty: self.config().difficulty,
            ship_count: self.config().ship_count,
            active_player: self.turns().active(),
            swap_waiting: self.turns().swap_waiting(),
            placement: self.placement().progress(),
            hit_budget: [self.hit_budget(PlayerId::One), self.hit_budget(PlayerId::Two)],
            boards: [capture(PlayerId::One), capture(PlayerId::Two)],
            cursor: self.cursor().tile(),
            orientation: self.cursor().orientation(),
            last_winner: self.last_winner(),
        }
    }
}
