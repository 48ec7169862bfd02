//! The player's pointer: which tile it hovers and how a pending vessel is
//! oriented.

use crate::board::Board;
use crate::common::{Coord, Orientation, RejectedAction};
use crate::cooldown::Cooldown;

#[derive(Debug, Clone)]
pub struct Cursor {
    tile: Option<Coord>,
    orientation: Orientation,
    rotate_cooldown: Cooldown,
}

impl Cursor {
    pub fn new(rotate_cooldown_ticks: u32) -> Self {
        Self {
            tile: None,
            orientation: Orientation::Horizontal,
            rotate_cooldown: Cooldown::new(rotate_cooldown_ticks),
        }
    }

    /// Hovered tile; `None` when the pointer is over no selectable tile.
    pub fn tile(&self) -> Option<Coord> {
        self.tile
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn point_at(&mut self, tile: Option<Coord>) {
        self.tile = tile;
    }

    pub fn tick(&mut self) {
        self.rotate_cooldown.tick();
    }

    /// Flip between horizontal and vertical, at most once per rotate cooldown.
    pub fn rotate(&mut self) -> Result<Orientation, RejectedAction> {
        if !self.rotate_cooldown.is_ready() {
            return Err(RejectedAction::CoolingDown);
        }
        self.orientation = self.orientation.flipped();
        self.rotate_cooldown.trigger();
        Ok(self.orientation)
    }

    /// The shot cursor is always horizontal.
    pub fn enter_play(&mut self) {
        self.orientation = Orientation::Horizontal;
    }

    pub fn reset(&mut self) {
        self.tile = None;
        self.orientation = Orientation::Horizontal;
        self.rotate_cooldown.reset();
    }

    /// Tiles a vessel of `length` would cover if confirmed now, after edge
    /// adjustment. Empty when the cursor is off the playing area.
    pub fn footprint(&self, board: &Board, length: usize) -> Vec<Coord> {
        match self.tile.filter(|c| board.is_playable(*c)) {
            Some(tile) => {
                let start = board.adjust_for_edge(tile, length, self.orientation);
                (0..length)
                    .map(|i| start.step(self.orientation, i))
                    .filter(|c| board.is_playable(*c))
                    .collect()
            }
            None => Vec::new(),
        }
    }
}
