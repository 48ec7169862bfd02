//! A single cell of a player's board.

use serde::{Deserialize, Serialize};

use crate::ship::VesselId;

/// Lifecycle of a tile. Shot states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    WaterUnknown,
    WaterShot,
    ShipUnknown,
    ShipShot,
}

/// What a renderer should draw for a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileView {
    Unchanged,
    Hit,
    Miss,
    HasShip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    vessel: Option<VesselId>,
    selectable: bool,
    shot: bool,
}

impl Tile {
    pub(crate) fn new(selectable: bool) -> Self {
        Self {
            vessel: None,
            selectable,
            shot: false,
        }
    }

    pub fn vessel(&self) -> Option<VesselId> {
        self.vessel
    }

    pub fn has_ship(&self) -> bool {
        self.vessel.is_some()
    }

    /// Label tiles on row/column 0 are never selectable.
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn is_shot(&self) -> bool {
        self.shot
    }

    pub fn is_hit(&self) -> bool {
        self.shot && self.has_ship()
    }

    pub fn state(&self) -> TileState {
        match (self.has_ship(), self.shot) {
            (false, false) => TileState::WaterUnknown,
            (false, true) => TileState::WaterShot,
            (true, false) => TileState::ShipUnknown,
            (true, true) => TileState::ShipShot,
        }
    }

    /// Render view; unshot ship tiles only show when `reveal_ships` is set.
    pub fn view(&self, reveal_ships: bool) -> TileView {
        match self.state() {
            TileState::WaterShot => TileView::Miss,
            TileState::ShipShot => TileView::Hit,
            TileState::ShipUnknown if reveal_ships => TileView::HasShip,
            _ => TileView::Unchanged,
        }
    }

    pub(crate) fn assign(&mut self, vessel: VesselId) {
        self.vessel = Some(vessel);
    }

    pub(crate) fn mark_shot(&mut self) {
        self.shot = true;
    }
}
