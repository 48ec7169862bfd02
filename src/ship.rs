//! Vessel definitions. Vessels live inside the [`Board`](crate::Board) that
//! holds them and are addressed by [`VesselId`].

use serde::{Deserialize, Serialize};

use crate::common::{Coord, Orientation};

/// Index of a vessel within its board's fleet, in placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VesselId(pub usize);

/// A placed ship: fixed length and the ordered tiles it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    orientation: Orientation,
    tiles: Vec<Coord>,
}

impl Vessel {
    pub(crate) fn new(start: Coord, length: usize, orientation: Orientation) -> Self {
        let tiles = (0..length).map(|i| start.step(orientation, i)).collect();
        Self {
            length,
            orientation,
            tiles,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied tiles, starting from the origin.
    pub fn tiles(&self) -> &[Coord] {
        &self.tiles
    }

    pub fn origin(&self) -> Coord {
        self.tiles[0]
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.tiles.contains(&coord)
    }
}
