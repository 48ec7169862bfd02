//! Game board state: a square matrix of tiles plus the fleet placed on it.
//!
//! Row and column 0 hold the coordinate labels and are never selectable, so
//! a board of side `N` has an `(N-1)×(N-1)` playing area at `1..N`.

use core::fmt;

use log::trace;
use rand::Rng;

use crate::common::{Coord, Orientation, RejectedAction, ShotOutcome};
use crate::config::MAX_SHIPS;
use crate::ship::{Vessel, VesselId};
use crate::tile::{Tile, TileView};

/// Attempts made by [`Board::random_placement`] before giving up.
const RANDOM_PLACEMENT_ATTEMPTS: usize = 100;

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    tiles: Vec<Tile>,
    vessels: Vec<Vessel>,
}

impl Board {
    /// Create an empty board of side `size` (label border included).
    pub fn new(size: usize) -> Self {
        let tiles = (0..size * size)
            .map(|i| Tile::new(i / size != 0 && i % size != 0))
            .collect();
        Board {
            size,
            tiles,
            vessels: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.size && coord.col < self.size).then(|| coord.row * self.size + coord.col)
    }

    /// Tile at `coord`, or `None` when it lies outside the board.
    pub fn tile(&self, coord: Coord) -> Option<&Tile> {
        self.index(coord).map(|i| &self.tiles[i])
    }

    /// `true` when `coord` is inside the selectable playing area.
    pub fn is_playable(&self, coord: Coord) -> bool {
        self.tile(coord).is_some_and(Tile::is_selectable)
    }

    /// Every coordinate of the playing area, row by row.
    pub fn playable_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        (1..size).flat_map(move |row| (1..size).map(move |col| Coord::new(row, col)))
    }

    /// Playable tiles that have not been shot yet.
    pub fn unshot_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.playable_coords()
            .filter(move |c| self.tile(*c).is_some_and(|t| !t.is_shot()))
    }

    /// Unshot tiles that hold a vessel segment. Sunk vessels never appear
    /// since all of their tiles are shot.
    pub fn unshot_ship_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.unshot_coords()
            .filter(move |c| self.tile(*c).is_some_and(Tile::has_ship))
    }

    /// Placed vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn vessel(&self, id: VesselId) -> Option<&Vessel> {
        self.vessels.get(id.0)
    }

    /// A vessel is sunk once every tile it occupies has been hit.
    pub fn is_sunk(&self, id: VesselId) -> bool {
        self.vessel(id).is_some_and(|v| {
            v.tiles()
                .iter()
                .all(|c| self.tile(*c).is_some_and(Tile::is_hit))
        })
    }

    /// `true` when at least one vessel was placed and all of them are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.vessels.is_empty() && (0..self.vessels.len()).all(|i| self.is_sunk(VesselId(i)))
    }

    /// Render view of one tile.
    pub fn view(&self, coord: Coord, reveal_ships: bool) -> Option<TileView> {
        self.tile(coord).map(|t| t.view(reveal_ships))
    }

    /// Slide `start` back so a vessel of `length` ends against the far edge
    /// instead of running past it. Coordinates that already fit, or that are
    /// off the board, are returned unchanged.
    pub fn adjust_for_edge(&self, start: Coord, length: usize, orientation: Orientation) -> Coord {
        if self.index(start).is_none() {
            return start;
        }
        let anchor = self.size.saturating_sub(length).max(1);
        match orientation {
            Orientation::Horizontal if start.col + length > self.size => {
                Coord::new(start.row, anchor)
            }
            Orientation::Vertical if start.row + length > self.size => {
                Coord::new(anchor, start.col)
            }
            _ => start,
        }
    }

    /// Check every tile a placement would cover, in order. Bounds are checked
    /// before occupancy so the result never depends on a prior edge adjustment.
    pub fn check_placement(
        &self,
        start: Coord,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), RejectedAction> {
        if length == 0 || length > MAX_SHIPS {
            return Err(RejectedAction::InvalidLength(length));
        }
        for i in 0..length {
            let coord = start.step(orientation, i);
            let tile = self.tile(coord).ok_or(RejectedAction::OutOfBounds(coord))?;
            if !tile.is_selectable() {
                return Err(RejectedAction::NotPlayable(coord));
            }
            if tile.has_ship() {
                return Err(RejectedAction::Overlap(coord));
            }
        }
        Ok(())
    }

    pub fn is_placement_valid(&self, start: Coord, length: usize, orientation: Orientation) -> bool {
        self.check_placement(start, length, orientation).is_ok()
    }

    /// Place a vessel of `length` at `start`, extending right or down.
    pub fn place_vessel(
        &mut self,
        start: Coord,
        length: usize,
        orientation: Orientation,
    ) -> Result<VesselId, RejectedAction> {
        self.check_placement(start, length, orientation)?;
        let id = VesselId(self.vessels.len());
        let vessel = Vessel::new(start, length, orientation);
        for coord in vessel.tiles() {
            if let Some(i) = self.index(*coord) {
                self.tiles[i].assign(id);
            }
        }
        trace!("vessel {:?} (len {}) placed at {} {:?}", id, length, start, orientation);
        self.vessels.push(vessel);
        Ok(id)
    }

    /// Returns a random valid `(start, orientation)` for a vessel of `length`,
    /// or `None` when no slot on the board can take it.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Option<(Coord, Orientation)> {
        if length == 0 || length >= self.size {
            return None;
        }
        for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_row, max_col) = match orientation {
                Orientation::Horizontal => (self.size - 1, self.size - length),
                Orientation::Vertical => (self.size - length, self.size - 1),
            };
            let start = Coord::new(
                rng.random_range(1..=max_row),
                rng.random_range(1..=max_col),
            );
            if self.is_placement_valid(start, length, orientation) {
                return Some((start, orientation));
            }
        }
        // crowded board: fall back to the first valid slot
        self.playable_coords()
            .flat_map(|c| [(c, Orientation::Horizontal), (c, Orientation::Vertical)])
            .find(|(c, o)| self.is_placement_valid(*c, length, *o))
    }

    /// Fire at `coord`, permanently consuming the tile.
    pub fn shoot(&mut self, coord: Coord) -> Result<ShotOutcome, RejectedAction> {
        let i = self.index(coord).ok_or(RejectedAction::OutOfBounds(coord))?;
        let tile = &mut self.tiles[i];
        if !tile.is_selectable() {
            return Err(RejectedAction::NotPlayable(coord));
        }
        if tile.is_shot() {
            return Err(RejectedAction::AlreadyShot(coord));
        }
        tile.mark_shot();
        match tile.vessel() {
            Some(id) => Ok(ShotOutcome::Hit {
                sunk: self.is_sunk(id),
            }),
            None => Ok(ShotOutcome::Miss),
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ size: {}, vessels: {:?} }}", self.size, self.vessels)?;
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = match self.tile(Coord::new(row, col)).map(|t| t.view(true)) {
                    Some(TileView::Hit) => 'X',
                    Some(TileView::Miss) => 'o',
                    Some(TileView::HasShip) => 'S',
                    _ if row == 0 || col == 0 => '#',
                    _ => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
