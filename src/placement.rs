//! Fleet placement: sequences ship-by-ship placement for both players before
//! any shooting happens.
//!
//! Each player places one vessel per size, from 1 up to the chosen ship
//! count. Player 1 places first; once their last vessel is down the
//! coordinator hands over to player 2, and after player 2 finishes
//! placement is complete.
//!
//! The board capabilities the coordinator needs are expressed as traits so a
//! caller can hand in any board-like target for the acting player.

use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::board::Board;
use crate::common::{Coord, Orientation, PlayerId, RejectedAction};
use crate::cooldown::Cooldown;
use crate::ship::VesselId;

/// Moves a requested start so the vessel stays on the board.
pub trait TileAdjuster {
    fn adjust_start(&self, start: Coord, length: usize, orientation: Orientation) -> Coord;
}

/// Decides whether a vessel may occupy the requested tiles.
pub trait PlacementValidator {
    fn validate_placement(
        &self,
        start: Coord,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), RejectedAction>;
}

/// Commits a validated placement.
pub trait VesselPlacer {
    fn commit_vessel(
        &mut self,
        start: Coord,
        length: usize,
        orientation: Orientation,
    ) -> Result<VesselId, RejectedAction>;
}

/// Everything the coordinator needs from a player's board.
pub trait FleetBoard: TileAdjuster + PlacementValidator + VesselPlacer {}

impl<T: TileAdjuster + PlacementValidator + VesselPlacer + ?Sized> FleetBoard for T {}

impl TileAdjuster for Board {
    fn adjust_start(&self, start: Coord, length: usize, orientation: Orientation) -> Coord {
        self.adjust_for_edge(start, length, orientation)
    }
}

impl PlacementValidator for Board {
    fn validate_placement(
        &self,
        start: Coord,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), RejectedAction> {
        self.check_placement(start, length, orientation)
    }
}

impl VesselPlacer for Board {
    fn commit_vessel(
        &mut self,
        start: Coord,
        length: usize,
        orientation: Orientation,
    ) -> Result<VesselId, RejectedAction> {
        self.place_vessel(start, length, orientation)
    }
}

/// Where placement currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlacementProgress {
    Placing { player: PlayerId, ship_size: usize },
    Complete,
}

/// A vessel committed by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub player: PlayerId,
    pub vessel: VesselId,
    pub start: Coord,
    pub length: usize,
    pub orientation: Orientation,
    /// Set when this was the player's last vessel.
    pub fleet_complete: bool,
}

#[derive(Debug, Clone)]
pub struct FleetPlacementCoordinator {
    num_ships: usize,
    current_ship_size: usize,
    active: Option<PlayerId>,
    cooldown: Cooldown,
}

impl FleetPlacementCoordinator {
    pub fn new(num_ships: usize, cooldown_ticks: u32) -> Self {
        Self {
            num_ships,
            current_ship_size: 1,
            active: Some(PlayerId::One),
            cooldown: Cooldown::new(cooldown_ticks),
        }
    }

    /// Restart placement from player 1's first vessel.
    pub fn reset(&mut self, num_ships: usize) {
        self.num_ships = num_ships;
        self.current_ship_size = 1;
        self.active = Some(PlayerId::One);
        self.cooldown.reset();
    }

    pub fn num_ships(&self) -> usize {
        self.num_ships
    }

    /// Length of the next vessel to place.
    pub fn current_ship_size(&self) -> usize {
        self.current_ship_size
    }

    /// Player currently placing, `None` once both fleets are down.
    pub fn active_player(&self) -> Option<PlayerId> {
        self.active
    }

    pub fn is_complete(&self) -> bool {
        self.active.is_none()
    }

    pub fn progress(&self) -> PlacementProgress {
        match self.active {
            Some(player) => PlacementProgress::Placing {
                player,
                ship_size: self.current_ship_size,
            },
            None => PlacementProgress::Complete,
        }
    }

    pub fn tick(&mut self) {
        self.cooldown.tick();
    }

    /// Handle a confirm input from `player` with the cursor over `tile`.
    ///
    /// The start tile is edge-adjusted by the board, validated, and committed.
    /// Any rejection leaves the coordinator and the board untouched.
    pub fn confirm<B: FleetBoard + ?Sized>(
        &mut self,
        player: PlayerId,
        board: &mut B,
        tile: Option<Coord>,
        orientation: Orientation,
    ) -> Result<Placement, RejectedAction> {
        if self.active != Some(player) {
            return Err(RejectedAction::NotYourTurn(player));
        }
        if !self.cooldown.is_ready() {
            return Err(RejectedAction::CoolingDown);
        }
        let tile = tile.ok_or(RejectedAction::NoTile)?;
        let placement = self.commit(player, board, tile, orientation)?;
        self.cooldown.trigger();
        Ok(placement)
    }

    /// Lay out the rest of `player`'s fleet at random. Used for the computer
    /// opponent; bypasses the input cooldown.
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        player: PlayerId,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<Vec<Placement>, RejectedAction> {
        let mut placed = Vec::new();
        while self.active == Some(player) {
            let size = self.current_ship_size;
            let (start, orientation) = board
                .random_placement(rng, size)
                .ok_or(RejectedAction::NoRoom(size))?;
            placed.push(self.commit(player, board, start, orientation)?);
        }
        if placed.is_empty() {
            return Err(RejectedAction::NotYourTurn(player));
        }
        Ok(placed)
    }

    fn commit<B: FleetBoard + ?Sized>(
        &mut self,
        player: PlayerId,
        board: &mut B,
        tile: Coord,
        orientation: Orientation,
    ) -> Result<Placement, RejectedAction> {
        let length = self.current_ship_size;
        let start = board.adjust_start(tile, length, orientation);
        board.validate_placement(start, length, orientation)?;
        let vessel = board.commit_vessel(start, length, orientation)?;
        debug!("{} placed a {}-tile vessel at {} {:?}", player, length, start, orientation);
        let fleet_complete = self.advance();
        Ok(Placement {
            player,
            vessel,
            start,
            length,
            orientation,
            fleet_complete,
        })
    }

    /// Move on to the next vessel; returns `true` when the acting player is done.
    fn advance(&mut self) -> bool {
        self.current_ship_size += 1;
        if self.current_ship_size <= self.num_ships {
            return false;
        }
        self.current_ship_size = 1;
        self.active = match self.active {
            Some(PlayerId::One) => {
                info!("P1 fleet placed, P2 to place");
                Some(PlayerId::Two)
            }
            _ => {
                info!("both fleets placed");
                None
            }
        };
        true
    }
}
