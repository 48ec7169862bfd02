//! Common types for Battleship: coordinates, players, shot results and the
//! rejection taxonomy shared by every component.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A (row, col) position on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The coordinate `offset` cells further along `orientation`.
    pub fn step(self, orientation: Orientation, offset: usize) -> Self {
        match orientation {
            Orientation::Horizontal => Coord::new(self.row, self.col.saturating_add(offset)),
            Orientation::Vertical => Coord::new(self.row.saturating_add(offset), self.col),
        }
    }

    /// The four orthogonal neighbours that do not underflow zero.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = self;
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            Some(Coord::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            Some(Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Identity of one of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other seat.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Array index for per-player storage.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => f.write_str("P1"),
            PlayerId::Two => f.write_str("P2"),
        }
    }
}

/// Orientation of a vessel or of the placement cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Extends to the right of the start tile.
    #[default]
    Horizontal,
    /// Extends downward from the start tile.
    Vertical,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Result of a shot that consumed a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// The tile held a vessel segment. `sunk` is set when this hit finished it.
    Hit { sunk: bool },
    /// The tile was open water.
    Miss,
}

impl ShotOutcome {
    pub fn is_hit(self) -> bool {
        matches!(self, ShotOutcome::Hit { .. })
    }
}

/// Why an input or operation was ignored. Rejections never change state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RejectedAction {
    /// The cursor is not over any selectable tile.
    #[error("no tile under the cursor")]
    NoTile,
    /// The coordinate lies outside the board.
    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coord),
    /// The coordinate is a label tile, not part of the playing area.
    #[error("coordinate {0} is not a playable tile")]
    NotPlayable(Coord),
    /// The tile was shot earlier.
    #[error("tile {0} was already shot")]
    AlreadyShot(Coord),
    /// A target tile already holds a vessel.
    #[error("placement overlaps a vessel at {0}")]
    Overlap(Coord),
    /// Vessel length outside the supported range.
    #[error("vessel length {0} is not supported")]
    InvalidLength(usize),
    /// The debounce timer for this kind of input has not expired.
    #[error("input is cooling down")]
    CoolingDown,
    /// The players have not acknowledged the turn swap yet.
    #[error("waiting for the turn swap to be acknowledged")]
    SwapPending,
    /// The input does not apply to the current screen.
    #[error("input does not apply to the current screen")]
    WrongScreen,
    /// Placement or shooting was requested for a player that is not acting.
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),
    /// Ship count outside 1..=MAX_SHIPS.
    #[error("ship count {0} is not supported")]
    InvalidShipCount(usize),
    /// No free slot on the board fits a vessel of this length.
    #[error("no room left for a {0}-tile vessel")]
    NoRoom(usize),
    /// No unshot tile remains to target.
    #[error("no tile is left to shoot")]
    NothingToShoot,
}
