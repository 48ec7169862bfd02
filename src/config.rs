use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::Difficulty;

/// Side length of a board, including the label row and column at index 0.
pub const GRID_SIZE: usize = 11;
/// Longest vessel and largest fleet a game supports.
pub const MAX_SHIPS: usize = 5;
pub const DEFAULT_SHIP_COUNT: usize = 5;
/// Largest board side whose columns can all be labelled `A`..`Z`.
pub const MAX_GRID_SIZE: usize = 27;
/// Steps that placement and shooting input stay locked after an accepted action.
pub const ACTION_COOLDOWN_TICKS: u32 = 15;
/// Steps between orientation toggles (200 ms at 60 steps per second).
pub const ROTATE_COOLDOWN_TICKS: u32 = 12;

/// Sum of all vessel lengths for a fleet of `ship_count` ships (1 + 2 + ... + n).
pub const fn hit_budget(ship_count: usize) -> usize {
    ship_count * (ship_count + 1) / 2
}

/// Errors returned by [`GameConfig::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size {0} leaves no playable area")]
    GridTooSmall(usize),
    #[error("grid size {0} exceeds the maximum of {MAX_GRID_SIZE}")]
    GridTooLarge(usize),
    #[error("ship count {0} must be between 1 and {MAX_SHIPS}")]
    ShipCount(usize),
    #[error("a {len}-tile vessel does not fit a {playable}x{playable} playing area")]
    ShipTooLong { len: usize, playable: usize },
}

/// Tunables for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_size: usize,
    pub ship_count: usize,
    pub difficulty: Difficulty,
    pub action_cooldown_ticks: u32,
    pub rotate_cooldown_ticks: u32,
    /// Fixed seed for the computer opponent; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            ship_count: DEFAULT_SHIP_COUNT,
            difficulty: Difficulty::Disabled,
            action_cooldown_ticks: ACTION_COOLDOWN_TICKS,
            rotate_cooldown_ticks: ROTATE_COOLDOWN_TICKS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge(self.grid_size));
        }
        if self.ship_count == 0 || self.ship_count > MAX_SHIPS {
            return Err(ConfigError::ShipCount(self.ship_count));
        }
        let playable = self.grid_size - 1;
        if self.ship_count > playable {
            return Err(ConfigError::ShipTooLong {
                len: self.ship_count,
                playable,
            });
        }
        Ok(())
    }
}
