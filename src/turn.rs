//! Turn order and the swap-acknowledgment gate between turns.

use log::debug;

use crate::common::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnCoordinator {
    active: PlayerId,
    swap_waiting: bool,
}

impl Default for TurnCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnCoordinator {
    /// Player 1 moves first and no swap is pending.
    pub fn new() -> Self {
        Self {
            active: PlayerId::One,
            swap_waiting: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn active(&self) -> PlayerId {
        self.active
    }

    /// While set, shooting input is ignored.
    pub fn swap_waiting(&self) -> bool {
        self.swap_waiting
    }

    /// Hand the turn to the other player and raise the swap gate.
    /// Called once per completed shot.
    pub fn next_turn(&mut self) {
        self.active = self.active.opponent();
        self.swap_waiting = true;
        debug!("turn passes to {}, waiting for swap", self.active);
    }

    /// Clear the swap gate. Returns `false` when no swap was pending.
    pub fn acknowledge_swap(&mut self) -> bool {
        let was_waiting = self.swap_waiting;
        self.swap_waiting = false;
        was_waiting
    }
}
