// Targeting heuristics for the computer opponent.
// Every tier only ever reads the board it is attacking; none of them keep
// a copy of it.

use std::collections::VecDeque;

use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::common::{Coord, RejectedAction, ShotOutcome};

/// Uniform samples drawn before falling back to a scan of the unshot tiles.
const MAX_RANDOM_SAMPLES: usize = 256;

/// Difficulty tier of the computer opponent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// No computer opponent; both seats are human.
    #[default]
    Disabled,
}

/// A way of choosing the next tile to fire at.
pub trait Targeting: Send {
    /// Pick a target on `board`, or `None` when nothing is left to shoot.
    /// The pick may be a tile that turns out to be rejected; the caller retries.
    fn select_target(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Coord>;

    /// Inform the strategy of the result of its last accepted shot.
    fn handle_shot_result(&mut self, _board: &Board, _coord: Coord, _outcome: ShotOutcome) {}
}

/// Pick a uniformly random unshot tile of the playing area.
///
/// Rejection sampling over the whole area, with a scan of the remaining
/// tiles once the sampling budget runs out on a nearly full board.
pub fn random_unshot_tile<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Option<Coord> {
    let size = board.size();
    if size < 2 {
        return None;
    }
    for _ in 0..MAX_RANDOM_SAMPLES {
        let coord = Coord::new(rng.random_range(1..size), rng.random_range(1..size));
        if board.tile(coord).is_some_and(|t| !t.is_shot()) {
            return Some(coord);
        }
    }
    let remaining: Vec<Coord> = board.unshot_coords().collect();
    remaining.choose(rng).copied()
}

/// Easy: random tiles, ignoring earlier results.
#[derive(Debug, Default, Clone)]
pub struct RandomTargeting;

impl Targeting for RandomTargeting {
    fn select_target(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Coord> {
        random_unshot_tile(rng, board)
    }
}

/// Medium: after a hit, work through the hit tile's orthogonal neighbours in
/// FIFO order before going back to random fire.
#[derive(Debug, Default, Clone)]
pub struct HuntTargeting {
    priority: VecDeque<Coord>,
}

impl HuntTargeting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tiles queued for follow-up shots, front first.
    pub fn priority(&self) -> &VecDeque<Coord> {
        &self.priority
    }
}

impl Targeting for HuntTargeting {
    fn select_target(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Coord> {
        match self.priority.pop_front() {
            Some(coord) => Some(coord),
            None => random_unshot_tile(rng, board),
        }
    }

    fn handle_shot_result(&mut self, board: &Board, coord: Coord, outcome: ShotOutcome) {
        if !outcome.is_hit() {
            return;
        }
        for n in coord.neighbors() {
            let fresh = board.tile(n).is_some_and(|t| t.is_selectable() && !t.is_shot());
            if fresh && !self.priority.contains(&n) {
                self.priority.push_back(n);
            }
        }
        trace!("hunt queue after hit at {}: {:?}", coord, self.priority);
    }
}

/// Hard: reads ship occupancy directly and only fires at live segments.
#[derive(Debug, Default, Clone)]
pub struct OmniscientTargeting;

impl Targeting for OmniscientTargeting {
    fn select_target(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Coord> {
        let live: Vec<Coord> = board.unshot_ship_coords().collect();
        live.choose(rng).copied()
    }
}

/// The computer opponent: a difficulty tier and its targeting strategy.
pub struct Adversary {
    difficulty: Difficulty,
    strategy: Box<dyn Targeting>,
}

impl Adversary {
    /// Build the opponent for `difficulty`; `None` when the tier is disabled.
    pub fn new(difficulty: Difficulty) -> Option<Self> {
        let strategy: Box<dyn Targeting> = match difficulty {
            Difficulty::Easy => Box::new(RandomTargeting),
            Difficulty::Medium => Box::new(HuntTargeting::new()),
            Difficulty::Hard => Box::new(OmniscientTargeting),
            Difficulty::Disabled => return None,
        };
        Some(Self {
            difficulty,
            strategy,
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Fire one shot at `board`, retrying until the board accepts a target.
    pub fn take_shot(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
    ) -> Result<(Coord, ShotOutcome), RejectedAction> {
        // every rejected pick is either an already-shot tile or a drained
        // queue entry, so the loop is bounded by the tile count
        let attempts = board.size() * board.size() * 2 + MAX_RANDOM_SAMPLES;
        for _ in 0..attempts {
            let target = self
                .strategy
                .select_target(rng, board)
                .ok_or(RejectedAction::NothingToShoot)?;
            match board.shoot(target) {
                Ok(outcome) => {
                    debug!("{:?} adversary fired at {}: {:?}", self.difficulty, target, outcome);
                    self.strategy.handle_shot_result(board, target, outcome);
                    return Ok((target, outcome));
                }
                Err(reason) => trace!("adversary pick rejected: {}", reason),
            }
        }
        Err(RejectedAction::NothingToShoot)
    }
}

impl core::fmt::Debug for Adversary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Adversary")
            .field("difficulty", &self.difficulty)
            .finish()
    }
}
