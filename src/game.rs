//! Game orchestration: the screen state machine and the per-step routing of
//! input to placement, shooting and the computer opponent.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::ai::{Adversary, Difficulty};
use crate::board::Board;
use crate::common::{Coord, Orientation, PlayerId, RejectedAction, ShotOutcome};
use crate::config::{hit_budget, ConfigError, GameConfig, MAX_SHIPS};
use crate::cooldown::Cooldown;
use crate::cursor::Cursor;
use crate::placement::{FleetPlacementCoordinator, Placement};
use crate::ship::VesselId;
use crate::turn::TurnCoordinator;

/// Top-level screen. A finished game returns straight to the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    MainMenu,
    Settings,
    ShipSelection,
    Playing,
    Exited,
}

/// Input events the core consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    OpenShipSelection,
    OpenSettings,
    /// Return from a sub-menu to the main menu.
    Back,
    Exit,
    SelectDifficulty(Difficulty),
    SelectShipCount(usize),
    StartGame,
    /// Move the cursor; `None` when it leaves the playing area.
    PointAt(Option<Coord>),
    ToggleOrientation,
    /// Place the current vessel or fire at the tile under the cursor.
    Confirm,
    AcknowledgeSwap,
}

/// What changed during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ScreenChanged(Screen),
    DifficultySelected(Difficulty),
    ShipCountSelected(usize),
    OrientationChanged(Orientation),
    VesselPlaced {
        player: PlayerId,
        vessel: VesselId,
        start: Coord,
        length: usize,
        orientation: Orientation,
    },
    FleetPlaced(PlayerId),
    ShotFired {
        shooter: PlayerId,
        target: Coord,
        outcome: ShotOutcome,
    },
    VesselSunk {
        owner: PlayerId,
        vessel: VesselId,
    },
    TurnChanged(PlayerId),
    SwapAcknowledged,
    GameOver {
        winner: PlayerId,
    },
}

pub struct Game {
    config: GameConfig,
    screen: Screen,
    boards: [Board; 2],
    hit_budget: [usize; 2],
    placement: FleetPlacementCoordinator,
    turns: TurnCoordinator,
    cursor: Cursor,
    shot_cooldown: Cooldown,
    adversary: Option<Adversary>,
    rng: SmallRng,
    last_winner: Option<PlayerId>,
}

impl Game {
    /// Start a session at the main menu.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Ok(Self {
            screen: Screen::MainMenu,
            boards: [Board::new(config.grid_size), Board::new(config.grid_size)],
            hit_budget: [0; 2],
            placement: FleetPlacementCoordinator::new(
                config.ship_count,
                config.action_cooldown_ticks,
            ),
            turns: TurnCoordinator::new(),
            cursor: Cursor::new(config.rotate_cooldown_ticks),
            shot_cooldown: Cooldown::new(config.action_cooldown_ticks),
            adversary: None,
            rng,
            last_winner: None,
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_running(&self) -> bool {
        self.screen != Screen::Exited
    }

    /// Board owned by `player`; the opponent shoots at it.
    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[player.index()]
    }

    /// Hits still needed to sink `player`'s whole fleet.
    pub fn hit_budget(&self, player: PlayerId) -> usize {
        self.hit_budget[player.index()]
    }

    pub fn placement(&self) -> &FleetPlacementCoordinator {
        &self.placement
    }

    pub fn turns(&self) -> &TurnCoordinator {
        &self.turns
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Winner of the most recently finished game.
    pub fn last_winner(&self) -> Option<PlayerId> {
        self.last_winner
    }

    /// Seat played by the computer, if any.
    pub fn computer_player(&self) -> Option<PlayerId> {
        self.adversary.as_ref().map(|_| PlayerId::Two)
    }

    /// Whether `player`'s unshot ships may be drawn. Both fleets are hidden
    /// while a swap is pending, and only the acting player's fleet shows.
    pub fn ships_visible(&self, player: PlayerId) -> bool {
        if self.computer_player().is_some() {
            return player == PlayerId::One;
        }
        !self.turns.swap_waiting() && self.turns.active() == player
    }

    /// Run one simulation step: advance the debounce timers, apply `inputs` in
    /// order, then let the computer opponent act if it is its turn. Rejected
    /// inputs are dropped without changing state.
    pub fn step<I: IntoIterator<Item = Input>>(&mut self, inputs: I) -> Vec<GameEvent> {
        self.cursor.tick();
        self.placement.tick();
        self.shot_cooldown.tick();

        let mut events = Vec::new();
        for input in inputs {
            if let Err(reason) = self.apply(input, &mut events) {
                debug!("ignored {:?}: {}", input, reason);
            }
        }
        if let Err(reason) = self.run_adversary(&mut events) {
            debug!("adversary idle: {}", reason);
        }
        events
    }

    /// Apply a single input immediately, without advancing timers.
    pub fn apply_input(&mut self, input: Input) -> Result<Vec<GameEvent>, RejectedAction> {
        let mut events = Vec::new();
        self.apply(input, &mut events)?;
        Ok(events)
    }

    fn apply(&mut self, input: Input, events: &mut Vec<GameEvent>) -> Result<(), RejectedAction> {
        match (self.screen, input) {
            (Screen::Exited, _) => Err(RejectedAction::WrongScreen),
            (_, Input::Exit) => {
                self.set_screen(Screen::Exited, events);
                Ok(())
            }
            (Screen::MainMenu, Input::OpenShipSelection) => {
                self.set_screen(Screen::ShipSelection, events);
                Ok(())
            }
            (Screen::MainMenu, Input::OpenSettings) => {
                self.set_screen(Screen::Settings, events);
                Ok(())
            }
            (Screen::Settings | Screen::ShipSelection, Input::Back) => {
                self.set_screen(Screen::MainMenu, events);
                Ok(())
            }
            (Screen::Settings, Input::SelectDifficulty(difficulty)) => {
                self.config.difficulty = difficulty;
                events.push(GameEvent::DifficultySelected(difficulty));
                Ok(())
            }
            (Screen::ShipSelection, Input::SelectShipCount(count)) => {
                if count == 0 || count > MAX_SHIPS || count >= self.config.grid_size {
                    return Err(RejectedAction::InvalidShipCount(count));
                }
                self.config.ship_count = count;
                events.push(GameEvent::ShipCountSelected(count));
                Ok(())
            }
            (Screen::ShipSelection, Input::StartGame) => {
                self.start_game(events)
            }
            (Screen::Playing, Input::PointAt(tile)) => {
                self.cursor.point_at(tile);
                Ok(())
            }
            (Screen::Playing, Input::ToggleOrientation) => {
                if self.placement.is_complete() {
                    return Err(RejectedAction::WrongScreen);
                }
                let orientation = self.cursor.rotate()?;
                events.push(GameEvent::OrientationChanged(orientation));
                Ok(())
            }
            (Screen::Playing, Input::AcknowledgeSwap) => {
                if self.turns.acknowledge_swap() {
                    events.push(GameEvent::SwapAcknowledged);
                }
                Ok(())
            }
            (Screen::Playing, Input::Confirm) => {
                if self.turns.swap_waiting() {
                    return Err(RejectedAction::SwapPending);
                }
                if self.placement.is_complete() {
                    self.human_shot(events)
                } else {
                    self.human_placement(events)
                }
            }
            _ => Err(RejectedAction::WrongScreen),
        }
    }

    fn set_screen(&mut self, screen: Screen, events: &mut Vec<GameEvent>) {
        if self.screen != screen {
            info!("screen {:?} -> {:?}", self.screen, screen);
            self.screen = screen;
            events.push(GameEvent::ScreenChanged(screen));
        }
    }

    fn start_game(&mut self, events: &mut Vec<GameEvent>) -> Result<(), RejectedAction> {
        let ships = self.config.ship_count;
        if ships == 0 || ships > MAX_SHIPS {
            return Err(RejectedAction::InvalidShipCount(ships));
        }
        self.boards = [
            Board::new(self.config.grid_size),
            Board::new(self.config.grid_size),
        ];
        self.hit_budget = [hit_budget(ships); 2];
        self.placement.reset(ships);
        self.turns.reset();
        self.cursor.reset();
        self.shot_cooldown.reset();
        self.adversary = Adversary::new(self.config.difficulty);
        info!(
            "new game: {} ships, opponent {:?}",
            ships, self.config.difficulty
        );
        self.set_screen(Screen::Playing, events);
        Ok(())
    }

    fn human_placement(&mut self, events: &mut Vec<GameEvent>) -> Result<(), RejectedAction> {
        let player = self
            .placement
            .active_player()
            .ok_or(RejectedAction::WrongScreen)?;
        if self.computer_player() == Some(player) {
            return Err(RejectedAction::NotYourTurn(player));
        }
        let placed = self.placement.confirm(
            player,
            &mut self.boards[player.index()],
            self.cursor.tile(),
            self.cursor.orientation(),
        )?;
        Self::record_placement(&placed, events);
        if placed.fleet_complete {
            self.finish_fleet(player, events)?;
        }
        Ok(())
    }

    fn finish_fleet(
        &mut self,
        player: PlayerId,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), RejectedAction> {
        events.push(GameEvent::FleetPlaced(player));
        match (player, self.computer_player()) {
            (PlayerId::One, Some(computer)) => {
                let placed =
                    self.placement
                        .place_randomly(computer, &mut self.boards[computer.index()], &mut self.rng)?;
                for p in &placed {
                    Self::record_placement(p, events);
                }
                events.push(GameEvent::FleetPlaced(computer));
            }
            _ => {
                self.turns.next_turn();
                events.push(GameEvent::TurnChanged(self.turns.active()));
            }
        }
        if self.placement.is_complete() {
            self.cursor.enter_play();
        }
        Ok(())
    }

    fn record_placement(placed: &Placement, events: &mut Vec<GameEvent>) {
        events.push(GameEvent::VesselPlaced {
            player: placed.player,
            vessel: placed.vessel,
            start: placed.start,
            length: placed.length,
            orientation: placed.orientation,
        });
    }

    fn human_shot(&mut self, events: &mut Vec<GameEvent>) -> Result<(), RejectedAction> {
        let shooter = self.turns.active();
        if self.computer_player() == Some(shooter) {
            return Err(RejectedAction::NotYourTurn(shooter));
        }
        if !self.shot_cooldown.is_ready() {
            return Err(RejectedAction::CoolingDown);
        }
        let target = self.cursor.tile().ok_or(RejectedAction::NoTile)?;
        let outcome = self.boards[shooter.opponent().index()].shoot(target)?;
        self.shot_cooldown.trigger();
        self.resolve_shot(shooter, target, outcome, events);
        Ok(())
    }

    fn run_adversary(&mut self, events: &mut Vec<GameEvent>) -> Result<(), RejectedAction> {
        if self.screen != Screen::Playing || !self.placement.is_complete() {
            return Ok(());
        }
        let Some(adversary) = self.adversary.as_mut() else {
            return Ok(());
        };
        if self.turns.active() != PlayerId::Two {
            return Ok(());
        }
        self.turns.acknowledge_swap();
        let (target, outcome) =
            adversary.take_shot(&mut self.rng, &mut self.boards[PlayerId::One.index()])?;
        self.resolve_shot(PlayerId::Two, target, outcome, events);
        Ok(())
    }

    /// Book-keeping after a shot landed: budget, sinking, game over, turn swap.
    fn resolve_shot(
        &mut self,
        shooter: PlayerId,
        target: Coord,
        outcome: ShotOutcome,
        events: &mut Vec<GameEvent>,
    ) {
        let victim = shooter.opponent();
        info!("{} fired at {}: {:?}", shooter, target, outcome);
        events.push(GameEvent::ShotFired {
            shooter,
            target,
            outcome,
        });
        if let ShotOutcome::Hit { sunk } = outcome {
            let budget = &mut self.hit_budget[victim.index()];
            *budget = budget.saturating_sub(1);
            if sunk {
                if let Some(vessel) = self.boards[victim.index()]
                    .tile(target)
                    .and_then(|t| t.vessel())
                {
                    events.push(GameEvent::VesselSunk {
                        owner: victim,
                        vessel,
                    });
                }
            }
            if self.hit_budget[victim.index()] == 0 {
                self.end_game(shooter, events);
                return;
            }
        }
        self.turns.next_turn();
        events.push(GameEvent::TurnChanged(self.turns.active()));
        if self.adversary.is_some() {
            self.turns.acknowledge_swap();
        }
    }

    fn end_game(&mut self, winner: PlayerId, events: &mut Vec<GameEvent>) {
        info!("game over, {} wins", winner);
        self.last_winner = Some(winner);
        events.push(GameEvent::GameOver { winner });
        self.set_screen(Screen::MainMenu, events);
    }
}
