use std::io::{self, BufRead, Write};

use clap::Parser;
use hotseat_battleship::{
    cli::{parse_command, render_game},
    init_logging, Difficulty, Game, GameConfig, GameEvent, Input, Screen, ShotOutcome,
    DEFAULT_SHIP_COUNT, GRID_SIZE, ROTATE_COOLDOWN_TICKS,
};

#[derive(Parser)]
#[command(author, version, about = "Two-player Battleship in the terminal", long_about = None)]
struct Cli {
    /// Computer opponent tier; `disabled` plays hot-seat with two humans.
    #[arg(long, value_enum, default_value_t = Difficulty::Disabled)]
    difficulty: Difficulty,
    /// Ships per fleet, sized 1 through this number.
    #[arg(long, default_value_t = DEFAULT_SHIP_COUNT)]
    ships: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Steps to lock input after an accepted action. Terminal input is
    /// line-buffered, so the default is off.
    #[arg(long, default_value_t = 0)]
    cooldown: u32,
    /// Jump straight into a game instead of the main menu.
    #[arg(long)]
    quick: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GameConfig {
        grid_size: GRID_SIZE,
        ship_count: cli.ships,
        difficulty: cli.difficulty,
        action_cooldown_ticks: cli.cooldown,
        rotate_cooldown_ticks: cli.cooldown.min(ROTATE_COOLDOWN_TICKS),
        seed: cli.seed,
    };
    let mut game = Game::new(config)?;
    if cli.quick {
        game.step([Input::OpenShipSelection, Input::StartGame]);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while game.is_running() {
        print!("\n{}> ", render_game(&game));
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let Some(inputs) = parse_command(&line, game.screen()) else {
            println!("Unrecognised command: {}", line.trim());
            continue;
        };
        for event in game.step(inputs) {
            report(&event);
        }
    }
    if game.screen() == Screen::Exited {
        println!("{}", render_game(&game));
    }
    Ok(())
}

fn report(event: &GameEvent) {
    match event {
        GameEvent::ShotFired {
            shooter,
            target,
            outcome,
        } => {
            let verdict = match outcome {
                ShotOutcome::Hit { sunk: true } => "hit and sunk",
                ShotOutcome::Hit { sunk: false } => "hit",
                ShotOutcome::Miss => "miss",
            };
            println!(
                "{} fired at {}: {}",
                shooter,
                hotseat_battleship::cli::coord_to_string(*target),
                verdict
            );
        }
        GameEvent::FleetPlaced(player) => println!("{} fleet is in position", player),
        GameEvent::GameOver { winner } => println!("Game over! {} wins", winner),
        _ => {}
    }
}
