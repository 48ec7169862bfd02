use hotseat_battleship::{
    hit_budget, init_logging_with_default, Adversary, Board, Difficulty,
    FleetPlacementCoordinator, PlayerId, GRID_SIZE, MAX_SHIPS,
};
use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn parse_difficulty(arg: &str) -> anyhow::Result<Difficulty> {
    <Difficulty as clap::ValueEnum>::from_str(arg, true)
        .map_err(|e| anyhow::anyhow!("bad difficulty '{}': {}", arg, e))
}

/// Plays two computer tiers against each other and prints a JSON summary.
fn main() -> anyhow::Result<()> {
    init_logging_with_default(LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <p1-tier> <p2-tier> <seed>", args[0]);
        std::process::exit(1);
    }
    let tiers = [parse_difficulty(&args[1])?, parse_difficulty(&args[2])?];
    let seed: u64 = args[3].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut boards = [Board::new(GRID_SIZE), Board::new(GRID_SIZE)];
    let mut placement = FleetPlacementCoordinator::new(MAX_SHIPS, 0);
    for player in [PlayerId::One, PlayerId::Two] {
        placement
            .place_randomly(player, &mut boards[player.index()], &mut rng)
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    let mut adversaries = tiers.map(Adversary::new);
    let mut budget = [hit_budget(MAX_SHIPS); 2];
    let mut shots = [0usize; 2];
    let mut shooter = PlayerId::One;
    let winner = loop {
        let victim = shooter.opponent();
        let Some(adversary) = adversaries[shooter.index()].as_mut() else {
            anyhow::bail!("{} has no computer tier", shooter);
        };
        let (_, outcome) = adversary
            .take_shot(&mut rng, &mut boards[victim.index()])
            .map_err(|e| anyhow::anyhow!(e))?;
        shots[shooter.index()] += 1;
        if outcome.is_hit() {
            budget[victim.index()] -= 1;
            if budget[victim.index()] == 0 {
                break shooter;
            }
        }
        shooter = victim;
    };

    let result = json!({
        "player1": {"tier": format!("{:?}", tiers[0]), "shots": shots[0]},
        "player2": {"tier": format!("{:?}", tiers[1]), "shots": shots[1]},
        "winner": winner.to_string(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
