use battleship_sim::{GameConfig, MatchEngine, MatchStatus, PlayerController, RandomStrategy};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    battleship_sim::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let config = GameConfig::default();
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut p1 = PlayerController::spawn(
        "player1",
        &config,
        &mut rng1,
        Box::new(RandomStrategy::seeded(seed1.wrapping_add(1))),
    )?;
    let mut p2 = PlayerController::spawn(
        "player2",
        &config,
        &mut rng2,
        Box::new(RandomStrategy::seeded(seed2.wrapping_add(1))),
    )?;

    let outcome = MatchEngine::new(&mut p1, &mut p2)?.play()?;

    let winner = match outcome.status {
        MatchStatus::FirstPlayerWon => Some("player1"),
        MatchStatus::SecondPlayerWon => Some("player2"),
        MatchStatus::InProgress => None,
    };

    let result = json!({
        "player1": {"remaining": p1.remaining_ship_cells(), "guesses": p1.knowledge().known_count()},
        "player2": {"remaining": p2.remaining_ship_cells(), "guesses": p2.knowledge().known_count()},
        "rounds": outcome.rounds,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
