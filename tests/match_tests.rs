use battleship_sim::{
    BoardError, Coordinate, GameConfig, Grid, GuessStrategy, KnowledgeGrid, MatchEngine,
    MatchError, MatchStatus, PlayerController, RandomStrategy, TargetedStrategy,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

/// Always targets the same cell, valid or not.
struct Stuck(Coordinate);

impl GuessStrategy for Stuck {
    fn choose_move(&mut self, _knowledge: &KnowledgeGrid) -> Coordinate {
        self.0
    }

    fn label(&self) -> &str {
        "stuck"
    }
}

/// First unknown cell in row-major order.
struct Sweep;

impl GuessStrategy for Sweep {
    fn choose_move(&mut self, knowledge: &KnowledgeGrid) -> Coordinate {
        knowledge.unknown_cells()[0]
    }

    fn label(&self) -> &str {
        "sweep"
    }
}

fn corner_player(name: &str, strategy: Box<dyn GuessStrategy>) -> PlayerController {
    PlayerController::new(
        name,
        Grid::from_cells(3, [Coordinate::new(2, 2)]).unwrap(),
        strategy,
    )
}

#[test]
fn test_one_by_one_ends_in_first_round() {
    let config = GameConfig::new(1, vec![1]);
    let mut rng = SmallRng::seed_from_u64(5);
    let mut p1 =
        PlayerController::spawn("p1", &config, &mut rng, Box::new(RandomStrategy::seeded(1)))
            .unwrap();
    let mut p2 =
        PlayerController::spawn("p2", &config, &mut rng, Box::new(RandomStrategy::seeded(2)))
            .unwrap();
    assert!(p1.has_ship_at(Coordinate::new(0, 0)));

    let outcome = MatchEngine::new(&mut p1, &mut p2).unwrap().play().unwrap();
    assert_eq!(outcome.status, MatchStatus::FirstPlayerWon);
    assert_eq!(outcome.rounds, 1);
    assert_eq!(outcome.winner, "p1");
    // the second player never got to move
    assert_eq!(p2.knowledge().known_count(), 0);
    assert_eq!(p1.remaining_ship_cells(), 1);
}

#[test]
fn test_sweep_match_round_count_and_observer() {
    let mut p1 = corner_player("first", Box::new(Sweep));
    let mut p2 = corner_player("second", Box::new(Sweep));
    let mut observed = Vec::new();
    let outcome = MatchEngine::new(&mut p1, &mut p2)
        .unwrap()
        .with_observer(|round, _, _| observed.push(round))
        .play()
        .unwrap();
    assert_eq!(outcome.status, MatchStatus::FirstPlayerWon);
    assert_eq!(outcome.rounds, 9);
    assert_eq!(observed, (1..9).collect::<Vec<_>>());
    assert_eq!(p1.knowledge().known_count(), 9);
    assert_eq!(p2.knowledge().known_count(), 8);
}

#[test]
fn test_run_after_finish_stays_terminal() {
    let mut p1 = corner_player("first", Box::new(Sweep));
    let mut p2 = corner_player("second", Box::new(Sweep));
    let mut engine = MatchEngine::new(&mut p1, &mut p2).unwrap();
    let mut status = MatchStatus::InProgress;
    while status == MatchStatus::InProgress {
        status = engine.run().unwrap();
    }
    assert_eq!(status, MatchStatus::FirstPlayerWon);
    let known = engine.first().knowledge().known_count();
    assert_eq!(engine.run().unwrap(), MatchStatus::FirstPlayerWon);
    assert_eq!(engine.first().knowledge().known_count(), known);
    assert_eq!(engine.status(), MatchStatus::FirstPlayerWon);
}

#[test]
fn test_play_on_decided_match_reports_zero_rounds() {
    let mut p1 = corner_player("first", Box::new(Sweep));
    let mut p2 = PlayerController::new("second", Grid::new(3), Box::new(Sweep));
    let outcome = MatchEngine::new(&mut p1, &mut p2)
        .unwrap()
        .with_max_rounds(0)
        .play()
        .unwrap();
    assert_eq!(outcome.status, MatchStatus::FirstPlayerWon);
    assert_eq!(outcome.rounds, 0);
    assert_eq!(outcome.winner, "first");
    assert_eq!(p1.knowledge().known_count(), 0);
    assert_eq!(p2.knowledge().known_count(), 0);
}

#[test]
fn test_round_limit() {
    let mut p1 = corner_player("first", Box::new(Sweep));
    let mut p2 = corner_player("second", Box::new(Sweep));
    let err = MatchEngine::new(&mut p1, &mut p2)
        .unwrap()
        .with_max_rounds(3)
        .play()
        .unwrap_err();
    assert_eq!(err, MatchError::RoundLimit { rounds: 3 });
}

#[test]
fn test_repeated_guess_is_rejected() {
    let mut p1 = corner_player("first", Box::new(Stuck(Coordinate::new(0, 0))));
    let mut p2 = corner_player("second", Box::new(Stuck(Coordinate::new(0, 0))));
    let mut engine = MatchEngine::new(&mut p1, &mut p2).unwrap();
    assert_eq!(engine.run().unwrap(), MatchStatus::InProgress);
    let err = engine.run().unwrap_err();
    assert_eq!(
        err,
        MatchError::InvalidMove {
            player: "first".to_string(),
            coord: Coordinate::new(0, 0),
            source: BoardError::AlreadyGuessed(Coordinate::new(0, 0)),
        }
    );
    drop(engine);
    assert_eq!(p1.knowledge().known_count(), 1);
    assert_eq!(p2.remaining_ship_cells(), 1);
}

#[test]
fn test_off_grid_guess_is_rejected() {
    let mut p1 = corner_player("first", Box::new(Stuck(Coordinate::new(3, 0))));
    let mut p2 = corner_player("second", Box::new(Sweep));
    let err = MatchEngine::new(&mut p1, &mut p2).unwrap().run().unwrap_err();
    assert!(matches!(
        err,
        MatchError::InvalidMove {
            source: BoardError::OutOfRange(_),
            ..
        }
    ));
}

#[test]
fn test_grid_size_mismatch() {
    let mut p1 = PlayerController::new("a", Grid::new(3), Box::new(Sweep));
    let mut p2 = PlayerController::new("b", Grid::new(4), Box::new(Sweep));
    assert!(matches!(
        MatchEngine::new(&mut p1, &mut p2),
        Err(MatchError::GridMismatch { first: 3, second: 4 })
    ));
}

#[test]
fn test_targeted_vs_random_default_game() {
    let config = GameConfig::default();
    let mut rng = SmallRng::seed_from_u64(123);
    let mut p1 = PlayerController::spawn(
        "targeted",
        &config,
        &mut rng,
        Box::new(TargetedStrategy::seeded(config.manifest.clone(), 1)),
    )
    .unwrap();
    let mut p2 =
        PlayerController::spawn("random", &config, &mut rng, Box::new(RandomStrategy::seeded(2)))
            .unwrap();
    let outcome = MatchEngine::new(&mut p1, &mut p2)
        .unwrap()
        .with_max_rounds(100)
        .play()
        .unwrap();
    assert!(outcome.status.is_finished());
    assert!(outcome.rounds <= 100);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn random_matches_terminate_consistently(seed in any::<u64>()) {
        let config = GameConfig::default();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut p1 = PlayerController::spawn(
            "p1", &config, &mut rng, Box::new(RandomStrategy::seeded(seed.wrapping_add(1))),
        ).unwrap();
        let mut p2 = PlayerController::spawn(
            "p2", &config, &mut rng, Box::new(RandomStrategy::seeded(seed.wrapping_add(2))),
        ).unwrap();

        let mut engine = MatchEngine::new(&mut p1, &mut p2).unwrap();
        let mut rounds = 0;
        let status = loop {
            rounds += 1;
            let status = engine.run().unwrap();
            if status != MatchStatus::InProgress {
                break status;
            }
            prop_assert!(engine.first().remaining_ship_cells() > 0);
            prop_assert!(engine.second().remaining_ship_cells() > 0);
            prop_assert!(rounds <= 100);
        };
        drop(engine);

        match status {
            MatchStatus::FirstPlayerWon => {
                prop_assert_eq!(p2.remaining_ship_cells(), 0);
                prop_assert!(p1.remaining_ship_cells() > 0);
                prop_assert_eq!(p1.knowledge().known_count(), rounds);
                prop_assert_eq!(p2.knowledge().known_count(), rounds - 1);
            }
            MatchStatus::SecondPlayerWon => {
                prop_assert_eq!(p1.remaining_ship_cells(), 0);
                prop_assert!(p2.remaining_ship_cells() > 0);
                prop_assert_eq!(p1.knowledge().known_count(), rounds);
                prop_assert_eq!(p2.knowledge().known_count(), rounds);
            }
            MatchStatus::InProgress => unreachable!(),
        }
        prop_assert_eq!(p1.knowledge().hit_count(), 18 - p2.remaining_ship_cells());
    }
}
