use battleship_sim::{
    batch::{game_seed, run_batch, StrategyKind},
    GameConfig,
};

#[test]
fn test_batch_counts_every_game() {
    let config = GameConfig::default();
    let summary = run_batch(&config, 16, 7, StrategyKind::Random, StrategyKind::Targeted);
    assert_eq!(summary.games, 16);
    assert_eq!(summary.failures, 0);
    assert_eq!(summary.first_wins + summary.second_wins, 16);
    let (min, max) = (summary.min_rounds.unwrap(), summary.max_rounds.unwrap());
    assert!(min <= max && max <= 100);
    assert!(summary.mean_rounds >= min as f64 && summary.mean_rounds <= max as f64);
}

#[test]
fn test_batch_is_reproducible() {
    let config = GameConfig::new(6, vec![1, 2, 3]);
    let a = run_batch(&config, 8, 42, StrategyKind::Random, StrategyKind::Random);
    let b = run_batch(&config, 8, 42, StrategyKind::Random, StrategyKind::Random);
    assert_eq!(a, b);
}

#[test]
fn test_placement_failures_are_counted() {
    let config = GameConfig::new(10, vec![10; 10]).with_placement_attempts(1);
    let summary = run_batch(&config, 4, 1, StrategyKind::Random, StrategyKind::Random);
    assert_eq!(summary.failures, 4);
    assert_eq!(summary.min_rounds, None);
    assert_eq!(summary.mean_rounds, 0.0);
}

#[test]
fn test_game_seeds_differ() {
    assert_ne!(game_seed(1, 0), game_seed(1, 1));
    assert_eq!(game_seed(5, 0), 5);
}
