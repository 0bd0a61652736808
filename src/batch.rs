#![cfg(feature = "std")]

//! Batch mode: play many independent matches in parallel and collect
//! statistics.
//!
//! Every match is built, seeded and played entirely inside one rayon task, so
//! matches share nothing and need no synchronization.

use rand::{rngs::SmallRng, SeedableRng};
use rayon::prelude::*;
use std::boxed::Box;

use crate::{
    ai::TargetedStrategy,
    config::GameConfig,
    game::{MatchEngine, MatchStatus},
    player::PlayerController,
    strategy::{GuessStrategy, RandomStrategy},
};

/// Built-in computer strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum)]
pub enum StrategyKind {
    Random,
    Targeted,
}

impl StrategyKind {
    pub fn build(self, config: &GameConfig, seed: u64) -> Box<dyn GuessStrategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::seeded(seed)),
            StrategyKind::Targeted => {
                Box::new(TargetedStrategy::seeded(config.manifest.clone(), seed))
            }
        }
    }
}

/// Aggregate results of a batch.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BatchSummary {
    pub games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub failures: usize,
    pub min_rounds: Option<usize>,
    pub max_rounds: Option<usize>,
    pub mean_rounds: f64,
}

#[derive(Debug, Clone, Copy)]
enum GameResult {
    Finished { status: MatchStatus, rounds: usize },
    Failed,
}

/// Derive the seed of game `index` from the batch seed.
pub fn game_seed(seed: u64, index: usize) -> u64 {
    seed.wrapping_add((index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

fn play_one(
    config: &GameConfig,
    seed: u64,
    first: StrategyKind,
    second: StrategyKind,
) -> GameResult {
    let mut rng = SmallRng::seed_from_u64(seed);
    let first = first.build(config, seed ^ 0x1234_5678_9ABC_DEF0);
    let second = second.build(config, seed ^ 0xFEDC_BA98_7654_3210);
    let players = PlayerController::spawn("first", config, &mut rng, first).and_then(|p1| {
        PlayerController::spawn("second", config, &mut rng, second).map(|p2| (p1, p2))
    });
    let (mut p1, mut p2) = match players {
        Ok(pair) => pair,
        Err(e) => {
            log::warn!("placement failed for seed {}: {}", seed, e);
            return GameResult::Failed;
        }
    };
    // each round resolves two cells, so both boards are exhausted well before this
    let limit = (config.grid_size * config.grid_size).saturating_add(1);
    let outcome = MatchEngine::new(&mut p1, &mut p2)
        .and_then(|engine| engine.with_max_rounds(limit).play());
    match outcome {
        Ok(o) => GameResult::Finished {
            status: o.status,
            rounds: o.rounds,
        },
        Err(e) => {
            log::warn!("match failed for seed {}: {}", seed, e);
            GameResult::Failed
        }
    }
}

/// Play `games` matches between `first` and `second` in parallel.
pub fn run_batch(
    config: &GameConfig,
    games: usize,
    seed: u64,
    first: StrategyKind,
    second: StrategyKind,
) -> BatchSummary {
    let results: Vec<GameResult> = (0..games)
        .into_par_iter()
        .map(|idx| play_one(config, game_seed(seed, idx), first, second))
        .collect();

    let mut summary = BatchSummary {
        games,
        ..BatchSummary::default()
    };
    let mut total_rounds = 0usize;
    for result in results {
        match result {
            GameResult::Finished { status, rounds } => {
                match status {
                    MatchStatus::FirstPlayerWon => summary.first_wins += 1,
                    MatchStatus::SecondPlayerWon => summary.second_wins += 1,
                    MatchStatus::InProgress => {}
                }
                total_rounds += rounds;
                summary.min_rounds = Some(summary.min_rounds.map_or(rounds, |m| m.min(rounds)));
                summary.max_rounds = Some(summary.max_rounds.map_or(rounds, |m| m.max(rounds)));
            }
            GameResult::Failed => summary.failures += 1,
        }
    }
    let finished = games - summary.failures;
    if finished > 0 {
        summary.mean_rounds = total_rounds as f64 / finished as f64;
    }
    log::info!(
        "batch of {}: first {} / second {} / failed {}",
        games,
        summary.first_wins,
        summary.second_wins,
        summary.failures
    );
    summary
}
