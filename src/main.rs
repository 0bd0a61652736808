use battleship_sim::{
    batch::{run_batch, StrategyKind},
    calc_pdf, init_logging,
    render::{render_density, render_match, render_player},
    GameConfig, InteractiveStrategy, MatchEngine, PlayerController, DEFAULT_MANIFEST,
};
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct MatchArgs {
    /// Side length of each square grid.
    #[arg(long, default_value_t = 10)]
    size: usize,
    /// Comma separated ship lengths, placed in this order.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_MANIFEST.to_vec())]
    ships: Vec<usize>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

impl MatchArgs {
    fn config(&self) -> anyhow::Result<GameConfig> {
        let config = GameConfig::new(self.size, self.ships.clone());
        config.validate()?;
        Ok(config)
    }

    fn seed(&self) -> u64 {
        match self.seed {
            Some(s) => {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                s
            }
            None => rand::random(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Computer vs computer.
    Play {
        #[command(flatten)]
        args: MatchArgs,
        #[arg(long, value_enum, default_value_t = StrategyKind::Random)]
        first: StrategyKind,
        #[arg(long, value_enum, default_value_t = StrategyKind::Random)]
        second: StrategyKind,
        /// Print the first player's boards after every round.
        #[arg(long)]
        verbose: bool,
    },
    /// Play against the computer from the terminal.
    Human {
        #[command(flatten)]
        args: MatchArgs,
        #[arg(long, value_enum, default_value_t = StrategyKind::Targeted)]
        opponent: StrategyKind,
    },
    /// Run many computer games in parallel and print statistics as JSON.
    Batch {
        #[command(flatten)]
        args: MatchArgs,
        #[arg(long, default_value_t = 1000)]
        games: usize,
        #[arg(long, value_enum, default_value_t = StrategyKind::Random)]
        first: StrategyKind,
        #[arg(long, value_enum, default_value_t = StrategyKind::Random)]
        second: StrategyKind,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            args,
            first,
            second,
            verbose,
        } => {
            let config = args.config()?;
            let seed = args.seed();
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut bob = PlayerController::spawn(
                "Bob",
                &config,
                &mut rng,
                first.build(&config, seed.wrapping_add(1)),
            )?;
            let mut alice = PlayerController::spawn(
                "Alice",
                &config,
                &mut rng,
                second.build(&config, seed.wrapping_add(2)),
            )?;

            let mut engine = MatchEngine::new(&mut bob, &mut alice)?;
            if verbose {
                engine = engine.with_observer(|round, first, _| {
                    println!("Round {}", round);
                    print!("{}", render_player(first));
                });
            }
            let outcome = engine.play()?;
            drop(engine);
            println!("{} won after {} rounds.", outcome.winner, outcome.rounds);
            print!("{}", render_match(&bob, &alice, "Final round"));
        }
        Commands::Human { args, opponent } => {
            let config = args.config()?;
            let seed = args.seed();
            let mut rng = SmallRng::seed_from_u64(seed);
            let suggester = StrategyKind::Targeted.build(&config, seed.wrapping_add(1));
            let human = InteractiveStrategy::new(io::stdin().lock(), io::stdout(), suggester);
            let mut you = PlayerController::spawn("You", &config, &mut rng, Box::new(human))?;
            let mut computer = PlayerController::spawn(
                "Computer",
                &config,
                &mut rng,
                opponent.build(&config, seed.wrapping_add(2)),
            )?;

            print!("{}", render_player(&you));
            let manifest = config.manifest.clone();
            let outcome = MatchEngine::new(&mut you, &mut computer)?
                .with_observer(move |round, you, _| {
                    println!("\nRound {}", round);
                    print!("{}", render_player(you));
                    print!("{}", render_density(&calc_pdf(you.knowledge(), &manifest)));
                })
                .play()?;
            println!("\n{} won after {} rounds.", outcome.winner, outcome.rounds);
            print!("{}", render_match(&you, &computer, "Final round"));
        }
        Commands::Batch {
            args,
            games,
            first,
            second,
        } => {
            let config = args.config()?;
            let seed = args.seed.unwrap_or_else(rand::random);
            let summary = run_batch(&config, games, seed, first, second);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
