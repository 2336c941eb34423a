#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::IsTerminal;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use hilo::{run_session, AiPlayer, CliPlayer, GameEngine};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play interactively in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Line-mode frontend without the animated screen")]
        plain: bool,
    },
    /// Let the binary-search bot play until it reaches a number of wins.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 10, help = "Stop after this many wins")]
        wins: u32,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    hilo::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, plain } => {
            let mut rng = make_rng(seed);
            let mut engine = GameEngine::new(&mut rng);
            if plain || !std::io::stdout().is_terminal() {
                run_plain(&mut engine, &mut rng);
            } else {
                hilo::screen::run_screen(&mut engine, &mut rng)?;
                println!("Thanks for playing! Wins this session: {}", engine.wins());
            }
        }
        Commands::Auto { seed, wins } => {
            println!("Starting bot session...");
            if let Some(s) = seed {
                println!("Using fixed seed: {} (session will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let mut engine = GameEngine::new(&mut rng);
            let mut player = AiPlayer::new();
            let stats = run_session(&mut player, &mut engine, &mut rng, Some(wins));
            println!(
                "Bot won {} rounds in {} guesses.",
                stats.wins, stats.total_guesses
            );
            if stats.wins > 0 {
                println!(
                    "Average {:.1} guesses per round, worst round {}.",
                    stats.total_guesses as f64 / stats.wins as f64,
                    stats.rounds.iter().max().copied().unwrap_or(0)
                );
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn run_plain(engine: &mut GameEngine, rng: &mut SmallRng) {
    println!("Guess the Number!");
    println!("I'm thinking of a number between 1 and 100. 'q' quits.\n");
    let mut player = CliPlayer::new();
    run_session(&mut player, engine, rng, None);
    println!("\nThanks for playing! Wins this session: {}", engine.wins());
}
