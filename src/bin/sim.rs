#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use hilo::{run_session, AiPlayer, GameEngine};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <wins>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let wins: u32 = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new(&mut rng);
    let mut player = AiPlayer::new();

    let stats = run_session(&mut player, &mut engine, &mut rng, Some(wins));

    let result = json!({
        "seed": seed,
        "wins": stats.wins,
        "total_guesses": stats.total_guesses,
        "guesses_per_round": stats.rounds,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
