//! Input-source seam between game rules and frontends.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use rand::Rng;

use crate::{
    common::Feedback,
    engine::{GameEngine, GameState},
};

/// Interface implemented by guess sources. Implementations see only the
/// render-facing state, never the secret, and return raw text so every
/// guess goes through the same parsing path.
pub trait Player {
    /// Produce the next raw guess text, or `None` to stop playing.
    fn next_guess(&mut self, state: &GameState) -> Option<String>;

    /// Inform the player of the outcome of its last guess.
    fn handle_feedback(&mut self, _state: &GameState, _feedback: Feedback) {}
}

/// Totals accumulated by [`run_session`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SessionStats {
    /// Rounds won.
    pub wins: u32,
    /// Submissions made, across all rounds.
    pub total_guesses: u64,
    /// Submissions it took to win each completed round.
    pub rounds: Vec<u32>,
}

/// Drive a player against the engine until it stops or reaches
/// `target_wins`. Each loop turn is one submission: ask the player, submit,
/// report the outcome back.
pub fn run_session<R: Rng>(
    player: &mut dyn Player,
    engine: &mut GameEngine,
    rng: &mut R,
    target_wins: Option<u32>,
) -> SessionStats {
    let mut stats = SessionStats::default();
    let mut round_guesses = 0u32;
    loop {
        if let Some(target) = target_wins {
            if stats.wins >= target {
                break;
            }
        }
        let Some(raw) = player.next_guess(&engine.state()) else {
            break;
        };
        let feedback = engine.submit_guess(rng, &raw);
        round_guesses += 1;
        stats.total_guesses += 1;
        player.handle_feedback(&engine.state(), feedback);
        if feedback.is_win() {
            stats.rounds.push(round_guesses);
            stats.wins += 1;
            round_guesses = 0;
        }
    }
    stats
}
