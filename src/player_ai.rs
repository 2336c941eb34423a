//! Bot player that binary-searches the secret.

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

use crate::{
    common::Feedback,
    config::{SECRET_MAX, SECRET_MIN},
    engine::GameState,
    player::Player,
};

/// Guesses the midpoint of the remaining bracket and narrows it on every
/// high/low answer, so a round never takes more than ceil(log2(100)) = 7
/// guesses.
pub struct AiPlayer {
    low: i64,
    high: i64,
    last: Option<i64>,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self {
            low: SECRET_MIN,
            high: SECRET_MAX,
            last: None,
        }
    }

    fn reset(&mut self) {
        self.low = SECRET_MIN;
        self.high = SECRET_MAX;
        self.last = None;
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn next_guess(&mut self, _state: &GameState) -> Option<String> {
        let mid = self.low + (self.high - self.low) / 2;
        self.last = Some(mid);
        Some(mid.to_string())
    }

    fn handle_feedback(&mut self, _state: &GameState, feedback: Feedback) {
        let Some(guess) = self.last else { return };
        match feedback {
            Feedback::TooHigh => self.high = guess - 1,
            Feedback::TooLow => self.low = guess + 1,
            Feedback::Correct => self.reset(),
            // The bot only emits integers, so this never happens.
            Feedback::InvalidInput => {}
        }
    }
}
