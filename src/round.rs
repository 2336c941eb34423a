//! Round and session state: the secret under guess and the lifetime counters.

use rand::Rng;

use crate::config::{SECRET_MAX, SECRET_MIN};

/// One guessing round: a secret fixed for its lifetime and the number of
/// guesses made against it so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    secret: i64,
    attempts: u32,
}

impl Round {
    /// Start a round with a secret drawn uniformly from the configured range.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            secret: rng.random_range(SECRET_MIN..=SECRET_MAX),
            attempts: 0,
        }
    }

    /// Start a round with a known secret.
    pub const fn with_secret(secret: i64) -> Self {
        Self {
            secret,
            attempts: 0,
        }
    }

    /// The number this round wants guessed.
    pub fn secret(&self) -> i64 {
        self.secret
    }

    /// Guesses made since this round began.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub(crate) fn record_attempt(&mut self) {
        self.attempts += 1;
    }
}

/// Counters that live for the whole process run. Wins only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    wins: u32,
}

impl Session {
    pub fn new() -> Self {
        Self { wins: 0 }
    }

    /// Rounds won since the process started.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub(crate) fn record_win(&mut self) {
        self.wins += 1;
    }
}
