//! Common types for the guessing game: feedback kinds and their messages.

use core::fmt;

/// Categorical result of a single guess submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Feedback {
    /// Guess was above the secret.
    TooHigh,
    /// Guess was below the secret.
    TooLow,
    /// Guess matched the secret; a fresh round has already begun.
    Correct,
    /// Input was empty or not an integer. Counters and secret are untouched.
    InvalidInput,
}

impl Feedback {
    /// Fixed message shown to the player for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::TooHigh => "Your guess is too high!",
            Feedback::TooLow => "Your guess is too low!",
            Feedback::Correct => "Correct! You guessed the number!",
            Feedback::InvalidInput => "Please enter a valid number!",
        }
    }

    /// Whether this outcome ended a round.
    pub fn is_win(&self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
