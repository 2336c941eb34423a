//! Core game logic: parse a guess, compare it to the secret, keep counters.

use rand::Rng;

use crate::{
    common::Feedback,
    round::{Round, Session},
};

/// Snapshot of everything the presentation layer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub attempts: u32,
    pub wins: u32,
    pub last_feedback: Option<Feedback>,
}

/// Core game logic holding the active round, the session counters and the
/// most recent feedback. Frontends feed raw input text in and render
/// snapshots out; they never see the secret.
pub struct GameEngine {
    round: Round,
    session: Session,
    last_feedback: Option<Feedback>,
}

impl GameEngine {
    /// Create an engine with a freshly drawn secret and zeroed counters.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            round: Round::new(rng),
            session: Session::new(),
            last_feedback: None,
        }
    }

    /// Create an engine with a known secret, for deterministic callers.
    pub fn with_secret(secret: i64) -> Self {
        Self {
            round: Round::with_secret(secret),
            session: Session::new(),
            last_feedback: None,
        }
    }

    /// Guesses made in the current round.
    pub fn attempts(&self) -> u32 {
        self.round.attempts()
    }

    /// Rounds won this session.
    pub fn wins(&self) -> u32 {
        self.session.wins()
    }

    /// The current round's secret.
    pub fn secret(&self) -> i64 {
        self.round.secret()
    }

    /// Result of the most recent submission, if any.
    pub fn last_feedback(&self) -> Option<Feedback> {
        self.last_feedback
    }

    /// Compare a raw guess against the secret and update the counters.
    ///
    /// Text that does not parse as an integer yields [`Feedback::InvalidInput`]
    /// and leaves the round untouched. A wrong guess counts one attempt. A
    /// correct guess wins the round and immediately starts a new one, so
    /// `attempts` restarts at 0 rather than retaining the winning guess.
    /// Values outside [1,100] are not rejected; they compare by ordinary
    /// integer ordering.
    pub fn submit_guess<R: Rng>(&mut self, rng: &mut R, raw: &str) -> Feedback {
        let feedback = match parse_guess(raw) {
            None => Feedback::InvalidInput,
            Some(guess) if guess > self.round.secret() => {
                self.round.record_attempt();
                Feedback::TooHigh
            }
            Some(guess) if guess < self.round.secret() => {
                self.round.record_attempt();
                Feedback::TooLow
            }
            Some(_) => {
                self.session.record_win();
                log::debug!(
                    "secret {} guessed, starting round {}",
                    self.round.secret(),
                    self.session.wins() + 1
                );
                self.round = Round::new(rng);
                Feedback::Correct
            }
        };
        self.last_feedback = Some(feedback);
        feedback
    }

    /// Generate a snapshot of the render-facing state.
    pub fn state(&self) -> GameState {
        GameState {
            attempts: self.round.attempts(),
            wins: self.session.wins(),
            last_feedback: self.last_feedback,
        }
    }
}

// Overflowing entries fail to parse and are indistinguishable from
// non-numeric text, which is fine: both are InvalidInput.
fn parse_guess(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
