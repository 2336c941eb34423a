#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use crate::{common::Feedback, engine::GameState, player::Player};

/// Line-mode frontend: prompt on stdout, read a guess from stdin. Returns
/// the raw text untouched; parsing belongs to the engine.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for CliPlayer {
    fn next_guess(&mut self, _state: &GameState) -> Option<String> {
        print!("Enter your guess: ");
        io::stdout().flush().unwrap();
        let mut line = String::new();
        let n = io::stdin().lock().read_line(&mut line).unwrap();
        if n == 0 {
            // stdin closed
            return None;
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return None;
        }
        Some(line.to_string())
    }

    fn handle_feedback(&mut self, state: &GameState, feedback: Feedback) {
        println!("{}", feedback.message());
        println!("Guesses: {}    Wins: {}", state.attempts, state.wins);
    }
}
