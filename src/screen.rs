#![cfg(feature = "std")]

//! Animated terminal screen: the single-screen frontend.
//!
//! One thread runs everything. `event::poll` with a frame-length timeout
//! doubles as the tick source, so key events and fade animation share the
//! loop without a runtime or timers.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::SmallRng;

use crate::{
    config::FRAME_INTERVAL,
    engine::{GameEngine, GameState},
    fade::FadeTimeline,
};

const TITLE: &str = "Guess the Number!";
const HELP: &str = "type a number, Enter to submit, Esc to quit";

// Keeps the input row stable; longer entries would fail to parse anyway.
const MAX_INPUT_LEN: usize = 12;

/// Restores the terminal even when the loop exits through `?`.
struct ScreenGuard;

impl ScreenGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the interactive screen until the player quits.
pub fn run_screen(engine: &mut GameEngine, rng: &mut SmallRng) -> Result<()> {
    let _guard = ScreenGuard::enter()?;
    log::debug!("interactive screen started");

    let mut out = io::stdout();
    let mut input = String::new();
    let mut fade = FadeTimeline::new();
    let mut last_frame = Instant::now();

    loop {
        draw(&mut out, &engine.state(), &input, &fade)?;

        if event::poll(FRAME_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc | KeyCode::Char('q') => break,
                        KeyCode::Enter => {
                            engine.submit_guess(rng, &input);
                            input.clear();
                            fade.trigger();
                        }
                        KeyCode::Backspace => {
                            input.pop();
                        }
                        KeyCode::Char('-') if input.is_empty() => input.push('-'),
                        KeyCode::Char(c) if c.is_ascii_digit() && input.len() < MAX_INPUT_LEN => {
                            input.push(c)
                        }
                        _ => {}
                    }
                }
            }
        }

        let now = Instant::now();
        fade.advance(now - last_frame);
        last_frame = now;
    }

    log::debug!("interactive screen closed after {} wins", engine.wins());
    Ok(())
}

fn draw(out: &mut impl Write, state: &GameState, input: &str, fade: &FadeTimeline) -> Result<()> {
    let (cols, _) = terminal::size()?;
    queue!(out, Clear(ClearType::All))?;

    queue!(out, SetAttribute(Attribute::Bold))?;
    put_centered(out, 1, cols, TITLE)?;
    queue!(out, SetAttribute(Attribute::Reset))?;

    put_centered(out, 4, cols, &format!("Enter your guess: {input}_"))?;

    if fade.is_visible() {
        if let Some(feedback) = state.last_feedback {
            let level = (fade.opacity() * 255.0) as u8;
            queue!(
                out,
                SetForegroundColor(Color::Rgb {
                    r: level,
                    g: level,
                    b: level
                })
            )?;
            put_centered(out, 6, cols, feedback.message())?;
            queue!(out, ResetColor)?;
        }
    }

    put_centered(
        out,
        8,
        cols,
        &format!("Guesses: {}    Wins: {}", state.attempts, state.wins),
    )?;

    queue!(out, SetForegroundColor(Color::DarkGrey))?;
    put_centered(out, 10, cols, HELP)?;
    queue!(out, ResetColor)?;

    out.flush()?;
    Ok(())
}

fn put_centered(out: &mut impl Write, row: u16, cols: u16, text: &str) -> Result<()> {
    let col = cols.saturating_sub(text.len() as u16) / 2;
    queue!(out, cursor::MoveTo(col, row), Print(text))?;
    Ok(())
}
