//! Fade timeline for the feedback line.
//!
//! The frontend owns the clock: it calls [`FadeTimeline::trigger`] when a
//! new feedback lands and feeds elapsed time into [`FadeTimeline::advance`]
//! from its own frame tick. The timeline itself never sleeps.

use core::time::Duration;

use crate::config::{FADE_IN, FADE_OUT, FEEDBACK_HOLD};

/// Phase of the feedback animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    Idle,
    FadingIn,
    Visible,
    FadingOut,
}

/// Tracks where the current feedback sits in its fade cycle.
#[derive(Debug, Clone, Copy)]
pub struct FadeTimeline {
    phase: FadePhase,
    in_phase: Duration,
}

impl FadeTimeline {
    pub fn new() -> Self {
        Self {
            phase: FadePhase::Idle,
            in_phase: Duration::ZERO,
        }
    }

    /// Restart the cycle from full transparency. A fade already in flight
    /// is abandoned, matching how a new guess replaces old feedback.
    pub fn trigger(&mut self) {
        self.phase = FadePhase::FadingIn;
        self.in_phase = Duration::ZERO;
    }

    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    /// Whether the feedback line should be drawn at all.
    pub fn is_visible(&self) -> bool {
        self.phase != FadePhase::Idle
    }

    /// Move the timeline forward. Time left over at a phase boundary
    /// carries into the next phase.
    pub fn advance(&mut self, mut dt: Duration) {
        loop {
            let limit = match self.phase {
                FadePhase::Idle => return,
                FadePhase::FadingIn => FADE_IN,
                FadePhase::Visible => FEEDBACK_HOLD,
                FadePhase::FadingOut => FADE_OUT,
            };
            let remaining = limit - self.in_phase;
            if dt < remaining {
                self.in_phase += dt;
                return;
            }
            dt -= remaining;
            self.in_phase = Duration::ZERO;
            match self.phase {
                FadePhase::FadingIn => self.phase = FadePhase::Visible,
                FadePhase::Visible => self.phase = FadePhase::FadingOut,
                FadePhase::FadingOut | FadePhase::Idle => {
                    self.phase = FadePhase::Idle;
                    return;
                }
            }
        }
    }

    /// Current opacity in [0, 1], eased in and out.
    pub fn opacity(&self) -> f32 {
        match self.phase {
            FadePhase::Idle => 0.0,
            FadePhase::Visible => 1.0,
            FadePhase::FadingIn => smoothstep(fraction(self.in_phase, FADE_IN)),
            FadePhase::FadingOut => smoothstep(1.0 - fraction(self.in_phase, FADE_OUT)),
        }
    }
}

impl Default for FadeTimeline {
    fn default() -> Self {
        Self::new()
    }
}

fn fraction(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}
