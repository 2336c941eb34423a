use core::time::Duration;

/// Inclusive bounds of the secret number.
pub const SECRET_MIN: i64 = 1;
pub const SECRET_MAX: i64 = 100;

/// Feedback fade timing: ramp up, hold, ramp down.
pub const FADE_IN: Duration = Duration::from_millis(500);
pub const FEEDBACK_HOLD: Duration = Duration::from_millis(1500);
pub const FADE_OUT: Duration = Duration::from_millis(1000);

/// Target frame interval for the animated screen (~30 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);
