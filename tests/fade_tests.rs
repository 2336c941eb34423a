use std::time::Duration;

use hilo::{FadePhase, FadeTimeline, FADE_IN, FADE_OUT, FEEDBACK_HOLD};

#[test]
fn test_idle_until_triggered() {
    let mut fade = FadeTimeline::new();
    assert_eq!(fade.phase(), FadePhase::Idle);
    assert_eq!(fade.opacity(), 0.0);
    assert!(!fade.is_visible());

    fade.advance(Duration::from_secs(60));
    assert_eq!(fade.phase(), FadePhase::Idle);
}

#[test]
fn test_trigger_starts_fading_in() {
    let mut fade = FadeTimeline::new();
    fade.trigger();
    assert_eq!(fade.phase(), FadePhase::FadingIn);
    assert_eq!(fade.opacity(), 0.0);
    assert!(fade.is_visible());
}

#[test]
fn test_phase_boundaries() {
    let mut fade = FadeTimeline::new();
    fade.trigger();

    fade.advance(FADE_IN);
    assert_eq!(fade.phase(), FadePhase::Visible);
    assert_eq!(fade.opacity(), 1.0);

    fade.advance(FEEDBACK_HOLD);
    assert_eq!(fade.phase(), FadePhase::FadingOut);
    assert_eq!(fade.opacity(), 1.0);

    fade.advance(FADE_OUT);
    assert_eq!(fade.phase(), FadePhase::Idle);
    assert_eq!(fade.opacity(), 0.0);
}

#[test]
fn test_opacity_ramps_through_fade_in() {
    let mut fade = FadeTimeline::new();
    fade.trigger();
    fade.advance(FADE_IN / 2);

    let mid = fade.opacity();
    assert!((mid - 0.5).abs() < 1e-3, "smoothstep midpoint, got {}", mid);
}

#[test]
fn test_opacity_ramps_through_fade_out() {
    let mut fade = FadeTimeline::new();
    fade.trigger();
    fade.advance(FADE_IN + FEEDBACK_HOLD + FADE_OUT / 2);

    assert_eq!(fade.phase(), FadePhase::FadingOut);
    let mid = fade.opacity();
    assert!((mid - 0.5).abs() < 1e-3, "smoothstep midpoint, got {}", mid);
}

#[test]
fn test_excess_time_carries_across_phases() {
    let mut fade = FadeTimeline::new();
    fade.trigger();

    // one big step lands deep inside the hold window
    fade.advance(FADE_IN + FEEDBACK_HOLD / 3);
    assert_eq!(fade.phase(), FadePhase::Visible);
    assert_eq!(fade.opacity(), 1.0);
}

#[test]
fn test_single_large_advance_completes_cycle() {
    let mut fade = FadeTimeline::new();
    fade.trigger();
    fade.advance(FADE_IN + FEEDBACK_HOLD + FADE_OUT + Duration::from_secs(5));
    assert_eq!(fade.phase(), FadePhase::Idle);
    assert!(!fade.is_visible());
}

#[test]
fn test_retrigger_abandons_fade_in_flight() {
    let mut fade = FadeTimeline::new();
    fade.trigger();
    fade.advance(FADE_IN + FEEDBACK_HOLD + FADE_OUT / 2);
    assert_eq!(fade.phase(), FadePhase::FadingOut);

    // a new guess lands before the old feedback finished fading
    fade.trigger();
    assert_eq!(fade.phase(), FadePhase::FadingIn);
    assert_eq!(fade.opacity(), 0.0);

    fade.advance(FADE_IN);
    assert_eq!(fade.phase(), FadePhase::Visible);
}
