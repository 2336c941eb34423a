use hilo::{Feedback, GameEngine, SECRET_MAX, SECRET_MIN};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_feedback_matches_ordering() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut engine = GameEngine::with_secret(50);

    assert_eq!(engine.submit_guess(&mut rng, "49"), Feedback::TooLow);
    assert_eq!(engine.submit_guess(&mut rng, "51"), Feedback::TooHigh);
    assert_eq!(engine.submit_guess(&mut rng, "50"), Feedback::Correct);
}

#[test]
fn test_scenario_low_high_correct() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut engine = GameEngine::with_secret(50);

    assert_eq!(engine.submit_guess(&mut rng, "10"), Feedback::TooLow);
    assert_eq!(engine.attempts(), 1);
    assert_eq!(engine.wins(), 0);

    assert_eq!(engine.submit_guess(&mut rng, "90"), Feedback::TooHigh);
    assert_eq!(engine.attempts(), 2);
    assert_eq!(engine.wins(), 0);

    assert_eq!(engine.submit_guess(&mut rng, "50"), Feedback::Correct);
    // the winning guess is not retained in the fresh round's counter
    assert_eq!(engine.attempts(), 0);
    assert_eq!(engine.wins(), 1);
}

#[test]
fn test_immediate_win() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut engine = GameEngine::with_secret(1);

    assert_eq!(engine.submit_guess(&mut rng, "1"), Feedback::Correct);
    assert_eq!(engine.attempts(), 0);
    assert_eq!(engine.wins(), 1);
    assert!((SECRET_MIN..=SECRET_MAX).contains(&engine.secret()));
}

#[test]
fn test_invalid_input_changes_nothing_but_feedback() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut engine = GameEngine::with_secret(42);
    engine.submit_guess(&mut rng, "10");

    for junk in ["", "   ", "abc", "12abc", "1.5", "999999999999999999999999999"] {
        assert_eq!(
            engine.submit_guess(&mut rng, junk),
            Feedback::InvalidInput,
            "input {:?} should be rejected",
            junk
        );
        assert_eq!(engine.attempts(), 1);
        assert_eq!(engine.wins(), 0);
        assert_eq!(engine.secret(), 42);
        assert_eq!(engine.last_feedback(), Some(Feedback::InvalidInput));
    }
}

#[test]
fn test_out_of_range_guesses_compare_by_ordering() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut engine = GameEngine::with_secret(50);

    assert_eq!(engine.submit_guess(&mut rng, "-5"), Feedback::TooLow);
    assert_eq!(engine.submit_guess(&mut rng, "0"), Feedback::TooLow);
    assert_eq!(engine.submit_guess(&mut rng, "1000"), Feedback::TooHigh);
    assert_eq!(engine.attempts(), 3);
}

#[test]
fn test_parsing_tolerates_whitespace_and_sign() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut engine = GameEngine::with_secret(7);
    assert_eq!(engine.submit_guess(&mut rng, "  7  "), Feedback::Correct);

    let mut engine = GameEngine::with_secret(7);
    assert_eq!(engine.submit_guess(&mut rng, "+7"), Feedback::Correct);
}

#[test]
fn test_repeat_wrong_guess_is_idempotent_in_kind() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut engine = GameEngine::with_secret(30);

    assert_eq!(engine.submit_guess(&mut rng, "80"), Feedback::TooHigh);
    assert_eq!(engine.attempts(), 1);
    assert_eq!(engine.submit_guess(&mut rng, "80"), Feedback::TooHigh);
    assert_eq!(engine.attempts(), 2);
}

#[test]
fn test_session_survives_round_changes() {
    let mut rng = SmallRng::seed_from_u64(13);
    let mut engine = GameEngine::with_secret(20);

    engine.submit_guess(&mut rng, "20");
    assert_eq!(engine.wins(), 1);

    // keep playing the fresh round; wins must not move on wrong guesses
    let wrong = engine.secret() + 1;
    engine.submit_guess(&mut rng, &wrong.to_string());
    assert_eq!(engine.attempts(), 1);
    assert_eq!(engine.wins(), 1);
}

#[test]
fn test_state_snapshot_matches_accessors() {
    let mut rng = SmallRng::seed_from_u64(17);
    let mut engine = GameEngine::new(&mut rng);
    engine.submit_guess(&mut rng, "not a number");

    let state = engine.state();
    assert_eq!(state.attempts, engine.attempts());
    assert_eq!(state.wins, engine.wins());
    assert_eq!(state.last_feedback, engine.last_feedback());
}

#[test]
fn test_fresh_engine_has_no_feedback() {
    let mut rng = SmallRng::seed_from_u64(19);
    let engine = GameEngine::new(&mut rng);
    assert_eq!(engine.last_feedback(), None);
    assert_eq!(engine.attempts(), 0);
    assert_eq!(engine.wins(), 0);
    assert!((SECRET_MIN..=SECRET_MAX).contains(&engine.secret()));
}
