//! Integration tests for the round lifecycle, driven through the public API

use fruit_memory::core::{
    GameError, GameEvent, GameState, InteractionRejection, Settings, VerifyOutcome,
};
use fruit_memory::types::{
    CellView, FailureBehavior, FailureReason, Phase, CUSTOM_SEQUENCE_DISPLAY_SECS,
    FAILURE_RESTART_DELAY_MS, LEVEL_CELEBRATION_MS, LEVEL_COUNT,
};

fn started(seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    state.start();
    state.tick(5_000);
    assert_eq!(state.phase(), Phase::Playing);
    state
}

fn unmatched_pair(state: &GameState) -> (usize, usize) {
    let target = state.round().current_target().unwrap();
    let cells: Vec<usize> = state
        .board()
        .positions_of(target)
        .into_iter()
        .filter(|&i| !state.round().is_matched(i))
        .collect();
    (cells[0], cells[1])
}

fn find_pair(state: &mut GameState) -> VerifyOutcome {
    let (a, b) = unmatched_pair(state);
    state.view_cell(a).unwrap();
    state.view_cell(b).unwrap();
    state.verify_cell(a).unwrap();
    state.verify_cell(b).unwrap()
}

fn finish_level(state: &mut GameState) -> VerifyOutcome {
    loop {
        let outcome = find_pair(state);
        if outcome != VerifyOutcome::Matched {
            return outcome;
        }
    }
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.phase(), Phase::Idle);
    assert!(!state.is_playing());

    state.start();
    assert_eq!(state.phase(), Phase::SequenceDisplay);
    assert!(state.is_playing());
    assert_eq!(state.target_sequence().len(), 2);

    state.tick(5_000);
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.countdown(), 60);
}

#[test]
fn test_reveal_expires_after_default_time() {
    let mut state = started(1);
    state.view_cell(7).unwrap();
    assert!(matches!(state.cell_view(7), CellView::Revealed(_)));

    state.tick(2_499);
    assert!(state.round().is_active(7));
    state.tick(1);
    assert_eq!(state.cell_view(7), CellView::Hidden);
}

#[test]
fn test_full_game_playthrough() {
    let mut state = started(2024);

    for level in 1..=LEVEL_COUNT as u32 {
        assert_eq!(state.level(), level);
        assert_eq!(state.target_sequence(), &state.all_sequences()[level as usize - 1][..]);
        let outcome = finish_level(&mut state);
        if level < LEVEL_COUNT as u32 {
            assert_eq!(outcome, VerifyOutcome::LevelComplete);
            state.tick(LEVEL_CELEBRATION_MS);
            assert_eq!(state.phase(), Phase::SequenceDisplay);
            state.tick(5_000);
        } else {
            assert_eq!(outcome, VerifyOutcome::GameComplete);
        }
    }

    assert_eq!(state.phase(), Phase::GameComplete);
    assert_eq!(state.errors(), 0);
    let events = state.drain_events();
    assert!(events.contains(&GameEvent::GameComplete {
        message: "Game complete!".to_string()
    }));
}

#[test]
fn test_wrong_fruit_restarts_from_level_one() {
    let mut state = started(5);
    finish_level(&mut state);
    state.tick(LEVEL_CELEBRATION_MS + 5_000);
    assert_eq!(state.level(), 2);

    let target = state.round().current_target().unwrap();
    let wrong = (0..state.board().len())
        .find(|&i| state.board().get(i) != Some(target))
        .unwrap();
    state.view_cell(wrong).unwrap();
    assert_eq!(
        state.verify_cell(wrong),
        Err(GameError::RoundFailure(FailureReason::WrongSymbol))
    );
    assert_eq!(state.errors(), 1);

    state.tick(FAILURE_RESTART_DELAY_MS);
    assert_eq!(state.level(), 1);
    assert_eq!(state.errors(), 0);
    assert_eq!(state.phase(), Phase::SequenceDisplay);
}

#[test]
fn test_custom_mode_retries_current_level() {
    let mut state = GameState::new(9);
    let settings = Settings {
        board_size: 5,
        failure_behavior: FailureBehavior::CurrentLevel,
        ..Settings::custom_defaults()
    };
    state.apply_custom_settings(settings).unwrap();
    assert_eq!(state.board().len(), 25);
    state.tick(CUSTOM_SEQUENCE_DISPLAY_SECS * 1000);

    let board = state.board().clone();
    state.tick(60_000);
    assert_eq!(state.phase(), Phase::Failed);

    state.tick(FAILURE_RESTART_DELAY_MS);
    assert_eq!(state.level(), 1);
    assert_eq!(state.board(), &board);
    assert_eq!(state.errors(), 1);
    assert_eq!(state.phase(), Phase::SequenceDisplay);
}

#[test]
fn test_small_custom_board_is_playable() {
    let mut state = GameState::new(31);
    let settings = Settings {
        board_size: 5,
        ..Settings::custom_defaults()
    };
    state.apply_custom_settings(settings).unwrap();
    let display = CUSTOM_SEQUENCE_DISPLAY_SECS * 1000;
    state.tick(display);

    for _ in 1..LEVEL_COUNT {
        assert_eq!(finish_level(&mut state), VerifyOutcome::LevelComplete);
        state.tick(LEVEL_CELEBRATION_MS + display);
    }
    assert_eq!(finish_level(&mut state), VerifyOutcome::GameComplete);
}

#[test]
fn test_pause_blocks_interaction() {
    let mut state = started(3);
    assert!(state.toggle_pause());
    assert_eq!(
        state.view_cell(0),
        Err(GameError::InvalidInteraction {
            cell: 0,
            reason: InteractionRejection::Paused
        })
    );

    state.start();
    assert!(!state.is_paused());
    state.view_cell(0).unwrap();
}

#[test]
fn test_verification_window_resets_selection() {
    let mut state = started(11);
    let (a, b) = unmatched_pair(&state);
    state.view_cell(a).unwrap();
    state.view_cell(b).unwrap();
    state.verify_cell(a).unwrap();

    state.tick(1_000);
    assert!(state.round().selected.is_empty());

    // Both cells are still revealed (2.5s reveal), so the pair can be retried.
    assert_eq!(state.verify_cell(a), Ok(VerifyOutcome::AwaitingPair));
    assert_eq!(state.verify_cell(b), Ok(VerifyOutcome::Matched));
}

#[test]
fn test_invalid_settings_leave_game_untouched() {
    let mut state = started(4);
    let settings = Settings {
        cell_reveal_ms: 50,
        ..Settings::custom_defaults()
    };
    assert!(state.apply_custom_settings(settings).is_err());
    assert!(!state.custom_mode());
    assert_eq!(state.phase(), Phase::Playing);
}

#[test]
fn test_same_seed_same_game() {
    let a = GameState::new(42);
    let b = GameState::new(42);
    assert_eq!(a.board(), b.board());
    assert_eq!(a.all_sequences(), b.all_sequences());
}
