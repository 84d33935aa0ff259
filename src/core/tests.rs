//! Core domain: tests for session counters and terminal flags.

use super::SessionState;

#[test]
fn test_score_is_monotonic() {
    let mut session = SessionState::new(3);
    session.add_score(100);
    session.add_score(150);
    assert_eq!(session.score, 250);
}

#[test]
fn test_lose_life_counts_down() {
    let mut session = SessionState::new(3);

    assert!(!session.lose_life());
    assert_eq!(session.lives, 2);
    assert!(!session.game_over);
}

#[test]
fn test_last_life_sets_game_over_exactly_once() {
    let mut session = SessionState::new(1);

    assert!(session.lose_life());
    assert!(session.game_over);
    assert!(!session.is_active());

    // Further deductions are no-ops, not a second transition.
    assert!(!session.lose_life());
    assert_eq!(session.lives, 0);
}

#[test]
fn test_game_over_is_one_way() {
    let mut session = SessionState::new(1);
    session.lose_life();

    session.add_score(100);
    session.complete_level();

    assert!(session.game_over);
}

#[test]
fn test_level_complete_is_one_way() {
    let mut session = SessionState::new(3);
    session.complete_level();
    assert!(session.level_complete);

    // Completion does not end the session loop.
    assert!(session.is_active());
}
