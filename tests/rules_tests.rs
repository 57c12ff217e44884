//! Rules integration tests driven through the public API.

use rust_morris::core::{Action, Cell, Color, GameState, Phase, Snapshot};
use rust_morris::games::morris::{Morris, Session};
use rust_morris::rules::{Outcome, RuleError, RulesEngine};

/// Build a moving-phase position from piece lists.
fn position(white: &[usize], black: &[usize], to_move: Color) -> GameState {
    let mut board = vec![Cell::Empty; 24];
    for &p in white {
        board[p] = Cell::White;
    }
    for &p in black {
        board[p] = Cell::Black;
    }
    let snapshot = Snapshot {
        board,
        current_player: to_move,
        phase: Phase::Moving,
        white_phase: Phase::Moving,
        black_phase: Phase::Moving,
        white_pieces_in_hand: 0,
        black_pieces_in_hand: 0,
        white_pieces_on_board: white.len() as u8,
        black_pieces_on_board: black.len() as u8,
        winner: None,
        move_history: Vec::new(),
        pending_removal: false,
    };
    GameState::from_snapshot(snapshot).unwrap()
}

// =============================================================================
// Placement Scenarios
// =============================================================================

#[test]
fn test_opening_mill_and_capture() {
    let rules = Morris;
    let mut state = GameState::new();

    assert_eq!(rules.place(&mut state, 0), Ok(Outcome::Placed));
    assert_eq!(rules.place(&mut state, 1), Ok(Outcome::Placed));
    assert_eq!(rules.place(&mut state, 9), Ok(Outcome::Placed));
    assert_eq!(rules.place(&mut state, 2), Ok(Outcome::Placed));
    assert_eq!(rules.place(&mut state, 21), Ok(Outcome::MillPendingRemoval));

    assert!(state.pending_removal());
    assert_eq!(state.current_player(), Color::White);
    assert!(rules.check_mill(&state, 21));

    assert_eq!(rules.remove(&mut state, 1), Ok(Outcome::Removed));
    assert_eq!(state.cell(1), Some(Cell::Empty));
    assert_eq!(state.current_player(), Color::Black);
    assert_eq!(state.pieces_on_board(Color::Black), 1);
    assert_eq!(state.history().len(), 6);
}

#[test]
fn test_occupied_placement_changes_nothing() {
    let rules = Morris;
    let mut state = GameState::new();
    rules.place(&mut state, 5).unwrap();
    let before = state.clone();

    assert_eq!(rules.place(&mut state, 5), Err(RuleError::InvalidCell { position: 5 }));
    assert_eq!(state, before);
}

#[test]
fn test_off_board_rejected() {
    let rules = Morris;
    let mut state = GameState::new();
    assert_eq!(rules.place(&mut state, 24), Err(RuleError::OffBoard { position: 24 }));
    assert_eq!(state, GameState::new());
}

#[test]
fn test_placing_phase_ends_after_eighteen_pieces() {
    let rules = Morris;
    let mut state = GameState::new();
    // No line is ever completed and both sides can still move afterwards
    let order = [0, 1, 2, 4, 3, 5, 10, 9, 11, 6, 13, 12, 15, 14, 19, 16, 23, 17];
    for (i, &p) in order.iter().enumerate() {
        let outcome = rules.place(&mut state, p).unwrap();
        assert_ne!(outcome, Outcome::MillPendingRemoval, "ply {i} formed a mill");
    }

    assert_eq!(state.phase(), Phase::Moving);
    assert_eq!(state.pieces_in_hand(Color::White), 0);
    assert_eq!(state.pieces_in_hand(Color::Black), 0);
    assert_eq!(state.current_player(), Color::White);
    assert!(state.winner().is_none());
    assert_eq!(rules.place(&mut state, 7), Err(RuleError::NoPiecesInHand));
}

// =============================================================================
// Win Detection
// =============================================================================

#[test]
fn test_two_pieces_left_loses() {
    let rules = Morris;
    let mut state = position(&[0, 4, 8, 16], &[10, 13], Color::White);

    assert_eq!(rules.check_win(&mut state), Some(Color::White));
    assert_eq!(state.winner(), Some(Color::White));
    assert!(rules.legal_actions(&state, Color::White).is_empty());
    assert_eq!(rules.place(&mut state, 2), Err(RuleError::GameOver));
}

#[test]
fn test_blocked_side_loses() {
    let rules = Morris;
    // Black on 0, 2 and 9 is boxed in by White on 1, 10, 14 and 21
    let mut state = position(&[1, 10, 14, 21, 7], &[0, 2, 9], Color::Black);
    // Black has three pieces, so it flies and is never blocked
    assert_eq!(rules.check_win(&mut state), None);

    let mut state = position(&[1, 10, 14, 21, 7], &[0, 2, 9, 23], Color::Black);
    assert!(rules
        .legal_moves(&state, Color::Black)
        .iter()
        .all(|a| matches!(a, Action::Move { from: 23, .. })));

    let mut blocked = position(&[1, 10, 14, 21, 22], &[0, 2, 9, 23], Color::Black);
    assert!(rules.legal_moves(&blocked, Color::Black).is_empty());
    assert_eq!(rules.check_win(&mut blocked), Some(Color::White));

    assert_eq!(rules.check_win(&mut state), None);
}

// =============================================================================
// Session Contract
// =============================================================================

#[test]
fn test_session_reports_mill_text() {
    let mut session = Session::new();
    for p in [0, 1, 9, 2] {
        assert!(session.place(p).success);
    }

    let report = session.place(21);
    assert!(report.success);
    assert!(report.message.contains("Mill formed"));
    assert!(report.mill_formed());

    let report = session.move_piece(0, 3);
    assert!(!report.success);

    let report = session.remove(0);
    assert!(!report.success);
    assert_eq!(session.state().current_player(), Color::White);

    assert!(session.remove(2).success);
    assert!(!session.is_over());
    assert_eq!(session.winner(), None);
}

#[test]
fn test_session_possible_moves_follow_turn() {
    let mut session = Session::new();
    assert_eq!(session.get_possible_moves(Color::White).len(), 24);

    session.place(4);
    let moves = session.get_possible_moves(Color::Black);
    assert_eq!(moves.len(), 23);
    assert!(!moves.contains(&Action::Place { to: 4 }));
}
