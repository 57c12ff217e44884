//! Static position evaluation.

use crate::core::{Color, GameState};

/// Weight of one complete mill relative to one piece.
pub const MILL_WEIGHT: i32 = 2;

/// Score `state` for `perspective`: material difference plus
/// `MILL_WEIGHT` per complete mill difference.
///
/// Antisymmetric: scoring for the opponent negates the result.
#[must_use]
pub fn evaluate(state: &GameState, perspective: Color) -> i32 {
    let opponent = perspective.opponent();
    let board = state.board();

    let material =
        i32::from(state.pieces_on_board(perspective)) - i32::from(state.pieces_on_board(opponent));
    let mills = board.complete_mills(perspective) as i32 - board.complete_mills(opponent) as i32;

    material + MILL_WEIGHT * mills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::morris::Morris;

    #[test]
    fn test_empty_board_is_even() {
        let state = GameState::new();
        assert_eq!(evaluate(&state, Color::White), 0);
        assert_eq!(evaluate(&state, Color::Black), 0);
    }

    #[test]
    fn test_material_and_mills() {
        let rules = Morris;
        let mut state = GameState::new();
        // White fills 0-1-2; Black scatters
        for p in [0, 10, 1, 13, 2] {
            rules.place(&mut state, p).unwrap();
        }

        // 3 v 2 pieces, one White mill
        assert_eq!(evaluate(&state, Color::White), 1 + MILL_WEIGHT);
        assert_eq!(evaluate(&state, Color::Black), -(1 + MILL_WEIGHT));

        rules.remove(&mut state, 10).unwrap();
        assert_eq!(evaluate(&state, Color::White), 2 + MILL_WEIGHT);
    }
}
