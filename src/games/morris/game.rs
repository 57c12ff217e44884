//! Nine Men's Morris rules.

use log::{debug, info};

use crate::core::{
    is_adjacent, Action, Cell, Color, GameState, MoveRecord, Phase, ADJACENCY, FLYING_PIECES,
};
use crate::rules::{Outcome, RuleError, RulesEngine};

/// The Nine Men's Morris ruleset.
///
/// Stateless: every operation takes the `GameState` it acts on, so one value
/// can drive any number of games or search copies.
#[derive(Clone, Copy, Debug, Default)]
pub struct Morris;

impl Morris {
    pub fn new() -> Self {
        Self
    }

    /// Put a piece from the current player's hand on `position`.
    pub fn place(&self, state: &mut GameState, position: usize) -> Result<Outcome, RuleError> {
        Self::ensure_turn_open(state)?;
        let color = state.current_player;
        let cell = state.board.get(position).ok_or(RuleError::OffBoard { position })?;
        if !cell.is_empty() {
            return Err(RuleError::InvalidCell { position });
        }
        if state.in_hand[color] == 0 {
            return Err(RuleError::NoPiecesInHand);
        }

        state.board.set(position, Cell::from(color));
        state.in_hand[color] -= 1;
        state.on_board[color] += 1;
        state.record(MoveRecord::Place { position, color });

        Ok(self.finish_turn(state, position, Outcome::Placed))
    }

    /// Move one of the current player's pieces from `from` to `to`.
    ///
    /// Adjacency is required unless the mover is flying.
    pub fn move_piece(
        &self,
        state: &mut GameState,
        from: usize,
        to: usize,
    ) -> Result<Outcome, RuleError> {
        Self::ensure_turn_open(state)?;
        let color = state.current_player;
        let source = state.board.get(from).ok_or(RuleError::OffBoard { position: from })?;
        let target = state.board.get(to).ok_or(RuleError::OffBoard { position: to })?;

        let phase = state.phase();
        if phase == Phase::Placing {
            return Err(RuleError::WrongPhase(phase));
        }
        if source.color() != Some(color) {
            return Err(RuleError::NotOwner { position: from });
        }
        if !target.is_empty() {
            return Err(RuleError::DestinationOccupied { position: to });
        }
        if state.mobility_phase(color) != Phase::Flying && !is_adjacent(from, to) {
            return Err(RuleError::NotAdjacent { from, to });
        }

        state.board.set(from, Cell::Empty);
        state.board.set(to, Cell::from(color));
        state.record(MoveRecord::Move { from, to, color });

        Ok(self.finish_turn(state, to, Outcome::Moved))
    }

    /// Capture the opponent piece on `position` after completing a mill.
    pub fn remove(&self, state: &mut GameState, position: usize) -> Result<Outcome, RuleError> {
        if state.is_over() {
            return Err(RuleError::GameOver);
        }
        if !state.pending_removal {
            return Err(RuleError::IllegalRemovalContext);
        }
        let opponent = state.current_player.opponent();
        let cell = state.board.get(position).ok_or(RuleError::OffBoard { position })?;
        if cell.color() != Some(opponent) {
            return Err(RuleError::NotOpponentPiece { position });
        }

        state.board.set(position, Cell::Empty);
        state.on_board[opponent] -= 1;
        state.record(MoveRecord::Remove { position, color: opponent });
        state.pending_removal = false;
        info!("{} captured the piece on {position}", state.current_player);

        state.switch_player();
        Ok(match self.check_win(state) {
            Some(winner) => Outcome::GameOver { winner },
            None => Outcome::Removed,
        })
    }

    /// Every legal action for `color`, ascending by point.
    pub fn legal_moves(&self, state: &GameState, color: Color) -> Vec<Action> {
        if state.is_over() {
            return Vec::new();
        }
        let board = &state.board;

        if state.pending_removal && color == state.current_player {
            return board
                .points_of(color.opponent())
                .map(|at| Action::Remove { at })
                .collect();
        }

        match state.mobility_phase(color) {
            Phase::Placing if state.in_hand[color] > 0 => {
                board.empty_points().map(|to| Action::Place { to }).collect()
            }
            Phase::Placing => Vec::new(),
            Phase::Moving => board
                .points_of(color)
                .flat_map(move |from| {
                    ADJACENCY[from]
                        .iter()
                        .filter(move |&&to| board.get(to) == Some(Cell::Empty))
                        .map(move |&to| Action::Move { from, to })
                })
                .collect(),
            Phase::Flying => board
                .points_of(color)
                .flat_map(move |from| board.empty_points().map(move |to| Action::Fly { from, to }))
                .collect(),
        }
    }

    /// Whether the piece on `position` lies on a complete line of its color.
    pub fn check_mill(&self, state: &GameState, position: usize) -> bool {
        state.board.forms_mill(position)
    }

    /// Decide the game if it is over, recording the winner.
    ///
    /// A side loses with an empty hand and fewer than three pieces on board,
    /// or, once moving has begun, when it is to move and cannot.
    /// Safe to call repeatedly.
    pub fn check_win(&self, state: &mut GameState) -> Option<Color> {
        if state.winner.is_some() {
            return state.winner;
        }

        let loser = Color::ALL
            .into_iter()
            .find(|&c| state.in_hand[c] == 0 && state.on_board[c] < FLYING_PIECES)
            .or_else(|| {
                let to_move = state.current_player;
                let stuck = state.phase() == Phase::Moving
                    && !state.pending_removal
                    && self.legal_moves(state, to_move).is_empty();
                stuck.then_some(to_move)
            });

        if let Some(loser) = loser {
            let winner = loser.opponent();
            state.winner = Some(winner);
            info!("{winner} wins");
        }
        state.winner
    }

    /// Dispatch an action to place, move or remove.
    pub fn apply(&self, state: &mut GameState, action: &Action) -> Result<Outcome, RuleError> {
        match *action {
            Action::Place { to } => self.place(state, to),
            Action::Move { from, to } | Action::Fly { from, to } => {
                self.move_piece(state, from, to)
            }
            Action::Remove { at } => self.remove(state, at),
        }
    }

    /// Rebuild a game from a fresh board by applying `records` in order.
    ///
    /// Each record's color must match the side that would act at that point.
    pub fn replay<'a>(
        &self,
        records: impl IntoIterator<Item = &'a MoveRecord>,
    ) -> Result<GameState, RuleError> {
        let mut state = GameState::new();
        for record in records {
            let expected = state.current_player;
            if record.actor() != expected {
                return Err(RuleError::OutOfTurn { expected, found: record.actor() });
            }
            self.apply(&mut state, &record.action())?;
        }
        debug!("replayed {} moves", state.history.len());
        Ok(state)
    }

    fn ensure_turn_open(state: &GameState) -> Result<(), RuleError> {
        if state.is_over() {
            Err(RuleError::GameOver)
        } else if state.pending_removal {
            Err(RuleError::RemovalPending)
        } else {
            Ok(())
        }
    }

    /// Settle the turn after a piece lands on `landed`.
    fn finish_turn(&self, state: &mut GameState, landed: usize, plain: Outcome) -> Outcome {
        let color = state.current_player;
        if state.board.forms_mill(landed) && state.on_board[color.opponent()] > 0 {
            info!("{color} formed a mill at {landed}");
            state.pending_removal = true;
            return Outcome::MillPendingRemoval;
        }

        state.switch_player();
        match self.check_win(state) {
            Some(winner) => Outcome::GameOver { winner },
            None => plain,
        }
    }
}

impl RulesEngine for Morris {
    fn legal_actions(&self, state: &GameState, color: Color) -> Vec<Action> {
        self.legal_moves(state, color)
    }

    fn apply_action(&self, state: &mut GameState, action: &Action) -> Result<Outcome, RuleError> {
        self.apply(state, action)
    }

    fn is_terminal(&self, state: &GameState) -> Option<Color> {
        state.winner
    }
}
