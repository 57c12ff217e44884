//! Actions and the records kept in move history.
//!
//! An `Action` is what a player (or the search) asks the rules to do. A
//! `MoveRecord` is what the rules write to history once an action succeeds;
//! records carry the color involved so a history can be audited or replayed
//! without the surrounding state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::Color;

/// A single turn step for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Put a piece from hand on an empty point.
    Place { to: usize },
    /// Slide a piece to a neighboring empty point.
    Move { from: usize, to: usize },
    /// Jump a piece to any empty point (three pieces left).
    Fly { from: usize, to: usize },
    /// Capture an opponent piece after completing a mill.
    Remove { at: usize },
}

impl Action {
    /// The point this action ends on (the captured point for `Remove`).
    #[must_use]
    pub const fn target(&self) -> usize {
        match *self {
            Action::Place { to } | Action::Move { to, .. } | Action::Fly { to, .. } => to,
            Action::Remove { at } => at,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place { to } => write!(f, "place {to}"),
            Action::Move { from, to } => write!(f, "move {from} {to}"),
            Action::Fly { from, to } => write!(f, "fly {from} {to}"),
            Action::Remove { at } => write!(f, "remove {at}"),
        }
    }
}

/// Failure to read an action typed as text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseActionError {
    #[error("empty command")]
    Empty,
    #[error("unknown action '{0}'")]
    UnknownVerb(String),
    #[error("'{verb}' expects {expected} point(s)")]
    WrongArity { verb: &'static str, expected: usize },
    #[error("'{0}' is not a point number")]
    BadPoint(String),
}

impl std::str::FromStr for Action {
    type Err = ParseActionError;

    /// Parse `place N`, `move A B`, `fly A B` or `remove N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().ok_or(ParseActionError::Empty)?.to_ascii_lowercase();
        let points = words
            .map(|w| w.parse::<usize>().map_err(|_| ParseActionError::BadPoint(w.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        let arity = |verb: &'static str, expected: usize| {
            if points.len() == expected {
                Ok(())
            } else {
                Err(ParseActionError::WrongArity { verb, expected })
            }
        };

        match verb.as_str() {
            "place" | "p" => arity("place", 1).map(|()| Action::Place { to: points[0] }),
            "move" | "m" => arity("move", 2).map(|()| Action::Move {
                from: points[0],
                to: points[1],
            }),
            "fly" | "f" => arity("fly", 2).map(|()| Action::Fly {
                from: points[0],
                to: points[1],
            }),
            "remove" | "r" => arity("remove", 1).map(|()| Action::Remove { at: points[0] }),
            _ => Err(ParseActionError::UnknownVerb(verb)),
        }
    }
}

/// A history entry written by the rules after a successful action.
///
/// Serialized as the tuple arrays of the saved-game format:
/// `["place", 4, "W"]`, `["move", 4, 5, "W"]`, `["remove", 7, "B"]`.
/// For removals the color is that of the captured piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "RecordRepr", try_from = "RecordRepr")]
pub enum MoveRecord {
    Place { position: usize, color: Color },
    Move { from: usize, to: usize, color: Color },
    Remove { position: usize, color: Color },
}

impl MoveRecord {
    /// Color of the piece this record touched.
    #[must_use]
    pub const fn color(&self) -> Color {
        match *self {
            MoveRecord::Place { color, .. }
            | MoveRecord::Move { color, .. }
            | MoveRecord::Remove { color, .. } => color,
        }
    }

    /// The side that performed this step.
    #[must_use]
    pub const fn actor(&self) -> Color {
        match *self {
            MoveRecord::Remove { color, .. } => color.opponent(),
            _ => self.color(),
        }
    }

    /// The action that reproduces this record.
    #[must_use]
    pub const fn action(&self) -> Action {
        match *self {
            MoveRecord::Place { position, .. } => Action::Place { to: position },
            MoveRecord::Move { from, to, .. } => Action::Move { from, to },
            MoveRecord::Remove { position, .. } => Action::Remove { at: position },
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RecordKind {
    Place,
    Move,
    Remove,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RecordRepr {
    Shift(RecordKind, usize, usize, Color),
    Single(RecordKind, usize, Color),
}

/// A history tuple whose point count does not fit its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordShapeError {
    #[error("move record needs a source and a destination")]
    MissingSource,
    #[error("only move records carry two points")]
    ExtraPoint,
}

impl From<MoveRecord> for RecordRepr {
    fn from(record: MoveRecord) -> Self {
        use RecordKind::{Move, Place, Remove};
        match record {
            MoveRecord::Place { position, color } => RecordRepr::Single(Place, position, color),
            MoveRecord::Move { from, to, color } => RecordRepr::Shift(Move, from, to, color),
            MoveRecord::Remove { position, color } => RecordRepr::Single(Remove, position, color),
        }
    }
}

impl TryFrom<RecordRepr> for MoveRecord {
    type Error = RecordShapeError;

    fn try_from(repr: RecordRepr) -> Result<Self, Self::Error> {
        use RecordKind::{Move, Place, Remove};
        match repr {
            RecordRepr::Single(Place, position, color) => Ok(MoveRecord::Place { position, color }),
            RecordRepr::Single(Remove, position, color) => {
                Ok(MoveRecord::Remove { position, color })
            }
            RecordRepr::Shift(Move, from, to, color) => Ok(MoveRecord::Move { from, to, color }),
            RecordRepr::Single(Move, ..) => Err(RecordShapeError::MissingSource),
            RecordRepr::Shift(..) => Err(RecordShapeError::ExtraPoint),
        }
    }
}
