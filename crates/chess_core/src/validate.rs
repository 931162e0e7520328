use thiserror::Error;

use crate::board::Position;
use crate::rules::reaches;
use crate::types::Square;

/// Why a human-supplied move was rejected. Rejection never mutates the
/// position; the caller re-prompts.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("square out of bounds")]
    OutOfBounds,
    #[error("no piece on the source square")]
    EmptySource,
    #[error("that piece belongs to the opponent")]
    WrongSide,
    #[error("illegal move for that piece")]
    IllegalMove,
}

/// Validate a `(from, to)` move for the side to move and, when legal,
/// return the successor position (promotion applied, turn flipped).
///
/// Coordinates are raw `(row, col)` pairs so out-of-range input from the
/// notation layer is rejected here rather than by its parser.
pub fn validate_and_apply(
    pos: &Position,
    from: (i8, i8),
    to: (i8, i8),
) -> Result<Position, MoveError> {
    let from = Square::new(from.0, from.1).ok_or(MoveError::OutOfBounds)?;
    let to = Square::new(to.0, to.1).ok_or(MoveError::OutOfBounds)?;

    let piece = pos.piece_at(from).ok_or(MoveError::EmptySource)?;
    if piece.color != pos.turn {
        return Err(MoveError::WrongSide);
    }
    if !reaches(pos, from, to) {
        return Err(MoveError::IllegalMove);
    }
    Ok(pos.apply_move(from, to))
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod validate_tests;
