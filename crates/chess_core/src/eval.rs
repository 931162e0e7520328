//! Static position evaluation: material plus light positional terms.

use crate::board::Position;
use crate::types::*;

/// Score a position. Positive favors White (the maximizer), negative Black;
/// Black pieces contribute the mirrored negative magnitude. Deterministic,
/// one pass over the grid.
pub fn evaluate(pos: &Position) -> i32 {
    let mut score = 0i32;
    for sq in squares() {
        if let Some(pc) = pos.piece_at(sq) {
            let v = piece_score(pos, pc, sq);
            score += match pc.color {
                Color::White => v,
                Color::Black => -v,
            };
        }
    }
    score
}

fn piece_score(pos: &Position, pc: Piece, sq: Square) -> i32 {
    match pc.kind {
        // Base 1 plus one point per rank advanced toward promotion.
        PieceKind::Pawn => {
            let advance = match pc.color {
                Color::White => 6 - sq.row,
                Color::Black => sq.row - 1,
            };
            1 + advance as i32
        }
        // Bonus for a knight centralized in the inner 4x4.
        PieceKind::Knight => {
            let central = (2..=5).contains(&sq.row) && (2..=5).contains(&sq.col);
            3 + central as i32
        }
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        // Safety proxy: penalize distance from the own back rank, halved
        // for the side to move (it can still retreat). Zero for both kings
        // in the starting position.
        PieceKind::King => {
            let dist = match pc.color {
                Color::White => 7 - sq.row,
                Color::Black => sq.row,
            } as i32;
            let penalty = if pos.turn == pc.color { dist / 2 } else { dist };
            100 - penalty
        }
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
