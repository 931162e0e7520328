//! Per-piece movement legality as point predicates.
//!
//! `reaches` is the single source of truth for "can the piece on `from`
//! move to `to`": successor generation enumerates destinations and filters
//! with it, and human-move validation applies it to one destination, so the
//! two can never disagree.
//!
//! All checks are pseudo-legal: bounds, blocking, and target occupancy,
//! but not whether the move exposes the mover's own king.

use crate::board::Position;
use crate::types::*;

/// True iff the piece on `from` can move to `to` under its movement rule
/// and the shared admissibility rule (destination empty or enemy-held).
/// False when `from` is empty.
pub fn reaches(pos: &Position, from: Square, to: Square) -> bool {
    let piece = match pos.piece_at(from) {
        Some(p) => p,
        None => return false,
    };
    if from == to {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_reaches(pos, piece.color, from, to),
        PieceKind::Knight => knight_reaches(pos, piece.color, from, to),
        PieceKind::Bishop => bishop_reaches(pos, piece.color, from, to),
        PieceKind::Rook => rook_reaches(pos, piece.color, from, to),
        PieceKind::Queen => {
            rook_reaches(pos, piece.color, from, to) || bishop_reaches(pos, piece.color, from, to)
        }
        PieceKind::King => king_reaches(pos, piece.color, from, to),
    }
}

/// A destination is admissible iff it is empty or holds an enemy piece.
fn admissible(pos: &Position, mover: Color, to: Square) -> bool {
    match pos.piece_at(to) {
        None => true,
        Some(pc) => pc.color != mover,
    }
}

fn pawn_reaches(pos: &Position, c: Color, from: Square, to: Square) -> bool {
    // White moves toward row 0, Black toward row 7.
    let (dir, start_row): (i8, i8) = match c {
        Color::White => (-1, 6),
        Color::Black => (1, 1),
    };
    let dr = to.row - from.row;
    let dc = to.col - from.col;

    if dc == 0 {
        if dr == dir {
            return pos.piece_at(to).is_none();
        }
        if dr == 2 * dir && from.row == start_row {
            return match from.offset(dir, 0) {
                Some(mid) => pos.piece_at(mid).is_none() && pos.piece_at(to).is_none(),
                None => false,
            };
        }
        return false;
    }

    // Diagonal step is a capture only.
    dc.abs() == 1
        && dr == dir
        && matches!(pos.piece_at(to), Some(target) if target.color != c)
}

fn knight_reaches(pos: &Position, c: Color, from: Square, to: Square) -> bool {
    let dr = (to.row - from.row).abs();
    let dc = (to.col - from.col).abs();
    ((dr == 2 && dc == 1) || (dr == 1 && dc == 2)) && admissible(pos, c, to)
}

fn king_reaches(pos: &Position, c: Color, from: Square, to: Square) -> bool {
    let dr = (to.row - from.row).abs();
    let dc = (to.col - from.col).abs();
    dr <= 1 && dc <= 1 && admissible(pos, c, to)
}

fn rook_reaches(pos: &Position, c: Color, from: Square, to: Square) -> bool {
    let dr = to.row - from.row;
    let dc = to.col - from.col;
    if !((dr == 0) ^ (dc == 0)) {
        return false;
    }
    path_clear(pos, from, to) && admissible(pos, c, to)
}

fn bishop_reaches(pos: &Position, c: Color, from: Square, to: Square) -> bool {
    let dr = to.row - from.row;
    let dc = to.col - from.col;
    if dr.abs() != dc.abs() || dr == 0 {
        return false;
    }
    path_clear(pos, from, to) && admissible(pos, c, to)
}

/// Every square strictly between `from` and `to` along the straight or
/// diagonal line is empty. Path length is `max(|dr|, |dc|)` steps.
fn path_clear(pos: &Position, from: Square, to: Square) -> bool {
    let dr = to.row - from.row;
    let dc = to.col - from.col;
    let steps = dr.abs().max(dc.abs());
    let step_r = dr.signum();
    let step_c = dc.signum();
    for i in 1..steps {
        match from.offset(i * step_r, i * step_c) {
            Some(sq) if pos.piece_at(sq).is_none() => {}
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
