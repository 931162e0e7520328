use std::fmt;

use crate::types::*;

pub const BOARD_SIZE: usize = 8;

/// A full game position: the 8x8 grid plus whose turn it is.
///
/// Positions are values. Applying a move never mutates an existing
/// position; it produces a fresh one, so concurrent search tasks can each
/// hold their own snapshot without aliasing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    pub turn: Color,
}

impl Position {
    /// Standard starting layout, White to move.
    pub fn startpos() -> Self {
        let mut p = Position {
            board: [[None; BOARD_SIZE]; BOARD_SIZE],
            turn: Color::White,
        };

        // Pawns: White on row 6 (rank 2), Black on row 1 (rank 7).
        for col in 0..BOARD_SIZE {
            p.board[6][col] = Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn,
            });
            p.board[1][col] = Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn,
            });
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            p.board[7][col] = Some(Piece {
                color: Color::White,
                kind,
            });
            p.board[0][col] = Some(Piece {
                color: Color::Black,
                kind,
            });
        }
        p
    }

    /// An empty board with the given side to move, for building test
    /// positions piece by piece.
    pub fn empty(turn: Color) -> Self {
        Position {
            board: [[None; BOARD_SIZE]; BOARD_SIZE],
            turn,
        }
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.row as usize][sq.col as usize]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.board[sq.row as usize][sq.col as usize] = pc;
    }

    /// True iff either side's king is missing from the grid.
    pub fn is_game_over(&self) -> bool {
        let mut white_king = false;
        let mut black_king = false;
        for sq in squares() {
            if let Some(pc) = self.piece_at(sq) {
                if pc.kind == PieceKind::King {
                    match pc.color {
                        Color::White => white_king = true,
                        Color::Black => black_king = true,
                    }
                }
            }
        }
        !(white_king && black_king)
    }

    /// Apply a move, returning the successor position with the turn
    /// flipped. A pawn landing on the far rank is replaced by a queen.
    ///
    /// The caller guarantees the move is legal and the source occupied;
    /// an empty source square is a contract breach and panics.
    pub fn apply_move(&self, from: Square, to: Square) -> Position {
        let moved = self.piece_at(from).expect("no piece on source square");

        let mut placed = moved;
        if moved.kind == PieceKind::Pawn {
            let promo_row = match moved.color {
                Color::White => 0,
                Color::Black => 7,
            };
            if to.row == promo_row {
                placed.kind = PieceKind::Queen;
            }
        }

        let mut next = self.clone();
        next.set_piece(from, None);
        next.set_piece(to, Some(placed));
        next.turn = self.turn.other();
        next
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", 8 - row)?;
            for col in 0..BOARD_SIZE {
                let c = self.board[row][col].map_or(' ', Piece::to_char);
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
