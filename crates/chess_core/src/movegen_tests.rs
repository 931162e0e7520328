use super::*;
use crate::board::Position;
use crate::types::{Color, Piece, PieceKind, Square};

#[test]
fn test_startpos_has_twenty_successors() {
    let pos = Position::startpos();
    let succ = successors(&pos);
    // 16 pawn single/double pushes + 4 knight moves
    assert_eq!(succ.len(), 20);
    assert!(succ.iter().all(|s| s.turn == Color::Black));
}

#[test]
fn test_each_successor_differs_in_exactly_two_cells() {
    let pos = Position::startpos();
    for s in successors(&pos) {
        let diffs = squares()
            .filter(|&sq| pos.piece_at(sq) != s.piece_at(sq))
            .count();
        // One cleared origin, one filled destination.
        assert_eq!(diffs, 2);
    }
}

#[test]
fn test_successors_for_black_after_reply() {
    let pos = Position::startpos();
    let after_e4 = pos.apply_move(Square { row: 6, col: 4 }, Square { row: 4, col: 4 });
    let succ = successors(&after_e4);
    assert_eq!(succ.len(), 20);
    assert!(succ.iter().all(|s| s.turn == Color::White));
}

#[test]
fn test_no_successors_without_pieces_of_the_mover() {
    // White to move but only a black king on the board.
    let mut pos = Position::empty(Color::White);
    pos.set_piece(
        Square { row: 0, col: 4 },
        Some(Piece {
            color: Color::Black,
            kind: PieceKind::King,
        }),
    );
    assert!(successors(&pos).is_empty());
}

#[test]
fn test_promotion_replaces_plain_forward_move() {
    let mut pos = Position::empty(Color::White);
    pos.set_piece(
        Square { row: 1, col: 3 },
        Some(Piece {
            color: Color::White,
            kind: PieceKind::Pawn,
        }),
    );
    let succ = successors(&pos);
    assert_eq!(succ.len(), 1);
    let s = &succ[0];
    assert_eq!(s.board[1][3], None);
    assert_eq!(
        s.board[0][3],
        Some(Piece {
            color: Color::White,
            kind: PieceKind::Queen
        })
    );
    assert_eq!(s.turn, Color::Black);
}

#[test]
#[should_panic(expected = "successor overflow")]
fn test_overflowing_successor_count_fails_fast() {
    // Ten queens on open lines generate far more than MAX_SUCCESSORS
    // pseudo-legal moves; the bound must trip instead of truncating.
    let mut pos = Position::empty(Color::White);
    let posts = [
        (0, 0),
        (0, 7),
        (2, 2),
        (2, 5),
        (4, 0),
        (4, 7),
        (5, 3),
        (7, 0),
        (7, 4),
        (7, 7),
    ];
    for (row, col) in posts {
        pos.set_piece(
            Square { row, col },
            Some(Piece {
                color: Color::White,
                kind: PieceKind::Queen,
            }),
        );
    }
    successors(&pos);
}

#[test]
fn test_capture_appears_once_and_removes_target() {
    let mut pos = Position::empty(Color::White);
    pos.set_piece(
        Square { row: 7, col: 0 },
        Some(Piece {
            color: Color::White,
            kind: PieceKind::Rook,
        }),
    );
    pos.set_piece(
        Square { row: 7, col: 5 },
        Some(Piece {
            color: Color::Black,
            kind: PieceKind::Queen,
        }),
    );
    let succ = successors(&pos);
    // Rook on a1: 7 squares up the a-file, 4 along rank 1 ending in the
    // queen capture on f1.
    assert_eq!(succ.len(), 12);
    let captures: Vec<_> = succ
        .iter()
        .filter(|s| {
            s.board[7][5]
                == Some(Piece {
                    color: Color::White,
                    kind: PieceKind::Rook,
                })
        })
        .collect();
    assert_eq!(captures.len(), 1);
    assert_eq!(captures[0].board[7][0], None);
}
