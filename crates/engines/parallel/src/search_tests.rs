use super::*;
use chess_core::{Piece, PieceKind, Square};

fn put(pos: &mut Position, c: char, row: i8, col: i8) {
    pos.set_piece(
        Square { row, col },
        Some(Piece::from_char(c).expect("test piece char")),
    );
}

/// Sequential exhaustive minimax without pruning, for cross-checking.
fn plain_minimax(pos: &Position, depth: u8) -> i32 {
    if depth == 0 || pos.is_game_over() {
        return evaluate(pos);
    }
    let children = successors(pos);
    if children.is_empty() {
        return evaluate(pos);
    }
    let scores = children.iter().map(|c| plain_minimax(c, depth - 1));
    match pos.turn {
        Color::White => scores.max().unwrap(),
        Color::Black => scores.min().unwrap(),
    }
}

#[test]
fn test_depth_zero_is_static_evaluation() {
    let pos = Position::startpos();
    assert_eq!(minimax(&pos, 0, NEG_INF, POS_INF), evaluate(&pos));

    let mut mid = Position::startpos();
    put(&mut mid, 'N', 4, 4);
    assert_eq!(minimax(&mid, 0, NEG_INF, POS_INF), evaluate(&mid));
}

#[test]
fn test_pruned_search_matches_exhaustive_minimax() {
    // Mixed middlegame-ish position, small enough for an unpruned search.
    let mut pos = Position::empty(Color::White);
    put(&mut pos, 'K', 7, 4);
    put(&mut pos, 'R', 7, 0);
    put(&mut pos, 'P', 6, 4);
    put(&mut pos, 'k', 0, 4);
    put(&mut pos, 'n', 3, 3);
    put(&mut pos, 'p', 1, 2);
    for depth in 1..=3 {
        assert_eq!(
            minimax(&pos, depth, NEG_INF, POS_INF),
            plain_minimax(&pos, depth),
            "depth {depth}"
        );
    }
}

#[test]
fn test_pruned_search_matches_from_startpos() {
    let pos = Position::startpos();
    for depth in 1..=2 {
        assert_eq!(
            minimax(&pos, depth, NEG_INF, POS_INF),
            plain_minimax(&pos, depth),
            "depth {depth}"
        );
    }
}

#[test]
fn test_pick_best_move_startpos() {
    let choice = pick_best_move(&Position::startpos()).expect("start position has moves");
    assert_eq!(choice.position.turn, Color::Black);
    assert_eq!(choice.depth, 3); // 20 successors, under the wide threshold
}

#[test]
fn test_pick_best_move_none_when_no_successors() {
    // White to move with no white pieces on the board.
    let mut pos = Position::empty(Color::White);
    put(&mut pos, 'k', 0, 4);
    assert!(pick_best_move(&pos).is_none());
    assert!(recommend(&pos).is_none());
}

#[test]
fn test_engine_takes_a_hanging_queen() {
    let mut pos = Position::empty(Color::White);
    put(&mut pos, 'K', 7, 7);
    put(&mut pos, 'R', 4, 0);
    put(&mut pos, 'k', 0, 7); // off the rook's lines
    put(&mut pos, 'q', 4, 5); // undefended on the rook's rank
    let choice = pick_best_move(&pos).expect("moves exist");
    assert_eq!(
        choice.position.piece_at(Square { row: 4, col: 5 }),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::Rook
        })
    );
}

#[test]
fn test_recommend_returns_top_two() {
    let rec = recommend(&Position::startpos()).expect("start position has moves");
    let (_, best_score) = rec.best;
    let (_, second_score) = rec.second.expect("twenty successors, so a runner-up exists");
    // White to move: best is the highest one-ply score.
    assert!(best_score >= second_score);
}

#[test]
fn test_recommend_single_successor_has_no_second() {
    // Lone white pawn one step from promotion: exactly one move exists.
    let mut pos = Position::empty(Color::White);
    put(&mut pos, 'P', 1, 0);
    let rec = recommend(&pos).expect("promotion push exists");
    assert!(rec.second.is_none());
    let (best, score) = rec.best;
    assert_eq!(
        best.piece_at(Square { row: 0, col: 0 }).map(|p| p.kind),
        Some(PieceKind::Queen)
    );
    assert_eq!(score, 9);
}
