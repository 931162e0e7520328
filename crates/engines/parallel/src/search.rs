use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use rayon::prelude::*;

use chess_core::{evaluate, successors, Color, Position};

pub const NEG_INF: i32 = i32::MIN / 2;
pub const POS_INF: i32 = i32::MAX / 2;

/// Branching factor above which the search drops from depth 3 to depth 2,
/// trading quality for bounded total work in wide positions.
const WIDE_BRANCHING: usize = 30;

/// Outcome of a full search: the chosen successor, its minimax score, and
/// the depth the branching-factor rule selected.
#[derive(Clone, Debug)]
pub struct SearchChoice {
    pub position: Position,
    pub score: i32,
    pub depth: u8,
}

/// Pick the best move for the side to move. `None` means no successor
/// exists: the position is terminal, not an error.
///
/// Every immediate successor is scored in a parallel map; one sequential
/// reduction then keeps the best for the mover (lowest index wins ties, so
/// the choice is deterministic for a fixed depth).
pub fn pick_best_move(pos: &Position) -> Option<SearchChoice> {
    let mut children = successors(pos);
    if children.is_empty() {
        return None;
    }

    let depth: u8 = if children.len() > WIDE_BRANCHING { 2 } else { 3 };

    let scores: Vec<i32> = children
        .par_iter()
        .map(|child| minimax(child, depth - 1, NEG_INF, POS_INF))
        .collect();

    let mut best_idx = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if better_for(pos.turn, score, scores[best_idx]) {
            best_idx = i;
        }
    }
    Some(SearchChoice {
        score: scores[best_idx],
        position: children.swap_remove(best_idx),
        depth,
    })
}

fn better_for(side: Color, candidate: i32, incumbent: i32) -> bool {
    match side {
        Color::White => candidate > incumbent,
        Color::Black => candidate < incumbent,
    }
}

/// Depth-limited minimax with alpha-beta pruning. The side to move is read
/// from `pos.turn`; White maximizes, Black minimizes.
///
/// Sibling branches run as a parallel map over independent position
/// snapshots. The mover's own bound (alpha at a White node, beta at a
/// Black node) is shared through an atomic that each task reads before
/// recursing and raises with its result afterward, so the window narrows
/// as sibling results arrive. A shared cutoff flag is raised as soon as
/// any sibling's score crosses the opponent's bound; tasks not yet started
/// are skipped, tasks already running complete. Skipping only drops
/// branches dominated by the sibling that raised the flag, so the value
/// folded out of the sequential reduction is never a loosened bound.
pub fn minimax(pos: &Position, depth: u8, alpha: i32, beta: i32) -> i32 {
    if depth == 0 || pos.is_game_over() {
        return evaluate(pos);
    }
    let children = successors(pos);
    if children.is_empty() {
        // No move at non-zero depth: score the position as it stands.
        return evaluate(pos);
    }

    let cutoff = AtomicBool::new(false);
    match pos.turn {
        Color::White => {
            let shared_alpha = AtomicI32::new(alpha);
            let scores: Vec<i32> = children
                .par_iter()
                .filter_map(|child| {
                    if cutoff.load(Ordering::Relaxed) {
                        return None;
                    }
                    let a = shared_alpha.load(Ordering::Relaxed);
                    let score = minimax(child, depth - 1, a, beta);
                    shared_alpha.fetch_max(score, Ordering::Relaxed);
                    if score >= beta {
                        cutoff.store(true, Ordering::Relaxed);
                    }
                    Some(score)
                })
                .collect();
            scores.into_iter().fold(NEG_INF, i32::max)
        }
        Color::Black => {
            let shared_beta = AtomicI32::new(beta);
            let scores: Vec<i32> = children
                .par_iter()
                .filter_map(|child| {
                    if cutoff.load(Ordering::Relaxed) {
                        return None;
                    }
                    let b = shared_beta.load(Ordering::Relaxed);
                    let score = minimax(child, depth - 1, alpha, b);
                    shared_beta.fetch_min(score, Ordering::Relaxed);
                    if score <= alpha {
                        cutoff.store(true, Ordering::Relaxed);
                    }
                    Some(score)
                })
                .collect();
            scores.into_iter().fold(POS_INF, i32::min)
        }
    }
}

/// The best and second-best immediate successors by one-ply evaluation.
#[derive(Clone, Debug)]
pub struct Recommendation {
    pub best: (Position, i32),
    pub second: Option<(Position, i32)>,
}

/// Score every immediate successor with the static evaluator (no
/// recursion) and report the top two for the side to move, ties broken by
/// lowest index. `None` when the position has no successor.
pub fn recommend(pos: &Position) -> Option<Recommendation> {
    let children = successors(pos);
    if children.is_empty() {
        return None;
    }

    let scores: Vec<i32> = children.par_iter().map(evaluate).collect();

    let mut best = 0;
    let mut second: Option<usize> = None;
    for i in 1..scores.len() {
        if better_for(pos.turn, scores[i], scores[best]) {
            second = Some(best);
            best = i;
        } else if second.map_or(true, |s| better_for(pos.turn, scores[i], scores[s])) {
            second = Some(i);
        }
    }

    Some(Recommendation {
        best: (children[best].clone(), scores[best]),
        second: second.map(|i| (children[i].clone(), scores[i])),
    })
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
