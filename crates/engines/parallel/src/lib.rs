//! Parallel Chess Engine
//!
//! Depth-limited minimax with alpha-beta pruning over immutable position
//! snapshots, with sibling branches evaluated in parallel.

mod search;

use chess_core::{Engine, Position, SearchResult};

/// Engine that fans sibling search branches out across a rayon pool.
///
/// Search depth is picked per position: 2 plies when the branching factor
/// exceeds 30, otherwise 3.
#[derive(Debug, Clone, Default)]
pub struct ParallelEngine;

impl ParallelEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for ParallelEngine {
    fn search(&mut self, pos: &Position) -> SearchResult {
        match search::pick_best_move(pos) {
            Some(choice) => SearchResult {
                best: Some(choice.position),
                score: choice.score,
                depth: choice.depth,
            },
            None => SearchResult {
                best: None,
                score: 0,
                depth: 0,
            },
        }
    }

    fn name(&self) -> &str {
        "Parallel Minimax v0.1"
    }
}

// Re-export for direct use if needed
pub use search::{minimax, pick_best_move, recommend, Recommendation, SearchChoice};
