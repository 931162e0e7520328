use rayon::prelude::*;

use crate::board::Position;
use crate::rules::reaches;
use crate::types::squares;

/// Hard cap on successors of one position. Exceeding it means the movement
/// rules are broken; generation fails fast rather than truncating.
pub const MAX_SUCCESSORS: usize = 100;
/// Hard cap on moves originating from a single square (a queen in the open
/// reaches 27 destinations, so 50 leaves ample slack).
pub const MAX_PER_SQUARE: usize = 50;

/// All pseudo-legal successor positions for the side to move, each with the
/// turn flipped. No ordering is guaranteed beyond "each admissible move
/// appears exactly once".
///
/// Origin squares fan out in parallel; each task filters every destination
/// through the shared `rules::reaches` predicate and builds its local batch
/// independently, so the only serialization point is the final collect.
pub fn successors(pos: &Position) -> Vec<Position> {
    let origins: Vec<_> = squares()
        .filter(|&sq| matches!(pos.piece_at(sq), Some(pc) if pc.color == pos.turn))
        .collect();

    let out: Vec<Position> = origins
        .par_iter()
        .flat_map_iter(|&from| {
            let local: Vec<Position> = squares()
                .filter(|&to| reaches(pos, from, to))
                .map(|to| pos.apply_move(from, to))
                .collect();
            assert!(
                local.len() <= MAX_PER_SQUARE,
                "successor overflow: {} moves from {}",
                local.len(),
                from.to_coord()
            );
            local
        })
        .collect();

    assert!(
        out.len() <= MAX_SUCCESSORS,
        "successor overflow: {} moves in one position",
        out.len()
    );
    out
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
