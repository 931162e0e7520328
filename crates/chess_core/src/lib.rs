pub mod board;
pub mod eval;
pub mod movegen;
pub mod rules;
pub mod types;
pub mod validate;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use eval::evaluate;
pub use movegen::{successors, MAX_PER_SQUARE, MAX_SUCCESSORS};
pub use rules::reaches;
pub use types::*;
pub use validate::{validate_and_apply, MoveError};

/// Result of a search operation.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen successor position (None when no move exists).
    pub best: Option<Position>,
    /// Score of the chosen position, positive favoring White.
    pub score: i32,
    /// Search depth used.
    pub depth: u8,
}

/// Trait implemented by move-selecting engines, so callers can swap
/// search strategies behind one seam.
pub trait Engine: Send {
    /// Pick a move for the side to move in `pos`.
    ///
    /// A result with `best: None` means no successor exists: a terminal
    /// position, not an error.
    fn search(&mut self, pos: &Position) -> SearchResult;

    /// Engine display name.
    fn name(&self) -> &str;
}
