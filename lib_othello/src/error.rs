use crate::Disc;
use thiserror::Error;

/// Errors raised for malformed arguments.
///
/// Illegal moves are deliberately not errors: `is_valid_move` reports them
/// as `false` and `place_disc_at` treats them as a no-op.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OthelloError {
    #[error("board size must be 4, 6, or 8, got {0}")]
    InvalidBoardSize(usize),

    #[error("expected a playable disc color (black or white), got {0:?}")]
    InvalidDisc(Disc),
}
