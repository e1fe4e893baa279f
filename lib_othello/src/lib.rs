//! The Othello rules engine: board setup, legal-move detection,
//! disc-flipping capture, turn management, and end-of-game queries.
//! This crate is the authoritative game model; it performs no I/O
//! beyond a diagnostic text rendering of the board.

pub mod othello_gamestate;

mod error;
mod util;

pub use error::OthelloError;
pub use othello_gamestate::OthelloState;

/// When traversing cells on the board,
/// a positive direction indicates increasing values for row or col,
/// a negative direction indicates decreasing values for row or col,
/// and a 'same' direction indicates no movement for row or col.
/// Example: traversing as 'row: positive, col: negative' steps
/// down and to the left.
mod board_directions {
    pub type Direction = i32;
    pub const POSITIVE: Direction = 1;
    pub const NEGATIVE: Direction = -1;
    pub const SAME: Direction = 0;
}

#[derive(Copy, Clone)]
pub(crate) struct Directions {
    row_dir: board_directions::Direction,
    col_dir: board_directions::Direction,
}

impl Directions {
    pub(crate) fn row_dir(self) -> board_directions::Direction {
        self.row_dir
    }

    pub(crate) fn col_dir(self) -> board_directions::Direction {
        self.col_dir
    }

    /// All eight compass directions: every row/col combination of
    /// {positive, negative, same} except (same, same), which goes nowhere.
    pub(crate) fn compass() -> impl Iterator<Item = Directions> {
        use board_directions::{NEGATIVE, POSITIVE, SAME};

        const ALL: [board_directions::Direction; 3] = [POSITIVE, NEGATIVE, SAME];

        ALL.iter().flat_map(|&row_dir| {
            ALL.iter().filter_map(move |&col_dir| {
                if row_dir == SAME && col_dir == SAME {
                    None
                } else {
                    Some(Directions { row_dir, col_dir })
                }
            })
        })
    }
}

/// The contents of a single board cell: a stone of either color,
/// or nothing at all.
///
/// `Empty` is a legal cell value but not a playable color; operations
/// that take a disc to play reject it with [`OthelloError::InvalidDisc`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Disc {
    Black,
    White,
    Empty,
}

impl Disc {
    /// True for the two playable colors, false for `Empty`.
    pub fn is_color(self) -> bool {
        !matches!(self, Disc::Empty)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct BoardPosition {
    row: usize,
    col: usize,
}

impl BoardPosition {
    pub(crate) fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub(crate) fn row(self) -> usize {
        self.row
    }

    pub(crate) fn col(self) -> usize {
        self.col
    }
}
