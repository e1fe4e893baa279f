use crate::{BoardPosition, Directions, Disc};

/// The opposing color. Callers validate that they hold a playable color
/// before asking for its opponent; `Empty` is returned unchanged.
pub(crate) fn opponent(disc: Disc) -> Disc {
    match disc {
        Disc::Black => Disc::White,
        Disc::White => Disc::Black,
        Disc::Empty => Disc::Empty,
    }
}

pub(crate) struct BoardDirectionIter {
    direction: Directions,
    board_size: usize,

    /// for iteration -- what position are we currently at?
    cursor: BoardPosition,
}

impl BoardDirectionIter {
    pub fn new(origin: BoardPosition, direction: Directions, board_size: usize) -> Self {
        if direction.row_dir() == 0 && direction.col_dir() == 0 {
            panic!("Can't create an iterator with both row and column direction as 0 (this would result in an iterator that never moves)");
        }

        BoardDirectionIter {
            direction,
            board_size,

            cursor: origin,
        }
    }
}

impl Iterator for BoardDirectionIter {
    type Item = BoardPosition;

    fn next(&mut self) -> Option<Self::Item> {
        let next_row = self.cursor.row() as i32 + self.direction.row_dir();
        let next_col = self.cursor.col() as i32 + self.direction.col_dir();

        if next_row < 0 || next_col < 0 {
            return None;
        }

        if next_row >= self.board_size as i32 || next_col >= self.board_size as i32 {
            return None;
        }

        self.cursor = BoardPosition::new(next_row as usize, next_col as usize);

        Some(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_swaps_colors() {
        assert_eq!(Disc::White, opponent(Disc::Black));
        assert_eq!(Disc::Black, opponent(Disc::White));
    }

    #[test]
    fn direction_iter_stops_at_board_edge() {
        // Walk northwest from (2,2) on a 4x4 board: (1,1), (0,0), done.
        let direction = Directions::compass()
            .find(|d| d.row_dir() == -1 && d.col_dir() == -1)
            .unwrap();

        let steps: Vec<_> = BoardDirectionIter::new(BoardPosition::new(2, 2), direction, 4).collect();

        assert_eq!(vec![BoardPosition::new(1, 1), BoardPosition::new(0, 0)], steps);
    }

    #[test]
    fn compass_has_eight_directions() {
        assert_eq!(8, Directions::compass().count());
    }
}
