use crate::util::{opponent, BoardDirectionIter};
use crate::{BoardPosition, Directions, Disc, OthelloError};
use lib_boardgame::{Outcome, Player};
use std::fmt;

/// The complete state of one Othello game: the board, the current turn,
/// and which color each player holds.
///
/// Created once per game; every accepted move mutates it in place.
/// Starting over means constructing a new instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OthelloState {
    /// The board cells in row-major order, `size * size` of them.
    board: Vec<Disc>,

    /// The side length of the square board.
    size: usize,

    /// The player whose turn it currently is.
    turn: Player,

    player_one_disc: Disc,
    player_two_disc: Disc,

    /// The count of black discs on the board.
    black_count: usize,

    /// The count of white discs on the board.
    white_count: usize,
}

impl OthelloState {
    /// Creates a game on a fresh board with the standard four-disc cross
    /// in the center, assigning `start_player_disc` to `start_player` and
    /// the opposite color to the other player.
    ///
    /// Only square boards of side 4, 6, or 8 are supported.
    pub fn new(
        board_size: usize,
        start_player: Player,
        start_player_disc: Disc,
    ) -> Result<Self, OthelloError> {
        match board_size {
            4 | 6 | 8 => {}
            _ => return Err(OthelloError::InvalidBoardSize(board_size)),
        }

        if !start_player_disc.is_color() {
            return Err(OthelloError::InvalidDisc(start_player_disc));
        }

        let (player_one_disc, player_two_disc) = match start_player {
            Player::One => (start_player_disc, opponent(start_player_disc)),
            Player::Two => (opponent(start_player_disc), start_player_disc),
        };

        let mut state = OthelloState {
            board: vec![Disc::Empty; board_size * board_size],
            size: board_size,
            turn: start_player,
            player_one_disc,
            player_two_disc,
            black_count: 0,
            white_count: 0,
        };

        // The standard cross: black on the main diagonal of the center
        // square, white on the anti-diagonal.
        let p = (board_size - 2) / 2;
        state.set_disc(BoardPosition::new(p, p), Disc::Black);
        state.set_disc(BoardPosition::new(p + 1, p + 1), Disc::Black);
        state.set_disc(BoardPosition::new(p, p + 1), Disc::White);
        state.set_disc(BoardPosition::new(p + 1, p), Disc::White);

        Ok(state)
    }

    /// The side length of the board.
    pub fn board_size(&self) -> usize {
        self.size
    }

    /// The player whose turn it currently is.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Hands the turn to the other player.
    ///
    /// `place_disc_at` invokes this automatically after every accepted
    /// move, so during normal play callers only need it to pass the turn
    /// of a player with no legal move.
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// The disc color the given player holds for this game.
    pub fn player_disc(&self, player: Player) -> Disc {
        match player {
            Player::One => self.player_one_disc,
            Player::Two => self.player_two_disc,
        }
    }

    fn index_of(&self, position: BoardPosition) -> usize {
        position.row() * self.size + position.col()
    }

    fn disc_at(&self, position: BoardPosition) -> Disc {
        self.board[self.index_of(position)]
    }

    /// Writes a cell, keeping the per-color disc counts in sync.
    fn set_disc(&mut self, position: BoardPosition, disc: Disc) {
        let index = self.index_of(position);

        match self.board[index] {
            Disc::Black => self.black_count -= 1,
            Disc::White => self.white_count -= 1,
            Disc::Empty => {}
        }

        match disc {
            Disc::Black => self.black_count += 1,
            Disc::White => self.white_count += 1,
            Disc::Empty => {}
        }

        self.board[index] = disc;
    }

    /// Walks outward from `origin` in one direction, looking for the disc
    /// that closes a bracket of opponent discs.
    ///
    /// A closing disc must be `disc`'s own color and sit strictly more
    /// than one step away; an own-color disc immediately adjacent to the
    /// origin traps nothing and closes nothing. The walk ends without a
    /// bracket at the first empty cell or the edge of the board.
    ///
    /// Example, walking east from the cell marked `*`:
    ///     * W W W B     bracket closed by the 'B'
    ///     * B           no bracket, nothing trapped
    ///     * W W _ B     no bracket, the gap breaks the chain
    fn find_bracket_end(
        &self,
        origin: BoardPosition,
        disc: Disc,
        direction: Directions,
    ) -> Option<BoardPosition> {
        for (index, position) in BoardDirectionIter::new(origin, direction, self.size).enumerate() {
            match self.disc_at(position) {
                Disc::Empty => return None,
                current if current == disc => {
                    return if index == 0 { None } else { Some(position) };
                }
                // opponent disc, keep walking
                _ => continue,
            }
        }

        None
    }

    /// The unvalidated legality check shared by the public queries;
    /// `disc` must already be a playable color.
    fn is_valid_move_unchecked(&self, row: usize, col: usize, disc: Disc) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }

        let target = BoardPosition::new(row, col);

        if self.disc_at(target) != Disc::Empty {
            return false;
        }

        Directions::compass()
            .any(|direction| self.find_bracket_end(target, disc, direction).is_some())
    }

    /// True if placing `disc` at (`row`, `col`) would capture at least one
    /// opponent disc in some direction.
    ///
    /// Out-of-bounds coordinates and occupied cells are not errors; they
    /// simply make the move invalid. Only an unplayable `disc` fails.
    pub fn is_valid_move(&self, row: usize, col: usize, disc: Disc) -> Result<bool, OthelloError> {
        if !disc.is_color() {
            return Err(OthelloError::InvalidDisc(disc));
        }

        Ok(self.is_valid_move_unchecked(row, col, disc))
    }

    /// True if `disc` has at least one legal placement anywhere on the board.
    pub fn is_move_available(&self, disc: Disc) -> Result<bool, OthelloError> {
        if !disc.is_color() {
            return Err(OthelloError::InvalidDisc(disc));
        }

        Ok(self.has_any_move(disc))
    }

    fn has_any_move(&self, disc: Disc) -> bool {
        (0..self.size)
            .any(|row| (0..self.size).any(|col| self.is_valid_move_unchecked(row, col, disc)))
    }

    /// Places `disc` at (`row`, `col`) and flips every opponent disc
    /// bracketed in any direction.
    ///
    /// An illegal placement is a documented no-op: the call returns
    /// `Ok(())` and the board and turn are left completely untouched.
    /// Callers wanting to distinguish the two cases check `is_valid_move`
    /// first. Only an unplayable `disc` is an error.
    ///
    /// After a legal move the turn advances to the other player
    /// automatically -- unless the move ended the game, in which case the
    /// turn is left where it was.
    pub fn place_disc_at(&mut self, row: usize, col: usize, disc: Disc) -> Result<(), OthelloError> {
        if !self.is_valid_move(row, col, disc)? {
            return Ok(());
        }

        let target = BoardPosition::new(row, col);

        self.set_disc(target, disc);

        // The eight rays out of the target are disjoint, so each can be
        // scanned and flipped independently.
        for direction in Directions::compass() {
            if let Some(bracket_end) = self.find_bracket_end(target, disc, direction) {
                BoardDirectionIter::new(target, direction, self.size)
                    .take_while(|position| *position != bracket_end)
                    .for_each(|position| self.set_disc(position, disc));
            }
        }

        if !self.is_game_over() {
            self.advance_turn();
        }

        Ok(())
    }

    /// True if every cell holds a disc.
    pub fn is_board_full(&self) -> bool {
        self.black_count + self.white_count == self.size * self.size
    }

    /// True if neither color has a legal move left, or the board is full.
    pub fn is_game_over(&self) -> bool {
        if !self.has_any_move(Disc::Black) && !self.has_any_move(Disc::White) {
            return true;
        }

        self.is_board_full()
    }

    /// The winner once the game is over, or `None` while it is still in
    /// progress.
    ///
    /// The winner is reported as the player holding the turn at the moment
    /// the game ended. Disc counts are not compared, and `Outcome::Tie` is
    /// never produced; callers wanting a majority-based result must count
    /// discs themselves.
    pub fn who_won(&self) -> Option<Outcome> {
        if !self.is_game_over() {
            return None;
        }

        Some(Outcome::Winner(self.turn))
    }

    /// Returns a human-friendly string for representing the state:
    /// an indexed grid with `B`, `W`, and `-` markers. Diagnostic only.
    pub fn human_friendly(&self) -> String {
        const BLACK_DISC: char = 'B';
        const WHITE_DISC: char = 'W';
        const EMPTY_SPACE: char = '-';

        let mut result = String::new();

        result.push('\n');
        result.push(' ');
        for col in 0..self.size {
            result.push(' ');
            result.push_str(&col.to_string());
        }
        result.push('\n');

        for row in 0..self.size {
            result.push_str(&row.to_string());

            for col in 0..self.size {
                let marker = match self.disc_at(BoardPosition::new(row, col)) {
                    Disc::Black => BLACK_DISC,
                    Disc::White => WHITE_DISC,
                    Disc::Empty => EMPTY_SPACE,
                };

                result.push(' ');
                result.push(marker);
            }

            result.push('\n');
        }

        result
    }
}

impl fmt::Display for OthelloState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.human_friendly())
    }
}
