mod game_primitives;

pub use game_primitives::{Outcome, Player};
