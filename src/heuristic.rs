use crate::config::Heuristic;
use crate::data::{Pos, BLANK, CELLS};
use crate::state::State;

impl Heuristic {
    /// Lower bound on the number of moves to the goal - less is better.
    pub fn evaluate(self, state: &State) -> u32 {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(state),
            Heuristic::Manhattan => manhattan(state),
        }
    }
}

/// Where `tile` sits in the goal state.
///
/// Tiles 4, 8 and 12 belong to the last column, the blank to the bottom right corner.
fn goal_pos(tile: u8) -> Pos {
    if tile == BLANK {
        Pos::from_index(CELLS - 1)
    } else {
        Pos::from_index(usize::from(tile) - 1)
    }
}

pub fn misplaced_tiles(state: &State) -> u32 {
    state
        .cells()
        .iter()
        .enumerate()
        .filter(|&(i, &tile)| tile != BLANK && goal_pos(tile).index() != i)
        .count() as u32
}

/// Sum of the distances of every tile from its goal position.
///
/// The blank is skipped - counting it would overestimate
/// (e.g. a single move from the goal would score 2).
pub fn manhattan(state: &State) -> u32 {
    state
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != BLANK)
        .map(|(i, &tile)| Pos::from_index(i).dist(goal_pos(tile)))
        .sum()
}
