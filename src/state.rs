use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;

use crate::data::{Pos, BLANK, CELLS, SIZE};
use crate::moves::{self, Moves};
use crate::parser::{self, ParserErr};

/// One arrangement of the 16 tiles, stored row by row.
///
/// Always holds every value in `0..16` exactly once, `0` being the blank.
/// States are never modified - a move creates a new one.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    cells: [u8; CELLS],
}

impl State {
    /// The solved puzzle: `1..=15` row by row with the blank in the bottom right corner.
    pub fn goal() -> State {
        let mut cells = [BLANK; CELLS];
        for (i, cell) in cells.iter_mut().enumerate().take(CELLS - 1) {
            *cell = i as u8 + 1;
        }
        State { cells }
    }

    /// Builds a state from 16 values given row by row.
    pub fn parse(values: &[i32]) -> Result<State, ParserErr> {
        parser::validate(values).map(|cells| State { cells })
    }

    pub(crate) fn from_cells_unchecked(cells: [u8; CELLS]) -> State {
        debug_assert!(parser::validate(&cells.iter().map(|&c| i32::from(c)).collect::<Vec<_>>()).is_ok());
        State { cells }
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    pub fn locate_blank(&self) -> Pos {
        // validated on creation so there is always exactly one
        let index = self.cells.iter().position(|&c| c == BLANK).unwrap_or(CELLS - 1);
        Pos::from_index(index)
    }

    /// Whether the goal can be reached at all.
    ///
    /// Horizontal moves don't change the order of tiles, vertical moves change
    /// the number of inversions by an odd number and the blank's row by one,
    /// so the parity of `inversions + blank row` never changes.
    /// It's odd for the goal (0 inversions, blank in row 3).
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self.cells.iter().cloned().filter(|&c| c != BLANK).collect();
        let mut inversions = 0;
        for i in 0..tiles.len() {
            for j in i + 1..tiles.len() {
                if tiles[i] > tiles[j] {
                    inversions += 1;
                }
            }
        }
        (inversions + usize::from(self.locate_blank().r)) % 2 == 1
    }

    /// Replays `moves` from this state, `None` if any of them would leave the board.
    pub fn apply_moves(&self, moves: &Moves) -> Option<State> {
        let mut state = *self;
        for &dir in moves {
            if !moves::is_legal(&state, dir) {
                return None;
            }
            state = moves::apply(&state, dir);
        }
        Some(state)
    }
}

impl Index<Pos> for State {
    type Output = u8;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(SIZE) {
            let mut first = true;
            for &cell in row {
                if !first {
                    write!(f, " ")?;
                }
                first = false;
                if cell == BLANK {
                    write!(f, "{:>2}", ".")?;
                } else {
                    write!(f, "{:>2}", cell)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.cells)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const ONE_MOVE: [i32; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 15];

    #[test]
    fn goal_layout() {
        let goal = State::goal();
        for r in 0..4 {
            for c in 0..4 {
                let expected = if (r, c) == (3, 3) { 0 } else { 4 * r + c + 1 };
                assert_eq!(goal[Pos::new(r, c)], expected);
            }
        }
        assert_eq!(goal.locate_blank(), Pos::new(3, 3));
    }

    #[test]
    fn locating_blank() {
        let state = State::parse(&ONE_MOVE).unwrap();
        assert_eq!(state.locate_blank(), Pos::new(3, 2));

        let mut values = ONE_MOVE;
        values.swap(0, 14);
        let state = State::parse(&values).unwrap();
        assert_eq!(state.locate_blank(), Pos::new(0, 0));
    }

    #[test]
    fn equality_and_hashing() {
        let a = State::parse(&ONE_MOVE).unwrap();
        let b = State::parse(&ONE_MOVE).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, State::goal());

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&State::goal()));
    }

    #[test]
    fn solvability() {
        assert!(State::goal().is_solvable());
        assert!(State::parse(&ONE_MOVE).unwrap().is_solvable());

        // the famous 14-15 swap
        let mut values = [0; 16];
        for (i, v) in values.iter_mut().enumerate().take(15) {
            *v = i as i32 + 1;
        }
        values.swap(13, 14);
        assert!(!State::parse(&values).unwrap().is_solvable());
    }

    #[test]
    fn replaying_moves() {
        let state = State::parse(&ONE_MOVE).unwrap();
        let moves: Moves = vec![crate::data::Dir::Right].into_iter().collect();
        assert_eq!(state.apply_moves(&moves), Some(State::goal()));

        let off_board: Moves = vec![crate::data::Dir::Down].into_iter().collect();
        assert_eq!(state.apply_moves(&off_board), None);
        assert_eq!(state.apply_moves(&Moves::default()), Some(state));
    }

    #[test]
    fn formatting_state() {
        let expected = r"
 1  2  3  4
 5  6  7  8
 9 10 11 12
13 14  . 15
"
        .trim_start_matches('\n');
        assert_eq!(State::parse(&ONE_MOVE).unwrap().to_string(), expected);
    }
}
