use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FromIterator;

use crate::data::{Dir, DIRECTIONS};
use crate::state::State;

/// Moves of the blank which stay on the board, in the order of `DIRECTIONS`.
pub fn legal_moves(state: &State) -> impl Iterator<Item = Dir> {
    let blank = state.locate_blank();
    let dirs: &'static [Dir; 4] = &DIRECTIONS;
    dirs.iter()
        .cloned()
        .filter(move |&dir| blank.neighbor(dir).is_some())
}

pub fn is_legal(state: &State, dir: Dir) -> bool {
    state.locate_blank().neighbor(dir).is_some()
}

/// Swaps the blank with its neighbor in `dir`.
///
/// Only call with moves from `legal_moves`.
pub fn apply(state: &State, dir: Dir) -> State {
    let blank = state.locate_blank();
    let target = blank
        .neighbor(dir)
        .unwrap_or_else(|| panic!("illegal move {} with blank at {:?}", dir, blank));

    let mut cells = *state.cells();
    cells.swap(blank.index(), target.index());
    State::from_cells_unchecked(cells)
}

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Dir>);

impl Moves {
    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn add(&mut self, dir: Dir) {
        self.0.push(dir);
    }

    pub(crate) fn reverse(&mut self) {
        self.0.reverse();
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Dir> {
        self.0.iter()
    }
}

impl FromIterator<Dir> for Moves {
    fn from_iter<I: IntoIterator<Item = Dir>>(iter: I) -> Self {
        Moves(iter.into_iter().collect())
    }
}

impl IntoIterator for Moves {
    type Item = Dir;
    type IntoIter = ::std::vec::IntoIter<Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Dir;
    type IntoIter = ::std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for dir in self {
            write!(f, "{}", dir)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
