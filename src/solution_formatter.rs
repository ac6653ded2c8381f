use std::fmt::{self, Debug, Display, Formatter};

use crate::moves::{self, Moves};
use crate::state::State;

/// Prints every board along a solution, starting with the initial one.
#[derive(Clone, Copy)]
pub struct SolutionFormatter<'a> {
    initial_state: &'a State,
    moves: &'a Moves,
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(initial_state: &'a State, moves: &'a Moves) -> Self {
        Self {
            initial_state,
            moves,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.initial_state)?;
        let mut last_state = *self.initial_state;
        for &dir in self.moves {
            if !moves::is_legal(&last_state, dir) {
                // moves from a different puzzle
                return Err(fmt::Error);
            }
            last_state = moves::apply(&last_state, dir);
            writeln!(f)?;
            write!(f, "{}", last_state)?;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
