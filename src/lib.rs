// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod config;
pub mod data;
pub mod moves;
pub mod parser;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod fs;
mod heuristic;

use std::error::Error;

use crate::config::Heuristic;
use crate::solver::{SolverErr, SolverOk};
use crate::state::State;

pub use crate::heuristic::{manhattan, misplaced_tiles};

pub trait LoadState {
    fn load_state(&self) -> Result<State, Box<dyn Error>>;
}

pub trait Solve {
    /// Rejects unsolvable states up front, then runs A* expanding at most `max_expansions` nodes.
    fn solve(&self, heuristic: Heuristic, max_expansions: Option<u64>) -> Result<SolverOk, SolverErr>;
}
