pub(crate) mod a_star;
mod frontier;

use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::debug;

use crate::config::Heuristic;
use crate::moves::{self, Moves};
use crate::state::State;
use crate::Solve;

use self::a_star::{NodeId, SearchNode};
use self::frontier::Frontier;

pub use self::a_star::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    /// Wrong permutation parity, the goal can't be reached.
    Unsolvable,
    /// Every reachable state was expanded without finding the goal.
    NoSolution,
    /// The caller stopped the search before it finished.
    Interrupted,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::Unsolvable => write!(f, "Unsolvable - the goal is not reachable"),
            SolverErr::NoSolution => write!(f, "No solution"),
            SolverErr::Interrupted => write!(f, "Search interrupted"),
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    pub moves: Moves,
    pub stats: Stats,
    pub(crate) heuristic: Heuristic,
}

impl SolverOk {
    fn new(moves: Moves, stats: Stats, heuristic: Heuristic) -> Self {
        Self {
            moves,
            stats,
            heuristic,
        }
    }

    pub fn path_length(&self) -> usize {
        self.moves.move_cnt()
    }

    pub fn nodes_expanded(&self) -> u64 {
        self.stats.total_expanded()
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.heuristic, self.path_length())?;
        write!(f, "{}", self.stats)
    }
}

impl Solve for State {
    fn solve(&self, heuristic: Heuristic, max_expansions: Option<u64>) -> Result<SolverOk, SolverErr> {
        if !self.is_solvable() {
            return Err(SolverErr::Unsolvable);
        }
        Solver::new(heuristic).search_while(self, |stats| match max_expansions {
            Some(max) => stats.total_expanded() < max,
            None => true,
        })
    }
}

/// A* over puzzle states towards the standard goal.
///
/// Holds no search state, every search allocates its own.
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    goal: State,
    heuristic: Heuristic,
}

impl Solver {
    pub fn new(heuristic: Heuristic) -> Self {
        Solver {
            goal: State::goal(),
            heuristic,
        }
    }

    pub fn goal(&self) -> &State {
        &self.goal
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    pub fn search(&self, initial_state: &State) -> Result<SolverOk, SolverErr> {
        self.search_while(initial_state, |_| true)
    }

    /// Like `search` but asks `should_continue` before every expansion,
    /// returning `SolverErr::Interrupted` once it says no.
    pub fn search_while<F>(&self, initial_state: &State, mut should_continue: F) -> Result<SolverOk, SolverErr>
    where
        F: FnMut(&Stats) -> bool,
    {
        debug!("Search called");

        let mut search = self.start(initial_state);
        while !search.phase().is_finished() {
            if !should_continue(search.stats()) {
                debug!("Search interrupted after {} expansions", search.stats().total_expanded());
                break;
            }
            search.step();
        }
        search.finish()
    }

    pub fn start(&self, initial_state: &State) -> Search<'_> {
        Search::new(self, initial_state)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Running,
    Solved,
    Exhausted,
}

impl Phase {
    pub fn is_finished(self) -> bool {
        self == Phase::Solved || self == Phase::Exhausted
    }
}

/// One run of A*, advanced one expansion at a time by `step`.
#[derive(Debug)]
pub struct Search<'s> {
    solver: &'s Solver,
    nodes: Vec<SearchNode>,
    frontier: Frontier,
    explored: FnvHashSet<State>,
    stats: Stats,
    phase: Phase,
    solution: Option<NodeId>,
}

impl<'s> Search<'s> {
    fn new(solver: &'s Solver, initial_state: &State) -> Self {
        let mut search = Search {
            solver,
            nodes: Vec::new(),
            frontier: Frontier::new(),
            explored: FnvHashSet::default(),
            stats: Stats::new(),
            phase: Phase::Ready,
            solution: None,
        };
        let h = solver.heuristic.evaluate(initial_state);
        search.insert(SearchNode::new(*initial_state, None, None, 0, h));
        search
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn explored_len(&self) -> usize {
        self.explored.len()
    }

    /// Expands one node. Does nothing once the search is finished.
    pub fn step(&mut self) -> Phase {
        match self.phase {
            Phase::Solved | Phase::Exhausted => return self.phase,
            Phase::Ready => self.phase = Phase::Running,
            Phase::Running => {}
        }

        let cur_id = match self.frontier.pop() {
            Some(id) => id,
            None => {
                debug_assert!(self.frontier.is_empty());
                debug!("Frontier empty, no solution");
                self.phase = Phase::Exhausted;
                return self.phase;
            }
        };
        let cur_node = self.nodes[cur_id.0];
        debug_assert!(!self.frontier.contains(&cur_node.state));

        if self.stats.add_expanded(&cur_node) {
            debug!("Expanded new depth: {}", cur_node.dist);
            debug!("{:?}", self.stats);
        }

        if cur_node.state == self.solver.goal {
            debug!("Solved, backtracking path");
            self.solution = Some(cur_id);
            self.phase = Phase::Solved;
            return self.phase;
        }

        self.explored.insert(cur_node.state);

        for dir in moves::legal_moves(&cur_node.state) {
            let state = moves::apply(&cur_node.state, dir);
            if self.explored.contains(&state) {
                self.stats.add_discarded();
                continue;
            }

            let h = self.solver.heuristic.evaluate(&state);
            let child = SearchNode::new(state, Some(cur_id), Some(dir), cur_node.dist + 1, h);
            match self.frontier.priority_of(&state) {
                None => self.insert(child),
                Some(queued) if child.priority() < queued => {
                    self.frontier.remove(&state);
                    self.stats.add_replaced();
                    self.insert(child);
                }
                // already queued with an equal or better path
                Some(_) => self.stats.add_discarded(),
            }
        }

        self.phase
    }

    /// Consumes the search, `Interrupted` if it hasn't finished yet.
    pub fn finish(self) -> Result<SolverOk, SolverErr> {
        match (self.phase, self.solution) {
            (Phase::Solved, Some(id)) => {
                let moves = backtrack_path(&self.nodes, id);
                debug_assert_eq!(moves.move_cnt(), self.nodes[id.0].dist as usize);
                Ok(SolverOk::new(moves, self.stats, self.solver.heuristic))
            }
            (Phase::Exhausted, _) => Err(SolverErr::NoSolution),
            _ => Err(SolverErr::Interrupted),
        }
    }

    fn insert(&mut self, node: SearchNode) {
        self.stats.add_created(&node);
        let id = NodeId(self.nodes.len());
        self.frontier.push(node.state, node.priority(), id);
        self.nodes.push(node);
    }
}

fn backtrack_path(nodes: &[SearchNode], final_node: NodeId) -> Moves {
    let mut ret = Moves::default();
    let mut node = &nodes[final_node.0];
    while let (Some(prev), Some(dir)) = (node.prev, node.dir) {
        ret.add(dir);
        node = &nodes[prev.0];
    }
    ret.reverse();
    ret
}
