use std::fmt::{Debug, Display, Formatter, Result};

use separator::Separatable;

use crate::data::Dir;
use crate::state::State;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<u64>,
    expanded_states: Vec<u64>,
    replaced: u64,
    discarded: u64,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    /// Nodes that entered the frontier, including the ones that replaced a worse entry.
    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum::<u64>()
    }

    pub fn total_expanded(&self) -> u64 {
        self.expanded_states.iter().sum::<u64>()
    }

    /// Frontier entries replaced by a node with a better path.
    pub fn total_replaced(&self) -> u64 {
        self.replaced
    }

    /// Children thrown away because their state was already explored or queued at least as well.
    pub fn total_discarded(&self) -> u64 {
        self.discarded
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_expanded(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.expanded_states, node)
    }

    pub(crate) fn add_replaced(&mut self) {
        self.replaced += 1;
    }

    pub(crate) fn add_discarded(&mut self) {
        self.discarded += 1;
    }

    /// Returns true when `node` is the first one at its depth.
    fn add(counts: &mut Vec<u64>, node: &SearchNode) -> bool {
        let mut ret = false;

        // while because expansion can skip depths when the heuristic is good
        while node.dist as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[node.dist as usize] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())?;
        writeln!(f, "total replaced: {}", self.total_replaced().separated_string())?;
        write!(f, "total discarded: {}", self.total_discarded().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Nodes created: {}", self.total_created().separated_string())?;
        writeln!(f, "Nodes expanded: {}", self.total_expanded().separated_string())?;
        writeln!(f, "Frontier replacements: {}", self.total_replaced().separated_string())?;
        writeln!(f, "Discarded duplicates: {}", self.total_discarded().separated_string())?;
        writeln!(f)?;

        writeln!(f, "{:<15}{:<15}{}", "Depth", "Created", "Expanded")?;
        // created_states is never shorter - a node is created before it's expanded
        for i in 0..self.created_states.len() {
            let expanded = self.expanded_states.get(i).cloned().unwrap_or(0);
            writeln!(
                f,
                "{:<15}{:<15}{}",
                format!("{}:", i),
                self.created_states[i].separated_string(),
                expanded.separated_string()
            )?;
        }
        Ok(())
    }
}

/// Index of a node in the search's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// Nodes are immutable once created, a better path to the same state gets a new node.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    pub(crate) state: State,
    pub(crate) prev: Option<NodeId>,
    /// Move which led here from `prev`.
    pub(crate) dir: Option<Dir>,
    pub(crate) dist: u32,
    pub(crate) h: u32,
}

impl SearchNode {
    pub(crate) fn new(state: State, prev: Option<NodeId>, dir: Option<Dir>, dist: u32, h: u32) -> Self {
        SearchNode { state, prev, dir, dist, h }
    }

    pub(crate) fn priority(&self) -> u32 {
        self.dist + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(dist: u32) -> SearchNode {
        SearchNode::new(State::goal(), None, None, dist, 0)
    }

    #[test]
    fn counting_by_depth() {
        let mut stats = Stats::new();
        assert!(stats.add_created(&node(0)));
        assert!(stats.add_created(&node(2)));
        assert!(!stats.add_created(&node(2)));
        assert!(stats.add_expanded(&node(0)));
        stats.add_replaced();
        stats.add_discarded();
        stats.add_discarded();

        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_expanded(), 1);
        assert_eq!(stats.total_replaced(), 1);
        assert_eq!(stats.total_discarded(), 2);
        assert_eq!(stats.created_states, vec![1, 0, 2]);
    }

    #[test]
    fn formatting_stats() {
        let mut stats = Stats::new();
        for _ in 0..1500 {
            stats.add_created(&node(1));
        }
        stats.add_created(&node(0));
        stats.add_expanded(&node(0));

        let expected = "\
Nodes created: 1,501
Nodes expanded: 1
Frontier replacements: 0
Discarded duplicates: 0

Depth          Created        Expanded
0:             1              1
1:             1,500          0
";
        assert_eq!(stats.to_string(), expected);
    }

    #[test]
    fn priority_is_dist_plus_h() {
        let n = SearchNode::new(State::goal(), Some(NodeId(3)), Some(Dir::Up), 5, 7);
        assert_eq!(n.priority(), 12);
    }
}
