use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fnv::FnvHashMap;

use crate::solver::a_star::NodeId;
use crate::state::State;

/// Open nodes ordered by priority, then by insertion order.
///
/// Holds at most one live entry per state. Removing or replacing an entry
/// only drops it from `live`, the stale heap item is skipped when it surfaces.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Queued>,
    live: FnvHashMap<State, Entry>,
    next_seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    priority: u32,
    seq: u64,
}

#[derive(Debug, Clone, Copy)]
struct Queued {
    state: State,
    entry: Entry,
    node: NodeId,
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        other
            .entry
            .priority
            .cmp(&self.entry.priority)
            .then_with(|| other.entry.seq.cmp(&self.entry.seq))
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.entry == other.entry
    }
}

impl Eq for Queued {}

impl Frontier {
    pub(crate) fn new() -> Self {
        Frontier::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.live.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// The state must not be in the frontier already.
    pub(crate) fn push(&mut self, state: State, priority: u32, node: NodeId) {
        let entry = Entry {
            priority,
            seq: self.next_seq,
        };
        self.next_seq += 1;

        let prev = self.live.insert(state, entry);
        debug_assert!(prev.is_none());
        self.heap.push(Queued { state, entry, node });
    }

    /// Removes the entry with the lowest priority, the oldest one on ties.
    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        while let Some(queued) = self.heap.pop() {
            if self.live.get(&queued.state) == Some(&queued.entry) {
                self.live.remove(&queued.state);
                return Some(queued.node);
            }
        }
        None
    }

    pub(crate) fn priority_of(&self, state: &State) -> Option<u32> {
        self.live.get(state).map(|entry| entry.priority)
    }

    pub(crate) fn contains(&self, state: &State) -> bool {
        self.live.contains_key(state)
    }

    pub(crate) fn remove(&mut self, state: &State) -> bool {
        self.live.remove(state).is_some()
    }
}
