//! This module implements the search loop shared by every grid query: a best-first A* over an
//! arena of nodes keyed by position. Parent links are indices into the same arena, and the arena
//! is dropped on every exit path.
//!
//! The open set uses lazy deletion: an improved node is pushed again instead of being
//! decreased in place, and entries for nodes that are already closed are discarded when popped.

use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{trace, warn};
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

const NO_PARENT: usize = usize::MAX;

struct OpenEntry<K> {
    estimated_cost: K,
    heuristic: K,
    seq: usize,
    index: usize,
}

impl<K: PartialEq> Eq for OpenEntry<K> {}

impl<K: PartialEq> PartialEq for OpenEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.heuristic.eq(&other.heuristic)
            && self.seq == other.seq
    }
}

impl<K: Ord> PartialOrd for OpenEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for OpenEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for the max-heap: smallest f first, then smallest h (the node closest to the
        // goal), then the earliest push.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| other.heuristic.cmp(&self.heuristic))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A discovered node. `g` only ever decreases while the node is open; `closed` is set exactly
/// once, when the node is popped with its final cost.
struct SearchNode<C> {
    parent: usize,
    g: C,
    h: C,
    closed: bool,
}

/// How a search ended. `expanded` counts the nodes whose successors were generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<N, C> {
    Found {
        path: Vec<N>,
        cost: C,
        expanded: usize,
    },
    Exhausted {
        expanded: usize,
    },
    Aborted {
        expanded: usize,
    },
}

fn reverse_path<N, C>(nodes: &FxIndexMap<N, SearchNode<C>>, goal: usize) -> Vec<N>
where
    N: Clone,
{
    let mut path = Vec::new();
    let mut i = goal;
    while let Some((pos, node)) = nodes.get_index(i) {
        path.push(pos.clone());
        i = node.parent;
    }
    path.reverse();
    path
}

/// Runs A* from `start` until `success` accepts a popped node, the open set empties, or
/// `expansion_limit` nodes have been expanded. `heuristic` must never overestimate the remaining
/// cost for the returned path to be optimal.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    expansion_limit: Option<usize>,
) -> Outcome<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut nodes: FxIndexMap<N, SearchNode<C>> = FxIndexMap::default();
    let start_h = heuristic(start);
    nodes.insert(
        start.clone(),
        SearchNode {
            parent: NO_PARENT,
            g: Zero::zero(),
            h: start_h,
            closed: false,
        },
    );
    let mut to_see = BinaryHeap::new();
    to_see.push(OpenEntry {
        estimated_cost: start_h,
        heuristic: start_h,
        seq: 0,
        index: 0,
    });
    let mut seq = 1;
    let mut expanded = 0;

    while let Some(OpenEntry { index, .. }) = to_see.pop() {
        let Some((node, entry)) = nodes.get_index_mut(index) else {
            continue;
        };
        // A cheaper copy of this node was already popped and closed.
        if entry.closed {
            continue;
        }
        entry.closed = true;
        let cost = entry.g;

        if success(node) {
            let path = reverse_path(&nodes, index);
            return Outcome::Found {
                path,
                cost,
                expanded,
            };
        }
        if matches!(expansion_limit, Some(limit) if expanded >= limit) {
            warn!(
                "Expansion limit of {} reached with {} nodes discovered",
                expanded,
                nodes.len()
            );
            return Outcome::Aborted { expanded };
        }
        expanded += 1;
        trace!("Expanding node {} (open entries: {})", index, to_see.len());
        let successors = successors(node);

        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h;
            let n;
            match nodes.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert(SearchNode {
                        parent: index,
                        g: new_cost,
                        h,
                        closed: false,
                    });
                }
                Occupied(mut e) => {
                    n = e.index();
                    let known = e.get_mut();
                    if known.closed || new_cost >= known.g {
                        continue;
                    }
                    known.parent = index;
                    known.g = new_cost;
                    h = known.h;
                }
            }

            // Any older entry for `n` stays in the heap and is skipped once `n` is closed.
            to_see.push(OpenEntry {
                estimated_cost: new_cost + h,
                heuristic: h,
                seq,
                index: n,
            });
            seq += 1;
        }
    }
    Outcome::Exhausted { expanded }
}
