use std::collections::{HashSet, VecDeque};

use crate::core::Vec2;

/// Every box configuration reached so far, each with the canonical player tile.
#[derive(Clone, Debug)]
pub struct StateGraph {
    // map from game state to node id
    pub nodes: bimap::BiMap<UniqueNode, usize>,
    pub edges: HashSet<Edge>,
    pub unvisited: VecDeque<usize>,
    /// Pushes from the start node, indexed by node id.
    pub depths: Vec<u32>,
    pub next_id: usize,
}

/// Boxes sorted so equal configurations hash equally; the player is folded
/// to the smallest tile it can walk to without pushing.
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub struct UniqueNode {
    pub boxes: Vec<Vec2>,
    pub minimum_reachable_player_position: Vec2,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

pub enum PopulateResult {
    AllVisited,
    Populated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solvability {
    Solvable { pushes: u32 },
    Unsolvable,
    /// The node budget ran out first.
    Undecided { explored: usize },
}
