use std::collections::{HashSet, VecDeque};

use crate::state_graph::models::{Edge, Solvability, StateGraph, UniqueNode};

impl StateGraph {
    pub fn new() -> Self {
        StateGraph {
            nodes: bimap::BiMap::new(),
            edges: HashSet::new(),
            unvisited: VecDeque::new(),
            depths: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the node's id and whether it was new.
    pub fn upsert_state(&mut self, state: UniqueNode, depth: u32) -> (usize, bool) {
        if let Some(&id) = self.nodes.get_by_left(&state) {
            return (id, false);
        }
        let id = self.next_id;
        self.next_id += 1;

        // ids are never reused and the state was just checked to be absent
        let _ = self.nodes.insert_no_overwrite(state, id);
        self.depths.push(depth);
        self.unvisited.push_back(id);
        (id, true)
    }

    pub fn get_state(&self, id: usize) -> Option<&UniqueNode> {
        self.nodes.get_by_right(&id)
    }

    pub fn depth(&self, id: usize) -> u32 {
        self.depths[id]
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.insert(edge);
    }

    /// Oldest unvisited node first, so nodes come out in push-count order.
    pub fn take_unvisited_node(&mut self) -> Option<usize> {
        self.unvisited.pop_front()
    }

    pub fn visited_count(&self) -> usize {
        self.nodes.len() - self.unvisited.len()
    }
}

impl Default for StateGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of a finished or interrupted search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphInfo {
    pub nodes: usize,
    pub edges: usize,
    pub visited: usize,
    /// Pushes needed to reach the farthest layout found.
    pub max_depth: u32,
    pub solvability: Solvability,
}

impl GraphInfo {
    pub fn new(graph: &StateGraph, solvability: Solvability) -> Self {
        GraphInfo {
            nodes: graph.nodes.len(),
            edges: graph.edges.len(),
            visited: graph.visited_count(),
            max_depth: graph.depths.iter().copied().max().unwrap_or(0),
            solvability,
        }
    }

    pub fn to_human_string(&self) -> String {
        let outcome = match self.solvability {
            Solvability::Solvable { pushes } => format!("solvable in {} pushes", pushes),
            Solvability::Unsolvable => "unsolvable".to_string(),
            Solvability::Undecided { explored } => format!("undecided after expanding {} layouts", explored),
        };
        format!(
            "{}: {} layouts, {} pushes between them, {} expanded, {} waiting, deepest layout {} pushes from the start",
            outcome,
            self.nodes,
            self.edges,
            self.visited,
            self.nodes - self.visited,
            self.max_depth
        )
    }
}

pub fn get_graph_info(graph: &StateGraph, solvability: Solvability) -> String {
    GraphInfo::new(graph, solvability).to_human_string()
}
