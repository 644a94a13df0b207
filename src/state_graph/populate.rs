use std::collections::{HashSet, VecDeque};

use crate::core::{Direction, Vec2, Warehouse, is_box_trapped};
use crate::state_graph::Edge;
use crate::state_graph::models::{PopulateResult, StateGraph, UniqueNode};

impl UniqueNode {
    pub fn new(warehouse: &Warehouse, mut boxes: Vec<Vec2>, player: Vec2) -> Self {
        boxes.sort_unstable();
        let reachable = reachable_positions(warehouse, &boxes, player);
        let minimum = reachable.iter().min().copied().unwrap_or(player);
        UniqueNode {
            boxes,
            minimum_reachable_player_position: minimum,
        }
    }

    pub fn is_won(&self, warehouse: &Warehouse) -> bool {
        self.boxes.iter().all(|&b| warehouse.tile(b).has_box_destination())
    }
}

/// Every tile the player can walk to without pushing. `boxes` must be sorted.
pub fn reachable_positions(warehouse: &Warehouse, boxes: &[Vec2], player: Vec2) -> HashSet<Vec2> {
    let mut seen = HashSet::from([player]);
    let mut queue = VecDeque::from([player]);
    while let Some(pos) = queue.pop_front() {
        for dir in Direction::ALL {
            let next = pos + dir.delta();
            if warehouse.is_blocked(next) || boxes.binary_search(&next).is_ok() {
                continue;
            }
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Every node one push away. Pushes that strand a box in a dead corner are skipped.
pub fn get_all_adjacent_nodes(node: &UniqueNode, warehouse: &Warehouse) -> Vec<UniqueNode> {
    let reachable = reachable_positions(warehouse, &node.boxes, node.minimum_reachable_player_position);
    let mut result = Vec::new();

    for (box_index, &game_box) in node.boxes.iter().enumerate() {
        for dir in Direction::ALL {
            let delta = dir.delta();
            let push_from = game_box + delta * -1;
            let landing = game_box + delta;
            if !reachable.contains(&push_from) {
                continue;
            }
            if warehouse.is_blocked(landing) || node.boxes.binary_search(&landing).is_ok() {
                continue;
            }
            if is_box_trapped(warehouse, landing) {
                continue;
            }

            let mut boxes = node.boxes.clone();
            boxes[box_index] = landing;
            result.push(UniqueNode::new(warehouse, boxes, game_box));
        }
    }
    result
}

pub fn populate_node(graph: &mut StateGraph, warehouse: &Warehouse, from_id: usize) {
    let Some(from_state) = graph.get_state(from_id) else {
        return;
    };
    let from_state = from_state.clone();
    let depth = graph.depth(from_id) + 1;

    for next in get_all_adjacent_nodes(&from_state, warehouse) {
        let (to_id, _) = graph.upsert_state(next, depth);
        graph.add_edge(Edge { from: from_id, to: to_id });
    }
}

pub fn populate_step(graph: &mut StateGraph, warehouse: &Warehouse) -> PopulateResult {
    let Some(node_id) = graph.take_unvisited_node() else {
        return PopulateResult::AllVisited;
    };
    populate_node(graph, warehouse, node_id);
    PopulateResult::Populated
}
