use tracing::debug;

use crate::core::{Vec2, Warehouse};
use crate::state_graph::models::{PopulateResult, Solvability, StateGraph, UniqueNode};
use crate::state_graph::populate::populate_step;

/// Breadth-first search over box configurations of `warehouse`, starting
/// with the player at `player`. Stops after `node_budget` expanded nodes.
pub fn solve_with_graph(warehouse: &Warehouse, player: Vec2, node_budget: usize) -> (Solvability, StateGraph) {
    let mut graph = StateGraph::new();
    let start = UniqueNode::new(warehouse, warehouse.box_positions(), player);
    let start_won = start.is_won(warehouse);
    graph.upsert_state(start, 0);
    if start_won {
        return (Solvability::Solvable { pushes: 0 }, graph);
    }

    loop {
        if graph.visited_count() >= node_budget {
            let explored = graph.visited_count();
            debug!(explored, "solver budget exhausted");
            return (Solvability::Undecided { explored }, graph);
        }

        let known_before = graph.next_id;
        let PopulateResult::Populated = populate_step(&mut graph, warehouse) else {
            return (Solvability::Unsolvable, graph);
        };

        // breadth-first, so the first winning node found has the fewest pushes
        for id in known_before..graph.next_id {
            let won = graph.get_state(id).is_some_and(|node| node.is_won(warehouse));
            if won {
                return (Solvability::Solvable { pushes: graph.depth(id) }, graph);
            }
        }
    }
}

pub fn check_solvable(warehouse: &Warehouse, player: Vec2, node_budget: usize) -> Solvability {
    solve_with_graph(warehouse, player, node_budget).0
}
