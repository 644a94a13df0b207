mod graph;
mod models;
mod populate;
mod solve;

pub use graph::{GraphInfo, get_graph_info};
pub use models::{Edge, PopulateResult, Solvability, StateGraph, UniqueNode};
pub use populate::{get_all_adjacent_nodes, populate_step, reachable_positions};
pub use solve::{check_solvable, solve_with_graph};
