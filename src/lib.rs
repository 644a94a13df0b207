//! Box-pushing warehouse puzzle: seeded warehouse generation, move
//! resolution with box pushing, and a latched win check.

pub mod console_interface;
pub mod core;
pub mod export;
pub mod generation;
pub mod models;
pub mod state_graph;

#[cfg(test)]
mod test;
