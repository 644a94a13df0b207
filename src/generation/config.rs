use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generation::GenerationError;

pub const DEFAULT_GRID_SIZE: i32 = 10;
pub const DEFAULT_PILLAR_COUNT: usize = 6;
pub const DEFAULT_BOX_COUNT: usize = 6;
/// Smallest grid whose box spawn square `[2, N-3]` is non-empty.
pub const MIN_GRID_SIZE: i32 = 5;

/// Parameters for one warehouse, supplied once at startup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub grid_size: i32,
    pub pillar_count: usize,
    pub box_count: usize,
    pub destination_count: usize,
    /// Keep pillars off the outer interior ring and away from each other's 8 neighbours.
    pub spaced_pillars: bool,
    /// Refuse box tiles whose 8 neighbours are all boxes or pillars.
    pub spread_boxes: bool,
    /// Draws allowed for each single item before the layout is declared infeasible.
    pub max_attempts_per_placement: u32,
    pub require_solvable: bool,
    pub solver_node_budget: usize,
    /// Fresh layouts tried when sampling gets stuck or a layout fails the solvability check.
    pub max_layout_attempts: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            grid_size: DEFAULT_GRID_SIZE,
            pillar_count: DEFAULT_PILLAR_COUNT,
            box_count: DEFAULT_BOX_COUNT,
            destination_count: DEFAULT_BOX_COUNT,
            spaced_pillars: true,
            spread_boxes: true,
            max_attempts_per_placement: 10_000,
            require_solvable: false,
            solver_node_budget: 200_000,
            max_layout_attempts: 50,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GenerationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(GenerationError::GridTooSmall { size: self.grid_size });
        }
        if self.destination_count != self.box_count {
            return Err(GenerationError::DestinationMismatch {
                boxes: self.box_count,
                destinations: self.destination_count,
            });
        }
        if self.max_attempts_per_placement == 0 {
            return Err(GenerationError::NoPlacementAttempts);
        }
        Ok(())
    }
}
