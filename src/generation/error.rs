use std::fmt;

use thiserror::Error;

use crate::generation::config::MIN_GRID_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStage {
    Pillars,
    Boxes,
    Destinations,
    Player,
}

impl fmt::Display for PlacementStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlacementStage::Pillars => "pillars",
            PlacementStage::Boxes => "boxes",
            PlacementStage::Destinations => "destinations",
            PlacementStage::Player => "player",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("grid size {size} is too small, need at least {min}", min = MIN_GRID_SIZE)]
    GridTooSmall { size: i32 },
    #[error("{destinations} destinations requested for {boxes} boxes, the counts must match")]
    DestinationMismatch { boxes: usize, destinations: usize },
    #[error("max_attempts_per_placement must be at least 1")]
    NoPlacementAttempts,
    #[error("ungenerable configuration: placed {placed} of {requested} {stage} before giving up after {attempts} attempts")]
    Infeasible {
        stage: PlacementStage,
        placed: usize,
        requested: usize,
        attempts: u32,
    },
    #[error("no solvable layout found in {attempts} attempts")]
    NoSolvableLayout { attempts: u32 },
}
