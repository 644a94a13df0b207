mod config;
mod error;
mod generate;

pub use config::{
    ConfigError, DEFAULT_BOX_COUNT, DEFAULT_GRID_SIZE, DEFAULT_PILLAR_COUNT, GenerationConfig, MIN_GRID_SIZE,
};
pub use error::{GenerationError, PlacementStage};
pub use generate::{GeneratedWarehouse, generate};
