mod bounded_grid;
mod bounds;
mod heuristics;
mod model_helpers;
mod models;
mod session;
mod update;
mod warehouse;
mod win;

pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use heuristics::{WinnableState, is_box_trapped, is_winnable};
pub use models::{BlockReason, Direction, GameChangeType, GameUpdate, Tile, UserAction, Vec2};
pub use session::{Session, SessionError};
pub use update::step;
pub use warehouse::{InvariantViolation, PlacementError, Warehouse};
pub use win::{WinCheck, WinLatch, count_boxes_on_destinations, is_won};
