use serde::{Deserialize, Serialize};

use crate::core::{Session, Vec2};

/// Read-only picture of a session, handed to renderers and exported as JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WarehouseSnapshot {
    pub size: i32,
    pub player: Vec2,
    pub move_count: u32,
    pub won: bool,
    pub tiles: Vec<TileSnapshot>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TileSnapshot {
    pub position: Vec2,
    pub has_obstacle: bool,
    pub has_pillar: bool,
    pub has_box: bool,
    pub has_box_destination: bool,
    pub is_box_on_destination: bool,
}

impl WarehouseSnapshot {
    pub fn from_session(session: &Session) -> Self {
        let warehouse = session.warehouse();
        let tiles = warehouse
            .tiles()
            .map(|tile| TileSnapshot {
                position: tile.position(),
                has_obstacle: tile.has_obstacle(),
                has_pillar: tile.has_pillar(),
                has_box: tile.has_box(),
                has_box_destination: tile.has_box_destination(),
                is_box_on_destination: tile.is_box_on_destination(),
            })
            .collect();

        WarehouseSnapshot {
            size: warehouse.size(),
            player: session.player(),
            move_count: session.move_count(),
            won: session.is_won(),
            tiles,
        }
    }
}

pub fn get_json_data(session: &Session) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&WarehouseSnapshot::from_session(session))
}
