use crate::core::{BlockReason, GameChangeType, GameUpdate, UserAction, Vec2, Warehouse};

/// Resolves one player action in place. A blocked action leaves both the
/// warehouse and the player untouched.
pub fn step(warehouse: &mut Warehouse, player: &mut Vec2, action: UserAction) -> GameUpdate {
    let dir = match action {
        UserAction::Move(d) => d,
    };
    let delta = dir.delta();

    // the perimeter wall keeps one step ahead of an interior player on the grid
    let next_pos = *player + delta;
    let next = warehouse.tile(next_pos);
    if next.has_obstacle() {
        return GameUpdate::Blocked(BlockReason::Obstacle);
    }
    if next.has_pillar() {
        return GameUpdate::Blocked(BlockReason::Pillar);
    }

    let pushing = next.has_box();
    if pushing {
        let after_pos = next_pos + delta;
        let Some(after) = warehouse.get(after_pos) else {
            return GameUpdate::Blocked(BlockReason::BoxBlocked);
        };
        if after.is_occupied() {
            return GameUpdate::Blocked(BlockReason::BoxBlocked);
        }
        warehouse.move_box(next_pos, after_pos);
    }

    *player = next_pos;

    GameUpdate::Moved(if pushing {
        GameChangeType::PlayerAndBoxMove
    } else {
        GameChangeType::PlayerMove
    })
}

