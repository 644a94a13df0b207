use crate::core::{Vec2, Warehouse};

#[derive(Eq, PartialEq, Debug)]
pub enum WinnableState {
    WinMaybePossible,
    WinImpossible,
}

const DIRECTIONS_AROUND: [Vec2; 4] = [
    Vec2 { x: 1, y: 0 },
    Vec2 { x: 0, y: 1 },
    Vec2 { x: -1, y: 0 },
    Vec2 { x: 0, y: -1 },
];

/// Cheap dead-position check over a set of box positions; only walls and
/// pillars count as blockers, so a `WinMaybePossible` answer is no promise.
pub fn is_winnable(warehouse: &Warehouse, boxes: &[Vec2]) -> WinnableState {
    let total_trapped_boxes = boxes.iter().filter(|&&b| is_box_trapped(warehouse, b)).count();
    let total_free_boxes = boxes.len() - total_trapped_boxes;

    if total_free_boxes >= warehouse.destination_count() {
        WinnableState::WinMaybePossible
    } else {
        WinnableState::WinImpossible
    }
}

/// a box is trapped if the player can never move it, and it is not on a destination
pub fn is_box_trapped(warehouse: &Warehouse, game_box: Vec2) -> bool {
    if warehouse.tile(game_box).has_box_destination() {
        return false;
    }

    // if any 2 consecutive directions are blocked, then we are in a corner, and we are trapped
    let blocked_directions = DIRECTIONS_AROUND.map(|dir| warehouse.is_blocked(game_box + dir));

    (0..4).any(|i| blocked_directions[i] && blocked_directions[(i + 1) % 4])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn box_in_wall_corner_is_trapped() {
        let warehouse = Warehouse::new(6);
        assert!(is_box_trapped(&warehouse, Vec2::new(1, 1)));
        assert!(is_box_trapped(&warehouse, Vec2::new(4, 4)));
        assert!(!is_box_trapped(&warehouse, Vec2::new(1, 2)));
        assert!(!is_box_trapped(&warehouse, Vec2::new(2, 2)));
    }

    #[test]
    fn box_against_pillar_and_wall_is_trapped() {
        let mut warehouse = Warehouse::new(6);
        warehouse.place_pillar(Vec2::new(3, 1)).unwrap();
        assert!(is_box_trapped(&warehouse, Vec2::new(2, 1)));
        assert!(!is_box_trapped(&warehouse, Vec2::new(3, 3)));
    }

    #[test]
    fn box_between_pillar_and_wall_is_not_trapped() {
        // blocked above and below, still pushable sideways
        let mut warehouse = Warehouse::new(6);
        warehouse.place_pillar(Vec2::new(2, 2)).unwrap();
        assert!(!is_box_trapped(&warehouse, Vec2::new(2, 1)));
    }

    #[test]
    fn cornered_box_on_destination_is_not_trapped() {
        let mut warehouse = Warehouse::new(6);
        warehouse.place_destination(Vec2::new(1, 1)).unwrap();
        assert!(!is_box_trapped(&warehouse, Vec2::new(1, 1)));
        assert_eq!(is_winnable(&warehouse, &[Vec2::new(1, 1)]), WinnableState::WinMaybePossible);
        assert_eq!(is_winnable(&warehouse, &[Vec2::new(4, 1)]), WinnableState::WinImpossible);
    }
}
