use thiserror::Error;

use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::{Tile, Vec2};

/// The `N x N` tile grid of one game session. The outer ring is always wall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warehouse {
    grid: BoundedGrid<Tile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("position {0} is outside the warehouse interior")]
    OutsideInterior(Vec2),
    #[error("position {0} is already occupied")]
    Occupied(Vec2),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("perimeter tile {0} is not a bare wall")]
    Perimeter(Vec2),
    #[error("tile {0} holds more than one of wall, pillar and box")]
    Exclusion(Vec2),
    #[error("destination at {0} shares its tile with a wall or pillar")]
    BlockedDestination(Vec2),
    #[error("{boxes} boxes but {destinations} destinations")]
    CountMismatch { boxes: usize, destinations: usize },
}

impl Warehouse {
    pub fn new(size: i32) -> Self {
        let bounds = BoundsOriginRoot::new(size);
        let grid = BoundedGrid::new_with_init(size, |position| {
            let mut tile = Tile::floor(position);
            tile.has_obstacle = bounds.is_perimeter(&position);
            tile
        });
        Warehouse { grid }
    }

    pub fn size(&self) -> i32 {
        self.grid.bounds().side
    }

    pub fn bounds(&self) -> BoundsOriginRoot {
        self.grid.bounds()
    }

    /// Unchecked lookup; callers stay within the perimeter ring.
    pub fn tile(&self, pos: Vec2) -> &Tile {
        &self.grid[&pos]
    }

    pub fn get(&self, pos: Vec2) -> Option<&Tile> {
        self.grid.get(&pos)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.grid.iter()
    }

    pub fn is_interior(&self, pos: Vec2) -> bool {
        self.bounds().contains_interior(&pos)
    }

    /// True for walls, pillars and anything off the grid.
    pub fn is_blocked(&self, pos: Vec2) -> bool {
        self.get(pos).is_none_or(Tile::is_blocked)
    }

    pub fn has_box(&self, pos: Vec2) -> bool {
        self.get(pos).is_some_and(Tile::has_box)
    }

    /// Interior walls only come from hand-written levels; generation never places them.
    pub fn place_wall(&mut self, pos: Vec2) -> Result<(), PlacementError> {
        let tile = self.interior_tile_mut(pos)?;
        if tile.is_occupied() || tile.has_box_destination {
            return Err(PlacementError::Occupied(pos));
        }
        tile.has_obstacle = true;
        Ok(())
    }

    pub fn place_pillar(&mut self, pos: Vec2) -> Result<(), PlacementError> {
        let tile = self.interior_tile_mut(pos)?;
        if tile.is_occupied() || tile.has_box_destination {
            return Err(PlacementError::Occupied(pos));
        }
        tile.has_pillar = true;
        Ok(())
    }

    pub fn place_box(&mut self, pos: Vec2) -> Result<(), PlacementError> {
        let tile = self.interior_tile_mut(pos)?;
        if tile.is_occupied() {
            return Err(PlacementError::Occupied(pos));
        }
        tile.has_box = true;
        Ok(())
    }

    pub fn place_destination(&mut self, pos: Vec2) -> Result<(), PlacementError> {
        let tile = self.interior_tile_mut(pos)?;
        if tile.is_blocked() || tile.has_box_destination {
            return Err(PlacementError::Occupied(pos));
        }
        tile.has_box_destination = true;
        Ok(())
    }

    /// Moves a box between two tiles the move resolver has already validated.
    pub(crate) fn move_box(&mut self, from: Vec2, to: Vec2) {
        debug_assert!(self.tile(from).has_box && !self.tile(to).is_occupied());
        self.grid[&from].has_box = false;
        self.grid[&to].has_box = true;
    }

    fn interior_tile_mut(&mut self, pos: Vec2) -> Result<&mut Tile, PlacementError> {
        if !self.is_interior(pos) {
            return Err(PlacementError::OutsideInterior(pos));
        }
        Ok(&mut self.grid[&pos])
    }

    pub fn box_positions(&self) -> Vec<Vec2> {
        self.tiles().filter(|t| t.has_box).map(Tile::position).collect()
    }

    pub fn destination_positions(&self) -> Vec<Vec2> {
        self.tiles().filter(|t| t.has_box_destination).map(Tile::position).collect()
    }

    pub fn box_count(&self) -> usize {
        self.tiles().filter(|t| t.has_box).count()
    }

    pub fn pillar_count(&self) -> usize {
        self.tiles().filter(|t| t.has_pillar).count()
    }

    pub fn destination_count(&self) -> usize {
        self.tiles().filter(|t| t.has_box_destination).count()
    }

    pub fn boxes_on_destinations(&self) -> usize {
        self.tiles().filter(|t| t.is_box_on_destination()).count()
    }

    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let bounds = self.bounds();
        for tile in self.tiles() {
            let pos = tile.position;
            if bounds.is_perimeter(&pos) {
                if !tile.has_obstacle || tile.has_pillar || tile.has_box || tile.has_box_destination {
                    return Err(InvariantViolation::Perimeter(pos));
                }
                continue;
            }
            let solid = [tile.has_obstacle, tile.has_pillar, tile.has_box];
            if solid.iter().filter(|&&f| f).count() > 1 {
                return Err(InvariantViolation::Exclusion(pos));
            }
            if tile.has_box_destination && tile.is_blocked() {
                return Err(InvariantViolation::BlockedDestination(pos));
            }
        }

        let boxes = self.box_count();
        let destinations = self.destination_count();
        if boxes != destinations {
            return Err(InvariantViolation::CountMismatch { boxes, destinations });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_warehouse_has_bare_wall_ring() {
        let warehouse = Warehouse::new(6);
        assert_eq!(warehouse.tiles().count(), 36);
        for tile in warehouse.tiles() {
            let p = tile.position();
            let on_edge = p.x == 0 || p.y == 0 || p.x == 5 || p.y == 5;
            assert_eq!(tile.has_obstacle(), on_edge, "at {:?}", p);
        }
        assert_eq!(warehouse.check_invariants(), Ok(()));
    }

    #[test]
    fn tile_position_matches_lookup() {
        let warehouse = Warehouse::new(10);
        let pos = Vec2::new(3, 7);
        assert_eq!(warehouse.tile(pos).position(), pos);
        assert_eq!(warehouse.bounds().index_of(&pos), 37);
        assert!(warehouse.get(Vec2::new(10, 0)).is_none());
        assert!(warehouse.get(Vec2::new(-1, 0)).is_none());
    }

    #[test]
    fn placement_refuses_to_stack_solids() {
        let mut warehouse = Warehouse::new(8);
        let pos = Vec2::new(3, 3);
        warehouse.place_box(pos).unwrap();
        assert_eq!(warehouse.place_pillar(pos), Err(PlacementError::Occupied(pos)));
        assert_eq!(warehouse.place_box(pos), Err(PlacementError::Occupied(pos)));
        assert_eq!(warehouse.place_destination(pos), Ok(()));
        assert!(warehouse.tile(pos).is_box_on_destination());
    }

    #[test]
    fn placement_refuses_perimeter() {
        let mut warehouse = Warehouse::new(8);
        let wall = Vec2::new(0, 4);
        assert_eq!(warehouse.place_box(wall), Err(PlacementError::OutsideInterior(wall)));
        assert_eq!(warehouse.place_destination(wall), Err(PlacementError::OutsideInterior(wall)));
    }

    #[test]
    fn unmatched_boxes_violate_invariants() {
        let mut warehouse = Warehouse::new(8);
        warehouse.place_box(Vec2::new(3, 3)).unwrap();
        assert_eq!(
            warehouse.check_invariants(),
            Err(InvariantViolation::CountMismatch { boxes: 1, destinations: 0 })
        );
    }
}
