use crate::core::Vec2;

/// A square bounding box with one corner fixed at 0,0
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub side: i32,
}

impl BoundsOriginRoot {
    pub fn new(side: i32) -> BoundsOriginRoot {
        BoundsOriginRoot { side }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.x >= 0 && pos.x < self.side && pos.y >= 0 && pos.y < self.side
    }

    /// Inside the perimeter ring, `[1, side - 2]` on both axes.
    pub fn contains_interior(&self, pos: &Vec2) -> bool {
        self.contains_inset(pos, 1)
    }

    pub fn contains_inset(&self, pos: &Vec2, inset: i32) -> bool {
        pos.x >= inset && pos.x < self.side - inset && pos.y >= inset && pos.y < self.side - inset
    }

    pub fn is_perimeter(&self, pos: &Vec2) -> bool {
        self.contains(pos) && !self.contains_interior(pos)
    }

    pub fn area(&self) -> i32 {
        self.side * self.side
    }

    /// Linear index, column major: `x * side + y`.
    pub fn index_of(&self, pos: &Vec2) -> usize {
        (pos.x * self.side + pos.y) as usize
    }

    pub fn position_of(&self, index: usize) -> Vec2 {
        let index = index as i32;
        Vec2 { x: index / self.side, y: index % self.side }
    }
}
