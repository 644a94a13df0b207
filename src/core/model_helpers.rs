use std::fmt;
use std::ops::{Add, Mul};

use crate::core::{Direction, GameUpdate, Tile, UserAction, Vec2};

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Vec2 { x, y }
    }

    /// The eight surrounding positions, orthogonal and diagonal.
    pub fn neighbors8(self) -> impl Iterator<Item = Vec2> {
        NEIGHBOR_OFFSETS.iter().map(move |&offset| self + offset)
    }
}

const NEIGHBOR_OFFSETS: [Vec2; 8] = [
    Vec2::new(-1, -1),
    Vec2::new(-1, 0),
    Vec2::new(-1, 1),
    Vec2::new(0, -1),
    Vec2::new(0, 1),
    Vec2::new(1, -1),
    Vec2::new(1, 0),
    Vec2::new(1, 1),
];

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Mul<i32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: i32) -> Vec2 {
        Vec2 { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0, y: 1 },
            Direction::Down => Vec2 { x: 0, y: -1 },
            // x grows leftwards: (0, 0) is the bottom right corner of the board
            Direction::Left => Vec2 { x: 1, y: 0 },
            Direction::Right => Vec2 { x: -1, y: 0 },
        }
    }
}

impl UserAction {
    pub fn all_actions() -> Vec<UserAction> {
        Direction::ALL.iter().map(|&d| UserAction::Move(d)).collect()
    }
}

impl GameUpdate {
    pub fn is_moved(&self) -> bool {
        matches!(self, GameUpdate::Moved(_))
    }
}

impl Tile {
    pub(crate) fn floor(position: Vec2) -> Self {
        Tile {
            position,
            has_obstacle: false,
            has_pillar: false,
            has_box: false,
            has_box_destination: false,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn has_obstacle(&self) -> bool {
        self.has_obstacle
    }

    pub fn has_pillar(&self) -> bool {
        self.has_pillar
    }

    pub fn has_box(&self) -> bool {
        self.has_box
    }

    pub fn has_box_destination(&self) -> bool {
        self.has_box_destination
    }

    pub fn is_box_on_destination(&self) -> bool {
        self.has_box && self.has_box_destination
    }

    /// Walls and pillars; neither the player nor a box may enter.
    pub fn is_blocked(&self) -> bool {
        self.has_obstacle || self.has_pillar
    }

    /// Blocked, or already holding a box.
    pub fn is_occupied(&self) -> bool {
        self.is_blocked() || self.has_box
    }

    pub fn is_plain_floor(&self) -> bool {
        !self.is_occupied() && !self.has_box_destination
    }
}
