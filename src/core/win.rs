use crate::core::Warehouse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinCheck {
    NotYet,
    /// First evaluation at which every box sat on a destination.
    JustWon,
    AlreadyWon,
}

/// Latches the win the first time all `box_count` boxes are on destinations.
/// Pushing a box back off a destination afterwards does not clear it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLatch {
    box_count: usize,
    won: bool,
}

impl WinLatch {
    pub fn new(box_count: usize) -> Self {
        WinLatch { box_count, won: false }
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn check(&mut self, warehouse: &Warehouse) -> WinCheck {
        if self.won {
            return WinCheck::AlreadyWon;
        }
        if count_boxes_on_destinations(warehouse) >= self.box_count {
            self.won = true;
            return WinCheck::JustWon;
        }
        WinCheck::NotYet
    }
}

pub fn count_boxes_on_destinations(warehouse: &Warehouse) -> usize {
    warehouse.boxes_on_destinations()
}

pub fn is_won(warehouse: &Warehouse) -> bool {
    count_boxes_on_destinations(warehouse) == warehouse.destination_count()
}
