use thiserror::Error;
use tracing::{debug, info};

use crate::core::win::{WinCheck, WinLatch};
use crate::core::{Direction, GameUpdate, InvariantViolation, UserAction, Vec2, Warehouse, step};

/// A running game: sole owner and writer of the warehouse, the player,
/// the move counter and the win latch.
#[derive(Clone, Debug)]
pub struct Session {
    warehouse: Warehouse,
    player: Vec2,
    move_count: u32,
    win: WinLatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
    #[error("player at {0} must stand on an open interior tile")]
    PlayerPlacement(Vec2),
}

impl Session {
    /// Starts a session on a warehouse that satisfies every grid invariant,
    /// with the player on an interior tile free of walls, pillars and boxes.
    pub fn new(warehouse: Warehouse, player: Vec2) -> Result<Self, SessionError> {
        warehouse.check_invariants()?;
        if !warehouse.is_interior(player) || warehouse.tile(player).is_occupied() {
            return Err(SessionError::PlayerPlacement(player));
        }
        Ok(Self::new_unchecked(warehouse, player))
    }

    /// For layouts the generator has already built to the rules.
    pub(crate) fn new_unchecked(warehouse: Warehouse, player: Vec2) -> Self {
        let win = WinLatch::new(warehouse.box_count());
        Session { warehouse, player, move_count: 0, win }
    }

    pub fn warehouse(&self) -> &Warehouse {
        &self.warehouse
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_won(&self) -> bool {
        self.win.is_won()
    }

    pub fn apply_move(&mut self, direction: Direction) -> GameUpdate {
        self.apply(UserAction::Move(direction))
    }

    pub fn apply(&mut self, action: UserAction) -> GameUpdate {
        let update = step(&mut self.warehouse, &mut self.player, action);
        if update.is_moved() {
            self.move_count += 1;
        }
        debug!(?action, ?update, player = %self.player, moves = self.move_count, "resolved move");
        update
    }

    /// Evaluated once per frame; `JustWon` is reported exactly once per session.
    pub fn check_win(&mut self) -> WinCheck {
        let check = self.win.check(&self.warehouse);
        if check == WinCheck::JustWon {
            info!(moves = self.move_count, "won game with {} moves", self.move_count);
        }
        check
    }
}
