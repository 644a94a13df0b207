use rand::Rng;
use tracing::{debug, info};

use crate::core::{Session, Vec2, Warehouse};
use crate::generation::{GenerationConfig, GenerationError, PlacementStage};
use crate::state_graph::{Solvability, check_solvable};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedWarehouse {
    pub warehouse: Warehouse,
    pub player: Vec2,
}

impl GeneratedWarehouse {
    pub fn into_session(self) -> Session {
        Session::new_unchecked(self.warehouse, self.player)
    }
}

/// Builds a warehouse from `config`, drawing every random choice from `rng`.
/// The same seed and config always give the same layout.
///
/// A layout whose sampling gets stuck (say, early pillars leaving no spaced
/// tile for the rest) or that fails the optional solvability check is thrown
/// away and regenerated, at most `max_layout_attempts` times.
pub fn generate<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<GeneratedWarehouse, GenerationError> {
    config.validate()?;
    let max_layout_attempts = config.max_layout_attempts.max(1);
    let mut last_stuck = None;

    for attempt in 1..=max_layout_attempts {
        let layout = match generate_layout(config, rng) {
            Ok(layout) => layout,
            // the request cannot fit the region at all, retrying won't help
            Err(err @ GenerationError::Infeasible { attempts: 0, .. }) => return Err(err),
            Err(err) => {
                debug!(attempt, %err, "layout sampling stuck, restarting");
                last_stuck = Some(err);
                continue;
            }
        };
        if !config.require_solvable {
            return Ok(layout);
        }
        match check_solvable(&layout.warehouse, layout.player, config.solver_node_budget) {
            Solvability::Solvable { pushes } => {
                info!(attempt, pushes, "found solvable layout");
                return Ok(layout);
            }
            other => debug!(attempt, ?other, "discarding layout"),
        }
    }

    match last_stuck {
        Some(err) if !config.require_solvable => Err(err),
        _ => Err(GenerationError::NoSolvableLayout { attempts: max_layout_attempts }),
    }
}

fn generate_layout<R: Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<GeneratedWarehouse, GenerationError> {
    let mut warehouse = Warehouse::new(config.grid_size);
    let mut sampler = Sampler { rng, max_attempts: config.max_attempts_per_placement };

    let pillar_inset = if config.spaced_pillars { 2 } else { 1 };
    sampler.place(&mut warehouse, PlacementStage::Pillars, config.pillar_count, pillar_inset, |w, pos| {
        if w.tile(pos).is_occupied() {
            return false;
        }
        if config.spaced_pillars && pos.neighbors8().any(|n| w.tile(n).has_pillar()) {
            return false;
        }
        w.place_pillar(pos).is_ok()
    })?;

    // boxes keep two tiles from every wall so each one starts pushable
    sampler.place(&mut warehouse, PlacementStage::Boxes, config.box_count, 2, |w, pos| {
        if w.tile(pos).is_occupied() {
            return false;
        }
        if config.spread_boxes && pos.neighbors8().all(|n| w.tile(n).is_occupied()) {
            return false;
        }
        w.place_box(pos).is_ok()
    })?;

    sampler.place(&mut warehouse, PlacementStage::Destinations, config.destination_count, 1, |w, pos| {
        let tile = w.tile(pos);
        if tile.is_occupied() || tile.has_box_destination() {
            return false;
        }
        w.place_destination(pos).is_ok()
    })?;

    let player = sampler
        .draw(&mut warehouse, 1, &mut |w: &mut Warehouse, pos: Vec2| w.tile(pos).is_plain_floor())
        .map_err(|attempts| GenerationError::Infeasible {
            stage: PlacementStage::Player,
            placed: 0,
            requested: 1,
            attempts,
        })?;

    debug!(
        pillars = warehouse.pillar_count(),
        boxes = warehouse.box_count(),
        destinations = warehouse.destination_count(),
        %player,
        "generated warehouse"
    );
    Ok(GeneratedWarehouse { warehouse, player })
}

/// Memoryless rejection sampling over a centred square, with a draw budget per item.
struct Sampler<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    max_attempts: u32,
}

impl<R: Rng + ?Sized> Sampler<'_, R> {
    fn place<F>(
        &mut self,
        warehouse: &mut Warehouse,
        stage: PlacementStage,
        requested: usize,
        inset: i32,
        mut try_place: F,
    ) -> Result<(), GenerationError>
    where
        F: FnMut(&mut Warehouse, Vec2) -> bool,
    {
        let low = inset;
        let high = warehouse.size() - inset;
        let side = (high - low).max(0) as usize;
        if requested > side * side {
            return Err(GenerationError::Infeasible { stage, placed: 0, requested, attempts: 0 });
        }

        for placed in 0..requested {
            self.draw(warehouse, inset, &mut try_place)
                .map_err(|attempts| GenerationError::Infeasible { stage, placed, requested, attempts })?;
        }
        Ok(())
    }

    /// Draws until `try_place` accepts a position. On failure returns the attempts spent.
    fn draw<F>(&mut self, warehouse: &mut Warehouse, inset: i32, try_place: &mut F) -> Result<Vec2, u32>
    where
        F: FnMut(&mut Warehouse, Vec2) -> bool,
    {
        let low = inset;
        let high = warehouse.size() - inset;
        for _ in 0..self.max_attempts {
            let pos = Vec2 {
                x: self.rng.random_range(low..high),
                y: self.rng.random_range(low..high),
            };
            if try_place(warehouse, pos) {
                return Ok(pos);
            }
        }
        Err(self.max_attempts)
    }
}
