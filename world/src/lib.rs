#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative game state for the snake autopilot.
//!
//! The world owns the snake and the food. It advances only in response to
//! [`Command`] values passed to [`apply`] and reports every change as an
//! [`Event`]. Systems observe it through the read-only [`query`] module.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use snake_autopilot_core::{
    Body, CellCoord, Command, Direction, Event, GameOverReason, Grid, Occupancy,
};
use thiserror::Error;
use tracing::{debug, info};

/// Configuration parameters required to construct a world.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    grid: Grid,
    rng_seed: u64,
    body: Option<Body>,
    food: Option<CellCoord>,
}

impl Config {
    /// Creates a configuration with the default starting position.
    ///
    /// The snake starts with its head at the centre of the grid and its tail
    /// directly above, and food is placed using the seeded generator.
    #[must_use]
    pub const fn new(grid: Grid, rng_seed: u64) -> Self {
        Self {
            grid,
            rng_seed,
            body: None,
            food: None,
        }
    }

    /// Starts the session from the provided body instead of the default one.
    #[must_use]
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Places the first food on the provided cell instead of a random one.
    #[must_use]
    pub fn with_food(mut self, food: CellCoord) -> Self {
        self.food = Some(food);
        self
    }

    /// Grid the session is played on.
    #[must_use]
    pub const fn grid(&self) -> Grid {
        self.grid
    }

    /// Seed of the food placement generator.
    #[must_use]
    pub const fn rng_seed(&self) -> u64 {
        self.rng_seed
    }
}

/// Errors raised when a configuration describes an impossible position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum WorldError {
    /// A body cell lies outside the grid.
    #[error("body cell ({}, {}) lies outside the grid", .cell.column(), .cell.row())]
    BodyOutOfBounds {
        /// Offending cell.
        cell: CellCoord,
    },
    /// The food cell lies outside the grid.
    #[error("food cell ({}, {}) lies outside the grid", .cell.column(), .cell.row())]
    FoodOutOfBounds {
        /// Offending cell.
        cell: CellCoord,
    },
    /// The food cell is covered by the body.
    #[error("food cell ({}, {}) is covered by the body", .cell.column(), .cell.row())]
    FoodOnBody {
        /// Offending cell.
        cell: CellCoord,
    },
}

/// Represents the authoritative game state.
#[derive(Debug)]
pub struct World {
    grid: Grid,
    body: Body,
    food: Option<CellCoord>,
    score: u32,
    tick_index: u64,
    outcome: Option<GameOverReason>,
    rng: ChaCha8Rng,
}

impl World {
    /// Creates a new world ready for simulation.
    ///
    /// A board without a free cell for food starts out finished with
    /// [`GameOverReason::BoardFilled`].
    pub fn new(config: Config) -> Result<Self, WorldError> {
        let grid = config.grid;
        let body = config.body.unwrap_or_else(|| initial_body(grid));
        if let Some(cell) = body.iter().find(|&cell| !grid.in_bounds(cell)) {
            return Err(WorldError::BodyOutOfBounds { cell });
        }

        if let Some(cell) = config.food {
            if !grid.in_bounds(cell) {
                return Err(WorldError::FoodOutOfBounds { cell });
            }
            if body.contains(cell) {
                return Err(WorldError::FoodOnBody { cell });
            }
        }

        let mut world = Self {
            grid,
            body,
            food: config.food,
            score: 0,
            tick_index: 0,
            outcome: None,
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        };

        if world.food.is_none() {
            world.food = world.spawn_food();
            if world.food.is_none() {
                world.outcome = Some(GameOverReason::BoardFilled);
            }
        }

        Ok(world)
    }

    fn spawn_food(&mut self) -> Option<CellCoord> {
        let occupancy = Occupancy::from_body(self.grid, &self.body);
        let free: Vec<CellCoord> = self
            .grid
            .cells()
            .filter(|&cell| !occupancy.contains(cell))
            .collect();
        if free.is_empty() {
            return None;
        }

        let index = self.rng.gen_range(0..free.len());
        Some(free[index])
    }

    fn step_snake(&mut self, direction: Direction, out_events: &mut Vec<Event>) {
        let from = self.body.head();
        let Some(to) = self.grid.step(from, direction) else {
            self.finish(GameOverReason::OutOfBounds, out_events);
            return;
        };

        let grow = self.food == Some(to);
        if let Err(error) = self.body.advance(to, grow) {
            debug!(%error, tick = self.tick_index, "step rejected");
            self.finish(GameOverReason::SelfCollision, out_events);
            return;
        }
        out_events.push(Event::SnakeAdvanced { from, to });

        if !grow {
            return;
        }

        self.score = self.score.saturating_add(1);
        let length = self.body.len();
        debug!(tick = self.tick_index, length, "food eaten");
        out_events.push(Event::FoodEaten { cell: to, length });

        self.food = self.spawn_food();
        match self.food {
            Some(cell) => out_events.push(Event::FoodSpawned { cell }),
            None => self.finish(GameOverReason::BoardFilled, out_events),
        }
    }

    fn finish(&mut self, reason: GameOverReason, out_events: &mut Vec<Event>) {
        info!(
            tick = self.tick_index,
            score = self.score,
            length = self.body.len(),
            reason = reason.describe(),
            "game over"
        );
        self.outcome = Some(reason);
        out_events.push(Event::GameOver { reason });
    }
}

fn initial_body(grid: Grid) -> Body {
    let head = CellCoord::new(grid.columns() / 2, grid.rows() / 2);
    let mut cells = vec![head];
    if let Some(row) = head.row().checked_sub(1) {
        cells.push(CellCoord::new(head.column(), row));
    }
    Body::new(cells).unwrap_or_else(|_| Body::single(head))
}

/// Applies the provided command to the world, recording emitted events.
///
/// Commands received after the game ended are ignored.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    if world.outcome.is_some() {
        return;
    }

    match command {
        Command::Tick => {
            world.tick_index = world.tick_index.saturating_add(1);
            out_events.push(Event::TimeAdvanced {
                tick: world.tick_index,
            });
        }
        Command::StepSnake { direction } => world.step_snake(direction, out_events),
        Command::Forfeit => world.finish(GameOverReason::NoLegalMove, out_events),
    }
}

/// Read-only queries over the world state.
pub mod query {
    use snake_autopilot_core::{Body, CellCoord, GameOverReason, Grid};

    use super::World;

    /// Grid the session is played on.
    #[must_use]
    pub fn grid(world: &World) -> Grid {
        world.grid
    }

    /// Current snake body, head first.
    #[must_use]
    pub fn body(world: &World) -> &Body {
        &world.body
    }

    /// Current food cell, absent once the board is full.
    #[must_use]
    pub fn food(world: &World) -> Option<CellCoord> {
        world.food
    }

    /// Number of food items eaten.
    #[must_use]
    pub fn score(world: &World) -> u32 {
        world.score
    }

    /// Number of ticks applied so far.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }

    /// Reason the session ended, if it has.
    #[must_use]
    pub fn outcome(world: &World) -> Option<GameOverReason> {
        world.outcome
    }

    /// Whether the session has ended.
    #[must_use]
    pub fn is_finished(world: &World) -> bool {
        world.outcome.is_some()
    }

    /// Fraction of the grid covered by the body.
    ///
    /// Counts each body cell once; a full board reports exactly `1.0`.
    #[must_use]
    pub fn fill_ratio(world: &World) -> f64 {
        world.body.len() as f64 / world.grid.cell_count() as f64
    }
}
