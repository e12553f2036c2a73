//! Headless game loop wiring the world to the autopilot.

use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;
use snake_autopilot_core::{Command, Direction, GameOverReason, Grid};
use snake_autopilot_system_planner::Autopilot;
use snake_autopilot_world::{self as world, query, Config, World};

/// Outcome of a finished or interrupted session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct RunSummary {
    pub(crate) columns: u32,
    pub(crate) rows: u32,
    pub(crate) seed: u64,
    pub(crate) ticks: u64,
    pub(crate) score: u32,
    pub(crate) length: usize,
    /// Body cells as a share of all cells. Unlike the classic game's
    /// `100 * (len + 1) / cells`, the head is not counted twice.
    pub(crate) fill_percentage: f64,
    /// `None` when the tick limit stopped the session.
    pub(crate) outcome: Option<GameOverReason>,
}

impl RunSummary {
    fn from_world(world: &World, seed: u64) -> Self {
        let grid = query::grid(world);
        Self {
            columns: grid.columns(),
            rows: grid.rows(),
            seed,
            ticks: query::tick_index(world),
            score: query::score(world),
            length: query::body(world).len(),
            fill_percentage: 100.0 * query::fill_ratio(world),
            outcome: query::outcome(world),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Some(reason) => write!(
                f,
                "Game over after {} ticks: {}. Score: {}, {:.2}% of grid filled",
                self.ticks,
                reason.describe(),
                self.score,
                self.fill_percentage
            ),
            None => write!(
                f,
                "Stopped at tick limit after {} ticks. Score: {}, {:.2}% of grid filled",
                self.ticks, self.score, self.fill_percentage
            ),
        }
    }
}

/// Plays until the game ends or `max_ticks` ticks have been applied.
///
/// With an `opening` direction the first tick steps that way unplanned.
pub(crate) fn run(
    grid: Grid,
    seed: u64,
    max_ticks: u64,
    opening: Option<Direction>,
) -> Result<RunSummary> {
    let config = Config::new(grid, seed);
    let mut autopilot = Autopilot::new(config.grid());
    if let Some(direction) = opening {
        autopilot = autopilot.with_opening_step(direction);
    }
    let seed = config.rng_seed();
    let mut world = World::new(config).context("failed to create world")?;
    let mut events = Vec::new();
    let mut commands = Vec::new();

    while !query::is_finished(&world) && query::tick_index(&world) < max_ticks {
        events.clear();
        world::apply(&mut world, Command::Tick, &mut events);

        autopilot.handle(
            &events,
            query::body(&world),
            query::food(&world),
            &mut commands,
        );
        for command in commands.drain(..) {
            world::apply(&mut world, command, &mut events);
        }

        for event in &events {
            tracing::trace!(?event, "world event");
        }
    }

    Ok(RunSummary::from_world(&world, seed))
}
