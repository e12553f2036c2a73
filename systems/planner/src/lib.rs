#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic autopilot system that plans safe routes for the snake.
//!
//! The `search` module provides the weighted grid search, `plan` chains
//! searches into the planning ladder and escape fallback, and [`Autopilot`]
//! turns the resulting routes into one step command per tick.

pub mod plan;
pub mod search;

use snake_autopilot_core::{Body, CellCoord, Command, Direction, Event, Grid, Route};
use tracing::debug;

pub use plan::{Plan, PlanStage, Planner};
pub use search::search;

/// Pure system that reacts to world events and emits snake commands.
#[derive(Debug)]
pub struct Autopilot {
    planner: Planner,
    route: Route,
    opening: Option<Direction>,
    finished: bool,
}

impl Autopilot {
    /// Creates an autopilot for the provided grid.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            planner: Planner::new(grid),
            route: Route::default(),
            opening: None,
            finished: false,
        }
    }

    /// Steps in `direction` on the first observed tick instead of planning.
    ///
    /// Reproduces the classic opening where the snake moves straight down
    /// away from its neck before the planner takes over.
    #[must_use]
    pub fn with_opening_step(mut self, direction: Direction) -> Self {
        self.opening = Some(direction);
        self
    }

    /// Cells the snake intends to visit after the step emitted last tick.
    #[must_use]
    pub fn planned_route(&self) -> &Route {
        &self.route
    }

    /// Consumes world events and the current snake state to emit commands.
    ///
    /// Exactly one command is emitted per observed tick: a step toward the
    /// first cell of the new route, or [`Command::Forfeit`] when neither the
    /// planner nor the escape fallback finds a move. Once a game over event is
    /// observed the system stays silent.
    pub fn handle(
        &mut self,
        events: &[Event],
        body: &Body,
        food: Option<CellCoord>,
        out: &mut Vec<Command>,
    ) {
        let mut tick = None;
        for event in events {
            match event {
                Event::TimeAdvanced { tick: index } => tick = Some(*index),
                Event::GameOver { .. } => self.finished = true,
                _ => {}
            }
        }

        if self.finished {
            self.route = Route::default();
            return;
        }

        let Some(tick) = tick else {
            return;
        };

        if let Some(direction) = self.opening.take() {
            debug!(tick, ?direction, "scripted opening step");
            self.route = Route::default();
            out.push(Command::StepSnake { direction });
            return;
        }

        let head = body.head();
        let step = self
            .next_route(tick, body, food)
            .and_then(Route::split_first)
            .and_then(|(next, remaining)| {
                Direction::between(head, next).map(|direction| (direction, remaining))
            });

        match step {
            Some((direction, remaining)) => {
                self.route = remaining;
                out.push(Command::StepSnake { direction });
            }
            None => {
                debug!(tick, "no legal move remains");
                self.route = Route::default();
                out.push(Command::Forfeit);
            }
        }
    }

    fn next_route(&self, tick: u64, body: &Body, food: Option<CellCoord>) -> Option<Route> {
        if let Some(plan) = food.and_then(|food| self.planner.resolve(body, food)) {
            if plan.stage() != PlanStage::FoodThenTail {
                debug!(tick, stage = ?plan.stage(), "planner fell back");
            }
            return Some(plan.into_route());
        }

        debug!(tick, "planner found no route, trying escape");
        self.planner.escape(body)
    }
}
