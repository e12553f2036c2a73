//! Route planning ladder and escape fallback built on [`search`].

use snake_autopilot_core::{Body, CellCoord, Grid, Occupancy, Route};

use crate::search::search;

/// Ladder rung that produced a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanStage {
    /// Route to the food followed by a route from the food back to the tail.
    FoodThenTail,
    /// Food route recomputed around a tail path found on retry.
    FoodAvoidingTailPath,
    /// Food abandoned; the head follows its own tail.
    ChaseTail,
}

/// Route chosen for the tick together with the rung that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    route: Route,
    stage: PlanStage,
}

impl Plan {
    /// Cells the head should traverse.
    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Rung of the ladder that produced the route.
    #[must_use]
    pub const fn stage(&self) -> PlanStage {
        self.stage
    }

    /// Consumes the plan, yielding its route.
    #[must_use]
    pub fn into_route(self) -> Route {
        self.route
    }
}

/// Stateless planner bound to a fixed grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Planner {
    grid: Grid,
}

impl Planner {
    /// Creates a planner for the provided grid.
    #[must_use]
    pub const fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Computes the route for the next ticks, or `None` when only the escape
    /// fallback remains.
    #[must_use]
    pub fn plan(&self, body: &Body, food: CellCoord) -> Option<Route> {
        self.resolve(body, food).map(Plan::into_route)
    }

    /// Runs the planning ladder and reports which rung succeeded.
    ///
    /// A route to the food is only taken when the tail is reachable from the
    /// food afterwards. Otherwise the head chases its own tail. Every route
    /// avoids the body except for its final cell.
    #[must_use]
    pub fn resolve(&self, body: &Body, food: CellCoord) -> Option<Plan> {
        let occupancy = Occupancy::from_body(self.grid, body);
        let head = body.head();
        let tail = body.tail();

        if let Some(to_food) = self.find(head, food, &occupancy) {
            if let Some(to_tail) = self.find(food, tail, &occupancy) {
                return Some(Plan {
                    route: to_food.chain(to_tail),
                    stage: PlanStage::FoodThenTail,
                });
            }

            // Retried once with identical inputs.
            if let Some(to_tail) = self.find(food, tail, &occupancy) {
                let mut avoiding = occupancy.clone();
                avoiding.extend(to_tail.cells().iter().copied());
                if let Some(to_food) = self.find(head, food, &avoiding) {
                    return Some(Plan {
                        route: to_food.chain(to_tail),
                        stage: PlanStage::FoodAvoidingTailPath,
                    });
                }
            }
        }

        self.find(head, tail, &occupancy).map(|route| Plan {
            route,
            stage: PlanStage::ChaseTail,
        })
    }

    /// Last resort: a one-step route to the first reachable neighbour of the
    /// head, trying up, down, left, right in turn.
    ///
    /// The neighbour is the search goal, so an occupied neighbour is accepted
    /// as well. `None` means the snake has no legal move.
    #[must_use]
    pub fn escape(&self, body: &Body) -> Option<Route> {
        let occupancy = Occupancy::from_body(self.grid, body);
        let head = body.head();
        self.grid
            .neighbors(head)
            .find_map(|next| self.find(head, next, &occupancy))
    }

    fn find(&self, start: CellCoord, goal: CellCoord, blocked: &Occupancy) -> Option<Route> {
        search(self.grid, start, goal, blocked).filter(|route| !route.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(column: u32, row: u32) -> CellCoord {
        CellCoord::new(column, row)
    }

    fn body(cells: &[(u32, u32)]) -> Body {
        Body::new(cells.iter().map(|&(column, row)| cell(column, row)).collect())
            .expect("valid body")
    }

    #[test]
    fn open_board_takes_food_then_tail() {
        let planner = Planner::new(Grid::new(5, 5).expect("valid grid"));
        let snake = body(&[(2, 2), (2, 3)]);

        let plan = planner.resolve(&snake, cell(4, 2)).expect("plan");

        assert_eq!(plan.stage(), PlanStage::FoodThenTail);
        assert_eq!(&plan.route().cells()[..2], &[cell(3, 2), cell(4, 2)]);
        assert_eq!(plan.route().last(), Some(cell(2, 3)));
    }

    #[test]
    fn sealed_food_falls_back_to_chasing_the_tail() {
        let planner = Planner::new(Grid::new(3, 3).expect("valid grid"));
        // The food in the corner is walled in by the body.
        let snake = body(&[(0, 0), (0, 1), (1, 1), (1, 2)]);

        let plan = planner.resolve(&snake, cell(0, 2)).expect("plan");

        assert_eq!(plan.stage(), PlanStage::ChaseTail);
        assert_eq!(plan.route().last(), Some(cell(1, 2)));
    }

    #[test]
    fn plan_matches_resolved_route() {
        let planner = Planner::new(Grid::new(4, 4).expect("valid grid"));
        let snake = body(&[(1, 1), (1, 2), (2, 2)]);
        let food = cell(3, 0);

        let resolved = planner.resolve(&snake, food).expect("plan");
        assert_eq!(planner.plan(&snake, food).as_ref(), Some(resolved.route()));
    }

    #[test]
    fn escape_prefers_up_then_down_then_left_then_right() {
        let planner = Planner::new(Grid::new(3, 3).expect("valid grid"));

        let centre = body(&[(1, 1)]);
        assert_eq!(planner.escape(&centre), Some(Route::new(vec![cell(1, 0)])));

        let top_row = body(&[(1, 0)]);
        assert_eq!(planner.escape(&top_row), Some(Route::new(vec![cell(1, 1)])));

        let bottom_right = body(&[(2, 2), (1, 2)]);
        assert_eq!(planner.escape(&bottom_right), Some(Route::new(vec![cell(2, 1)])));
    }

    #[test]
    fn escape_accepts_an_occupied_neighbour() {
        let planner = Planner::new(Grid::new(3, 3).expect("valid grid"));
        let snake = body(&[(1, 1), (1, 0), (0, 0)]);

        assert_eq!(planner.escape(&snake), Some(Route::new(vec![cell(1, 0)])));
    }
}
