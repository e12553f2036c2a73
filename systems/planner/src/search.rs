//! Weighted best-first search used by every planning stage.

use std::{cmp::Ordering, collections::BinaryHeap};

use snake_autopilot_core::{CellCoord, Grid, Occupancy, Route};

/// Finds a route from `start` to `goal` that avoids blocked cells.
///
/// The goal itself is always enterable, even when blocked: a tail that will
/// have moved on by the time the head arrives, or food that is the
/// destination rather than an obstacle. Each step costs one and the frontier
/// is ordered by `g + h` using [`heuristic`], with ties resolved in insertion
/// order. The returned route excludes `start`; it is empty when `start` equals
/// `goal`. Returns `None` when the goal cannot be reached or lies off-grid.
#[must_use]
pub fn search(grid: Grid, start: CellCoord, goal: CellCoord, blocked: &Occupancy) -> Option<Route> {
    let start_index = grid.index(start)?;
    if !grid.in_bounds(goal) {
        return None;
    }

    let cell_count = grid.cell_count();
    let mut costs: Vec<Option<u32>> = vec![None; cell_count];
    let mut came_from: Vec<Option<CellCoord>> = vec![None; cell_count];
    let mut frontier = BinaryHeap::new();
    let mut sequence = 0_u64;

    costs[start_index] = Some(0);
    frontier.push(FrontierEntry {
        priority: 0.0,
        sequence,
        cell: start,
        cost: 0,
    });

    while let Some(entry) = frontier.pop() {
        if entry.cell == goal {
            return reconstruct(grid, &came_from, start, goal);
        }

        let Some(index) = grid.index(entry.cell) else {
            continue;
        };
        if costs[index] != Some(entry.cost) {
            continue;
        }

        let tentative = entry.cost + 1;
        for neighbor in grid.neighbors(entry.cell) {
            if neighbor != goal && blocked.contains(neighbor) {
                continue;
            }

            let Some(neighbor_index) = grid.index(neighbor) else {
                continue;
            };
            if costs[neighbor_index].is_some_and(|known| tentative >= known) {
                continue;
            }

            costs[neighbor_index] = Some(tentative);
            came_from[neighbor_index] = Some(entry.cell);
            sequence += 1;
            frontier.push(FrontierEntry {
                priority: f64::from(tentative) + heuristic(neighbor, goal),
                sequence,
                cell: neighbor,
                cost: tentative,
            });
        }
    }

    None
}

/// Distance estimate `(|dx|^(1/10) + |dy|^(1/10))^10`.
///
/// Equals the axis distance when the cells share a row or column and grows
/// steeply once both offsets are non-zero, so the search straightens out one
/// axis before it spends steps on the other.
#[must_use]
pub fn heuristic(cell: CellCoord, goal: CellCoord) -> f64 {
    let dx = f64::from(cell.column().abs_diff(goal.column()));
    let dy = f64::from(cell.row().abs_diff(goal.row()));
    (dx.powf(0.1) + dy.powf(0.1)).powf(10.0)
}

fn reconstruct(
    grid: Grid,
    came_from: &[Option<CellCoord>],
    start: CellCoord,
    goal: CellCoord,
) -> Option<Route> {
    let mut cells = Vec::new();
    let mut current = goal;
    while current != start {
        cells.push(current);
        current = came_from[grid.index(current)?]?;
    }
    cells.reverse();
    Some(Route::new(cells))
}

#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    priority: f64,
    sequence: u64,
    cell: CellCoord,
    cost: u32,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    // Reversed: the max-heap must surface the lowest priority, oldest entry first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
