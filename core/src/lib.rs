#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the snake autopilot.
//!
//! This crate defines the grid model and the message surface that connects
//! the authoritative world, the autopilot system and adapters. Adapters and
//! systems submit [`Command`] values, the world executes them through its
//! `apply` entry point and broadcasts [`Event`] values describing what
//! happened. Value types such as [`Body`] and [`Route`] are shared by the
//! planner, which only ever reads them.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Advances the simulation by one discrete tick.
    Tick,
    /// Requests that the snake's head move one cell in the given direction.
    StepSnake {
        /// Direction of travel for the head.
        direction: Direction,
    },
    /// Declares that the snake has no legal move left.
    Forfeit,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Index of the tick that just started, counting from one.
        tick: u64,
    },
    /// Confirms that the snake's head moved between two cells.
    SnakeAdvanced {
        /// Cell the head occupied before moving.
        from: CellCoord,
        /// Cell the head occupies after moving.
        to: CellCoord,
    },
    /// Reports that the snake consumed the food and grew by one cell.
    FoodEaten {
        /// Cell where the food was located.
        cell: CellCoord,
        /// Length of the snake after growing.
        length: usize,
    },
    /// Announces that new food was placed on the board.
    FoodSpawned {
        /// Cell holding the new food.
        cell: CellCoord,
    },
    /// Announces that the session ended. No further events follow.
    GameOver {
        /// Reason the session ended.
        reason: GameOverReason,
    },
}

/// Terminal conditions of a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    /// The head moved onto a body cell that was not vacating.
    SelfCollision,
    /// The head moved off the grid.
    OutOfBounds,
    /// Neither the planner nor the escape fallback found a move.
    NoLegalMove,
    /// The snake covers every cell, so no food can be placed.
    BoardFilled,
}

impl GameOverReason {
    /// Short human readable description of the reason.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::SelfCollision => "ran into itself",
            Self::OutOfBounds => "left the board",
            Self::NoLegalMove => "no legal move",
            Self::BoardFilled => "board filled",
        }
    }
}

/// Cardinal movement directions, declared in enumeration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// Every direction in the fixed order used for neighbour enumeration.
    ///
    /// Search expansion and the escape fallback both walk this order, so it is
    /// the tie-break between otherwise equivalent moves.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Direction leading from `from` to the 4-adjacent cell `to`.
    #[must_use]
    pub fn between(from: CellCoord, to: CellCoord) -> Option<Direction> {
        if !from.is_adjacent(to) {
            return None;
        }

        if to.row() < from.row() {
            Some(Direction::Up)
        } else if to.row() > from.row() {
            Some(Direction::Down)
        } else if to.column() < from.column() {
            Some(Direction::Left)
        } else {
            Some(Direction::Right)
        }
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index (the x coordinate).
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index (the y coordinate).
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column().abs_diff(other.column()) + self.row().abs_diff(other.row())
    }

    /// Whether the two cells share an edge.
    #[must_use]
    pub fn is_adjacent(self, other: CellCoord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

/// Immutable dimensions of the playing field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    columns: u32,
    rows: u32,
}

impl Grid {
    /// Creates a grid with the provided dimensions.
    pub fn new(columns: u32, rows: u32) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 {
            return Err(GridError::Empty { columns, rows });
        }

        Ok(Self { columns, rows })
    }

    /// Derives the grid from a board measured in pixels and a square cell size.
    ///
    /// Partial cells along the right and bottom edges are dropped.
    pub fn from_board(
        board_width: u32,
        board_height: u32,
        cell_size: u32,
    ) -> Result<Self, GridError> {
        if cell_size == 0 {
            return Err(GridError::ZeroCellSize);
        }

        let columns = board_width / cell_size;
        let rows = board_height / cell_size;
        if columns == 0 || rows == 0 {
            return Err(GridError::BoardSmallerThanCell {
                board_width,
                board_height,
                cell_size,
            });
        }

        Ok(Self { columns, rows })
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let count = u64::from(self.columns) * u64::from(self.rows);
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    /// Whether the cell lies on the grid.
    #[must_use]
    pub const fn in_bounds(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    /// Row-major dense index of the cell, if it lies on the grid.
    #[must_use]
    pub fn index(&self, cell: CellCoord) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }

        let columns = usize::try_from(self.columns).ok()?;
        let column = usize::try_from(cell.column()).ok()?;
        let row = usize::try_from(cell.row()).ok()?;
        row.checked_mul(columns)?.checked_add(column)
    }

    /// Cell adjacent to `cell` in `direction`, or `None` when it leaves the grid.
    #[must_use]
    pub fn step(&self, cell: CellCoord, direction: Direction) -> Option<CellCoord> {
        let next = match direction {
            Direction::Up => CellCoord::new(cell.column(), cell.row().checked_sub(1)?),
            Direction::Down => CellCoord::new(cell.column(), cell.row().checked_add(1)?),
            Direction::Left => CellCoord::new(cell.column().checked_sub(1)?, cell.row()),
            Direction::Right => CellCoord::new(cell.column().checked_add(1)?, cell.row()),
        };

        self.in_bounds(next).then_some(next)
    }

    /// In-bounds 4-connected neighbours in up, down, left, right order.
    #[must_use]
    pub fn neighbors(&self, cell: CellCoord) -> NeighborIter {
        let mut neighbors = NeighborIter::default();
        for direction in Direction::ALL {
            if let Some(next) = self.step(cell, direction) {
                neighbors.push(next);
            }
        }
        neighbors
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        let columns = self.columns;
        (0..self.rows)
            .flat_map(move |row| (0..columns).map(move |column| CellCoord::new(column, row)))
    }
}

/// Fixed-capacity iterator over the neighbours of a cell.
#[derive(Clone, Debug, Default)]
pub struct NeighborIter {
    buffer: [Option<CellCoord>; 4],
    len: usize,
    cursor: usize,
}

impl NeighborIter {
    fn push(&mut self, cell: CellCoord) {
        if self.len < self.buffer.len() {
            self.buffer[self.len] = Some(cell);
            self.len += 1;
        }
    }
}

impl Iterator for NeighborIter {
    type Item = CellCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.len {
            return None;
        }

        let value = self.buffer[self.cursor];
        self.cursor += 1;
        value
    }
}

/// Errors raised while describing a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// One of the dimensions was zero.
    #[error("grid must have at least one column and one row (received {columns}x{rows})")]
    Empty {
        /// Requested number of columns.
        columns: u32,
        /// Requested number of rows.
        rows: u32,
    },
    /// The cell size was zero.
    #[error("cell size must be positive")]
    ZeroCellSize,
    /// The board cannot hold a single cell.
    #[error("board {board_width}x{board_height} cannot hold a {cell_size}px cell")]
    BoardSmallerThanCell {
        /// Board width in pixels.
        board_width: u32,
        /// Board height in pixels.
        board_height: u32,
        /// Requested cell size in pixels.
        cell_size: u32,
    },
}

/// Ordered cells covered by the snake, head first.
///
/// A body always holds at least one cell, its cells are distinct and
/// consecutive cells share an edge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CellCoord>", into = "Vec<CellCoord>")]
pub struct Body {
    cells: VecDeque<CellCoord>,
}

impl Body {
    /// Validates the cells and builds a body from them.
    pub fn new(cells: Vec<CellCoord>) -> Result<Self, BodyError> {
        if cells.is_empty() {
            return Err(BodyError::Empty);
        }

        let mut seen = HashSet::with_capacity(cells.len());
        for &cell in &cells {
            if !seen.insert(cell) {
                return Err(BodyError::DuplicateCell { cell });
            }
        }

        for (index, pair) in cells.windows(2).enumerate() {
            if !pair[0].is_adjacent(pair[1]) {
                return Err(BodyError::Disconnected {
                    index: index + 1,
                    cell: pair[1],
                });
            }
        }

        Ok(Self {
            cells: cells.into(),
        })
    }

    /// Body made of a single cell, which is both head and tail.
    #[must_use]
    pub fn single(cell: CellCoord) -> Self {
        Self {
            cells: VecDeque::from([cell]),
        }
    }

    /// Cell occupied by the head.
    #[must_use]
    pub fn head(&self) -> CellCoord {
        self.cells[0]
    }

    /// Cell occupied by the tail. Equals the head for a single-cell body.
    #[must_use]
    pub fn tail(&self) -> CellCoord {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells covered by the body.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a body holds at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the body covers the cell.
    #[must_use]
    pub fn contains(&self, cell: CellCoord) -> bool {
        self.cells.contains(&cell)
    }

    /// Iterates the cells from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.cells.iter().copied()
    }

    /// Moves the head onto `next`, keeping the tail in place when growing.
    ///
    /// Entering the current tail is legal only when not growing, because the
    /// tail vacates in the same move. Returns the vacated tail cell, if any.
    pub fn advance(&mut self, next: CellCoord, grow: bool) -> Result<Option<CellCoord>, BodyError> {
        let head = self.head();
        if !head.is_adjacent(next) {
            return Err(BodyError::NotAdjacent { from: head, to: next });
        }

        if self.contains(next) && (grow || next != self.tail()) {
            return Err(BodyError::SelfCollision { cell: next });
        }

        self.cells.push_front(next);
        if grow {
            return Ok(None);
        }
        Ok(self.cells.pop_back())
    }
}

impl TryFrom<Vec<CellCoord>> for Body {
    type Error = BodyError;

    fn try_from(cells: Vec<CellCoord>) -> Result<Self, Self::Error> {
        Self::new(cells)
    }
}

impl From<Body> for Vec<CellCoord> {
    fn from(body: Body) -> Self {
        body.cells.into()
    }
}

/// Errors raised when a body would violate its invariants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BodyError {
    /// A body needs at least one cell.
    #[error("body must contain at least one cell")]
    Empty,
    /// A cell appears more than once.
    #[error("cell ({}, {}) appears more than once", .cell.column(), .cell.row())]
    DuplicateCell {
        /// Repeated cell.
        cell: CellCoord,
    },
    /// A cell does not share an edge with its predecessor.
    #[error(
        "cell {index} at ({}, {}) is not adjacent to its predecessor",
        .cell.column(),
        .cell.row()
    )]
    Disconnected {
        /// Position of the offending cell within the body.
        index: usize,
        /// Offending cell.
        cell: CellCoord,
    },
    /// The head cannot jump to a non-adjacent cell.
    #[error(
        "cannot move from ({}, {}) to non-adjacent ({}, {})",
        .from.column(),
        .from.row(),
        .to.column(),
        .to.row()
    )]
    NotAdjacent {
        /// Current head cell.
        from: CellCoord,
        /// Requested head cell.
        to: CellCoord,
    },
    /// The head would enter a cell the body still covers.
    #[error("head would collide with the body at ({}, {})", .cell.column(), .cell.row())]
    SelfCollision {
        /// Cell where the collision happens.
        cell: CellCoord,
    },
}

/// Dense set of cells blocked for path search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occupancy {
    grid: Grid,
    cells: Vec<bool>,
}

impl Occupancy {
    /// Occupancy with no blocked cells.
    #[must_use]
    pub fn empty(grid: Grid) -> Self {
        Self {
            grid,
            cells: vec![false; grid.cell_count()],
        }
    }

    /// Occupancy covering every cell of the body.
    #[must_use]
    pub fn from_body(grid: Grid, body: &Body) -> Self {
        let mut occupancy = Self::empty(grid);
        occupancy.extend(body.iter());
        occupancy
    }

    /// Marks the cell as blocked. Off-grid cells are ignored.
    pub fn insert(&mut self, cell: CellCoord) {
        if let Some(slot) = self.grid.index(cell).and_then(|index| self.cells.get_mut(index)) {
            *slot = true;
        }
    }

    /// Marks every provided cell as blocked.
    pub fn extend<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = CellCoord>,
    {
        for cell in cells {
            self.insert(cell);
        }
    }

    /// Whether the cell is blocked.
    #[must_use]
    pub fn contains(&self, cell: CellCoord) -> bool {
        self.grid
            .index(cell)
            .and_then(|index| self.cells.get(index).copied())
            .unwrap_or(false)
    }
}

/// Ordered cells to traverse, excluding the starting cell.
///
/// The first cell is the next head position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    cells: Vec<CellCoord>,
}

impl Route {
    /// Wraps the provided cells.
    #[must_use]
    pub fn new(cells: Vec<CellCoord>) -> Self {
        Self { cells }
    }

    /// Cells in traversal order.
    #[must_use]
    pub fn cells(&self) -> &[CellCoord] {
        &self.cells
    }

    /// Number of steps in the route.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the route holds no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Next cell to enter.
    #[must_use]
    pub fn first(&self) -> Option<CellCoord> {
        self.cells.first().copied()
    }

    /// Destination of the route.
    #[must_use]
    pub fn last(&self) -> Option<CellCoord> {
        self.cells.last().copied()
    }

    /// Appends `next` after this route's destination.
    #[must_use]
    pub fn chain(mut self, next: Route) -> Route {
        self.cells.extend(next.cells);
        self
    }

    /// Splits off the next cell, returning it with the remaining route.
    #[must_use]
    pub fn split_first(mut self) -> Option<(CellCoord, Route)> {
        if self.cells.is_empty() {
            return None;
        }
        let first = self.cells.remove(0);
        Some((first, self))
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Body, BodyError, CellCoord, Direction, GameOverReason, Grid, GridError, Occupancy, Route,
    };
    use serde::{de::DeserializeOwned, Serialize};

    fn cell(column: u32, row: u32) -> CellCoord {
        CellCoord::new(column, row)
    }

    #[test]
    fn manhattan_distance_matches_expectation() {
        let origin = cell(1, 1);
        let destination = cell(4, 3);
        assert_eq!(origin.manhattan_distance(destination), 5);
        assert_eq!(destination.manhattan_distance(origin), 5);
    }

    #[test]
    fn neighbors_follow_up_down_left_right_order() {
        let grid = Grid::new(3, 3).expect("valid grid");
        let neighbors: Vec<_> = grid.neighbors(cell(1, 1)).collect();
        assert_eq!(neighbors, vec![cell(1, 0), cell(1, 2), cell(0, 1), cell(2, 1)]);
    }

    #[test]
    fn neighbors_skip_cells_beyond_the_edges() {
        let grid = Grid::new(3, 2).expect("valid grid");
        let corner: Vec<_> = grid.neighbors(cell(0, 0)).collect();
        assert_eq!(corner, vec![cell(0, 1), cell(1, 0)]);

        let opposite: Vec<_> = grid.neighbors(cell(2, 1)).collect();
        assert_eq!(opposite, vec![cell(2, 0), cell(1, 1)]);

        let single = Grid::new(1, 1).expect("valid grid");
        assert_eq!(single.neighbors(cell(0, 0)).count(), 0);
    }

    #[test]
    fn in_bounds_respects_dimensions() {
        let grid = Grid::new(4, 2).expect("valid grid");
        assert!(grid.in_bounds(cell(3, 1)));
        assert!(!grid.in_bounds(cell(4, 1)));
        assert!(!grid.in_bounds(cell(0, 2)));
    }

    #[test]
    fn grid_from_board_truncates_partial_cells() {
        let grid = Grid::from_board(700, 710, 25).expect("valid board");
        assert_eq!((grid.columns(), grid.rows()), (28, 28));
        assert_eq!(grid.cell_count(), 784);
    }

    #[test]
    fn grid_rejects_degenerate_configuration() {
        assert_eq!(Grid::from_board(700, 700, 0), Err(GridError::ZeroCellSize));
        assert!(matches!(
            Grid::from_board(20, 700, 25),
            Err(GridError::BoardSmallerThanCell { .. })
        ));
        assert_eq!(Grid::new(0, 3), Err(GridError::Empty { columns: 0, rows: 3 }));
    }

    #[test]
    fn direction_between_neighbors() {
        let origin = cell(3, 3);
        assert_eq!(Direction::between(origin, cell(3, 2)), Some(Direction::Up));
        assert_eq!(Direction::between(origin, cell(3, 4)), Some(Direction::Down));
        assert_eq!(Direction::between(origin, cell(2, 3)), Some(Direction::Left));
        assert_eq!(Direction::between(origin, cell(4, 3)), Some(Direction::Right));
        assert_eq!(Direction::between(origin, origin), None);
        assert_eq!(Direction::between(origin, cell(4, 4)), None);
    }

    #[test]
    fn body_rejects_broken_invariants() {
        assert_eq!(Body::new(Vec::new()), Err(BodyError::Empty));
        assert_eq!(
            Body::new(vec![cell(0, 0), cell(0, 1), cell(0, 0)]),
            Err(BodyError::DuplicateCell { cell: cell(0, 0) })
        );
        assert_eq!(
            Body::new(vec![cell(0, 0), cell(1, 1)]),
            Err(BodyError::Disconnected {
                index: 1,
                cell: cell(1, 1)
            })
        );
    }

    #[test]
    fn body_advance_truncates_or_grows() {
        let mut body = Body::new(vec![cell(1, 1), cell(1, 0)]).expect("valid body");

        let vacated = body.advance(cell(1, 2), false).expect("legal move");
        assert_eq!(vacated, Some(cell(1, 0)));
        assert_eq!(body.iter().collect::<Vec<_>>(), vec![cell(1, 2), cell(1, 1)]);

        let vacated = body.advance(cell(2, 2), true).expect("legal move");
        assert_eq!(vacated, None);
        assert_eq!(body.len(), 3);
        assert_eq!(body.tail(), cell(1, 1));
    }

    #[test]
    fn body_advance_may_follow_the_vacating_tail() {
        let mut body =
            Body::new(vec![cell(0, 0), cell(1, 0), cell(1, 1), cell(0, 1)]).expect("valid body");

        assert_eq!(body.advance(cell(0, 1), false), Ok(Some(cell(0, 1))));
        assert_eq!(body.head(), cell(0, 1));
        assert_eq!(body.len(), 4);
    }

    #[test]
    fn body_advance_rejects_collisions() {
        let mut body =
            Body::new(vec![cell(0, 0), cell(1, 0), cell(1, 1), cell(0, 1)]).expect("valid body");

        assert_eq!(
            body.advance(cell(1, 0), false),
            Err(BodyError::SelfCollision { cell: cell(1, 0) })
        );
        assert_eq!(
            body.advance(cell(0, 1), true),
            Err(BodyError::SelfCollision { cell: cell(0, 1) })
        );
        assert!(matches!(
            body.advance(cell(2, 2), false),
            Err(BodyError::NotAdjacent { .. })
        ));
        assert_eq!(body.head(), cell(0, 0));
    }

    #[test]
    fn occupancy_mirrors_body_cells() {
        let grid = Grid::new(3, 3).expect("valid grid");
        let body = Body::new(vec![cell(0, 0), cell(0, 1)]).expect("valid body");
        let mut occupancy = Occupancy::from_body(grid, &body);

        assert!(occupancy.contains(cell(0, 0)));
        assert!(occupancy.contains(cell(0, 1)));
        assert!(!occupancy.contains(cell(1, 1)));
        assert!(!occupancy.contains(cell(9, 9)));

        occupancy.extend([cell(2, 2), cell(7, 7)]);
        assert!(occupancy.contains(cell(2, 2)));
    }

    #[test]
    fn route_chain_and_split() {
        let route = Route::new(vec![cell(0, 1), cell(0, 2)]).chain(Route::new(vec![cell(1, 2)]));
        assert_eq!(route.len(), 3);
        assert_eq!(route.last(), Some(cell(1, 2)));

        let (next, rest) = route.split_first().expect("non-empty route");
        assert_eq!(next, cell(0, 1));
        assert_eq!(rest.cells(), &[cell(0, 2), cell(1, 2)]);
        assert!(Route::default().split_first().is_none());
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn value_types_round_trip_through_bincode() {
        assert_round_trip(&cell(5, 7));
        assert_round_trip(&Direction::Left);
        assert_round_trip(&GameOverReason::NoLegalMove);
        assert_round_trip(&Route::new(vec![cell(1, 1), cell(1, 2)]));
        assert_round_trip(&Body::new(vec![cell(2, 2), cell(2, 3)]).expect("valid body"));
    }

    #[test]
    fn body_deserialization_revalidates_cells() {
        let bytes = bincode::serialize(&vec![cell(0, 0), cell(2, 0)]).expect("serialize");
        let restored: Result<Body, _> = bincode::deserialize(&bytes);
        assert!(restored.is_err());
    }
}
