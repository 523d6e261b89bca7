//! # grid_maze_solver
//!
//! Solves hand-drawn mazes on a 4-connected grid with
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search). A [Maze] holds
//! walls, a start and an end; [solve] returns a sequence of snapshots of the search, one per
//! expansion wave if requested, ending with the maze with a shortest path marked.
//!
//! Instead of a tree of parent pointers the search leaves a breadcrumb in every cell it discovers
//! ([CellState::CameFrom]) and follows those back from the end.
pub mod maze;
pub mod solver;

pub use crate::maze::{CellState, Direction, EditMode, Maze, Neighbourhood, DEFAULT_VALID_TARGETS};
pub use crate::solver::{BfsSolver, SolveOutcome, SolveReport};
pub use grid_util::point::Point;

use thiserror::Error;

/// Errors from building or editing a [Maze]. Solving never fails.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A maze needs at least one row and one column.
    #[error("invalid maze dimensions {width}x{height}, both must be positive")]
    InvalidDimension { width: usize, height: usize },
    /// A row differs in length from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A coordinate outside the maze.
    #[error("{0:?} lies outside the maze")]
    OutOfBounds(Point),
    /// A character in the text form that names no [CellState].
    #[error("unknown cell symbol {symbol:?} on line {line}")]
    UnknownSymbol { symbol: char, line: usize },
}

/// Solves `maze` with the default [BfsSolver]. See [BfsSolver::solve].
pub fn solve(maze: &Maze, history: bool) -> Vec<Maze> {
    BfsSolver::default().solve(maze, history)
}
