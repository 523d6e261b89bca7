use grid_util::point::Point;
use log::{debug, info, warn};

use crate::maze::{CellState, Maze, DEFAULT_VALID_TARGETS};

/// How a solve ended. Neither a missing endpoint nor an unreachable end is an error: both still
/// produce snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The maze has no start or no end cell; the only snapshot is the input.
    MissingEndpoint,
    /// Every reachable cell was discovered without meeting the end.
    Unreachable,
    /// A shortest path was found. `path` runs from the start to the end, both included.
    Solved { path: Vec<Point> },
}

/// Everything a solve produces: the snapshots to render plus what happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveReport {
    pub snapshots: Vec<Maze>,
    pub outcome: SolveOutcome,
    /// Number of expansion waves performed.
    pub waves: usize,
}

/// Breadth-first maze solver. The search expands the whole frontier of one depth at a time,
/// leaving a [CellState::CameFrom] marker on every cell it discovers, and walks those markers
/// back once the end has been seen.
#[derive(Clone, Debug)]
pub struct BfsSolver {
    /// States the search may step onto. [CellState::CameFrom] markers in here are ignored, otherwise
    /// discovered cells would keep rediscovering each other.
    pub valid_targets: Vec<CellState>,
}

impl Default for BfsSolver {
    fn default() -> BfsSolver {
        BfsSolver {
            valid_targets: DEFAULT_VALID_TARGETS.to_vec(),
        }
    }
}

impl BfsSolver {
    pub fn new() -> BfsSolver {
        BfsSolver::default()
    }

    pub fn with_valid_targets(valid_targets: Vec<CellState>) -> BfsSolver {
        BfsSolver { valid_targets }
    }

    /// Solves `maze` and returns the snapshots to render in order. With `history`, the working grid
    /// is captured before every expansion wave. When a path exists the last snapshot is the input
    /// with the path marked [CellState::Solution]; otherwise no such snapshot is appended.
    pub fn solve(&self, maze: &Maze, history: bool) -> Vec<Maze> {
        self.solve_report(maze, history).snapshots
    }

    /// Like [solve](Self::solve), but also reports the outcome and the number of waves.
    pub fn solve_report(&self, maze: &Maze, history: bool) -> SolveReport {
        let (start, end) = match (maze.find_cell(CellState::Start), maze.find_cell(CellState::End)) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                info!("Maze has no start or no end, nothing to solve");
                return SolveReport {
                    snapshots: vec![maze.clone()],
                    outcome: SolveOutcome::MissingEndpoint,
                    waves: 0,
                };
            }
        };

        let mut snapshots = Vec::new();
        let mut active = maze.clone();
        let mut frontier = vec![start];
        let mut winner: Option<Point> = None;
        let mut waves = 0;
        let valid_targets = self
            .valid_targets
            .iter()
            .copied()
            .filter(|state| !state.is_transient())
            .collect::<Vec<CellState>>();

        while !frontier.is_empty() && winner.is_none() {
            if history {
                snapshots.push(active.clone());
            }
            debug!("Wave {}: expanding {} cells", waves, frontier.len());
            waves += 1;

            let mut next = Vec::new();
            for tile in frontier {
                let neighbourhood = active.neighbour_validity(tile, &valid_targets);
                for direction in neighbourhood.directions() {
                    let neighbour = direction.step(tile);
                    next.push(neighbour);
                    if neighbour == end && winner.is_none() {
                        winner = Some(tile);
                    }
                    active.mark(neighbour, CellState::CameFrom(direction.opposite()));
                }
            }
            frontier = next;
        }

        let outcome = match winner {
            Some(tile) => {
                info!("{} is reachable from {}, marking path", end, start);
                let (solved, path) = reconstruct(maze, &active, tile, end);
                snapshots.push(solved);
                SolveOutcome::Solved { path }
            }
            None => {
                info!("{} is not reachable from {}", end, start);
                SolveOutcome::Unreachable
            }
        };
        SolveReport {
            snapshots,
            outcome,
            waves,
        }
    }
}

/// Walks the markers in `active` back from `tile`, the cell that discovered the end, until a cell
/// that is the start in `maze`. Returns a copy of `maze` with the walked cells set to
/// [CellState::Solution] and the full path from start to end.
fn reconstruct(maze: &Maze, active: &Maze, tile: Point, end: Point) -> (Maze, Vec<Point>) {
    let mut solved = maze.clone();
    let mut path = vec![end];
    let mut current = tile;
    while maze.state_at(current) != Some(CellState::Start) {
        solved.mark(current, CellState::Solution);
        path.push(current);
        match active.state_at(current) {
            Some(CellState::CameFrom(direction)) => current = direction.step(current),
            other => {
                warn!("No provenance marker at {}: found {:?}", current, other);
                break;
            }
        }
    }
    path.push(current);
    path.reverse();
    (solved, path)
}
