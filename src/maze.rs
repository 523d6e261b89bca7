use core::fmt;
use std::str::FromStr;

use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use itertools::{iproduct, Itertools};
use petgraph::unionfind::UnionFind;

use crate::MazeError;

/// One of the four axis-aligned directions on the grid. [Direction::Up] decreases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Directions in the order neighbours are evaluated: north, south, east, west.
    pub const NSEW: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The `(dx, dy)` of a single step.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The point one step away from `point`, which may lie outside the grid.
    pub fn step(self, point: Point) -> Point {
        let (dx, dy) = self.offset();
        Point::new(point.x + dx, point.y + dy)
    }
}

/// The value stored in a cell of a [Maze].
///
/// The first five variants are the static states an editor places and renders. [CellState::CameFrom]
/// only appears in the working copy of the solver and in the history snapshots it emits: it records
/// the direction in which the cell that discovered this one lies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Blank,
    Wall,
    Start,
    End,
    Solution,
    CameFrom(Direction),
}

impl CellState {
    pub fn is_transient(self) -> bool {
        matches!(self, CellState::CameFrom(_))
    }

    fn symbol(self) -> char {
        match self {
            CellState::Blank => '.',
            CellState::Wall => '#',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Solution => '*',
            CellState::CameFrom(Direction::Up) => '^',
            CellState::CameFrom(Direction::Down) => 'v',
            CellState::CameFrom(Direction::Left) => '<',
            CellState::CameFrom(Direction::Right) => '>',
        }
    }

    fn from_symbol(symbol: char) -> Option<CellState> {
        Some(match symbol {
            '.' => CellState::Blank,
            '#' => CellState::Wall,
            'S' => CellState::Start,
            'E' => CellState::End,
            '*' => CellState::Solution,
            '^' => CellState::CameFrom(Direction::Up),
            'v' => CellState::CameFrom(Direction::Down),
            '<' => CellState::CameFrom(Direction::Left),
            '>' => CellState::CameFrom(Direction::Right),
            _ => return None,
        })
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// States a search may step onto unless configured otherwise. [CellState::Start] is left out since
/// the search begins there.
pub const DEFAULT_VALID_TARGETS: [CellState; 2] = [CellState::Blank, CellState::End];

/// Which of the four neighbours of a cell exist and hold a valid target state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbourhood {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl Neighbourhood {
    pub fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.north,
            Direction::Down => self.south,
            Direction::Right => self.east,
            Direction::Left => self.west,
        }
    }

    /// The valid directions in north, south, east, west order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::NSEW.into_iter().filter(move |d| self.get(*d))
    }
}

/// The paint modes of the maze editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditMode {
    Draw,
    Erase,
    Start,
    End,
}

/// A fixed-size, row-major grid of [CellState]s. `x` indexes columns and `y` indexes rows, both
/// starting at the top-left corner.
#[derive(Clone, Debug)]
pub struct Maze {
    pub grid: SimpleGrid<CellState>,
}

impl Maze {
    /// A maze of the given dimensions with every cell [CellState::Blank].
    pub fn clear(width: usize, height: usize) -> Result<Maze, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        Ok(Maze {
            grid: SimpleGrid::new(width, height, CellState::Blank),
        })
    }

    /// Builds a maze from rows of cells. Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Maze, MazeError> {
        let width = rows.first().map_or(0, Vec::len);
        let mut maze = Maze::clear(width, rows.len())?;
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::RaggedRows {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, state) in row.into_iter().enumerate() {
                maze.grid.set(x, y, state);
            }
        }
        Ok(maze)
    }

    pub fn to_rows(&self) -> Vec<Vec<CellState>> {
        (0..self.height())
            .map(|y| (0..self.width()).map(|x| self.grid.get(x, y)).collect())
            .collect()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        self.grid.point_in_bounds(point)
    }

    pub fn get(&self, point: Point) -> Result<CellState, MazeError> {
        if self.in_bounds(point) {
            Ok(self.grid.get_point(point))
        } else {
            Err(MazeError::OutOfBounds(point))
        }
    }

    pub fn set(&mut self, point: Point, state: CellState) -> Result<(), MazeError> {
        if self.in_bounds(point) {
            self.grid.set_point(point, state);
            Ok(())
        } else {
            Err(MazeError::OutOfBounds(point))
        }
    }

    /// The state at `point` if it lies on the grid.
    pub(crate) fn state_at(&self, point: Point) -> Option<CellState> {
        self.in_bounds(point).then(|| self.grid.get_point(point))
    }

    /// Writes a cell the caller already knows to be on the grid.
    pub(crate) fn mark(&mut self, point: Point, state: CellState) {
        debug_assert!(self.in_bounds(point));
        self.grid.set_point(point, state);
    }

    fn points(&self) -> impl Iterator<Item = Point> {
        iproduct!(0..self.height(), 0..self.width()).map(|(y, x)| Point::new(x as i32, y as i32))
    }

    /// Scans top to bottom, left to right and returns the first cell holding `state`. When a maze
    /// holds several [CellState::Start] or [CellState::End] cells, this order decides which one
    /// counts.
    pub fn find_cell(&self, state: CellState) -> Option<Point> {
        self.points().find(|p| self.grid.get_point(*p) == state)
    }

    pub fn contains(&self, state: CellState) -> bool {
        self.find_cell(state).is_some()
    }

    /// For each direction, whether a neighbour exists there and its state is one of `valid_states`.
    pub fn neighbour_validity(&self, point: Point, valid_states: &[CellState]) -> Neighbourhood {
        let valid = |direction: Direction| {
            self.state_at(direction.step(point))
                .is_some_and(|state| valid_states.contains(&state))
        };
        Neighbourhood {
            north: valid(Direction::Up),
            south: valid(Direction::Down),
            east: valid(Direction::Right),
            west: valid(Direction::Left),
        }
    }

    /// Places the single start cell, turning any previous start cell blank.
    pub fn place_start(&mut self, point: Point) -> Result<(), MazeError> {
        self.place_unique(point, CellState::Start)
    }

    /// Places the single end cell, turning any previous end cell blank.
    pub fn place_end(&mut self, point: Point) -> Result<(), MazeError> {
        self.place_unique(point, CellState::End)
    }

    fn place_unique(&mut self, point: Point, state: CellState) -> Result<(), MazeError> {
        if !self.in_bounds(point) {
            return Err(MazeError::OutOfBounds(point));
        }
        let previous = self
            .points()
            .filter(|p| self.grid.get_point(*p) == state)
            .collect::<Vec<Point>>();
        for p in previous {
            self.grid.set_point(p, CellState::Blank);
        }
        self.grid.set_point(point, state);
        Ok(())
    }

    /// Applies one editor click at `point`.
    pub fn apply(&mut self, mode: EditMode, point: Point) -> Result<(), MazeError> {
        match mode {
            EditMode::Draw => self.set(point, CellState::Wall),
            EditMode::Erase => self.set(point, CellState::Blank),
            EditMode::Start => self.place_start(point),
            EditMode::End => self.place_end(point),
        }
    }

    /// Joins every pair of 4-adjacent cells whose states are both in `passable`.
    pub fn components(&self, passable: &[CellState]) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.width() * self.height());
        for point in self.points() {
            if !passable.contains(&self.grid.get_point(point)) {
                continue;
            }
            // Looking down and right is enough to visit every edge once.
            for direction in [Direction::Down, Direction::Right] {
                let neighbour = direction.step(point);
                if self
                    .state_at(neighbour)
                    .is_some_and(|state| passable.contains(&state))
                {
                    components.union(
                        self.grid.get_ix_point(&point),
                        self.grid.get_ix_point(&neighbour),
                    );
                }
            }
        }
        components
    }

    /// Checks if `a` and `b` lie on the same component of `passable` cells. Nothing is cached: every
    /// call rebuilds the components, visiting each cell once. Callers asking many questions about
    /// an unchanged maze should build [components](Self::components) once and query that.
    pub fn reachable(&self, a: Point, b: Point, passable: &[CellState]) -> bool {
        if !self.in_bounds(a) || !self.in_bounds(b) {
            return false;
        }
        self.components(passable)
            .equiv(self.grid.get_ix_point(&a), self.grid.get_ix_point(&b))
    }
}

impl PartialEq for Maze {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self
                .points()
                .all(|p| self.grid.get_point(p) == other.grid.get_point(p))
    }
}

impl Eq for Maze {}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() {
            let row = (0..self.width()).map(|x| self.grid.get(x, y)).join("");
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Parses the form written by [Display](fmt::Display), one row per line. Blank lines and
    /// surrounding whitespace are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line, text)| {
                text.chars()
                    .map(|symbol| {
                        CellState::from_symbol(symbol)
                            .ok_or(MazeError::UnknownSymbol { symbol, line })
                    })
                    .collect::<Result<Vec<CellState>, MazeError>>()
            })
            .collect::<Result<Vec<_>, MazeError>>()?;
        Maze::from_rows(rows)
    }
}
