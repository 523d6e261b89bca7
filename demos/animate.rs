use grid_maze_solver::{solve, CellState, EditMode, Maze, Point};
use std::thread;
use std::time::Duration;

// Solves the maze below and plays back the search, one frame per expansion wave.
//
// S#.....#..
// .##.##...#
// .....###.#
// ####.#...#
// .#...##.##
// ...###..#.
// .###.####.
// .....#....
// ##.#...#.#
// ...#.###.E
//
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// Reached cells show an arrow pointing back at the cell that reached them. The last frame marks
// the shortest path with *.

const MAZE: &str = "
S#.....#..
.##.##...#
.....###.#
####.#...#
.#...##.##
...###..#.
.###.####.
.....#....
##.#...#.#
...#.###.E
";

const FRAME_DELAY: Duration = Duration::from_millis(150);

fn main() {
    env_logger::init();
    let mut maze: Maze = MAZE.parse().unwrap();
    // Knock out the wall next to the start, as a click in erase mode would.
    maze.apply(EditMode::Erase, Point::new(1, 0)).unwrap();

    let frames = solve(&maze, true);
    for (i, frame) in frames.iter().enumerate() {
        println!("Frame {}:\n{}", i, frame);
        thread::sleep(FRAME_DELAY);
    }
    match frames.last() {
        Some(last) if last.contains(CellState::Solution) => println!("Solved."),
        _ => println!("No path from start to end."),
    }
}
