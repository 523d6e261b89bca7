/// Fuzzes the solver by checking for many random mazes that a path is found exactly when the end lies
/// on the same connected component as the start, and that the path found is as short as the
/// distance from a plain breadth-first search.
use grid_maze_solver::*;
use rand::prelude::*;
use std::collections::VecDeque;

const PASSABLE: [CellState; 3] = [CellState::Blank, CellState::Start, CellState::End];

fn random_maze(w: usize, h: usize, rng: &mut StdRng) -> Maze {
    let mut maze = Maze::clear(w, h).unwrap();
    for x in 0..w as i32 {
        for y in 0..h as i32 {
            if rng.gen_bool(0.4) {
                maze.apply(EditMode::Draw, Point::new(x, y)).unwrap();
            }
        }
    }
    maze
}

fn random_point(maze: &Maze, rng: &mut StdRng) -> Point {
    Point::new(
        rng.gen_range(0..maze.width()) as i32,
        rng.gen_range(0..maze.height()) as i32,
    )
}

/// Number of steps on the shortest path, counted with a queue and a distance table.
fn bfs_distance(maze: &Maze, start: Point, end: Point) -> Option<usize> {
    let mut distance = vec![vec![None; maze.width()]; maze.height()];
    distance[start.y as usize][start.x as usize] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        let d = distance[p.y as usize][p.x as usize].unwrap();
        if p == end {
            return Some(d);
        }
        for direction in Direction::NSEW {
            let n = direction.step(p);
            if maze.get(n).is_ok_and(|s| PASSABLE.contains(&s))
                && distance[n.y as usize][n.x as usize].is_none()
            {
                distance[n.y as usize][n.x as usize] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_MAZES: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let solver = BfsSolver::new();
    for _ in 0..N_MAZES {
        let mut maze = random_maze(N, N, &mut rng);
        let start = random_point(&maze, &mut rng);
        let end = random_point(&maze, &mut rng);
        if start == end {
            continue;
        }
        maze.place_start(start).unwrap();
        maze.place_end(end).unwrap();

        let reachable = maze.reachable(start, end, &PASSABLE);
        let report = solver.solve_report(&maze, false);
        // Show the maze if the outcome disagrees
        let solved = matches!(report.outcome, SolveOutcome::Solved { .. });
        if solved != reachable {
            println!("{}", maze);
        }
        assert_eq!(solved, reachable);
        assert_eq!(report.snapshots.len(), usize::from(solved));

        if let SolveOutcome::Solved { path } = report.outcome {
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
            assert_eq!(Some(path.len() - 1), bfs_distance(&maze, start, end));
            for pair in path.windows(2) {
                let step = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
                assert_eq!(step, 1);
            }
            let marked = &report.snapshots[0];
            for p in &path[1..path.len() - 1] {
                assert_eq!(marked.get(*p), Ok(CellState::Solution));
            }
        }
    }
}

#[test]
fn fuzz_history() {
    const N: usize = 8;
    const N_MAZES: usize = 500;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_MAZES {
        let mut maze = random_maze(N, N, &mut rng);
        maze.place_start(Point::new(0, 0)).unwrap();
        maze.place_end(Point::new(N as i32 - 1, N as i32 - 1)).unwrap();
        let report = BfsSolver::new().solve_report(&maze, true);
        let solved = usize::from(matches!(report.outcome, SolveOutcome::Solved { .. }));
        assert_eq!(report.snapshots.len(), report.waves + solved);
        // Markers only ever accumulate from one wave to the next.
        for pair in report.snapshots[..report.waves].windows(2) {
            let count = |m: &Maze| {
                m.to_rows()
                    .into_iter()
                    .flatten()
                    .filter(|s| s.is_transient())
                    .count()
            };
            assert!(count(&pair[0]) < count(&pair[1]));
        }
    }
}
