use criterion::{criterion_group, criterion_main, Criterion};
use grid_maze_solver::{BfsSolver, EditMode, Maze, Point};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

/// Random mazes with the start and end in opposite corners.
fn random_mazes(n: usize, count: usize) -> Vec<Maze> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..count)
        .map(|_| {
            let mut maze = Maze::clear(n, n).unwrap();
            for x in 0..n as i32 {
                for y in 0..n as i32 {
                    if rng.gen_bool(0.3) {
                        maze.apply(EditMode::Draw, Point::new(x, y)).unwrap();
                    }
                }
            }
            maze.place_start(Point::new(0, 0)).unwrap();
            maze.place_end(Point::new(n as i32 - 1, n as i32 - 1)).unwrap();
            maze
        })
        .collect()
}

fn solve_bench(c: &mut Criterion) {
    let solver = BfsSolver::new();
    for n in [16, 64] {
        let mazes = random_mazes(n, 32);
        for history in [false, true] {
            let history_str = if history { " (history)" } else { "" };
            c.bench_function(format!("bfs {n}x{n}{history_str}").as_str(), |b| {
                b.iter(|| {
                    for maze in &mazes {
                        black_box(solver.solve(maze, history));
                    }
                })
            });
        }
    }
}

criterion_group!(benches, solve_bench);
criterion_main!(benches);
