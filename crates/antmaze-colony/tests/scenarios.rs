use antmaze_colony::{Ant, AntState, ColonySettings, Director, StepWeights};
use antmaze_core::{Grid, Maze, Point, Venue};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::sync::Arc;
use std::thread;

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn assert_walkable(maze: &Maze, path: &[Point]) {
    for pair in path.windows(2) {
        assert!(pair[0].is_adjacent(&pair[1]), "{} -> {} is not a move", pair[0], pair[1]);
    }
    for point in path {
        assert!(maze.is_passable(*point), "{point} is a wall");
    }
}

#[test]
fn corridor_is_solved_exactly_from_the_first_iteration() {
    let grid = Grid::from_ascii(&["..."]).unwrap();
    let maze = Arc::new(Maze::without_venues(grid, p(0, 0), p(2, 0)).unwrap());
    let weights = StepWeights::new(0.0, 0.0, 0.5, 1.0).unwrap();

    for ants in [1, 3, 25] {
        let director = Director::new(Arc::clone(&maze), ColonySettings::new(weights, ants)).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(ants as u64);
        for index in 1..=5 {
            let report = director.one_iteration(index, &mut rng);
            assert_eq!(report.legs.len(), 1);
            assert_eq!(report.legs[0].done, ants);
            assert_eq!(report.route_len, Some(3));
            assert_eq!(
                director.best_route().unwrap().as_slice(),
                &[p(0, 0), p(1, 0), p(2, 0)]
            );
        }
    }
}

#[test]
fn unreachable_end_never_publishes_a_route() {
    let grid = Grid::from_ascii(&["...#.", "...#."]).unwrap();
    let maze = Arc::new(Maze::without_venues(grid, p(0, 0), p(4, 0)).unwrap());

    for weights in [
        StepWeights::new(0.0, 0.0, 0.5, 1.0).unwrap(),
        StepWeights::new(0.0, 0.2, 0.5, 1.0).unwrap(),
    ] {
        let director = Director::new(Arc::clone(&maze), ColonySettings::new(weights, 10)).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(21);
        for index in 1..=10 {
            let report = director.one_iteration(index, &mut rng);
            assert_eq!(report.successes(), 0);
            assert_eq!(report.legs[0].stuck + report.legs[0].timed_out, 10);
            assert_eq!(report.route_len, None);
        }
        assert!(director.legs()[0].best_path().is_none());
        assert!(director.best_route().is_none());
    }
}

#[test]
fn explicit_visit_order_decides_the_legs() {
    let grid = Grid::from_ascii(&["....", "....", "...."]).unwrap();
    let a = p(1, 0);
    let b = p(3, 1);
    let maze = Maze::with_visit_order(
        grid,
        p(0, 0),
        p(0, 2),
        vec![Venue::new("A", a), Venue::new("B", b)],
        &["B", "A"],
    )
    .unwrap();
    let weights = StepWeights::new(0.0, 0.1, 0.5, 1.0).unwrap();
    let director = Director::new(Arc::new(maze), ColonySettings::new(weights, 5)).unwrap();

    let legs: Vec<_> = director.legs().iter().map(|l| (l.start(), l.end())).collect();
    assert_eq!(legs, vec![(p(0, 0), b), (b, a), (a, p(0, 2))]);
}

#[test]
fn published_route_is_the_joined_leg_paths() {
    let grid = Grid::from_ascii(&["......", ".##.#.", "......", ".#..#."]).unwrap();
    let maze = Maze::with_sequential_venues(
        grid,
        p(0, 0),
        p(5, 3),
        vec![Venue::new("2", p(3, 3)), Venue::new("1", p(5, 0))],
    )
    .unwrap();
    let weights = StepWeights::new(0.0, 0.05, 0.3, 1.0).unwrap();
    let director = Director::new(Arc::new(maze), ColonySettings::new(weights, 30)).unwrap();

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1234);
    let mut last_len = usize::MAX;
    for index in 1..=20 {
        director.one_iteration(index, &mut rng);
        let Some(route) = director.best_route() else {
            continue;
        };
        let legs: Vec<_> = director
            .legs()
            .iter()
            .map(|l| l.best_path().unwrap())
            .collect();
        let total: usize = legs.iter().map(|l| l.len()).sum();
        assert_eq!(route.len(), total - (legs.len() - 1));
        assert_eq!(route.first(), Some(&p(0, 0)));
        assert_eq!(route.last(), Some(&p(5, 3)));
        assert!(route.len() <= last_len);
        assert_walkable(director.maze(), &route);
        last_len = route.len();
    }
    assert!(last_len < usize::MAX);
}

#[test]
fn concurrent_reader_only_sees_complete_routes() {
    let grid = Grid::from_ascii(&[
        "........",
        ".######.",
        "........",
        "######..",
        "........",
    ])
    .unwrap();
    let maze = Maze::with_sequential_venues(grid, p(0, 0), p(0, 4), vec![Venue::new("1", p(7, 0))])
        .unwrap();
    let weights = StepWeights::new(0.0, 0.05, 0.3, 1.0).unwrap();
    let director = Arc::new(Director::new(Arc::new(maze), ColonySettings::new(weights, 20)).unwrap());

    let reader = {
        let director = Arc::clone(&director);
        thread::spawn(move || {
            let mut seen = 0usize;
            while !director.is_interrupted() {
                if let Some(route) = director.best_route() {
                    assert_eq!(route.first(), Some(&p(0, 0)));
                    assert_eq!(route.last(), Some(&p(0, 4)));
                    assert!(route.contains(&p(7, 0)));
                    assert_walkable(director.maze(), &route);
                    seen += 1;
                }
                thread::yield_now();
            }
            seen
        })
    };

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
    let summary = director.run(40, &mut rng);
    reader.join().unwrap();

    assert_eq!(summary.iterations, 40);
    assert!(director.is_interrupted());
}

fn arb_maze() -> impl Strategy<Value = (Maze, Point, Point)> {
    (2usize..7, 2usize..7)
        .prop_flat_map(|(w, h)| {
            (
                prop::collection::vec(prop::bool::weighted(0.7), w * h),
                0..w,
                0..h,
                0..w,
                0..h,
                Just(w),
            )
        })
        .prop_map(|(mut cells, sx, sy, ex, ey, w)| {
            cells[sy * w + sx] = true;
            cells[ey * w + ex] = true;
            let rows = cells.chunks(w).map(|r| r.to_vec()).collect();
            let start = p(sx as i32, sy as i32);
            let end = p(ex as i32, ey as i32);
            let maze = Maze::without_venues(Grid::from_rows(rows).unwrap(), start, end).unwrap();
            (maze, start, end)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_ant_walks_are_legal(
        (maze, start, end) in arb_maze(),
        reverse in 0.0..1.0f64,
        old in 0.0..1.0f64,
        new in 0.01..1.0f64,
        max_steps in 0usize..60,
        seed in any::<u64>(),
    ) {
        let weights = StepWeights::new(0.0, reverse, old, new).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut ant = Ant::new(&maze, &weights, start, end, max_steps);
        let state = ant.run(&mut rng);

        prop_assert!(state.is_terminal());
        prop_assert_eq!(ant.path()[0], start);
        prop_assert!(ant.steps() <= max_steps);
        for pair in ant.path().windows(2) {
            prop_assert!(pair[0].is_adjacent(&pair[1]));
            prop_assert!(maze.is_passable(pair[1]));
        }
        match state {
            AntState::Done => prop_assert_eq!(ant.path().last(), Some(&end)),
            AntState::TimedOut => prop_assert_eq!(ant.steps(), max_steps),
            _ => {}
        }
    }
}
