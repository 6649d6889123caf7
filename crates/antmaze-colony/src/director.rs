use crate::error::ColonyError;
use crate::leg::Leg;
use crate::settings::ColonySettings;
use crate::types::{ColonyReport, IterationReport, RunSummary};
use antmaze_core::{Maze, Point};
use arc_swap::ArcSwapOption;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Splits the journey into legs, drives colony iterations over them and
/// publishes the best overall route.
///
/// A `Director` is meant to be shared (`Arc<Director>`) between the thread
/// driving iterations and any number of readers. Readers only touch
/// [`Director::best_route`] and the interrupt flag.
#[derive(Debug)]
pub struct Director {
    maze: Arc<Maze>,
    legs: Vec<Leg>,
    settings: ColonySettings,
    best_route: ArcSwapOption<Vec<Point>>,
    interrupted: AtomicBool,
    iterations: AtomicUsize,
}

impl Director {
    /// Legs run `start -> venue_1 -> ... -> venue_n -> end` in the maze's
    /// visitation order.
    pub fn new(maze: Arc<Maze>, settings: ColonySettings) -> Result<Self, ColonyError> {
        let waypoints = maze.waypoints();
        Self::from_waypoints(maze, &waypoints, settings)
    }

    pub fn from_waypoints(
        maze: Arc<Maze>,
        waypoints: &[Point],
        settings: ColonySettings,
    ) -> Result<Self, ColonyError> {
        if waypoints.len() < 2 {
            return Err(ColonyError::Config(format!(
                "a route needs at least 2 waypoints, got {}",
                waypoints.len()
            )));
        }

        let legs = waypoints
            .windows(2)
            .map(|pair| Leg::new(Arc::clone(&maze), pair[0], pair[1]))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            maze,
            legs,
            settings,
            best_route: ArcSwapOption::empty(),
            interrupted: AtomicBool::new(false),
            iterations: AtomicUsize::new(0),
        })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn settings(&self) -> &ColonySettings {
        &self.settings
    }

    /// The last published route, if every leg has been solved at least once.
    pub fn best_route(&self) -> Option<Arc<Vec<Point>>> {
        self.best_route.load_full()
    }

    /// Raises the stop flag. It is never lowered again.
    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::Release);
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::Acquire)
    }

    /// Completed iterations so far.
    pub fn iterations(&self) -> usize {
        self.iterations.load(Ordering::Relaxed)
    }

    /// Runs one colony on every leg, then publishes the joined route if every
    /// leg has a best path.
    ///
    /// Legs are independent, so they run in parallel. Each leg gets its own
    /// generator seeded from `rng` in leg order, which keeps the outcome
    /// reproducible for a seeded `rng` regardless of thread scheduling.
    pub fn one_iteration<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> IterationReport {
        let seeds: Vec<u64> = self.legs.iter().map(|_| rng.gen()).collect();

        let reports: Vec<ColonyReport> = self
            .legs
            .par_iter()
            .zip(seeds)
            .map(|(leg, seed)| {
                let mut leg_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                let report = leg.run_colony(&self.settings, &mut leg_rng);
                if report.done == 0 {
                    debug!(
                        "iteration {}: no ant reached {} from {} ({} stuck, {} timed out)",
                        index,
                        leg.end(),
                        leg.start(),
                        report.stuck,
                        report.timed_out
                    );
                }
                report
            })
            .collect();

        let route_len = match self.assemble() {
            Some(route) => {
                let len = route.len();
                let previous = self.best_route.swap(Some(Arc::new(route)));
                if previous.is_none_or(|p| len < p.len()) {
                    info!("iteration {}: best route now {} points", index, len);
                }
                Some(len)
            }
            None => self.best_route().map(|r| r.len()),
        };

        self.iterations.fetch_add(1, Ordering::Relaxed);
        IterationReport {
            index,
            legs: reports,
            route_len,
        }
    }

    /// Runs iterations `1..=max_iterations` until done or interrupted. The
    /// flag is checked between iterations only. Raises the interrupt flag on
    /// return so readers know no further route will be published.
    pub fn run<R: Rng + ?Sized>(&self, max_iterations: usize, rng: &mut R) -> RunSummary {
        let mut index = 0;
        while index < max_iterations && !self.is_interrupted() {
            index += 1;
            self.one_iteration(index, rng);
        }

        let interrupted = self.is_interrupted();
        self.interrupt();

        let route_len = self.best_route().map(|r| r.len());
        match route_len {
            Some(len) => info!("stopped after {} iterations, route has {} points", index, len),
            None => info!("stopped after {} iterations, no route found", index),
        }
        RunSummary {
            iterations: index,
            interrupted,
            route_len,
        }
    }

    fn assemble(&self) -> Option<Vec<Point>> {
        let paths = self
            .legs
            .iter()
            .map(Leg::best_path)
            .collect::<Option<Vec<_>>>()?;
        let slices: Vec<&[Point]> = paths.iter().map(|p| p.as_slice()).collect();
        Some(join_legs(&slices))
    }
}

/// Concatenates consecutive leg paths, dropping the junction point each leg
/// shares with the one before it.
pub fn join_legs<P: AsRef<[Point]>>(paths: &[P]) -> Vec<Point> {
    let mut route = Vec::with_capacity(paths.iter().map(|p| p.as_ref().len()).sum());
    for (i, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        let skip = usize::from(i > 0 && !path.is_empty());
        route.extend_from_slice(&path[skip..]);
    }
    route
}
