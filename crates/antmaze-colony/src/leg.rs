use crate::ant::{Ant, AntState};
use crate::error::ColonyError;
use crate::settings::ColonySettings;
use crate::types::ColonyReport;
use antmaze_core::{Maze, Point};
use arc_swap::ArcSwapOption;
use log::trace;
use rand::Rng;
use std::sync::Arc;

/// One segment of the journey between two consecutive waypoints.
///
/// The best path is published through an `ArcSwapOption`, so readers on other
/// threads always see either the previous complete path or the new one. Its
/// length never increases.
#[derive(Debug)]
pub struct Leg {
    maze: Arc<Maze>,
    start: Point,
    end: Point,
    best_path: ArcSwapOption<Vec<Point>>,
}

impl Leg {
    pub fn new(maze: Arc<Maze>, start: Point, end: Point) -> Result<Self, ColonyError> {
        for p in [start, end] {
            if !maze.is_passable(p) {
                return Err(ColonyError::InvalidLeg {
                    start,
                    end,
                    offending: p,
                });
            }
        }
        Ok(Self {
            maze,
            start,
            end,
            best_path: ArcSwapOption::empty(),
        })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn best_path(&self) -> Option<Arc<Vec<Point>>> {
        self.best_path.load_full()
    }

    /// Sends `settings.ants_per_colony` ants down this leg one after another
    /// and keeps the shortest successful path. On equal lengths the earlier
    /// ant wins, and an existing best path is kept.
    pub fn run_colony<R: Rng + ?Sized>(&self, settings: &ColonySettings, rng: &mut R) -> ColonyReport {
        let max_steps = settings.resolved_max_steps(&self.maze);
        let mut report = ColonyReport {
            attempts: settings.ants_per_colony,
            ..ColonyReport::default()
        };
        let mut shortest: Option<Vec<Point>> = None;

        for n in 0..settings.ants_per_colony {
            let mut ant = Ant::new(&self.maze, &settings.weights, self.start, self.end, max_steps);
            let state = ant.run(rng);
            trace!(
                "leg {} -> {}: ant {} finished {:?} after {} steps",
                self.start,
                self.end,
                n,
                state,
                ant.steps()
            );
            match state {
                AntState::Done => {
                    report.done += 1;
                    if shortest.as_ref().is_none_or(|s| ant.path().len() < s.len()) {
                        shortest = Some(ant.into_path());
                    }
                }
                AntState::Stuck => report.stuck += 1,
                AntState::TimedOut => report.timed_out += 1,
                AntState::NotStarted | AntState::InProgress => {}
            }
        }

        let Some(candidate) = shortest else {
            return report;
        };
        report.shortest = Some(candidate.len());
        report.improved = self.offer(candidate);
        report
    }

    fn offer(&self, candidate: Vec<Point>) -> bool {
        let candidate = Arc::new(candidate);
        let mut improved = false;
        self.best_path.rcu(|current| match current {
            Some(best) if best.len() <= candidate.len() => {
                improved = false;
                Some(Arc::clone(best))
            }
            _ => {
                improved = true;
                Some(Arc::clone(&candidate))
            }
        });
        improved
    }
}
