use crate::roulette;
use crate::weights::{NeighborKind, StepWeights};
use antmaze_core::{Maze, Point};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AntState {
    NotStarted,
    InProgress,
    /// Reached the leg's end point.
    Done,
    /// Every neighbor weighs zero.
    Stuck,
    /// Used up its step allowance before arriving.
    TimedOut,
}

impl AntState {
    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        matches!(self, AntState::Done | AntState::Stuck | AntState::TimedOut)
    }
}

/// One stochastic attempt at walking from a leg's start to its end.
///
/// The ant only remembers the cells it has stepped onto itself; nothing is
/// shared between ants.
pub struct Ant<'a> {
    maze: &'a Maze,
    weights: &'a StepWeights,
    end: Point,
    max_steps: usize,
    path: Vec<Point>,
    visited: Vec<bool>,
    state: AntState,
}

impl<'a> Ant<'a> {
    pub fn new(
        maze: &'a Maze,
        weights: &'a StepWeights,
        start: Point,
        end: Point,
        max_steps: usize,
    ) -> Self {
        Self {
            maze,
            weights,
            end,
            max_steps,
            path: vec![start],
            visited: vec![false; maze.width() * maze.height()],
            state: AntState::NotStarted,
        }
    }

    pub fn state(&self) -> AntState {
        self.state
    }

    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn into_path(self) -> Vec<Point> {
        self.path
    }

    /// Number of moves made so far.
    #[inline(always)]
    pub fn steps(&self) -> usize {
        self.path.len() - 1
    }

    #[inline(always)]
    fn current(&self) -> Point {
        self.path[self.path.len() - 1]
    }

    #[inline(always)]
    fn previous(&self) -> Option<Point> {
        self.path.len().checked_sub(2).map(|i| self.path[i])
    }

    fn classify(&self, p: Point) -> NeighborKind {
        let idx = match self.maze.grid().index(p) {
            Some(idx) if self.maze.is_passable(p) => idx,
            _ => return NeighborKind::Wall,
        };
        if self.previous() == Some(p) {
            NeighborKind::Reverse
        } else if self.visited[idx] {
            NeighborKind::Visited
        } else {
            NeighborKind::Unvisited
        }
    }

    /// Advances the ant by at most one cell. Calling it again after a terminal
    /// state returns that state unchanged.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> AntState {
        if self.state.is_terminal() {
            return self.state;
        }

        let current = self.current();
        if current == self.end {
            self.state = AntState::Done;
            return self.state;
        }
        if self.steps() >= self.max_steps {
            self.state = AntState::TimedOut;
            return self.state;
        }

        let candidates = current.neighbors();
        let weights = candidates.map(|p| self.weights.weight(self.classify(p)));

        let Some(choice) = roulette::choose(&weights, rng) else {
            self.state = AntState::Stuck;
            return self.state;
        };

        let next = candidates[choice];
        if let Some(idx) = self.maze.grid().index(next) {
            self.visited[idx] = true;
        }
        self.path.push(next);
        self.state = AntState::InProgress;
        self.state
    }

    /// Steps until the ant reaches a terminal state.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> AntState {
        loop {
            let state = self.step(rng);
            if state.is_terminal() {
                return state;
            }
        }
    }
}
