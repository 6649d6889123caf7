/// Outcome counts of one colony run on one leg.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColonyReport {
    pub attempts: usize,
    pub done: usize,
    pub stuck: usize,
    pub timed_out: usize,
    /// Point count of the shortest successful path this run.
    pub shortest: Option<usize>,
    /// Whether the leg's best path changed.
    pub improved: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IterationReport {
    pub index: usize,
    pub legs: Vec<ColonyReport>,
    /// Point count of the overall route published after this iteration.
    pub route_len: Option<usize>,
}

impl IterationReport {
    pub fn successes(&self) -> usize {
        self.legs.iter().map(|r| r.done).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub iterations: usize,
    /// True when the run stopped because of an interrupt rather than the
    /// iteration limit.
    pub interrupted: bool,
    pub route_len: Option<usize>,
}
