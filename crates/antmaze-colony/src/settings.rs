use crate::weights::StepWeights;
use antmaze_core::Maze;
use serde::{Deserialize, Serialize};

/// Parameters for one leg's colony run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColonySettings {
    pub weights: StepWeights,
    pub ants_per_colony: usize,
    /// Step allowance per ant. `None` means the maze area.
    #[serde(default)]
    pub max_steps: Option<usize>,
}

impl ColonySettings {
    pub fn new(weights: StepWeights, ants_per_colony: usize) -> Self {
        Self {
            weights,
            ants_per_colony,
            max_steps: None,
        }
    }

    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn resolved_max_steps(&self, maze: &Maze) -> usize {
        self.max_steps
            .unwrap_or_else(|| maze.width() * maze.height())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchSettings {
    pub colony: ColonySettings,
    pub max_iterations: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}
