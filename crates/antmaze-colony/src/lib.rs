#![deny(clippy::all)]

pub mod ant;
pub mod director;
pub mod error;
pub mod leg;
pub mod roulette;
pub mod settings;
pub mod types;
pub mod weights;

pub use ant::{Ant, AntState};
pub use director::{join_legs, Director};
pub use error::ColonyError;
pub use leg::Leg;
pub use settings::{ColonySettings, SearchSettings};
pub use types::{ColonyReport, IterationReport, RunSummary};
pub use weights::{NeighborKind, StepWeights};
