use crate::error::ColonyError;
use serde::{Deserialize, Serialize};

/// What an ant sees when it looks at one neighboring cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NeighborKind {
    Wall,
    Reverse,
    Visited,
    Unvisited,
}

/// Roulette weight per neighbor kind. These are tuning values and carry no
/// defaults; they come from the settings file. The wall weight must be zero
/// and the weights must have a finite sum.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStepWeights", into = "RawStepWeights")]
pub struct StepWeights {
    wall: f64,
    reverse: f64,
    old: f64,
    new: f64,
}

impl StepWeights {
    pub fn new(wall: f64, reverse: f64, old: f64, new: f64) -> Result<Self, ColonyError> {
        for (name, value) in [("wall", wall), ("reverse", reverse), ("old", old), ("new", new)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ColonyError::InvalidWeight { name, value });
            }
        }
        // Walls are never a legal move.
        if wall != 0.0 {
            return Err(ColonyError::WallWeight(wall));
        }
        let total = reverse + old + new;
        if !total.is_finite() {
            return Err(ColonyError::WeightTotal(total));
        }
        Ok(Self {
            wall,
            reverse,
            old,
            new,
        })
    }

    #[inline(always)]
    pub fn weight(&self, kind: NeighborKind) -> f64 {
        match kind {
            NeighborKind::Wall => self.wall,
            NeighborKind::Reverse => self.reverse,
            NeighborKind::Visited => self.old,
            NeighborKind::Unvisited => self.new,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStepWeights {
    wall: f64,
    reverse: f64,
    old: f64,
    new: f64,
}

impl TryFrom<RawStepWeights> for StepWeights {
    type Error = ColonyError;

    fn try_from(raw: RawStepWeights) -> Result<Self, Self::Error> {
        StepWeights::new(raw.wall, raw.reverse, raw.old, raw.new)
    }
}

impl From<StepWeights> for RawStepWeights {
    fn from(w: StepWeights) -> Self {
        RawStepWeights {
            wall: w.wall,
            reverse: w.reverse,
            old: w.old,
            new: w.new,
        }
    }
}
