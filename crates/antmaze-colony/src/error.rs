use antmaze_core::Point;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColonyError {
    /// A leg endpoint is not a passable maze node.
    #[error("invalid leg {start} -> {end}: {offending} is not a passable node")]
    InvalidLeg {
        start: Point,
        end: Point,
        offending: Point,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("step weight `{name}` must be finite and non-negative (got {value})")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("step weight `wall` must be 0 (got {0})")]
    WallWeight(f64),
    #[error("step weights must have a finite sum (got {0})")]
    WeightTotal(f64),
}
