use crate::point::Point;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze grid must have at least one row and one column")]
    EmptyGrid,
    #[error("grid row {row} has {actual} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("start point {0} is not a passable node")]
    StartNotPassable(Point),
    #[error("end point {0} is not a passable node")]
    EndNotPassable(Point),
    #[error("venue {id} at {at} is not a passable node")]
    VenueNotPassable { id: String, at: Point },
    #[error("venue id {0} is defined more than once")]
    DuplicateVenue(String),
    #[error("visit order names unknown venue {0}")]
    UnknownVenue(String),
    #[error("venue id {0} is not a sequence number; supply an explicit visit order")]
    NonNumericVenueId(String),
}
