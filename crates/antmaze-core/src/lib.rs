#![deny(clippy::all)]

pub mod error;
pub mod grid;
pub mod maze;
pub mod point;
pub mod venue;

pub use error::MazeError;
pub use grid::Grid;
pub use maze::Maze;
pub use point::Point;
pub use venue::Venue;
