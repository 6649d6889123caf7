#![deny(clippy::all)]

pub mod error;
pub mod loader;
pub mod render;
pub mod route;
pub mod settings;

pub use error::FileError;
pub use loader::{load_maze, MazePaths};
pub use render::render_ascii;
pub use route::{save_route, write_route};
pub use settings::load_settings;
