use antmaze_colony::SearchSettings;
use antmaze_io::MazePaths;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ant-maze")]
#[command(about = "Route through a maze via ordered waypoints using an ant-walk colony search")]
#[command(version)]
pub struct Args {
    /// Passability grid file (`width height` then rows of 0/1)
    #[arg(long)]
    pub maze: PathBuf,

    /// Start and end coordinates file
    #[arg(long)]
    pub coords: PathBuf,

    /// Venues file (count, then `name x y` records)
    #[arg(long)]
    pub venues: Option<PathBuf>,

    /// Visit order file (venue names); without it venues go by number
    #[arg(long, requires = "venues")]
    pub visits: Option<PathBuf>,

    /// Search settings (JSON)
    #[arg(short, long)]
    pub settings: PathBuf,

    /// Ants per colony (overrides settings)
    #[arg(long)]
    pub ants: Option<usize>,

    /// Maximum iterations (overrides settings)
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Random seed (overrides settings)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Step allowance per ant (overrides settings)
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Write the best route here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Presentation refresh interval in milliseconds
    #[arg(long, default_value_t = 250)]
    pub refresh_ms: u64,

    /// Print the maze with the final route drawn on it
    #[arg(long)]
    pub render: bool,
}

impl Args {
    pub fn maze_paths(&self) -> MazePaths {
        MazePaths {
            nodes: self.maze.clone(),
            coords: self.coords.clone(),
            venues: self.venues.clone(),
            visits: self.visits.clone(),
        }
    }

    pub fn apply_overrides(&self, mut settings: SearchSettings) -> SearchSettings {
        if let Some(ants) = self.ants {
            settings.colony.ants_per_colony = ants;
        }
        if let Some(iterations) = self.iterations {
            settings.max_iterations = iterations;
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(max_steps) = self.max_steps {
            settings.colony.max_steps = Some(max_steps);
        }
        settings
    }
}
