mod cli;
mod error;
mod presenter;

use antmaze_colony::Director;
use antmaze_io::{load_maze, load_settings, render_ascii, save_route, write_route};
use clap::Parser;
use cli::Args;
use error::{CliError, Result};
use log::{error, info, warn};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            e.exit_code()
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let maze = Arc::new(load_maze(&args.maze_paths())?);
    info!(
        "maze is {}x{}, {} venues to visit",
        maze.width(),
        maze.height(),
        maze.venues().len()
    );

    let settings = args.apply_overrides(load_settings(&args.settings)?);
    let seed = settings.seed.unwrap_or_else(rand::random);
    info!(
        "{} ants per colony, up to {} iterations, seed {}",
        settings.colony.ants_per_colony, settings.max_iterations, seed
    );

    let director = Arc::new(Director::new(Arc::clone(&maze), settings.colony)?);

    {
        let director = Arc::clone(&director);
        ctrlc::set_handler(move || {
            info!("interrupt received, finishing current iteration");
            director.interrupt();
        })?;
    }

    let presenter = presenter::spawn(
        Arc::clone(&director),
        Duration::from_millis(args.refresh_ms),
    )
    .map_err(|e| {
        director.interrupt();
        CliError::Presentation(e)
    })?;

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let summary = director.run(settings.max_iterations, &mut rng);
    if presenter.join().is_err() {
        warn!("presentation loop panicked");
    }

    let Some(route) = director.best_route() else {
        return Err(CliError::NoRoute {
            iterations: summary.iterations,
        });
    };

    if args.render {
        print!("{}", render_ascii(&maze, Some(route.as_slice())));
    }
    match &args.out {
        Some(path) => {
            save_route(path, &route)?;
            info!("route of {} points written to {}", route.len(), path.display());
        }
        None => write_route(std::io::stdout().lock(), &route).map_err(CliError::Output)?,
    }
    Ok(())
}
