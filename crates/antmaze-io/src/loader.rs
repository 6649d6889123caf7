//! Readers for the four maze input files.
//!
//! - nodes: `width height`, then `height` rows of `width` integers where `1`
//!   is passable and anything else blocked.
//! - coordinates: `sx sy ex ey`, separated by commas, semicolons or whitespace.
//! - venues: a count `n`, then `n` records `name x y`; colons are also
//!   accepted as separators.
//! - visits: venue names in visitation order.

use crate::error::FileError;
use antmaze_core::{Grid, Maze, Point, Venue};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MazePaths {
    pub nodes: PathBuf,
    pub coords: PathBuf,
    pub venues: Option<PathBuf>,
    pub visits: Option<PathBuf>,
}

pub fn load_maze(paths: &MazePaths) -> Result<Maze, FileError> {
    let grid = parse_nodes(&paths.nodes, &read(&paths.nodes)?)?;
    debug!("grid is {}x{}", grid.width(), grid.height());

    let (start, end) = parse_coords(&paths.coords, &read(&paths.coords)?)?;
    debug!("start {start}, end {end}");

    let Some(venue_path) = &paths.venues else {
        if paths.visits.is_some() {
            warn!("visit order given without a venues file, ignoring it");
        }
        return Ok(Maze::without_venues(grid, start, end)?);
    };
    let venues = parse_venues(venue_path, &read(venue_path)?)?;

    let maze = match &paths.visits {
        Some(visit_path) => {
            let order = parse_visits(&read(visit_path)?);
            Maze::with_visit_order(grid, start, end, venues, &order)?
        }
        None => Maze::with_sequential_venues(grid, start, end, venues)?,
    };
    debug!("{} venues to visit", maze.venues().len());
    Ok(maze)
}

fn read(path: &Path) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(|e| FileError::io(path, e))
}

fn tokens<'a>(text: &'a str, separators: &'a [char]) -> impl Iterator<Item = &'a str> + 'a {
    text.split(move |c: char| c.is_whitespace() || separators.contains(&c))
        .filter(|t| !t.is_empty())
}

fn next_int<'a, T: std::str::FromStr>(
    path: &Path,
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<T, FileError> {
    let token = tokens
        .next()
        .ok_or_else(|| FileError::parse(path, format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| FileError::parse(path, format!("{what} `{token}` is not an integer")))
}

pub(crate) fn parse_nodes(path: &Path, text: &str) -> Result<Grid, FileError> {
    let mut it = tokens(text, &[]);
    let width: usize = next_int(path, &mut it, "width")?;
    let height: usize = next_int(path, &mut it, "height")?;
    if width.checked_mul(height).is_none() {
        return Err(FileError::parse(path, format!("grid size {width}x{height} is too large")));
    }

    // Sizes come from the file, so storage grows with the cells actually read.
    let mut rows = Vec::new();
    for y in 0..height {
        let mut row = Vec::new();
        for x in 0..width {
            let cell: i64 = next_int(path, &mut it, &format!("cell ({x}, {y})"))?;
            row.push(cell == 1);
        }
        rows.push(row);
    }
    if it.next().is_some() {
        warn!("{}: ignoring data after {width}x{height} cells", path.display());
    }

    Ok(Grid::from_rows(rows)?)
}

pub(crate) fn parse_coords(path: &Path, text: &str) -> Result<(Point, Point), FileError> {
    let mut it = tokens(text, &[',', ';']);
    let sx = next_int(path, &mut it, "start x")?;
    let sy = next_int(path, &mut it, "start y")?;
    let ex = next_int(path, &mut it, "end x")?;
    let ey = next_int(path, &mut it, "end y")?;
    Ok((Point::new(sx, sy), Point::new(ex, ey)))
}

pub(crate) fn parse_venues(path: &Path, text: &str) -> Result<Vec<Venue>, FileError> {
    let mut it = tokens(text, &[',', ':', ';']);
    let count: usize = next_int(path, &mut it, "venue count")?;

    let mut venues = Vec::new();
    for n in 0..count {
        let name = it
            .next()
            .ok_or_else(|| FileError::parse(path, format!("missing name of venue {}", n + 1)))?;
        let x = next_int(path, &mut it, &format!("x of venue {name}"))?;
        let y = next_int(path, &mut it, &format!("y of venue {name}"))?;
        venues.push(Venue::new(name, Point::new(x, y)));
    }
    Ok(venues)
}

pub(crate) fn parse_visits(text: &str) -> Vec<String> {
    tokens(text, &[]).map(str::to_string).collect()
}
