use crate::error::MazeError;
use crate::grid::Grid;
use crate::point::Point;
use crate::venue::Venue;
use std::collections::{HashMap, HashSet};

/// A validated maze: passable start, end and venues, with the venues stored in
/// the order they must be visited. Immutable once built.
#[derive(Clone, Debug)]
pub struct Maze {
    grid: Grid,
    start: Point,
    end: Point,
    venues: Vec<Venue>,
}

impl Maze {
    /// A maze with only a start and an end.
    pub fn without_venues(grid: Grid, start: Point, end: Point) -> Result<Self, MazeError> {
        Self::validated(grid, start, end, Vec::new())
    }

    /// Venues are visited in ascending numeric id order (`1`, `2`, ...).
    pub fn with_sequential_venues(
        grid: Grid,
        start: Point,
        end: Point,
        venues: Vec<Venue>,
    ) -> Result<Self, MazeError> {
        check_venues(&grid, &venues)?;

        let mut keyed = venues
            .into_iter()
            .map(|v| match v.numeric_id() {
                Some(n) => Ok((n, v)),
                None => Err(MazeError::NonNumericVenueId(v.id)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        keyed.sort_by_key(|(n, _)| *n);

        Self::validated(grid, start, end, keyed.into_iter().map(|(_, v)| v).collect())
    }

    /// Venues are visited in the order their ids appear in `order`. Venues
    /// not named in `order` are skipped; a venue named twice is visited twice.
    pub fn with_visit_order<S: AsRef<str>>(
        grid: Grid,
        start: Point,
        end: Point,
        venues: Vec<Venue>,
        order: &[S],
    ) -> Result<Self, MazeError> {
        check_venues(&grid, &venues)?;

        let by_id: HashMap<&str, &Venue> = venues.iter().map(|v| (v.id.as_str(), v)).collect();
        let ordered = order
            .iter()
            .map(|id| {
                let id = id.as_ref();
                by_id
                    .get(id)
                    .map(|v| (*v).clone())
                    .ok_or_else(|| MazeError::UnknownVenue(id.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::validated(grid, start, end, ordered)
    }

    fn validated(grid: Grid, start: Point, end: Point, venues: Vec<Venue>) -> Result<Self, MazeError> {
        if !grid.is_passable(start) {
            return Err(MazeError::StartNotPassable(start));
        }
        if !grid.is_passable(end) {
            return Err(MazeError::EndNotPassable(end));
        }
        for venue in &venues {
            if !grid.is_passable(venue.location) {
                return Err(MazeError::VenueNotPassable {
                    id: venue.id.clone(),
                    at: venue.location,
                });
            }
        }

        Ok(Self {
            grid,
            start,
            end,
            venues,
        })
    }

    #[inline(always)]
    pub fn is_passable(&self, p: Point) -> bool {
        self.grid.is_passable(p)
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Venues in visitation order.
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    /// `[start] + venues + [end]`.
    pub fn waypoints(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.venues.len() + 2);
        points.push(self.start);
        points.extend(self.venues.iter().map(|v| v.location));
        points.push(self.end);
        points
    }
}

// Every defined venue must be passable and uniquely named, even the ones the
// visit order leaves out.
fn check_venues(grid: &Grid, venues: &[Venue]) -> Result<(), MazeError> {
    let mut seen = HashSet::with_capacity(venues.len());
    for venue in venues {
        if !seen.insert(venue.id.as_str()) {
            return Err(MazeError::DuplicateVenue(venue.id.clone()));
        }
        if !grid.is_passable(venue.location) {
            return Err(MazeError::VenueNotPassable {
                id: venue.id.clone(),
                at: venue.location,
            });
        }
    }
    Ok(())
}
