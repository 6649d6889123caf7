use crate::point::Point;
use serde::{Deserialize, Serialize};

/// A named waypoint the route has to pass through.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub location: Point,
}

impl Venue {
    pub fn new(id: impl Into<String>, location: Point) -> Self {
        Self {
            id: id.into(),
            location,
        }
    }

    /// The id read as a sequence number, if it is one.
    pub fn numeric_id(&self) -> Option<u32> {
        self.id.trim().parse().ok()
    }
}
