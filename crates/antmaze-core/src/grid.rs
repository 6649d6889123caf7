use crate::error::MazeError;
use crate::point::Point;

/// Row-major passability grid. Always rectangular and non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MazeError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != width {
                return Err(MazeError::RaggedGrid {
                    row,
                    expected: width,
                    actual: cols.len(),
                });
            }
            cells.extend(cols);
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Builds a grid from text rows where `#` is a wall and any other
    /// character is passable.
    pub fn from_ascii(rows: &[&str]) -> Result<Self, MazeError> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.chars().map(|c| c != '#').collect())
                .collect(),
        )
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major index of `p`, or `None` outside the grid.
    #[inline(always)]
    pub fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    #[inline(always)]
    pub fn is_passable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i])
    }

    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
