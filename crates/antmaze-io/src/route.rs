use crate::error::FileError;
use antmaze_core::Point;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes `route` as `<count>;` followed by one `x, y;` line per point.
pub fn write_route<W: Write>(mut out: W, route: &[Point]) -> io::Result<()> {
    writeln!(out, "{};", route.len())?;
    for p in route {
        writeln!(out, "{}, {};", p.x, p.y)?;
    }
    out.flush()
}

pub fn save_route(path: &Path, route: &[Point]) -> Result<(), FileError> {
    let file = File::create(path).map_err(|e| FileError::io(path, e))?;
    write_route(BufWriter::new(file), route).map_err(|e| FileError::io(path, e))
}
