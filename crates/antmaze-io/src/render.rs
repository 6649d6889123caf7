use antmaze_core::{Maze, Point};
use std::collections::HashSet;

/// Text picture of the maze: `#` wall, `.` open, `o` route, `V` venue,
/// `S` start, `E` end. One line per grid row.
pub fn render_ascii(maze: &Maze, route: Option<&[Point]>) -> String {
    let on_route: HashSet<Point> = route.unwrap_or_default().iter().copied().collect();
    let venues: HashSet<Point> = maze.venues().iter().map(|v| v.location).collect();

    let mut out = String::with_capacity((maze.width() + 1) * maze.height());
    // Cells beyond i32 coordinates cannot be addressed by a Point.
    let rows = (0..maze.height()).map_while(|y| i32::try_from(y).ok());
    for y in rows {
        let cols = (0..maze.width()).map_while(|x| i32::try_from(x).ok());
        for x in cols {
            let p = Point::new(x, y);
            let c = if p == maze.start() {
                'S'
            } else if p == maze.end() {
                'E'
            } else if venues.contains(&p) {
                'V'
            } else if on_route.contains(&p) {
                'o'
            } else if maze.is_passable(p) {
                '.'
            } else {
                '#'
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}
