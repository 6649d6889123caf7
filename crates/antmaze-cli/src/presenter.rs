use antmaze_colony::Director;
use antmaze_core::Point;
use crossbeam_channel::tick;
use log::info;
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Polls the director's published route and reports each new one.
pub struct Presenter {
    director: Arc<Director>,
    shown: Option<Arc<Vec<Point>>>,
}

impl Presenter {
    pub fn new(director: Arc<Director>) -> Self {
        Self {
            director,
            shown: None,
        }
    }

    /// Reads the current snapshot. Returns its length if it differs from the
    /// one drawn last time.
    pub fn draw(&mut self) -> Option<usize> {
        let route = self.director.best_route()?;
        if self
            .shown
            .as_ref()
            .is_some_and(|shown| Arc::ptr_eq(shown, &route) || **shown == *route)
        {
            return None;
        }
        let len = route.len();
        info!(
            "after {} iterations: route of {} points",
            self.director.iterations(),
            len
        );
        self.shown = Some(route);
        Some(len)
    }

    /// Draws at a fixed cadence until the director is interrupted, then draws
    /// one last time.
    pub fn run(mut self, cadence: Duration) {
        let ticker = tick(cadence);
        while ticker.recv().is_ok() {
            let last = self.director.is_interrupted();
            self.draw();
            if last {
                break;
            }
        }
    }
}

pub fn spawn(director: Arc<Director>, cadence: Duration) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("presenter".into())
        .spawn(move || Presenter::new(director).run(cadence))
}
