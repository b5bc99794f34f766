use super::{AppId, AppInstance, Config, Manager, Viewport, Xy};

impl<C: Config> Manager<C> {
    /// Apply a drag gesture's pointer delta to a window. The position is
    /// taken from the gesture's start location so intermediate clamping
    /// never accumulates error.
    pub fn window_move_handler(&mut self, id: &AppId, delta: Xy) -> bool {
        let viewport = self.state.viewport;
        match self.state.find_live_mut(id) {
            Some(window) => {
                process_window(window, delta, viewport);
                true
            }
            None => false,
        }
    }
}

fn process_window(window: &mut AppInstance, delta: Xy, viewport: Viewport) {
    let start = window.start_loc.unwrap_or(window.position);
    let size = window.size_or_default(viewport);
    let mut position = start + delta;

    // A window may hang half off the left, right or bottom edge, but the
    // title bar can never leave the top of the viewport.
    let min_x = -(size.width / 2);
    let max_x = viewport.width - size.width / 2;
    let max_y = viewport.height - size.height / 2;
    position.x = position.x.clamp(min_x, max_x);
    position.y = position.y.clamp(0, max_y);

    window.position = position;
}
