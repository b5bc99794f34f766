use super::{Config, DisplayEvent, Manager};

impl<C: Config> Manager<C> {
    /// Process one event from the host UI environment and apply its changes
    /// to the manager. Returns true if changes need to be rendered.
    pub fn display_event_handler(&mut self, event: DisplayEvent) -> bool {
        match event {
            DisplayEvent::OpenRequested {
                kind,
                title,
                position,
                size,
            } => self.open_handler(kind, title, position, size),

            DisplayEvent::CloseRequested(id) => self.close_handler(&id),
            DisplayEvent::MinimizeRequested(id) => self.minimize_handler(&id),
            DisplayEvent::FocusRequested(id) => self.focus_handler(&id),
            DisplayEvent::MaximizeRequested(id) => self.toggle_maximize_handler(&id),
            DisplayEvent::SizeChanged(id, size) => self.update_size_handler(&id, size),

            DisplayEvent::PointerDown(id, at, region) => self.pointer_down_handler(&id, at, region),
            DisplayEvent::PointerMove(at) => self.pointer_move_handler(at),
            DisplayEvent::PointerUp(at) => self.pointer_up_handler(at),

            DisplayEvent::ViewportResized(viewport) => self.viewport_resized_handler(viewport),

            DisplayEvent::RemoveClosed(id) => self.remove_closed_handler(&id),
        }
    }
}
