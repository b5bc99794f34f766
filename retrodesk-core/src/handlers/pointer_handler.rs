use super::{AppId, Config, Manager, Mode, Xy};
use crate::display_event::PointerRegion;

// Title-bar corner owned by the close/minimize/maximize buttons. Presses
// here belong to the buttons, never to a drag.
const CONTROL_ZONE_WIDTH: i32 = 70;
const CONTROL_ZONE_HEIGHT: i32 = 20;

impl<C: Config> Manager<C> {
    /// Route a pointer press on a window. Every press focuses; a press on
    /// the title bar or resize handle additionally starts a gesture. Mouse
    /// and touch presses arrive through the same path.
    pub fn pointer_down_handler(&mut self, id: &AppId, at: Xy, region: PointerRegion) -> bool {
        if !self.state.mode.is_normal() {
            return false;
        }
        let viewport = self.state.viewport;
        let Some(window) = self
            .state
            .instances
            .iter_mut()
            .find(|w| &w.id == id && !w.closing())
        else {
            return false;
        };

        match region {
            PointerRegion::TitleBar => {
                let grab = at - window.position;
                if grab.x >= CONTROL_ZONE_WIDTH || grab.y >= CONTROL_ZONE_HEIGHT {
                    window.start_loc = Some(window.position);
                    self.state.gesture_origin = Some(at);
                    self.state.mode = Mode::Dragging(*id);
                }
            }
            PointerRegion::ResizeHandle => {
                window.start_size = Some(window.size_or_default(viewport));
                self.state.gesture_origin = Some(at);
                self.state.mode = Mode::Resizing(*id);
            }
            PointerRegion::Body => {}
        }

        self.state.focus_app(id)
    }

    /// Pointer motion. Only meaningful while a gesture is active.
    pub fn pointer_move_handler(&mut self, at: Xy) -> bool {
        match (self.state.mode, self.state.gesture_origin) {
            (Mode::Dragging(id), Some(origin)) => self.window_move_handler(&id, at - origin),
            (Mode::Resizing(id), Some(origin)) => self.window_resize_handler(&id, at - origin),
            _ => false,
        }
    }

    /// End of gesture. A finished resize is persisted through the size
    /// handler so later layout passes scale the explicit size; a finished
    /// drag already committed its position on the way.
    pub fn pointer_up_handler(&mut self, at: Xy) -> bool {
        let changed = self.pointer_move_handler(at);
        match self.state.mode {
            Mode::Resizing(id) => {
                if let Some(size) = self.state.find(&id).and_then(|w| w.size) {
                    self.update_size_handler(&id, size);
                }
                self.clear_gesture(&id);
            }
            Mode::Dragging(id) => self.clear_gesture(&id),
            Mode::Normal => {}
        }
        self.state.mode = Mode::Normal;
        self.state.gesture_origin = None;
        changed
    }

    fn clear_gesture(&mut self, id: &AppId) {
        if let Some(window) = self.state.instances.iter_mut().find(|w| &w.id == id) {
            window.start_loc = None;
            window.start_size = None;
        }
    }
}
