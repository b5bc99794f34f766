use super::{AppId, AppInstance, Config, Manager, Viewport, Xy};
use crate::models::Dimensions;

impl<C: Config> Manager<C> {
    /// Apply a resize gesture's pointer delta to a window, floored at the
    /// configured minimum size.
    pub fn window_resize_handler(&mut self, id: &AppId, delta: Xy) -> bool {
        let viewport = self.state.viewport;
        let min = self.state.min_window_size;
        match self.state.find_live_mut(id) {
            Some(window) => {
                process_window(window, delta, min, viewport);
                true
            }
            None => false,
        }
    }
}

fn process_window(window: &mut AppInstance, delta: Xy, min: Dimensions, viewport: Viewport) {
    let start = window
        .start_size
        .unwrap_or_else(|| window.size_or_default(viewport));
    window.size =
        Some(Dimensions::new(start.width + delta.x, start.height + delta.y).floored(min));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppKind;
    use crate::{DisplayEvent, PointerRegion};

    fn resized_manager(to: Xy) -> (Manager<crate::config::TestConfig>, AppId) {
        let mut manager = Manager::new_test();
        manager.open_handler(
            AppKind::Blog,
            None,
            Some(Xy::new(100, 100)),
            Some(Dimensions::new(400, 300)),
        );
        let id = manager.state.instance_of_kind(AppKind::Blog).unwrap().id;
        manager.display_event_handler(DisplayEvent::PointerDown(
            id,
            Xy::new(500, 400),
            PointerRegion::ResizeHandle,
        ));
        manager.display_event_handler(DisplayEvent::PointerMove(to));
        manager.display_event_handler(DisplayEvent::PointerUp(to));
        (manager, id)
    }

    #[test]
    fn resizing_grows_by_the_pointer_delta() {
        let (manager, id) = resized_manager(Xy::new(560, 450));
        assert_eq!(
            manager.state.find(&id).unwrap().size,
            Some(Dimensions::new(460, 350))
        );
    }

    #[test]
    fn resizing_is_floored_at_the_minimum_size() {
        let (manager, id) = resized_manager(Xy::new(-900, -900));
        assert_eq!(
            manager.state.find(&id).unwrap().size,
            Some(Dimensions::new(200, 100))
        );
    }
}
