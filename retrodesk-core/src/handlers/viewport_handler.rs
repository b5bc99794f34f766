use super::{AppKind, Config, Manager, Viewport};
use crate::layouts;
use crate::models::DeviceClass;

impl<C: Config> Manager<C> {
    /// Open the session's initial windows for the current viewport. Desktop
    /// gets the three-window default arrangement; mobile gets only the
    /// about-me window.
    pub fn startup_handler(&mut self) -> bool {
        let viewport = self.state.viewport;
        let breakpoint = self.state.mobile_breakpoint;
        let kinds: &[AppKind] = match viewport.device_class(breakpoint) {
            DeviceClass::Desktop => &[AppKind::AboutMe, AppKind::Blog, AppKind::Terminal],
            DeviceClass::Mobile => &[AppKind::AboutMe],
        };
        for kind in kinds {
            let placement = layouts::layout_for(*kind, viewport, breakpoint);
            self.open_handler(*kind, None, Some(placement.position), Some(placement.size));
        }
        !kinds.is_empty()
    }

    /// Re-fit every window to a new viewport. Desktop windows keep their
    /// proportional place; mobile falls back to the stacked per-kind layout.
    pub fn viewport_resized_handler(&mut self, new: Viewport) -> bool {
        let prev = self.state.viewport;
        if new == prev {
            return false;
        }
        self.state.viewport = new;
        if new.is_degenerate() {
            tracing::warn!("ignoring layout pass for degenerate viewport {:?}", new);
            return false;
        }
        let breakpoint = self.state.mobile_breakpoint;

        for window in self.state.instances.iter_mut().filter(|w| !w.closing()) {
            if prev.is_degenerate() {
                // No usable ratios; start over from the defaults.
                let placement = layouts::layout_for(window.kind, new, breakpoint);
                window.position = placement.position;
                window.size = Some(placement.size);
                continue;
            }
            match new.device_class(breakpoint) {
                DeviceClass::Mobile => {
                    let placement = layouts::mobile_layout(window.kind, new);
                    window.position = placement.position;
                    window.size = Some(placement.size);
                }
                DeviceClass::Desktop => {
                    let rx = new.width as f32 / prev.width as f32;
                    let ry = new.height as f32 / prev.height as f32;
                    let scaled_position = window.position.scaled(rx, ry);
                    let scaled_size = window.size.map(|s| s.scaled(rx, ry));
                    let (position, size) = layouts::clamp_to_viewport(scaled_position, scaled_size, new);
                    window.position = position;
                    window.size = size;
                }
            }
        }
        true
    }
}
