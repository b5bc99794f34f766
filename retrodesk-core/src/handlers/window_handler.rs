use super::{AppId, AppInstance, AppKind, Config, Manager, Xy};
use crate::display_action::DisplayAction;
use crate::layouts;
use crate::models::Dimensions;

impl<C: Config> Manager<C> {
    /// Open an application window. Opening a kind that is already live is
    /// defined as focusing the existing window; no duplicate is created.
    /// Returns true if changes need to be rendered.
    pub fn open_handler(
        &mut self,
        kind: AppKind,
        title: Option<String>,
        position: Option<Xy>,
        size: Option<Dimensions>,
    ) -> bool {
        if let Some(existing) = self.state.instance_of_kind(kind) {
            let id = existing.id;
            tracing::debug!("open of {} routed to focus of {:?}", kind, id);
            return self.focus_handler(&id);
        }

        let position = position.unwrap_or_else(|| {
            layouts::layout_for(kind, self.state.viewport, self.state.mobile_breakpoint).position
        });
        let title = title.unwrap_or_else(|| kind.default_title().to_string());

        let mut window = AppInstance::new(AppId::next(), kind, title, position);
        window.size = size;
        window.stack_order = self.state.next_stack_order();
        tracing::debug!("opened {} as {:?}", kind, window.id);
        self.state.instances.push(window);
        true
    }

    /// First phase of a close: tombstone the record and ask the event loop
    /// to drop it once in-flight renders have settled. A second close of
    /// the same id is a no-op.
    pub fn close_handler(&mut self, id: &AppId) -> bool {
        match self.state.find_live_mut(id) {
            Some(window) => {
                window.mark_closing();
                self.state
                    .actions
                    .push_back(DisplayAction::ScheduleRemoval(*id));
                true
            }
            None => false,
        }
    }

    /// Second phase of a close: drop the record. The id never comes back.
    pub fn remove_closed_handler(&mut self, id: &AppId) -> bool {
        let before = self.state.instances.len();
        self.state.instances.retain(|w| &w.id != id);
        before != self.state.instances.len()
    }

    /// Toggle minimized. Position, size and stacking survive untouched so
    /// a restore puts the window back exactly where it was.
    pub fn minimize_handler(&mut self, id: &AppId) -> bool {
        match self.state.find_live_mut(id) {
            Some(window) => {
                window.toggle_minimized();
                true
            }
            None => false,
        }
    }

    /// Record an explicit size, typically at the end of a resize gesture,
    /// so later layout passes scale it instead of a recomputed default.
    pub fn update_size_handler(&mut self, id: &AppId, size: Dimensions) -> bool {
        match self.state.find_live_mut(id) {
            Some(window) => {
                window.size = Some(size);
                true
            }
            None => false,
        }
    }

    /// Maximize toggle. The first call snapshots position and size, then
    /// centers the window at ~90% of the viewport; the second restores the
    /// snapshot exactly and discards it.
    pub fn toggle_maximize_handler(&mut self, id: &AppId) -> bool {
        let viewport = self.state.viewport;
        match self.state.find_live_mut(id) {
            Some(window) => {
                if let Some((position, size)) = window.restore.take() {
                    window.position = position;
                    window.size = Some(size);
                } else {
                    window.restore = Some((window.position, window.size_or_default(viewport)));
                    let placement = layouts::maximized(viewport);
                    window.position = placement.position;
                    window.size = Some(placement.size);
                }
                true
            }
            None => false,
        }
    }
}
