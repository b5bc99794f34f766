#![allow(clippy::wildcard_imports)]

use super::*;
use crate::state::State;

impl<C: Config> Manager<C> {
    /// Raise a window to a fresh session-maximum stack order, restoring it
    /// if minimized. This is also what every pointer-down on a visible
    /// window runs, so the last-touched window is always topmost.
    pub fn focus_handler(&mut self, id: &AppId) -> bool {
        self.state.focus_app(id)
    }
}

impl State {
    pub fn focus_app(&mut self, id: &AppId) -> bool {
        focus_app_work(self, id).is_some()
    }
}

fn focus_app_work(state: &mut State, id: &AppId) -> Option<()> {
    // Allocate unconditionally; the counter only moves forward, so recency
    // stays recoverable by numeric comparison even for repeated focus.
    let next = state.max_stack_order + 1;
    let window = state.find_live_mut(id)?;
    window.stack_order = next;
    window.set_minimized(false);
    state.max_stack_order = next;
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focusing_a_window_should_make_it_topmost() {
        let mut manager = Manager::new_test();
        manager.open_handler(AppKind::AboutMe, None, None, None);
        manager.open_handler(AppKind::Blog, None, None, None);
        let about_id = manager.state.instance_of_kind(AppKind::AboutMe).unwrap().id;

        manager.focus_handler(&about_id);
        assert_eq!(manager.state.topmost().unwrap().id, about_id);
    }

    #[test]
    fn stack_orders_strictly_increase_across_focus_calls() {
        let mut manager = Manager::new_test();
        manager.open_handler(AppKind::AboutMe, None, None, None);
        manager.open_handler(AppKind::Blog, None, None, None);
        let a = manager.state.instance_of_kind(AppKind::AboutMe).unwrap().id;
        let b = manager.state.instance_of_kind(AppKind::Blog).unwrap().id;
        let a_open = manager.state.find(&a).unwrap().stack_order;
        let b_open = manager.state.find(&b).unwrap().stack_order;

        manager.focus_handler(&a);
        let a_focused = manager.state.find(&a).unwrap().stack_order;
        manager.focus_handler(&b);
        let b_focused = manager.state.find(&b).unwrap().stack_order;

        assert!(a_focused > a_open);
        assert!(a_focused > b_open);
        assert!(b_focused > a_focused);
    }

    #[test]
    fn focusing_restores_a_minimized_window() {
        let mut manager = Manager::new_test();
        manager.open_handler(AppKind::Terminal, None, None, None);
        let id = manager.state.instance_of_kind(AppKind::Terminal).unwrap().id;
        manager.minimize_handler(&id);
        assert!(manager.state.find(&id).unwrap().minimized());

        manager.focus_handler(&id);
        assert!(!manager.state.find(&id).unwrap().minimized());
    }

    #[test]
    fn focusing_a_closing_window_is_a_no_op() {
        let mut manager = Manager::new_test();
        manager.open_handler(AppKind::Blog, None, None, None);
        let id = manager.state.instance_of_kind(AppKind::Blog).unwrap().id;
        manager.close_handler(&id);
        let order = manager.state.find(&id).unwrap().stack_order;

        assert!(!manager.focus_handler(&id));
        assert_eq!(manager.state.find(&id).unwrap().stack_order, order);
    }
}
