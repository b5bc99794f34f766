//! The window registry and its derived configuration.

use crate::config::Config;
use crate::desktop::DesktopIcon;
use crate::display_action::DisplayAction;
use crate::models::{AppId, AppInstance, AppKind, Dimensions, Mode, StackOrder, Viewport, Xy};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug)]
pub struct State {
    /// Every registered window, closing tombstones included. Read paths
    /// that face the renderer filter the tombstones out.
    pub instances: Vec<AppInstance>,
    pub viewport: Viewport,
    pub mode: Mode,
    pub actions: VecDeque<DisplayAction>,
    /// High-water mark of the stacking counter. Monotonic for the session,
    /// never reused, so numeric comparison always recovers recency.
    pub(crate) max_stack_order: StackOrder,
    /// Pointer location when the active drag/resize gesture started.
    pub(crate) gesture_origin: Option<Xy>,
    // Entries below are configuration values and are never changed.
    pub mobile_breakpoint: i32,
    pub min_window_size: Dimensions,
    pub close_delay: Duration,
    pub icons: Vec<DesktopIcon>,
}

impl State {
    pub(crate) fn new(config: &impl Config) -> Self {
        Self {
            instances: Default::default(),
            viewport: config.default_viewport(),
            mode: Default::default(),
            actions: Default::default(),
            max_stack_order: 0,
            gesture_origin: None,
            mobile_breakpoint: config.mobile_breakpoint(),
            min_window_size: config.min_window_size(),
            close_delay: config.close_delay(),
            icons: config.create_list_of_icons(),
        }
    }

    /// Allocate a fresh session maximum for the stacking counter.
    pub(crate) fn next_stack_order(&mut self) -> StackOrder {
        self.max_stack_order += 1;
        self.max_stack_order
    }

    /// The live (non-closing) instance of a kind, if one is registered.
    #[must_use]
    pub fn instance_of_kind(&self, kind: AppKind) -> Option<&AppInstance> {
        self.instances
            .iter()
            .find(|a| a.kind == kind && !a.closing())
    }

    #[must_use]
    pub fn find(&self, id: &AppId) -> Option<&AppInstance> {
        self.instances.iter().find(|a| &a.id == id)
    }

    pub(crate) fn find_live_mut(&mut self, id: &AppId) -> Option<&mut AppInstance> {
        self.instances
            .iter_mut()
            .find(|a| &a.id == id && !a.closing())
    }

    /// The topmost live instance, minimized ones included.
    #[must_use]
    pub fn topmost(&self) -> Option<&AppInstance> {
        self.instances
            .iter()
            .filter(|a| !a.closing())
            .max_by_key(|a| a.stack_order)
    }
}
