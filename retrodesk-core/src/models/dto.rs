//! Flattened snapshots of the desktop for the state socket. Subscribers
//! (docks, status bars) get exactly what they render, already sorted.

use crate::desktop::DesktopIcon;
use crate::models::{AppId, AppKind, StackOrder};
use crate::state::State;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DesktopWindow {
    pub id: AppId,
    pub kind: AppKind,
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub stack_order: StackOrder,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DockItem {
    pub kind: AppKind,
    pub label: String,
    pub open: bool,
    pub minimized: bool,
    /// Topmost live window, minimized or not.
    pub active: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    /// Rendered windows, bottom to top.
    pub windows: Vec<DesktopWindow>,
    /// One entry per known kind, in dock order.
    pub dock: Vec<DockItem>,
    /// The desktop icon column, custom images already applied.
    pub icons: Vec<DesktopIcon>,
}

impl From<&State> for DesktopState {
    fn from(state: &State) -> Self {
        let mut windows: Vec<DesktopWindow> = state
            .instances
            .iter()
            .filter(|w| w.visible())
            .map(|w| {
                let size = w.size_or_default(state.viewport);
                DesktopWindow {
                    id: w.id,
                    kind: w.kind,
                    title: w.title.clone(),
                    x: w.position.x,
                    y: w.position.y,
                    w: size.width,
                    h: size.height,
                    stack_order: w.stack_order,
                }
            })
            .collect();
        windows.sort_by_key(|w| w.stack_order);

        let active = state.topmost().map(|w| w.kind);
        let dock = AppKind::ALL
            .iter()
            .map(|&kind| {
                let instance = state.instance_of_kind(kind);
                DockItem {
                    kind,
                    label: kind.default_title().to_string(),
                    open: instance.is_some(),
                    minimized: instance.is_some_and(|w| w.minimized()),
                    active: active == Some(kind),
                }
            })
            .collect();

        Self {
            windows,
            dock,
            icons: state.icons.clone(),
        }
    }
}
