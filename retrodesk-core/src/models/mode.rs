use super::AppId;
use serde::{Deserialize, Serialize};

/// What the pointer is currently doing to a window. Dragging and resizing
/// are mutually exclusive; a new gesture cannot start until the active one
/// ends with a pointer-up.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    Dragging(AppId),
    Resizing(AppId),
    #[default]
    Normal,
}

impl Mode {
    #[must_use]
    pub const fn is_normal(self) -> bool {
        matches!(self, Self::Normal)
    }
}
