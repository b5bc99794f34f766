use crate::models::AppKind;
use serde::{Deserialize, Serialize};

/// External requests, as written to the command pipe. Outside callers
/// address windows by kind; at most one live window per kind exists, so
/// the manager resolves the id itself. Icon commands address the desktop
/// icon column by label.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Open(AppKind),
    Close(AppKind),
    Minimize(AppKind),
    Focus(AppKind),
    ToggleMaximize(AppKind),
    SetIcon { label: String, image: String },
    ResetIcon(String),
}
