use crate::models::AppId;
use serde::{Deserialize, Serialize};

/// Side effects a handler asks the event loop to perform on its behalf.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum DisplayAction {
    /// Drop a tombstoned window once the settle delay has elapsed. Fire
    /// and forget; if the kind was reopened meanwhile the new instance has
    /// a different id and is unaffected.
    ScheduleRemoval(AppId),
    /// Persist a custom icon image to the preference file.
    SaveIconImage { label: String, image: String },
    /// Drop a custom icon image from the preference file.
    ResetIconImage(String),
}
