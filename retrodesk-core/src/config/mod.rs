//! `RetroDesk` general configuration.

use crate::desktop::DesktopIcon;
use crate::models::{Dimensions, Viewport};
use std::time::Duration;

pub trait Config {
    /// Viewport width, in pixels, below which the fixed mobile layout
    /// replaces proportional scaling.
    fn mobile_breakpoint(&self) -> i32;

    /// Floor applied to resize gestures.
    fn min_window_size(&self) -> Dimensions;

    /// How long a closing window lingers as a tombstone before removal.
    fn close_delay(&self) -> Duration;

    /// Viewport assumed until the host environment reports a real one.
    fn default_viewport(&self) -> Viewport;

    /// Icons shown on the desktop.
    fn create_list_of_icons(&self) -> Vec<DesktopIcon>;
}

#[cfg(test)]
#[allow(clippy::module_name_repetitions)]
#[derive(Default)]
pub struct TestConfig {
    pub viewport: Option<Viewport>,
}

#[cfg(test)]
impl Config for TestConfig {
    fn mobile_breakpoint(&self) -> i32 {
        768
    }
    fn min_window_size(&self) -> Dimensions {
        Dimensions::new(200, 100)
    }
    fn close_delay(&self) -> Duration {
        Duration::from_millis(50)
    }
    fn default_viewport(&self) -> Viewport {
        self.viewport.unwrap_or(Viewport::new(1200, 800))
    }
    fn create_list_of_icons(&self) -> Vec<DesktopIcon> {
        crate::desktop::default_icons()
    }
}
