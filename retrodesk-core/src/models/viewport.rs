use serde::{Deserialize, Serialize};

/// The host display area, in pixels.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    // What the original shell assumed before the host reported a size.
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

impl Viewport {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Which layout family applies at this width.
    #[must_use]
    pub const fn device_class(self, mobile_breakpoint: i32) -> DeviceClass {
        if self.width < mobile_breakpoint {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    /// A zero or negative dimension makes scale ratios meaningless.
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}
