//! Pixel-space points and sizes used for window placement.
#![allow(clippy::module_name_repetitions)]
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A position in viewport pixel space. x,y from top left.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub struct Xy {
    pub x: i32,
    pub y: i32,
}

impl Add for Xy {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Xy {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Xy {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Scale both coordinates, rounding to the nearest pixel.
    #[must_use]
    pub fn scaled(self, rx: f32, ry: f32) -> Self {
        Self {
            x: (self.x as f32 * rx).round() as i32,
            y: (self.y as f32 * ry).round() as i32,
        }
    }
}

/// A window size in pixels.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn scaled(self, rx: f32, ry: f32) -> Self {
        Self {
            width: (self.width as f32 * rx).round() as i32,
            height: (self.height as f32 * ry).round() as i32,
        }
    }

    /// Shrink to fit the given bounds, preserving the aspect ratio. A
    /// dimension already in range is only reduced when the other one had
    /// to be.
    #[must_use]
    pub fn capped(self, max_width: i32, max_height: i32) -> Self {
        let mut out = self;
        if out.width > max_width && out.width > 0 {
            let ratio = max_width as f32 / out.width as f32;
            out.width = max_width;
            out.height = (out.height as f32 * ratio).round() as i32;
        }
        if out.height > max_height && out.height > 0 {
            let ratio = max_height as f32 / out.height as f32;
            out.height = max_height;
            out.width = (out.width as f32 * ratio).round() as i32;
        }
        out
    }

    /// Grow to the given floor. Keeps a resize gesture from producing a
    /// zero or negative window.
    #[must_use]
    pub fn floored(self, min: Self) -> Self {
        Self {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }
}
