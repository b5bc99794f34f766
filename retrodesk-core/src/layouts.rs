//! Device-class window placement and viewport clamping.
//!
//! Everything here is a pure function of a kind and a viewport, so first
//! mount and resize handling share one source of truth for the constants.

use crate::models::{AppKind, DeviceClass, Dimensions, Viewport, Xy};
use serde::{Deserialize, Serialize};

/// Pixels reserved at the right edge for the desktop icon column, at
/// minimum; grows with the viewport below.
const ICON_MARGIN_MIN: i32 = 90;
const ICON_MARGIN_RATIO: f32 = 0.08;

/// A window never grows past this share of the viewport.
const MAX_SIZE_RATIO: f32 = 0.9;

/// Default window size: a share of the viewport, held between these.
const DEFAULT_SIZE_MIN: i32 = 500;
const DEFAULT_SIZE_MAX: i32 = 600;
const DEFAULT_WIDTH_RATIO: f32 = 0.45;
const DEFAULT_HEIGHT_RATIO: f32 = 0.70;

/// Where a window lands when clamping has to push it back on screen.
const LEFT_FALLBACK_X: i32 = 10;
const TOP_FALLBACK_Y: i32 = 30;
const BOTTOM_CLEARANCE: i32 = 20;

/// Vertical distance between kinds in the stacked mobile layout.
const MOBILE_STACK_STEP: i32 = 40;

/// A concrete position and size for one window.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub position: Xy,
    pub size: Dimensions,
}

fn px(value: f32) -> i32 {
    value.round() as i32
}

/// The size an unsized window renders at.
#[must_use]
pub fn default_size(viewport: Viewport) -> Dimensions {
    Dimensions::new(
        px(viewport.width as f32 * DEFAULT_WIDTH_RATIO).clamp(DEFAULT_SIZE_MIN, DEFAULT_SIZE_MAX),
        px(viewport.height as f32 * DEFAULT_HEIGHT_RATIO).clamp(DEFAULT_SIZE_MIN, DEFAULT_SIZE_MAX),
    )
}

/// Space kept clear for desktop icons at the right edge.
#[must_use]
pub fn icon_margin(viewport: Viewport) -> i32 {
    ICON_MARGIN_MIN.max(px(viewport.width as f32 * ICON_MARGIN_RATIO))
}

/// The device-class default placement for a kind.
#[must_use]
pub fn layout_for(kind: AppKind, viewport: Viewport, mobile_breakpoint: i32) -> Placement {
    match viewport.device_class(mobile_breakpoint) {
        DeviceClass::Mobile => mobile_layout(kind, viewport),
        DeviceClass::Desktop => desktop_layout(kind, viewport),
    }
}

/// Desktop defaults: three fixed windows at proportional coordinates that
/// do not overlap and leave the icon column clear; the rest cascade from
/// the upper left.
fn desktop_layout(kind: AppKind, viewport: Viewport) -> Placement {
    let w = viewport.width as f32;
    let h = viewport.height as f32;
    match kind {
        AppKind::AboutMe => Placement {
            position: Xy::new(px(w * 0.03), px(h * 0.05)),
            size: Dimensions::new(px(w * 0.38), px(h * 0.78)),
        },
        AppKind::Blog => Placement {
            position: Xy::new(px(w * 0.43), px(h * 0.05)),
            size: Dimensions::new(px(w * 0.48), px(h * 0.44)),
        },
        AppKind::Terminal => Placement {
            position: Xy::new(px(w * 0.50), px(h * 0.54)),
            size: Dimensions::new(600.min(px(w * 0.40)), 400.min(px(h * 0.37))),
        },
        AppKind::Calculator
        | AppKind::Notepad
        | AppKind::Browser
        | AppKind::MediaPlayer => {
            let step = (kind.stack_slot() - 2) * 24;
            Placement {
                position: Xy::new(px(w * 0.20) + step, px(h * 0.10) + step),
                size: default_size(viewport),
            }
        }
    }
}

/// Mobile is deterministic by kind, not proportional: near-full width,
/// stacked with a distinct vertical offset per kind.
#[must_use]
pub fn mobile_layout(kind: AppKind, viewport: Viewport) -> Placement {
    let w = viewport.width as f32;
    let h = viewport.height as f32;
    Placement {
        position: Xy::new(px(w * 0.02), px(h * 0.05) + kind.stack_slot() * MOBILE_STACK_STEP),
        size: Dimensions::new(px(w * 0.96), px(h * 0.85)),
    }
}

/// Keep a (possibly rescaled) window inside the viewport: shift left out
/// of the icon margin, shift up off the bottom edge, and cap an explicit
/// size at the viewport share, preserving aspect ratio.
#[must_use]
pub fn clamp_to_viewport(
    position: Xy,
    size: Option<Dimensions>,
    viewport: Viewport,
) -> (Xy, Option<Dimensions>) {
    let margin = icon_margin(viewport);
    let effective = size.unwrap_or_else(|| default_size(viewport));

    let mut position = position;
    if position.x + effective.width > viewport.width - margin {
        position.x = (viewport.width - margin - effective.width).max(LEFT_FALLBACK_X);
    }
    if position.y + effective.height > viewport.height {
        position.y = (viewport.height - effective.height - BOTTOM_CLEARANCE).max(TOP_FALLBACK_Y);
    }

    let size = size.map(|s| {
        let max_width = px(viewport.width as f32 * MAX_SIZE_RATIO) - margin;
        let max_height = px(viewport.height as f32 * MAX_SIZE_RATIO);
        s.capped(max_width, max_height)
    });

    (position, size)
}

/// The ~90%-of-viewport centered placement a maximize toggle applies.
#[must_use]
pub fn maximized(viewport: Viewport) -> Placement {
    let size = Dimensions::new(
        px(viewport.width as f32 * MAX_SIZE_RATIO),
        px(viewport.height as f32 * MAX_SIZE_RATIO),
    );
    Placement {
        position: Xy::new(
            (viewport.width - size.width) / 2,
            (viewport.height - size.height) / 2,
        ),
        size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: Viewport = Viewport::new(1200, 800);

    #[test]
    fn default_size_matches_the_responsive_formula() {
        // 45% of 1200 = 540, 70% of 800 = 560, both inside 500..=600.
        assert_eq!(default_size(DESKTOP), Dimensions::new(540, 560));
        // Small viewport pins to the floor.
        assert_eq!(
            default_size(Viewport::new(800, 600)),
            Dimensions::new(500, 500)
        );
        // Huge viewport pins to the ceiling.
        assert_eq!(
            default_size(Viewport::new(4000, 3000)),
            Dimensions::new(600, 600)
        );
    }

    #[test]
    fn icon_margin_has_a_pixel_floor() {
        assert_eq!(icon_margin(Viewport::new(800, 600)), 90);
        assert_eq!(icon_margin(Viewport::new(2000, 1000)), 160);
    }

    #[test]
    fn desktop_defaults_do_not_overlap() {
        let about = layout_for(AppKind::AboutMe, DESKTOP, 768);
        let blog = layout_for(AppKind::Blog, DESKTOP, 768);
        let terminal = layout_for(AppKind::Terminal, DESKTOP, 768);
        // Blog starts right of about-me's right edge.
        assert!(blog.position.x >= about.position.x + about.size.width);
        // Terminal starts below blog's bottom edge.
        assert!(terminal.position.y >= blog.position.y + blog.size.height);
    }

    #[test]
    fn mobile_layout_ignores_proportions_and_stacks_by_kind() {
        let viewport = Viewport::new(400, 700);
        let about = mobile_layout(AppKind::AboutMe, viewport);
        let blog = mobile_layout(AppKind::Blog, viewport);
        assert_eq!(about.position.x, blog.position.x);
        assert_ne!(about.position.y, blog.position.y);
        assert!(about.size.width >= px(400.0 * 0.9));
    }

    #[test]
    fn clamp_shifts_a_window_out_of_the_icon_margin() {
        let size = Some(Dimensions::new(300, 200));
        let (position, _) = clamp_to_viewport(Xy::new(1100, 10), size, DESKTOP);
        assert!(position.x + 300 <= DESKTOP.width - icon_margin(DESKTOP));
    }

    #[test]
    fn clamp_shifts_a_window_off_the_bottom_edge() {
        let size = Some(Dimensions::new(300, 200));
        let (position, _) = clamp_to_viewport(Xy::new(10, 750), size, DESKTOP);
        assert!(position.y + 200 + BOTTOM_CLEARANCE <= DESKTOP.height);
    }

    #[test]
    fn clamp_caps_oversized_windows_preserving_aspect() {
        let size = Some(Dimensions::new(2400, 1200));
        let (_, capped) = clamp_to_viewport(Xy::new(0, 0), size, DESKTOP);
        let capped = capped.unwrap();
        let max_width = px(1200.0 * 0.9) - icon_margin(DESKTOP);
        assert_eq!(capped.width, max_width);
        // Height shrank by the same ratio the width did.
        assert_eq!(capped.height, px(1200.0 * (max_width as f32 / 2400.0)));
    }

    #[test]
    fn maximized_is_ninety_percent_and_centered() {
        let placement = maximized(DESKTOP);
        assert_eq!(placement.size, Dimensions::new(1080, 720));
        assert_eq!(placement.position, Xy::new(60, 40));
    }
}
