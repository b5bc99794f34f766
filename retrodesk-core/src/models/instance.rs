//! Open application records.
#![allow(clippy::module_name_repetitions)]

use super::{AppKind, Dimensions, StackOrder, Viewport, Xy};
use crate::layouts;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// An opaque identifier for one open window, unique for the session and
/// never reused. A close is terminal; reopening a kind mints a new id.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppId(u64);

// Sequence component of freshly minted ids. Process-wide so two windows
// opened within the same millisecond still get distinct ids.
static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

impl AppId {
    /// Mint a fresh id from the current time plus a sequence tiebreaker.
    #[must_use]
    pub fn next() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let seq = NEXT_SEQ.fetch_add(1, Ordering::Relaxed);
        Self((millis << 20) | (seq & 0xf_ffff))
    }
}

/// Store one open application's window state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppInstance {
    pub id: AppId,
    pub kind: AppKind,
    pub title: String,
    pub position: Xy,
    /// `None` until the user resizes or a default layout assigns one; the
    /// shell then renders the viewport-derived default size.
    pub size: Option<Dimensions>,
    pub stack_order: StackOrder,
    minimized: bool,
    closing: bool,
    /// Position at the start of an active drag gesture.
    pub(crate) start_loc: Option<Xy>,
    /// Size at the start of an active resize gesture.
    pub(crate) start_size: Option<Dimensions>,
    /// Pre-maximize snapshot. `Some` only while maximized.
    pub(crate) restore: Option<(Xy, Dimensions)>,
}

impl AppInstance {
    #[must_use]
    pub fn new(id: AppId, kind: AppKind, title: String, position: Xy) -> Self {
        Self {
            id,
            kind,
            title,
            position,
            size: None,
            stack_order: 0,
            minimized: false,
            closing: false,
            start_loc: None,
            start_size: None,
            restore: None,
        }
    }

    #[must_use]
    pub const fn minimized(&self) -> bool {
        self.minimized
    }

    pub fn set_minimized(&mut self, value: bool) {
        self.minimized = value;
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }

    #[must_use]
    pub const fn closing(&self) -> bool {
        self.closing
    }

    /// Tombstone the record. There is no way back; the id is dropped from
    /// the registry once the settle delay has run out.
    pub fn mark_closing(&mut self) {
        self.closing = true;
    }

    /// Rendered at all? Minimized and closing windows keep their record
    /// but are not drawn.
    #[must_use]
    pub const fn visible(&self) -> bool {
        !self.minimized && !self.closing
    }

    #[must_use]
    pub const fn is_maximized(&self) -> bool {
        self.restore.is_some()
    }

    /// The explicit size, or the viewport-derived default the shell would
    /// render in its absence.
    #[must_use]
    pub fn size_or_default(&self, viewport: Viewport) -> Dimensions {
        self.size
            .unwrap_or_else(|| layouts::default_size(viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> AppInstance {
        AppInstance::new(
            AppId::next(),
            AppKind::Blog,
            "Blog".to_string(),
            Xy::new(10, 20),
        )
    }

    #[test]
    fn minted_ids_are_distinct() {
        let a = AppId::next();
        let b = AppId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn new_instances_are_visible() {
        let subject = subject();
        assert!(subject.visible());
        assert!(!subject.minimized());
        assert!(!subject.closing());
    }

    #[test]
    fn minimize_toggle_is_an_involution() {
        let mut subject = subject();
        subject.toggle_minimized();
        assert!(subject.minimized());
        subject.toggle_minimized();
        assert!(!subject.minimized());
    }

    #[test]
    fn unsized_instances_fall_back_to_the_viewport_default() {
        let subject = subject();
        let viewport = Viewport::new(1200, 800);
        assert_eq!(
            subject.size_or_default(viewport),
            Dimensions::new(540, 560)
        );
    }
}
