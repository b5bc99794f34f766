use crate::models::{AppId, AppKind, Dimensions, Viewport, Xy};

/// Where on a window's chrome a pointer press landed. The renderer knows
/// its own chrome geometry; the manager only needs the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRegion {
    TitleBar,
    ResizeHandle,
    Body,
}

/// Events arriving from the host UI environment. Touch events are
/// delivered as the same pointer variants as mouse events.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    OpenRequested {
        kind: AppKind,
        title: Option<String>,
        position: Option<Xy>,
        size: Option<Dimensions>,
    },
    CloseRequested(AppId),
    MinimizeRequested(AppId),
    FocusRequested(AppId),
    MaximizeRequested(AppId),
    SizeChanged(AppId, Dimensions),
    PointerDown(AppId, Xy, PointerRegion),
    PointerMove(Xy),
    PointerUp(Xy),
    ViewportResized(Viewport),
    /// Deferred completion of a two-phase close, fed back in by the event
    /// loop after the settle delay.
    RemoveClosed(AppId),
}
