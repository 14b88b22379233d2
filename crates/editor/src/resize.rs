//! The 8-handle resize gesture.

use foliant_types::{ElementId, PercentRect, clamp_position, clamp_span};
use serde::{Deserialize, Serialize};

/// One of the eight drag affordances around a selected element.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

impl Handle {
    fn moves_top_edge(self) -> bool {
        matches!(self, Handle::N | Handle::Ne | Handle::Nw)
    }

    fn moves_bottom_edge(self) -> bool {
        matches!(self, Handle::S | Handle::Se | Handle::Sw)
    }

    fn moves_left_edge(self) -> bool {
        matches!(self, Handle::W | Handle::Nw | Handle::Sw)
    }

    fn moves_right_edge(self) -> bool {
        matches!(self, Handle::E | Handle::Ne | Handle::Se)
    }
}

/// Transient state for a resize in progress: which element, which handle,
/// and the geometry snapshotted when the gesture began. Deltas are always
/// applied against the snapshot, not the current geometry, so the gesture
/// is stable under out-of-order pointer events.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeGesture {
    pub page: usize,
    pub id: ElementId,
    pub handle: Handle,
    pub start: PercentRect,
}

/// Computes the geometry for a pointer delta from the gesture snapshot.
///
/// North/west handles move the origin while growing or shrinking the
/// opposite dimension; south/east handles only grow or shrink. The result
/// is clamped: positions to [0, 95], spans to [5, 95].
pub fn apply_resize(handle: Handle, start: PercentRect, dx: f32, dy: f32) -> PercentRect {
    let mut rect = start;

    if handle.moves_right_edge() {
        rect.width = start.width + dx;
    }
    if handle.moves_bottom_edge() {
        rect.height = start.height + dy;
    }
    if handle.moves_left_edge() {
        rect.x = start.x + dx;
        rect.width = start.width - dx;
    }
    if handle.moves_top_edge() {
        rect.y = start.y + dy;
        rect.height = start.height - dy;
    }

    PercentRect {
        x: clamp_position(rect.x),
        y: clamp_position(rect.y),
        width: clamp_span(rect.width),
        height: clamp_span(rect.height),
    }
}
