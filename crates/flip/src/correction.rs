//! The portrait hard-page slide correction.
//!
//! In portrait the widget renders hard pages with a fold animation that
//! reads wrong for a single-page view, so during a flip the affected page
//! gets a slide override instead: forward flips slide and fade out to the
//! left, backward flips slide in from the left. The widget rewrites page
//! styles on its own every frame, so the override must be re-emitted per
//! frame for as long as the transition runs.

use serde::Serialize;

/// Which way a flip is travelling, derived from the index delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDirection {
    Forward,
    Backward,
}

/// A per-frame visual override for a hard page mid-flip.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageTransform {
    /// Horizontal offset in percent of the page width; negative is left.
    pub translate_x: f32,
    pub opacity: f32,
}

/// The correction task for one flip transition. Created when the state
/// stream enters `flipping` (portrait only), queried every frame, and
/// dropped when the transition ends or orientation changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideCorrection {
    direction: FlipDirection,
}

impl SlideCorrection {
    pub fn new(direction: FlipDirection) -> Self {
        Self { direction }
    }

    pub fn direction(&self) -> FlipDirection {
        self.direction
    }

    /// The override for a transition at `progress` in [0, 1]. Out-of-range
    /// input is clamped so a late frame cannot overshoot the slide.
    pub fn frame(&self, progress: f32) -> PageTransform {
        let t = progress.clamp(0.0, 1.0);
        match self.direction {
            // Slide-and-fade out to the left.
            FlipDirection::Forward => PageTransform {
                translate_x: -100.0 * t,
                opacity: 1.0 - t,
            },
            // Slide in from the left.
            FlipDirection::Backward => PageTransform {
                translate_x: -100.0 * (1.0 - t),
                opacity: t,
            },
        }
    }
}
