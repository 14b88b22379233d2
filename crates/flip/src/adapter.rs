//! Thin adapter over the external flip widget: navigation commands in,
//! flip/orientation/state events out as plain callbacks and state.

use crate::correction::{FlipDirection, PageTransform, SlideCorrection};
use crate::engine::FlipEngine;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// The widget's interaction states, as it reports them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum InteractionState {
    UserFold,
    FoldCorner,
    Flipping,
    #[default]
    Read,
}

type PageCallback = Box<dyn FnMut(usize)>;
type OrientationCallback = Box<dyn FnMut(Orientation)>;
type StateCallback = Box<dyn FnMut(InteractionState)>;

pub struct FlipAdapter<E: FlipEngine> {
    engine: E,
    current_index: usize,
    orientation: Orientation,
    state: InteractionState,
    correction: Option<SlideCorrection>,
    on_page_change: Option<PageCallback>,
    on_orientation_change: Option<OrientationCallback>,
    on_state_change: Option<StateCallback>,
}

impl<E: FlipEngine> FlipAdapter<E> {
    pub fn new(engine: E) -> Self {
        let current_index = engine.current_index();
        Self {
            engine,
            current_index,
            orientation: Orientation::default(),
            state: InteractionState::default(),
            correction: None,
            on_page_change: None,
            on_orientation_change: None,
            on_state_change: None,
        }
    }

    // --- Queries ---

    pub fn page_count(&self) -> usize {
        self.engine.page_count()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    // --- Commands ---

    pub fn next(&mut self) {
        self.engine.flip_next();
    }

    pub fn previous(&mut self) {
        self.engine.flip_prev();
    }

    pub fn go_to(&mut self, index: usize) {
        self.engine.turn_to_page(index);
    }

    // --- Callbacks ---

    pub fn set_on_page_change(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_page_change = Some(Box::new(callback));
    }

    pub fn set_on_orientation_change(&mut self, callback: impl FnMut(Orientation) + 'static) {
        self.on_orientation_change = Some(Box::new(callback));
    }

    pub fn set_on_state_change(&mut self, callback: impl FnMut(InteractionState) + 'static) {
        self.on_state_change = Some(Box::new(callback));
    }

    // --- Event intake from the widget ---

    /// A flip event: the widget reports the new page index. The flip
    /// direction feeds the hard-page correction while one is active.
    pub fn handle_flip(&mut self, index: usize) {
        let direction = if index >= self.current_index {
            FlipDirection::Forward
        } else {
            FlipDirection::Backward
        };
        self.current_index = index;

        // A flip observed mid-transition re-keys the active correction so
        // a reversed drag corrects the right way.
        if self.correction.is_some() {
            self.correction = Some(SlideCorrection::new(direction));
        }

        if let Some(callback) = &mut self.on_page_change {
            callback(index);
        }
    }

    /// An orientation event. Leaving portrait tears down any correction;
    /// in landscape the widget's native behavior is left untouched.
    pub fn handle_orientation_change(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        if orientation != Orientation::Portrait && self.correction.take().is_some() {
            log::debug!("hard-page correction cancelled: orientation left portrait");
        }
        if let Some(callback) = &mut self.on_orientation_change {
            callback(orientation);
        }
    }

    /// A state event. Entering `flipping` in portrait starts the
    /// correction task; leaving `flipping` tears it down.
    pub fn handle_state_change(&mut self, state: InteractionState) {
        self.state = state;
        match state {
            InteractionState::Flipping if self.orientation == Orientation::Portrait => {
                // Direction is pinned when the transition starts; a later
                // flip event may re-key it.
                self.correction.get_or_insert(SlideCorrection::new(FlipDirection::Forward));
            }
            InteractionState::Flipping => {}
            _ => {
                self.correction = None;
            }
        }
        if let Some(callback) = &mut self.on_state_change {
            callback(state);
        }
    }

    /// The per-frame override for hard pages, or None when no correction
    /// is running. Re-queried every frame: the widget overwrites page
    /// styles during the transition, so the override cannot be applied
    /// once and left alone.
    pub fn hard_page_transform(&self, progress: f32) -> Option<PageTransform> {
        self.correction.as_ref().map(|c| c.frame(progress))
    }
}
