pub mod adapter;
pub mod correction;
pub mod engine;

pub use adapter::{FlipAdapter, InteractionState, Orientation};
pub use correction::{FlipDirection, PageTransform, SlideCorrection};
pub use engine::FlipEngine;
