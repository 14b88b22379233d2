pub mod geometry;
pub mod ids;
pub mod scalar;

pub use geometry::{MAX_POS, MIN_SPAN, PercentRect, clamp_position, clamp_span};
pub use ids::ElementId;
pub use scalar::Scalar;
