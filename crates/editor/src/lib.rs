pub mod element;
pub mod error;
pub mod payload;
pub mod resize;
pub mod session;
pub mod store;

pub use element::{ElementKind, ElementPatch, LayoutElement, ShapeKind};
pub use error::LayoutDocError;
pub use payload::{DragPayload, MOVE_CHANNEL, NEW_ELEMENT_CHANNEL};
pub use resize::{Handle, ResizeGesture, apply_resize};
pub use session::{EditorSession, Selection};
pub use store::LayoutStore;
