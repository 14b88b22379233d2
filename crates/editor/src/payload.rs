//! Drag-and-drop transfer payloads.
//!
//! Two channels cross the drop boundary: a `{type}` descriptor for
//! palette-to-page drops, and a bare element id for moves. A drop may
//! carry both; the new-element channel always wins.

use crate::element::ElementKind;
use foliant_types::ElementId;
use serde::{Deserialize, Serialize};

/// Channel carrying a new-element descriptor.
pub const NEW_ELEMENT_CHANNEL: &str = "application/x-foliant-element";

/// Channel carrying the id of an element being moved.
pub const MOVE_CHANNEL: &str = "application/x-foliant-element-id";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
struct NewElementDescriptor {
    #[serde(rename = "type")]
    kind: ElementKind,
}

/// A decoded drop payload.
#[derive(Debug, Clone, PartialEq)]
pub enum DragPayload {
    NewElement(ElementKind),
    MoveElement(ElementId),
}

impl DragPayload {
    /// Encodes to (channel, data) for handing to the transfer object.
    pub fn encode(&self) -> (&'static str, String) {
        match self {
            DragPayload::NewElement(kind) => {
                let descriptor = NewElementDescriptor { kind: *kind };
                // A struct of one enum field cannot fail to serialize.
                let data = serde_json::to_string(&descriptor).unwrap_or_default();
                (NEW_ELEMENT_CHANNEL, data)
            }
            DragPayload::MoveElement(id) => (MOVE_CHANNEL, id.to_string()),
        }
    }

    /// Decodes a drop given a channel reader. The new-element channel is
    /// checked before the move channel, so a drop carrying both creates.
    pub fn decode(read_channel: impl Fn(&str) -> Option<String>) -> Option<DragPayload> {
        if let Some(data) = read_channel(NEW_ELEMENT_CHANNEL) {
            if let Ok(descriptor) = serde_json::from_str::<NewElementDescriptor>(&data) {
                return Some(DragPayload::NewElement(descriptor.kind));
            }
        }
        read_channel(MOVE_CHANNEL)
            .filter(|id| !id.is_empty())
            .map(|id| DragPayload::MoveElement(ElementId::from(id)))
    }
}
