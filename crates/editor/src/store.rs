//! The per-page layout element store and its JSON document format.
//!
//! The wire format is an object keyed by page-index strings, each value
//! an ordered array of element records. Import only validates the
//! top-level shape; element records deserialize with per-field defaults
//! so sparse payloads degrade at render time instead of failing here.

use crate::element::LayoutElement;
use crate::error::LayoutDocError;
use foliant_types::ElementId;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutStore {
    pages: BTreeMap<usize, Vec<LayoutElement>>,
}

impl LayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The elements placed on a page, in insertion order.
    pub fn elements(&self, page: usize) -> &[LayoutElement] {
        self.pages.get(&page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Page indices that have at least one element.
    pub fn page_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.pages.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.values().all(Vec::is_empty)
    }

    pub fn get(&self, page: usize, id: &ElementId) -> Option<&LayoutElement> {
        self.pages.get(&page)?.iter().find(|e| &e.id == id)
    }

    pub fn get_mut(&mut self, page: usize, id: &ElementId) -> Option<&mut LayoutElement> {
        self.pages.get_mut(&page)?.iter_mut().find(|e| &e.id == id)
    }

    /// The z-index for the next element added to a page: one above the
    /// highest existing, starting at 1 on an empty page.
    pub fn next_z_index(&self, page: usize) -> i32 {
        self.elements(page)
            .iter()
            .map(|e| e.z_index)
            .max()
            .map(|z| z + 1)
            .unwrap_or(1)
    }

    pub fn push(&mut self, page: usize, element: LayoutElement) {
        self.pages.entry(page).or_default().push(element);
    }

    pub fn remove(&mut self, page: usize, id: &ElementId) -> Option<LayoutElement> {
        let elements = self.pages.get_mut(&page)?;
        let index = elements.iter().position(|e| &e.id == id)?;
        Some(elements.remove(index))
    }

    /// Serializes the whole store to the pretty-printed document format.
    /// Page-index keys come out as decimal strings in ascending order.
    pub fn export(&self) -> Result<String, LayoutDocError> {
        Ok(serde_json::to_string_pretty(&self.pages)?)
    }

    /// Parses a layout document, rejecting anything but a top-level
    /// object. Callers swap the result in wholesale, so a failed parse
    /// never disturbs existing state.
    pub fn from_document(document: &str) -> Result<Self, LayoutDocError> {
        let shape = match serde_json::from_str::<Value>(document)? {
            value @ Value::Object(_) => {
                let pages: BTreeMap<usize, Vec<LayoutElement>> = serde_json::from_value(value)?;
                return Ok(Self { pages });
            }
            Value::Array(_) => "an array",
            Value::String(_) => "a string",
            Value::Number(_) => "a number",
            Value::Bool(_) => "a boolean",
            Value::Null => "null",
        };
        Err(LayoutDocError::Shape(shape.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    fn store_with_two_pages() -> LayoutStore {
        let mut store = LayoutStore::new();
        store.push(0, LayoutElement::at_drop_point(ElementKind::Title, 50.0, 10.0, 1));
        store.push(0, LayoutElement::at_drop_point(ElementKind::Text, 40.0, 60.0, 2));
        store.push(2, LayoutElement::at_drop_point(ElementKind::Shape, 30.0, 30.0, 1));
        store
    }

    #[test]
    fn test_next_z_index_counts_per_page() {
        let store = store_with_two_pages();
        assert_eq!(store.next_z_index(0), 3);
        assert_eq!(store.next_z_index(2), 2);
        assert_eq!(store.next_z_index(7), 1);
    }

    #[test]
    fn test_export_import_round_trip() {
        let store = store_with_two_pages();
        let document = store.export().unwrap();
        let imported = LayoutStore::from_document(&document).unwrap();
        assert_eq!(imported, store);
    }

    #[test]
    fn test_export_keys_are_page_index_strings() {
        let store = store_with_two_pages();
        let document = store.export().unwrap();
        let value: Value = serde_json::from_str(&document).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["0", "2"]);
    }

    #[test]
    fn test_import_rejects_array() {
        let err = LayoutStore::from_document("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, LayoutDocError::Shape(_)));
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_import_rejects_scalar() {
        let err = LayoutStore::from_document("42").unwrap_err();
        assert!(matches!(err, LayoutDocError::Shape(_)));
    }

    #[test]
    fn test_import_accepts_sparse_elements() {
        // Only a type and a position; everything else defaults.
        let store = LayoutStore::from_document(
            r#"{ "1": [ { "type": "image", "x": 10, "y": 10 } ] }"#,
        )
        .unwrap();
        let element = &store.elements(1)[0];
        assert_eq!(element.kind, ElementKind::Image);
        assert!(element.url.is_none());
        assert_eq!(element.z_index, 0);
    }

    #[test]
    fn test_remove_unknown_is_none() {
        let mut store = store_with_two_pages();
        assert!(store.remove(0, &ElementId::new("missing")).is_none());
        assert!(store.remove(9, &ElementId::new("missing")).is_none());
    }
}
