//! The editing session: the store plus the process-wide selection and
//! any resize gesture in progress, carried as explicit context.

use crate::element::{ElementKind, ElementPatch, LayoutElement};
use crate::error::LayoutDocError;
use crate::resize::{Handle, ResizeGesture, apply_resize};
use crate::store::LayoutStore;
use foliant_types::{ElementId, PercentRect};

/// The one selected element, book-wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub page: usize,
    pub id: ElementId,
}

#[derive(Debug, Default)]
pub struct EditorSession {
    store: LayoutStore,
    selected: Option<Selection>,
    resize: Option<ResizeGesture>,
    current_page: usize,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &LayoutStore {
        &self.store
    }

    /// The page that receives click-to-add elements; driven by the flip
    /// widget's page-change events.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn selected(&self) -> Option<&Selection> {
        self.selected.as_ref()
    }

    /// Adds a new element to the current page at a drop point. The new
    /// element lands above everything else on the page and is selected.
    pub fn add(&mut self, kind: ElementKind, drop_x: f32, drop_y: f32) -> ElementId {
        self.add_to(self.current_page, kind, drop_x, drop_y)
    }

    /// Adds to an explicit page; the drag-and-drop path.
    pub fn add_to(&mut self, page: usize, kind: ElementKind, drop_x: f32, drop_y: f32) -> ElementId {
        let z_index = self.store.next_z_index(page);
        let element = LayoutElement::at_drop_point(kind, drop_x, drop_y, z_index);
        let id = element.id.clone();
        log::debug!("add {} element {} on page {} (z {})", kind, id, page, z_index);
        self.store.push(page, element);
        self.selected = Some(Selection { page, id: id.clone() });
        id
    }

    /// Selects an element. Selection is a book-wide singleton: selecting
    /// on one page clears any selection on another. Unknown ids are
    /// ignored.
    pub fn select(&mut self, page: usize, id: &ElementId) {
        if self.store.get(page, id).is_some() {
            self.selected = Some(Selection { page, id: id.clone() });
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Moves an element; both axes clamp, z-order is unchanged.
    pub fn move_element(&mut self, page: usize, id: &ElementId, x: f32, y: f32) {
        if let Some(element) = self.store.get_mut(page, id) {
            element.move_to(x, y);
        }
    }

    /// Snapshots geometry and enters the resizing state. A gesture on an
    /// unknown element is ignored.
    pub fn begin_resize(&mut self, page: usize, id: &ElementId, handle: Handle) {
        if let Some(element) = self.store.get(page, id) {
            self.resize = Some(ResizeGesture {
                page,
                id: id.clone(),
                handle,
                start: PercentRect::new(element.x, element.y, element.width, element.height),
            });
        }
    }

    /// Applies a pointer delta against the gesture snapshot. No-op when
    /// no gesture is active.
    pub fn update_resize(&mut self, dx: f32, dy: f32) {
        let Some(gesture) = &self.resize else {
            return;
        };
        let rect = apply_resize(gesture.handle, gesture.start, dx, dy);
        let (page, id) = (gesture.page, gesture.id.clone());
        if let Some(element) = self.store.get_mut(page, &id) {
            element.x = rect.x;
            element.y = rect.y;
            element.width = rect.width;
            element.height = rect.height;
        }
    }

    /// Ends the gesture. Also the pointer-capture-loss path: losing
    /// capture mid-drag is an unconditional end.
    pub fn end_resize(&mut self) {
        self.resize = None;
    }

    pub fn resizing(&self) -> bool {
        self.resize.is_some()
    }

    /// Shallow-merges a property patch into an element.
    pub fn update_properties(&mut self, page: usize, id: &ElementId, patch: &ElementPatch) {
        if let Some(element) = self.store.get_mut(page, id) {
            element.patch(patch);
        }
    }

    /// Deletes an element, clearing the selection if it pointed at it.
    pub fn delete(&mut self, page: usize, id: &ElementId) {
        if self.store.remove(page, id).is_some() {
            log::debug!("delete element {} on page {}", id, page);
            if self
                .selected
                .as_ref()
                .is_some_and(|s| s.page == page && &s.id == id)
            {
                self.selected = None;
            }
        }
    }

    /// Serializes the whole store to the layout document format.
    pub fn export(&self) -> Result<String, LayoutDocError> {
        self.store.export()
    }

    /// Replaces the whole store from a layout document. The swap is
    /// atomic: on any error the prior store, selection, and gesture are
    /// untouched. On success selection and any gesture are cleared.
    pub fn import(&mut self, document: &str) -> Result<(), LayoutDocError> {
        let store = LayoutStore::from_document(document)?;
        log::debug!("import layout document ({} pages)", store.page_indices().count());
        self.store = store;
        self.selected = None;
        self.resize = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foliant_types::{MAX_POS, MIN_SPAN};

    #[test]
    fn test_add_selects_and_stacks() {
        let mut session = EditorSession::new();
        let first = session.add_to(0, ElementKind::Title, 50.0, 10.0);
        let second = session.add_to(0, ElementKind::Text, 50.0, 60.0);

        assert_eq!(session.selected().unwrap().id, second);
        let elements = session.store().elements(0);
        assert_eq!(elements[0].id, first);
        assert_eq!(elements[0].z_index, 1);
        assert_eq!(elements[1].z_index, 2);
    }

    #[test]
    fn test_selection_is_a_book_wide_singleton() {
        let mut session = EditorSession::new();
        let a = session.add_to(0, ElementKind::Text, 20.0, 20.0);
        let b = session.add_to(3, ElementKind::Image, 40.0, 40.0);

        session.select(0, &a);
        session.select(3, &b);

        let selected = session.selected().unwrap();
        assert_eq!((selected.page, &selected.id), (3, &b));
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let mut session = EditorSession::new();
        let a = session.add_to(0, ElementKind::Text, 20.0, 20.0);
        session.select(0, &ElementId::new("nope"));
        assert_eq!(session.selected().unwrap().id, a);
    }

    #[test]
    fn test_move_clamps() {
        let mut session = EditorSession::new();
        let id = session.add_to(0, ElementKind::Shape, 50.0, 50.0);
        session.move_element(0, &id, 150.0, -20.0);

        let element = session.store().get(0, &id).unwrap();
        assert_eq!((element.x, element.y), (MAX_POS, 0.0));
    }

    #[test]
    fn test_resize_gesture_applies_snapshot_deltas() {
        let mut session = EditorSession::new();
        let id = session.add_to(0, ElementKind::Image, 50.0, 50.0);

        session.begin_resize(0, &id, Handle::Se);
        session.update_resize(10.0, 5.0);
        // A second event replaces, not accumulates.
        session.update_resize(12.0, 6.0);
        session.end_resize();

        let element = session.store().get(0, &id).unwrap();
        assert_eq!((element.width, element.height), (42.0, 31.0));
        assert!(!session.resizing());
    }

    #[test]
    fn test_resize_respects_floor() {
        let mut session = EditorSession::new();
        let id = session.add_to(0, ElementKind::Image, 50.0, 50.0);

        session.begin_resize(0, &id, Handle::E);
        session.update_resize(-100.0, 0.0);
        session.end_resize();

        assert_eq!(session.store().get(0, &id).unwrap().width, MIN_SPAN);
    }

    #[test]
    fn test_update_resize_without_gesture_is_noop() {
        let mut session = EditorSession::new();
        let id = session.add_to(0, ElementKind::Text, 50.0, 50.0);
        let before = session.store().get(0, &id).unwrap().clone();
        session.update_resize(10.0, 10.0);
        assert_eq!(session.store().get(0, &id).unwrap(), &before);
    }

    #[test]
    fn test_delete_clears_matching_selection() {
        let mut session = EditorSession::new();
        let id = session.add_to(1, ElementKind::Video, 40.0, 40.0);
        session.delete(1, &id);

        assert!(session.selected().is_none());
        assert!(session.store().elements(1).is_empty());
    }

    #[test]
    fn test_import_failure_preserves_state() {
        let mut session = EditorSession::new();
        let id = session.add_to(0, ElementKind::Text, 30.0, 30.0);
        let before = session.export().unwrap();

        let err = session.import("[1, 2, 3]").unwrap_err();
        assert!(err.to_string().contains("array"));
        assert_eq!(session.export().unwrap(), before);
        assert_eq!(session.selected().unwrap().id, id);
    }

    #[test]
    fn test_import_replaces_store_and_clears_selection() {
        let mut session = EditorSession::new();
        session.add_to(0, ElementKind::Text, 30.0, 30.0);

        session
            .import(r#"{ "4": [ { "id": "text-1", "type": "text", "x": 5, "y": 5, "width": 30, "height": 20, "zIndex": 1 } ] }"#)
            .unwrap();

        assert!(session.selected().is_none());
        assert!(session.store().elements(0).is_empty());
        assert_eq!(session.store().elements(4).len(), 1);
    }

    #[test]
    fn test_import_round_trip_preserves_everything() {
        let mut session = EditorSession::new();
        let id = session.add_to(0, ElementKind::Text, 30.0, 30.0);
        session.update_properties(
            0,
            &id,
            &ElementPatch { content: Some("hello".to_string()), ..ElementPatch::default() },
        );
        session.add_to(2, ElementKind::Shape, 60.0, 60.0);

        let exported = session.export().unwrap();
        let mut other = EditorSession::new();
        other.import(&exported).unwrap();

        assert_eq!(other.export().unwrap(), exported);
        assert_eq!(other.store(), session.store());
    }

    #[test]
    fn test_click_to_add_targets_current_page() {
        let mut session = EditorSession::new();
        session.set_current_page(5);
        session.add(ElementKind::Title, 50.0, 20.0);
        assert_eq!(session.store().elements(5).len(), 1);
    }
}
