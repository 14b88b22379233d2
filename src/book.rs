//! The book model: configuration in, per-page render models out, with
//! the editing session riding alongside.

use crate::error::BookError;
use crate::render::{RenderNode, render_page};
use foliant_config::{BookConfig, Density, PageConfig, PageType};
use foliant_editor::EditorSession;
use foliant_style::{PageStyle, ResolvedStyle, resolve_style};

/// One page, fully derived: number, density, cascaded style, render tree.
#[derive(Debug, Clone)]
pub struct PageModel {
    pub index: usize,
    pub number: u32,
    pub kind: PageType,
    pub density: Density,
    pub title: Option<String>,
    pub style: ResolvedStyle,
    pub nodes: Vec<RenderNode>,
    /// The page number shown in the footer; covers carry none.
    pub footer: Option<u32>,
}

pub struct Book {
    config: BookConfig,
    session: EditorSession,
}

impl Book {
    pub fn new(config: BookConfig) -> Self {
        let mut session = EditorSession::new();
        session.set_current_page(config.settings.start_page);
        Self { config, session }
    }

    pub fn from_json(json: &str) -> Result<Self, BookError> {
        Ok(Self::new(BookConfig::from_json(json)?))
    }

    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    pub fn page_count(&self) -> usize {
        self.config.page_count()
    }

    /// The layout editing session for this book.
    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditorSession {
        &mut self.session
    }

    /// Feed of the flip adapter's page-change events: keeps the editor
    /// pointed at the page under the reader.
    pub fn handle_page_change(&mut self, index: usize) {
        self.session.set_current_page(index);
    }

    /// The style layers beneath a page's own: the book-wide typography
    /// and colors.
    fn global_layer(&self) -> PageStyle {
        let mut layer = PageStyle {
            typography: Some(self.config.global_typography()),
            ..PageStyle::default()
        };
        if let Some(colors) = self.config.global_style.as_ref().and_then(|g| g.colors.as_ref()) {
            layer.color = colors.text.clone();
            layer.background = colors.background.clone();
        }
        layer
    }

    fn build_page(&self, index: usize, page: &PageConfig) -> PageModel {
        let mut layered = self.global_layer();
        if let Some(style) = &page.style {
            foliant_style::merge_page_styles(&mut layered, style);
        }

        let number = page.page_number(index);
        PageModel {
            index,
            number,
            kind: page.kind,
            density: page.density(),
            title: page.title.clone(),
            style: resolve_style(&layered),
            nodes: render_page(page),
            footer: (page.kind != PageType::Cover).then_some(number),
        }
    }

    /// The derived model for one page, or None past the end.
    pub fn page(&self, index: usize) -> Option<PageModel> {
        let page = self.config.pages.get(index)?;
        Some(self.build_page(index, page))
    }

    /// All pages, in book order.
    pub fn pages(&self) -> Vec<PageModel> {
        self.config
            .pages
            .iter()
            .enumerate()
            .map(|(index, page)| self.build_page(index, page))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn book(value: serde_json::Value) -> Book {
        Book::new(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_page_numbers_and_density_derive() {
        let book = book(json!({
            "size": { "width": 400, "height": 550 },
            "pages": [
                { "type": "cover", "title": "My Book" },
                { "type": "chapter", "title": "One" },
                { "type": "content", "content": "..." },
                { "type": "content", "number": 99 },
            ],
        }));

        let pages = book.pages();
        assert_eq!(pages.len(), 4);
        assert_eq!(pages[0].density, Density::Hard);
        assert_eq!(pages[0].footer, None);
        assert_eq!(pages[1].number, 2);
        assert_eq!(pages[2].density, Density::Soft);
        assert_eq!(pages[2].footer, Some(3));
        assert_eq!(pages[3].number, 99);
    }

    #[test]
    fn test_global_typography_reaches_every_page() {
        let book = book(json!({
            "size": { "width": 400, "height": 550 },
            "globalStyle": { "typography": { "fontFamily": "Georgia" } },
            "pages": [
                { "type": "content" },
                { "type": "content", "style": { "color": "#333" } },
            ],
        }));

        for page in book.pages() {
            assert_eq!(page.style.font_family.as_deref(), Some("Georgia"));
        }
        assert_eq!(book.page(1).unwrap().style.color.as_deref(), Some("#333"));
    }

    #[test]
    fn test_page_style_overrides_global_field_by_field() {
        let book = book(json!({
            "size": { "width": 400, "height": 550 },
            "globalStyle": {
                "typography": { "fontFamily": "Georgia", "fontSize": 14 },
                "colors": { "text": "#111" },
            },
            "pages": [
                { "type": "content", "style": { "typography": { "fontSize": 18 } } },
            ],
        }));

        let page = book.page(0).unwrap();
        assert_eq!(page.style.font_family.as_deref(), Some("Georgia"));
        assert_eq!(page.style.font_size, Some(foliant_types::Scalar::Number(18.0)));
        assert_eq!(page.style.color.as_deref(), Some("#111"));
    }

    #[test]
    fn test_background_prefers_gradient_table() {
        let book = book(json!({
            "size": { "width": 400, "height": 550 },
            "pages": [
                { "type": "cover", "style": { "background": { "color": "purple" } } },
            ],
        }));
        assert_eq!(
            book.page(0).unwrap().style.background.as_deref(),
            Some("linear-gradient(135deg, #667eea 0%, #764ba2 100%)")
        );
    }

    #[test]
    fn test_editor_follows_flip_events() {
        let mut book = book(json!({
            "size": { "width": 400, "height": 550 },
            "pages": [ { "type": "content" }, { "type": "content" } ],
        }));
        book.handle_page_change(1);
        assert_eq!(book.session().current_page(), 1);
    }

    #[test]
    fn test_start_page_seeds_the_session() {
        let book = book(json!({
            "size": { "width": 400, "height": 550 },
            "settings": { "startPage": 3 },
            "pages": [],
        }));
        assert_eq!(book.session().current_page(), 3);
    }
}
