//! Catalog View - the browsable skill catalog
//!
//! Categories on the left, the focused category's skills on the right.
//! A search replaces the skills panel with flat matches from every
//! category until it is cleared.

mod input;
mod render;

use crate::directory::catalog::{self, SkillCategory};

use super::InputMode;

/// Catalog View state
#[derive(Debug, Default)]
pub struct CatalogView {
    /// Selected category in the left panel
    pub selected_index: usize,
    /// Current input mode
    pub input_mode: InputMode,
    /// Input buffer for search
    pub input_buffer: String,
    /// Active skill search (None = category browsing)
    pub search_query: Option<String>,
}

impl CatalogView {
    /// Create a new CatalogView
    pub fn new() -> Self {
        Self::default()
    }

    /// The category under the cursor
    pub fn selected_category(&self) -> SkillCategory {
        catalog::CATEGORIES[self.selected_index.min(catalog::CATEGORIES.len() - 1)]
    }

    /// Skills matching the active search, across all categories
    pub fn search_results(&self) -> Vec<&'static str> {
        match &self.search_query {
            Some(query) => catalog::search(query),
            None => Vec::new(),
        }
    }

    /// Move category selection up
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move category selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < catalog::CATEGORIES.len() {
            self.selected_index += 1;
        }
    }

    /// Move to the first category
    pub fn move_to_top(&mut self) {
        self.selected_index = 0;
    }

    /// Move to the last category
    pub fn move_to_bottom(&mut self) {
        self.selected_index = catalog::CATEGORIES.len() - 1;
    }

    /// Start search input mode
    pub fn start_search_input(&mut self) {
        self.input_mode = InputMode::SearchInput;
        self.input_buffer.clear();
    }

    /// Cancel input mode
    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    /// Drop the active search; returns false when none was active
    ///
    /// Esc clears the search before it backs out of the view.
    pub fn clear_search(&mut self) -> bool {
        self.search_query.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent};

    use crate::directory::catalog;
    use crate::keys;

    use super::{CatalogView, InputMode};

    fn press_key(view: &mut CatalogView, key: KeyCode) {
        view.handle_key(KeyEvent::from(key));
    }

    fn type_text(view: &mut CatalogView, text: &str) {
        for c in text.chars() {
            press_key(view, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_catalog_view_new() {
        let view = CatalogView::new();
        assert_eq!(view.selected_index, 0);
        assert_eq!(view.input_mode, InputMode::Normal);
        assert!(view.search_query.is_none());
        assert_eq!(view.selected_category().name, "Programming Languages");
    }

    #[test]
    fn test_category_navigation_clamps() {
        let mut view = CatalogView::new();
        let last = catalog::CATEGORIES.len() - 1;

        press_key(&mut view, keys::MOVE_UP);
        assert_eq!(view.selected_index, 0);

        press_key(&mut view, keys::GO_BOTTOM);
        assert_eq!(view.selected_index, last);

        press_key(&mut view, keys::MOVE_DOWN);
        assert_eq!(view.selected_index, last);

        press_key(&mut view, keys::MOVE_UP);
        assert_eq!(view.selected_index, last - 1);

        press_key(&mut view, keys::GO_TOP);
        assert_eq!(view.selected_index, 0);
    }

    #[test]
    fn test_search_flow() {
        let mut view = CatalogView::new();

        press_key(&mut view, keys::SEARCH_INPUT);
        assert_eq!(view.input_mode, InputMode::SearchInput);

        type_text(&mut view, "rust");
        press_key(&mut view, keys::SUBMIT);

        assert_eq!(view.input_mode, InputMode::Normal);
        assert_eq!(view.search_query, Some("rust".to_string()));
        assert!(view.search_results().contains(&"Rust"));
    }

    #[test]
    fn test_search_submit_trims() {
        let mut view = CatalogView::new();
        view.start_search_input();
        type_text(&mut view, "  docker  ");
        press_key(&mut view, keys::SUBMIT);

        assert_eq!(view.search_query, Some("docker".to_string()));
    }

    #[test]
    fn test_search_empty_submit_clears_query() {
        let mut view = CatalogView::new();
        view.search_query = Some("rust".to_string());

        view.start_search_input();
        press_key(&mut view, keys::SUBMIT);
        assert_eq!(view.search_query, None);
    }

    #[test]
    fn test_search_esc_cancels_input_only() {
        let mut view = CatalogView::new();
        view.search_query = Some("rust".to_string());

        view.start_search_input();
        type_text(&mut view, "go");
        press_key(&mut view, keys::ESC);

        assert_eq!(view.input_mode, InputMode::Normal);
        assert!(view.input_buffer.is_empty());
        // Cancelling input keeps the active search
        assert_eq!(view.search_query, Some("rust".to_string()));
    }

    #[test]
    fn test_clear_search() {
        let mut view = CatalogView::new();
        assert!(!view.clear_search());

        view.search_query = Some("rust".to_string());
        assert!(view.clear_search());
        assert!(view.search_query.is_none());
        assert!(view.search_results().is_empty());
    }

    #[test]
    fn test_backspace_edits_buffer() {
        let mut view = CatalogView::new();
        view.start_search_input();
        type_text(&mut view, "ru");
        press_key(&mut view, KeyCode::Backspace);
        assert_eq!(view.input_buffer, "r");
    }

    #[test]
    fn test_navigation_ignored_while_searching() {
        let mut view = CatalogView::new();
        view.start_search_input();

        // j and k are text here, not cursor movement
        type_text(&mut view, "jk");
        assert_eq!(view.selected_index, 0);
        assert_eq!(view.input_buffer, "jk");
    }
}
