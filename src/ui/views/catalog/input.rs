//! Input handling for CatalogView

use crossterm::event::{KeyCode, KeyEvent};

use crate::keys;

use super::{CatalogView, InputMode};

impl CatalogView {
    /// Handle key event
    ///
    /// The catalog never needs anything from App; Esc and q are handled
    /// globally (Esc clears the search through [`CatalogView::clear_search`]
    /// before it backs out).
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::SearchInput => self.handle_search_input_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            k if keys::is_move_down(k) => self.move_down(),
            k if keys::is_move_up(k) => self.move_up(),
            k if k == keys::GO_TOP => self.move_to_top(),
            k if k == keys::GO_BOTTOM => self.move_to_bottom(),
            k if k == keys::SEARCH_INPUT => self.start_search_input(),
            _ => {}
        }
    }

    fn handle_search_input_key(&mut self, key: KeyEvent) {
        match key.code {
            k if k == keys::ESC => self.cancel_input(),
            k if k == keys::SUBMIT => {
                let input = std::mem::take(&mut self.input_buffer);
                self.input_mode = InputMode::Normal;

                let query = input.trim().to_string();
                if query.is_empty() {
                    // Empty submit clears an active search
                    self.search_query = None;
                } else {
                    self.search_query = Some(query);
                }
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            _ => {}
        }
    }
}
