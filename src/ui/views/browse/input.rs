//! Input handling for BrowseView

use crossterm::event::{KeyCode, KeyEvent};

use crate::keys;

use super::{BrowseAction, BrowseView, InputMode};

impl BrowseView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> BrowseAction {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::SearchInput => self.handle_search_input_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> BrowseAction {
        match key.code {
            k if keys::is_move_down(k) => {
                self.move_down();
                BrowseAction::None
            }
            k if keys::is_move_up(k) => {
                self.move_up();
                BrowseAction::None
            }
            k if keys::is_move_left(k) => {
                if self.page_prev() {
                    BrowseAction::QueryChanged
                } else {
                    BrowseAction::None
                }
            }
            k if keys::is_move_right(k) => {
                if self.page_next() {
                    BrowseAction::QueryChanged
                } else {
                    BrowseAction::None
                }
            }
            k if k == keys::GO_TOP => {
                self.move_to_top();
                BrowseAction::None
            }
            k if k == keys::GO_BOTTOM => {
                self.move_to_bottom();
                BrowseAction::None
            }
            k if k == keys::SEARCH_INPUT => {
                self.start_search_input();
                BrowseAction::None
            }
            k if k == keys::FILTER => BrowseAction::StartAvailabilityFilter,
            k if k == keys::CLEAR_FILTERS => {
                if self.clear_filters() {
                    BrowseAction::QueryChanged
                } else {
                    BrowseAction::None
                }
            }
            k if k == keys::OPEN_PROFILE => {
                if let Some(profile) = self.selected_profile() {
                    BrowseAction::OpenProfile(profile.id.clone())
                } else {
                    BrowseAction::None
                }
            }
            k if k == keys::SEND_SWAP => {
                if let Some(profile) = self.selected_profile() {
                    BrowseAction::StartSwap(profile.id.clone())
                } else {
                    BrowseAction::None
                }
            }
            k if k == keys::MY_PROFILE => BrowseAction::OpenMyProfile,
            k if k == keys::CATALOG => BrowseAction::OpenCatalog,
            k if k == keys::ADMIN_REPORT => BrowseAction::OpenReport,
            _ => BrowseAction::None,
        }
    }

    fn handle_search_input_key(&mut self, key: KeyEvent) -> BrowseAction {
        match key.code {
            k if k == keys::ESC => {
                self.cancel_input();
                BrowseAction::None
            }
            k if k == keys::SUBMIT => {
                let input = std::mem::take(&mut self.input_buffer);
                self.input_mode = InputMode::Normal;

                let query = input.trim().to_string();
                if query.is_empty() {
                    // Empty submit clears an active search
                    if self.search_query.take().is_some() {
                        self.page = 0;
                        self.selected_index = 0;
                        BrowseAction::QueryChanged
                    } else {
                        BrowseAction::None
                    }
                } else {
                    self.search_query = Some(query);
                    self.page = 0;
                    self.selected_index = 0;
                    BrowseAction::QueryChanged
                }
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                BrowseAction::None
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                BrowseAction::None
            }
            _ => BrowseAction::None,
        }
    }
}
