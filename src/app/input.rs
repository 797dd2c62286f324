//! Input handling for the application

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, View};
use crate::keys;
use crate::ui::views::{BrowseAction, InputMode, LoginAction, ProfileAction, RequestAction};
use crate::ui::widgets::{build_help_lines, matching_line_indices};

impl App {
    /// Handle key events
    ///
    /// Handling order (important):
    /// 1. Clear any shown error
    /// 2. Ctrl+C always quits
    /// 3. An open dialog captures all input
    /// 4. Text input and edit modes capture keys before global bindings
    /// 5. Global key bindings
    /// 6. View-specific key bindings
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        // Handle Ctrl+C globally
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }

        // An open dialog captures all input
        if let Some(dialog) = self.active_dialog.as_mut() {
            if let Some(result) = dialog.handle_key(key) {
                self.handle_dialog_result(result);
            }
            return;
        }

        // If a view is capturing raw input, delegate all keys to it
        // (skip global handling)
        if self.raw_input_active() {
            self.handle_raw_input_key(key);
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_view_key(key);
    }

    /// Whether the current view is capturing raw input
    ///
    /// While this holds, printable keys are text (or edit commands), so
    /// globals like `q` and Tab must not fire.
    fn raw_input_active(&self) -> bool {
        match self.current_view {
            View::Login => true,
            View::Browse => self.browse_view.input_mode == InputMode::SearchInput,
            View::Profile => self.profile_view.is_editing(),
            View::Catalog => self.catalog_view.input_mode == InputMode::SearchInput,
            View::Help => self.help_search_input,
            View::Requests | View::Report => false,
        }
    }

    fn handle_raw_input_key(&mut self, key: KeyEvent) {
        match self.current_view {
            View::Login => {
                let action = self.login_view.handle_key(key);
                self.handle_login_action(action);
            }
            View::Browse => {
                let action = self.browse_view.handle_key(key);
                self.handle_browse_action(action);
            }
            View::Profile => {
                let action = self.profile_view.handle_key(key);
                self.handle_profile_action(action);
            }
            View::Catalog => self.catalog_view.handle_key(key),
            View::Help => self.handle_help_search_key(key),
            View::Requests | View::Report => {}
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        if keys::is_refresh_key(&key) {
            self.execute_refresh();
            return true;
        }
        match key.code {
            keys::QUIT => {
                self.handle_quit();
                true
            }
            keys::ESC => {
                self.handle_back();
                true
            }
            keys::HELP => {
                self.go_to_view(View::Help);
                true
            }
            keys::TAB => {
                if self.directory.is_signed_in() {
                    self.next_view();
                }
                true
            }
            keys::LOGOUT => {
                self.start_logout();
                true
            }
            _ => false,
        }
    }

    /// `q` quits from the home view and walks back everywhere else
    fn handle_quit(&mut self) {
        if self.current_view == View::Browse {
            self.quit();
        } else {
            self.go_back();
        }
    }

    /// Esc walks back, except where the view has something to dismiss first
    fn handle_back(&mut self) {
        match self.current_view {
            // Browse is the home view; only `q` leaves it
            View::Browse => {}
            View::Catalog => {
                if !self.catalog_view.clear_search() {
                    self.go_back();
                }
            }
            View::Help => {
                // First Esc drops the search highlighting
                if self.help_search_query.take().is_none() {
                    self.go_back();
                }
            }
            _ => self.go_back(),
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.current_view {
            View::Login => {
                // Login captures every key in raw input mode
            }
            View::Browse => {
                let action = self.browse_view.handle_key(key);
                self.handle_browse_action(action);
            }
            View::Profile => {
                let action = self.profile_view.handle_key(key);
                self.handle_profile_action(action);
            }
            View::Requests => {
                let action = self.requests_view.handle_key(key);
                self.handle_requests_action(action);
            }
            View::Catalog => self.catalog_view.handle_key(key),
            View::Report => {
                // Report only navigates via global keys
            }
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_login_action(&mut self, action: LoginAction) {
        match action {
            LoginAction::None => {}
            LoginAction::Submit { email, password } => {
                self.submit_login(&email, &password);
            }
            LoginAction::Quit => {
                self.quit();
            }
        }
    }

    fn handle_browse_action(&mut self, action: BrowseAction) {
        match action {
            BrowseAction::None => {}
            BrowseAction::QueryChanged => {
                self.refresh_browse();
            }
            BrowseAction::OpenProfile(id) => {
                self.open_profile(&id);
            }
            BrowseAction::StartSwap(id) => {
                self.start_swap(&id);
            }
            BrowseAction::OpenMyProfile => {
                self.open_my_profile();
            }
            BrowseAction::OpenCatalog => {
                self.go_to_view(View::Catalog);
            }
            BrowseAction::OpenReport => {
                self.open_report();
            }
            BrowseAction::StartAvailabilityFilter => {
                self.start_availability_filter();
            }
        }
    }

    fn handle_profile_action(&mut self, action: ProfileAction) {
        match action {
            ProfileAction::None => {}
            ProfileAction::EditField(focus) => {
                self.start_field_edit(focus);
            }
            ProfileAction::Save(edits) => {
                self.execute_profile_save(edits);
            }
            ProfileAction::StartSwap(id) => {
                self.start_swap(&id);
            }
            ProfileAction::StartFeedback(id) => {
                self.start_feedback(&id);
            }
        }
    }

    fn handle_requests_action(&mut self, action: RequestAction) {
        match action {
            RequestAction::None => {}
            RequestAction::StartAccept(id) => {
                self.start_accept(&id);
            }
            RequestAction::StartReject(id) => {
                self.start_reject(&id);
            }
            RequestAction::OpenProfile(id) => {
                self.open_profile(&id);
            }
        }
    }

    // ── Help view keys ──

    fn help_line_count(&self) -> u16 {
        build_help_lines(self.help_search_query.as_deref()).len() as u16
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            k if keys::is_move_down(k) => {
                let max = self.help_line_count().saturating_sub(1);
                self.help_scroll = self.help_scroll.saturating_add(1).min(max);
            }
            k if keys::is_move_up(k) => {
                self.help_scroll = self.help_scroll.saturating_sub(1);
            }
            keys::GO_TOP => self.help_scroll = 0,
            keys::GO_BOTTOM => {
                self.help_scroll = self.help_line_count().saturating_sub(1);
            }
            keys::SEARCH_INPUT => {
                self.help_search_input = true;
                self.help_input_buffer.clear();
            }
            KeyCode::Char('n') => self.help_jump_to_match(true),
            KeyCode::Char('N') => self.help_jump_to_match(false),
            _ => {}
        }
    }

    /// Scroll to the next (or previous) line matching the help search,
    /// wrapping around at either end
    fn help_jump_to_match(&mut self, forward: bool) {
        let Some(query) = self.help_search_query.as_deref() else {
            return;
        };
        let matches = matching_line_indices(query);
        if matches.is_empty() {
            return;
        }
        let current = self.help_scroll;
        self.help_scroll = if forward {
            matches
                .iter()
                .copied()
                .find(|&line| line > current)
                .unwrap_or(matches[0])
        } else {
            matches
                .iter()
                .rev()
                .copied()
                .find(|&line| line < current)
                .or_else(|| matches.last().copied())
                .unwrap_or(0)
        };
    }

    fn handle_help_search_key(&mut self, key: KeyEvent) {
        match key.code {
            keys::ESC => {
                self.help_search_input = false;
                self.help_input_buffer.clear();
            }
            keys::SUBMIT => {
                self.help_search_input = false;
                let query = self.help_input_buffer.trim().to_string();
                self.help_input_buffer.clear();
                if query.is_empty() {
                    // Empty submit clears highlighting
                    self.help_search_query = None;
                    return;
                }
                if let Some(line) = matching_line_indices(&query).first().copied() {
                    self.help_scroll = line;
                }
                self.help_search_query = Some(query);
            }
            KeyCode::Char(c) => self.help_input_buffer.push(c),
            KeyCode::Backspace => {
                self.help_input_buffer.pop();
            }
            _ => {}
        }
    }
}
