//! Input handling for ProfileView

use crossterm::event::KeyEvent;

use crate::keys;

use super::{ProfileAction, ProfileView};

impl ProfileView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> ProfileAction {
        if self.is_editing() {
            self.handle_edit_key(key)
        } else {
            self.handle_view_key(key)
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent) -> ProfileAction {
        match key.code {
            k if keys::is_move_down(k) => {
                self.scroll_feedback_down();
                ProfileAction::None
            }
            k if keys::is_move_up(k) => {
                self.scroll_feedback_up();
                ProfileAction::None
            }
            k if k == keys::EDIT_PROFILE => {
                self.start_editing();
                ProfileAction::None
            }
            k if k == keys::SEND_SWAP && !self.is_own => {
                if let Some(profile) = &self.profile {
                    ProfileAction::StartSwap(profile.id.clone())
                } else {
                    ProfileAction::None
                }
            }
            k if k == keys::RATE && !self.is_own => {
                if let Some(profile) = &self.profile {
                    ProfileAction::StartFeedback(profile.id.clone())
                } else {
                    ProfileAction::None
                }
            }
            _ => ProfileAction::None,
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> ProfileAction {
        match key.code {
            k if k == keys::ESC => {
                self.discard_draft();
                ProfileAction::None
            }
            k if keys::is_move_down(k) => {
                self.focus_next();
                ProfileAction::None
            }
            k if keys::is_move_up(k) => {
                self.focus_prev();
                ProfileAction::None
            }
            k if keys::is_move_left(k) => {
                self.chip_left();
                ProfileAction::None
            }
            k if keys::is_move_right(k) => {
                self.chip_right();
                ProfileAction::None
            }
            k if k == keys::SUBMIT => ProfileAction::EditField(self.focus),
            k if k == keys::REMOVE_SKILL => {
                self.remove_focused_skill();
                ProfileAction::None
            }
            k if k == keys::SAVE_PROFILE => match &self.draft {
                Some(draft) => ProfileAction::Save(draft.clone()),
                None => ProfileAction::None,
            },
            _ => ProfileAction::None,
        }
    }
}
