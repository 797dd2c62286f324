//! Input handling for RequestsView

use crossterm::event::KeyEvent;

use crate::keys;

use super::{RequestAction, RequestTab, RequestsView};

impl RequestsView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> RequestAction {
        match key.code {
            k if keys::is_move_left(k) => {
                self.select_tab(RequestTab::Incoming);
                RequestAction::None
            }
            k if keys::is_move_right(k) => {
                self.select_tab(RequestTab::Outgoing);
                RequestAction::None
            }
            k if keys::is_move_down(k) => {
                self.move_down();
                RequestAction::None
            }
            k if keys::is_move_up(k) => {
                self.move_up();
                RequestAction::None
            }
            k if k == keys::GO_TOP => {
                self.move_to_top();
                RequestAction::None
            }
            k if k == keys::GO_BOTTOM => {
                self.move_to_bottom();
                RequestAction::None
            }
            k if k == keys::ACCEPT => self.respond_action(true),
            k if k == keys::REJECT => self.respond_action(false),
            k if k == keys::OPEN_PROFILE => match self.selected_counterpart_id() {
                Some(id) => RequestAction::OpenProfile(id),
                None => RequestAction::None,
            },
            _ => RequestAction::None,
        }
    }

    /// Accept/reject applies only to a pending incoming selection
    fn respond_action(&self, accept: bool) -> RequestAction {
        if !self.pending_incoming_selected() {
            return RequestAction::None;
        }
        match self.selected_card() {
            Some(card) if accept => RequestAction::StartAccept(card.request.id.clone()),
            Some(card) => RequestAction::StartReject(card.request.id.clone()),
            None => RequestAction::None,
        }
    }
}
