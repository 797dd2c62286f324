//! Requests View - incoming and outgoing swap requests
//!
//! Two tabs over the signed-in member's request feed. Pending incoming
//! requests can be accepted or rejected; accepted cards surface the
//! counterpart's email so the two members can arrange the swap.

mod input;
mod render;

use crate::model::SwapRequest;

/// Which side of the feed is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestTab {
    #[default]
    Incoming,
    Outgoing,
}

/// A swap request joined with the counterpart's display details
///
/// The directory stores profile ids only; the app resolves name,
/// location, and email when it refreshes the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestCard {
    pub request: SwapRequest,
    /// Display name of the other party
    pub counterpart_name: String,
    /// Shown next to the name
    pub counterpart_location: String,
    /// Shown on accepted cards
    pub counterpart_email: String,
}

/// Actions that RequestsView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestAction {
    /// No action needed
    None,
    /// Confirm accepting the selected pending request
    StartAccept(String),
    /// Confirm rejecting the selected pending request
    StartReject(String),
    /// Open the counterpart's profile
    OpenProfile(String),
}

/// Requests View state
#[derive(Debug, Default)]
pub struct RequestsView {
    pub incoming: Vec<RequestCard>,
    pub outgoing: Vec<RequestCard>,
    /// Active tab
    pub tab: RequestTab,
    /// Selected card in the active tab
    pub selected_index: usize,
}

impl RequestsView {
    /// Create a new RequestsView
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both feeds, clamping the selection to the active tab
    pub fn set_feed(&mut self, incoming: Vec<RequestCard>, outgoing: Vec<RequestCard>) {
        self.incoming = incoming;
        self.outgoing = outgoing;
        let len = self.active_cards().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Cards in the active tab
    pub fn active_cards(&self) -> &[RequestCard] {
        match self.tab {
            RequestTab::Incoming => &self.incoming,
            RequestTab::Outgoing => &self.outgoing,
        }
    }

    /// The selected card, if the active tab has any
    pub fn selected_card(&self) -> Option<&RequestCard> {
        self.active_cards().get(self.selected_index)
    }

    /// Profile id of the selected card's other party
    pub fn selected_counterpart_id(&self) -> Option<String> {
        let card = self.selected_card()?;
        let id = match self.tab {
            RequestTab::Incoming => &card.request.requester_id,
            RequestTab::Outgoing => &card.request.recipient_id,
        };
        Some(id.clone())
    }

    /// Whether the selection is a pending incoming request
    ///
    /// Accept and reject only apply to those.
    pub fn pending_incoming_selected(&self) -> bool {
        self.tab == RequestTab::Incoming
            && self.selected_card().is_some_and(|c| c.request.is_pending())
    }

    /// Switch tabs, resetting the selection
    pub fn select_tab(&mut self, tab: RequestTab) {
        if self.tab != tab {
            self.tab = tab;
            self.selected_index = 0;
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.active_cards().len() {
            self.selected_index += 1;
        }
    }

    /// Move selection to the first card
    pub fn move_to_top(&mut self) {
        self.selected_index = 0;
    }

    /// Move selection to the last card
    pub fn move_to_bottom(&mut self) {
        self.selected_index = self.active_cards().len().saturating_sub(1);
    }
}
