//! Dialog components for confirmation, selection, and text entry
//!
//! Provides reusable dialog components:
//! - Confirm dialog: Yes/No confirmation
//! - Select dialog: pick one item (or toggle several) from a list
//! - Input dialog: single-line text entry

mod confirm;
mod input;
mod select;

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::keys;

/// Callback identifier for dialog results
///
/// Note: `Copy` is not implemented because some variants contain `String` data.
/// Use `clone()` when extracting from `active_dialog`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogCallback {
    /// Availability filter picker (Browse View)
    AvailabilityFilter,
    /// Swap step 1: pick one of the sender's offered skills
    SwapOffered,
    /// Swap step 2: pick one of the recipient's offered skills
    SwapRequested,
    /// Swap step 3: type the introduction message
    SwapMessage,
    /// Accept a pending incoming request
    AcceptRequest {
        /// Request id
        id: String,
    },
    /// Reject a pending incoming request
    RejectRequest {
        /// Request id
        id: String,
    },
    /// Feedback step 1: pick a star rating
    FeedbackRating {
        /// Profile receiving the feedback
        profile_id: String,
    },
    /// Feedback step 2: type the comment
    FeedbackComment {
        /// Profile receiving the feedback
        profile_id: String,
        /// Rating chosen in step 1
        rating: u8,
    },
    /// Edit the name field (Profile View edit mode)
    EditName,
    /// Edit the location field (Profile View edit mode)
    EditLocation,
    /// Edit the availability field (Profile View edit mode)
    EditAvailability,
    /// Add a skill to the offered list (Profile View edit mode)
    AddOfferedSkill,
    /// Add a skill to the wanted list (Profile View edit mode)
    AddWantedSkill,
    /// Sign-out confirmation
    Logout,
}

/// Selection item for Select dialog
#[derive(Debug, Clone)]
pub struct SelectItem {
    /// Display label
    pub label: String,
    /// Internal value (returned on confirm)
    pub value: String,
    /// Whether this item is selected
    pub selected: bool,
}

impl SelectItem {
    /// Item whose label and value are the same string
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            label: text.clone(),
            value: text,
            selected: false,
        }
    }
}

/// Dialog kind and content
#[derive(Debug, Clone)]
pub enum DialogKind {
    /// Simple Yes/No confirmation
    Confirm {
        title: String,
        message: String,
        /// Optional detail text (warning, etc.)
        detail: Option<String>,
    },
    /// List selection
    Select {
        title: String,
        message: String,
        items: Vec<SelectItem>,
        /// Optional detail text (warning, etc.)
        detail: Option<String>,
        /// Enter confirms the highlighted item directly (no checkboxes)
        single_select: bool,
    },
    /// Single-line text entry
    Input {
        title: String,
        prompt: String,
        /// Current text
        value: String,
        /// Cursor position in characters
        cursor: usize,
    },
}

/// Dialog result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogResult {
    /// Confirmed with selected values (empty for Confirm, one entry for
    /// single-select and Input dialogs)
    Confirmed(Vec<String>),
    /// Cancelled
    Cancelled,
}

/// Dialog state
#[derive(Debug, Clone)]
pub struct Dialog {
    /// Dialog kind and content
    pub kind: DialogKind,
    /// Cursor position (for Select dialog)
    pub cursor: usize,
    /// Callback identifier
    pub callback_id: DialogCallback,
}

impl Dialog {
    /// Create a new Confirm dialog
    pub fn confirm(
        title: impl Into<String>,
        message: impl Into<String>,
        detail: Option<String>,
        callback_id: DialogCallback,
    ) -> Self {
        Self {
            kind: DialogKind::Confirm {
                title: title.into(),
                message: message.into(),
                detail,
            },
            cursor: 0,
            callback_id,
        }
    }

    /// Create a new multi-select dialog (Space toggles, Enter confirms)
    pub fn select(
        title: impl Into<String>,
        message: impl Into<String>,
        items: Vec<SelectItem>,
        detail: Option<String>,
        callback_id: DialogCallback,
    ) -> Self {
        Self {
            kind: DialogKind::Select {
                title: title.into(),
                message: message.into(),
                items,
                detail,
                single_select: false,
            },
            cursor: 0,
            callback_id,
        }
    }

    /// Create a new single-select dialog (Enter confirms the highlighted item)
    pub fn select_single(
        title: impl Into<String>,
        message: impl Into<String>,
        items: Vec<SelectItem>,
        detail: Option<String>,
        callback_id: DialogCallback,
    ) -> Self {
        Self {
            kind: DialogKind::Select {
                title: title.into(),
                message: message.into(),
                items,
                detail,
                single_select: true,
            },
            cursor: 0,
            callback_id,
        }
    }

    /// Create a new Input dialog, optionally pre-filled
    pub fn input(
        title: impl Into<String>,
        prompt: impl Into<String>,
        initial: impl Into<String>,
        callback_id: DialogCallback,
    ) -> Self {
        let value: String = initial.into();
        let cursor = value.chars().count();
        Self {
            kind: DialogKind::Input {
                title: title.into(),
                prompt: prompt.into(),
                value,
                cursor,
            },
            cursor: 0,
            callback_id,
        }
    }

    /// Handle key input, returns Some(result) when dialog should close
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DialogResult> {
        match &self.kind {
            DialogKind::Confirm { .. } => self.handle_confirm_key(key),
            DialogKind::Select { .. } => self.handle_select_key(key),
            DialogKind::Input { .. } => self.handle_input_key(key),
        }
    }

    /// Render the dialog centered on screen
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match &self.kind {
            DialogKind::Confirm {
                title,
                message,
                detail,
            } => self.render_confirm(frame, area, title, message, detail.as_deref()),
            DialogKind::Select {
                title,
                message,
                items,
                detail,
                single_select,
            } => self.render_select(
                frame,
                area,
                title,
                message,
                items,
                detail.as_deref(),
                *single_select,
            ),
            DialogKind::Input {
                title,
                prompt,
                value,
                cursor,
            } => self.render_input(frame, area, title, prompt, value, *cursor),
        }
    }
}

/// Calculate a centered rectangle within the given area
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical_margin = area.height.saturating_sub(height) / 2;
    let horizontal_margin = area.width.saturating_sub(width) / 2;

    let vertical_layout = Layout::vertical([
        Constraint::Length(vertical_margin),
        Constraint::Length(height),
        Constraint::Length(vertical_margin),
    ])
    .split(area);

    let horizontal_layout = Layout::horizontal([
        Constraint::Length(horizontal_margin),
        Constraint::Length(width),
        Constraint::Length(horizontal_margin),
    ])
    .split(vertical_layout[1]);

    horizontal_layout[1]
}
