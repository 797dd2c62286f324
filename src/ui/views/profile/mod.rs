//! Profile View - full record for one member
//!
//! Shows the selected profile read-only. The signed-in member's own
//! profile adds an edit mode: a field cursor over name, location,
//! availability, and the two skill rows, with dialogs supplying the new
//! values and `S` saving the draft through the directory.

mod input;
mod render;

use crate::directory::ProfileEdits;
use crate::model::Profile;

/// Editable field under the cursor in edit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditFocus {
    #[default]
    Name,
    Location,
    Availability,
    Offered,
    Wanted,
}

impl EditFocus {
    fn next(self) -> Self {
        match self {
            EditFocus::Name => EditFocus::Location,
            EditFocus::Location => EditFocus::Availability,
            EditFocus::Availability => EditFocus::Offered,
            EditFocus::Offered => EditFocus::Wanted,
            EditFocus::Wanted => EditFocus::Wanted,
        }
    }

    fn prev(self) -> Self {
        match self {
            EditFocus::Name => EditFocus::Name,
            EditFocus::Location => EditFocus::Name,
            EditFocus::Availability => EditFocus::Location,
            EditFocus::Offered => EditFocus::Availability,
            EditFocus::Wanted => EditFocus::Offered,
        }
    }

    /// Whether this field is one of the two skill chip rows
    pub fn is_skill_row(self) -> bool {
        matches!(self, EditFocus::Offered | EditFocus::Wanted)
    }
}

/// Actions that ProfileView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileAction {
    /// No action needed
    None,
    /// Open the edit dialog for the focused field
    EditField(EditFocus),
    /// Save the draft through the directory
    Save(ProfileEdits),
    /// Start the swap request dialog chain (other profiles)
    StartSwap(String),
    /// Start the feedback dialog chain (other profiles)
    StartFeedback(String),
}

/// Profile View state
#[derive(Debug, Default)]
pub struct ProfileView {
    /// The profile being displayed
    pub profile: Option<Profile>,
    /// Whether this is the signed-in member's own profile
    pub is_own: bool,
    /// Pending edits; `Some` while in edit mode
    pub draft: Option<ProfileEdits>,
    /// Field cursor in edit mode
    pub focus: EditFocus,
    /// Chip cursor within the focused skill row
    pub chip_cursor: usize,
    /// Scroll offset into the feedback list
    pub feedback_scroll: usize,
}

impl ProfileView {
    /// Create a new ProfileView
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a profile, leaving edit mode and resetting cursors
    pub fn set_profile(&mut self, profile: Profile, is_own: bool) {
        self.profile = Some(profile);
        self.is_own = is_own;
        self.draft = None;
        self.focus = EditFocus::default();
        self.chip_cursor = 0;
        self.feedback_scroll = 0;
    }

    /// Whether edit mode is active
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Enter edit mode with a draft copied from the displayed profile
    ///
    /// No-op unless this is the own profile.
    pub fn start_editing(&mut self) {
        if !self.is_own || self.draft.is_some() {
            return;
        }
        if let Some(profile) = &self.profile {
            self.draft = Some(ProfileEdits {
                name: profile.name.clone(),
                location: profile.location.clone(),
                availability: profile.availability.clone(),
                skills_offered: profile.skills_offered.clone(),
                skills_wanted: profile.skills_wanted.clone(),
            });
            self.focus = EditFocus::default();
            self.chip_cursor = 0;
        }
    }

    /// Leave edit mode, dropping any unsaved changes
    pub fn discard_draft(&mut self) {
        self.draft = None;
        self.chip_cursor = 0;
    }

    /// Move the field cursor down
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.chip_cursor = 0;
    }

    /// Move the field cursor up
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.chip_cursor = 0;
    }

    /// Skills in the focused chip row of the draft
    fn focused_row(&self) -> Option<&Vec<String>> {
        let draft = self.draft.as_ref()?;
        match self.focus {
            EditFocus::Offered => Some(&draft.skills_offered),
            EditFocus::Wanted => Some(&draft.skills_wanted),
            _ => None,
        }
    }

    fn focused_row_mut(&mut self) -> Option<&mut Vec<String>> {
        let focus = self.focus;
        let draft = self.draft.as_mut()?;
        match focus {
            EditFocus::Offered => Some(&mut draft.skills_offered),
            EditFocus::Wanted => Some(&mut draft.skills_wanted),
            _ => None,
        }
    }

    /// Move the chip cursor left within the focused skill row
    pub fn chip_left(&mut self) {
        if self.chip_cursor > 0 {
            self.chip_cursor -= 1;
        }
    }

    /// Move the chip cursor right within the focused skill row
    pub fn chip_right(&mut self) {
        let len = self.focused_row().map_or(0, |row| row.len());
        if self.chip_cursor + 1 < len {
            self.chip_cursor += 1;
        }
    }

    /// Remove the chip under the cursor; returns the removed skill
    pub fn remove_focused_skill(&mut self) -> Option<String> {
        let cursor = self.chip_cursor;
        let row = self.focused_row_mut()?;
        if cursor >= row.len() {
            return None;
        }
        let removed = row.remove(cursor);
        let len = row.len();
        self.chip_cursor = self.chip_cursor.min(len.saturating_sub(1));
        Some(removed)
    }

    /// Replace the draft name (dialog result)
    pub fn set_name(&mut self, name: String) {
        if let Some(draft) = self.draft.as_mut() {
            draft.name = name;
        }
    }

    /// Replace the draft location (dialog result)
    pub fn set_location(&mut self, location: String) {
        if let Some(draft) = self.draft.as_mut() {
            draft.location = location;
        }
    }

    /// Replace the draft availability (dialog result)
    pub fn set_availability(&mut self, availability: String) {
        if let Some(draft) = self.draft.as_mut() {
            draft.availability = availability;
        }
    }

    /// Append a skill to the draft's offered row; false if already listed
    pub fn add_offered_skill(&mut self, skill: String) -> bool {
        Self::push_unique(
            self.draft.as_mut().map(|d| &mut d.skills_offered),
            skill,
        )
    }

    /// Append a skill to the draft's wanted row; false if already listed
    pub fn add_wanted_skill(&mut self, skill: String) -> bool {
        Self::push_unique(self.draft.as_mut().map(|d| &mut d.skills_wanted), skill)
    }

    fn push_unique(row: Option<&mut Vec<String>>, skill: String) -> bool {
        let Some(row) = row else {
            return false;
        };
        if row.iter().any(|s| s.eq_ignore_ascii_case(&skill)) {
            return false;
        }
        row.push(skill);
        true
    }

    /// Scroll the feedback list down (read-only mode)
    pub fn scroll_feedback_down(&mut self) {
        let count = self.profile.as_ref().map_or(0, |p| p.feedback.len());
        if self.feedback_scroll + 1 < count {
            self.feedback_scroll += 1;
        }
    }

    /// Scroll the feedback list up (read-only mode)
    pub fn scroll_feedback_up(&mut self) {
        self.feedback_scroll = self.feedback_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests;
