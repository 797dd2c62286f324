//! Browse View - the professional listing
//!
//! The home screen of Swapwise, showing a paged list of public profiles
//! with search and availability filtering.

mod input;
mod render;

use crate::directory::BrowsePage;
use crate::model::Profile;

/// Input mode for Browse View
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Search input mode (filters the listing on submit)
    SearchInput,
}

impl InputMode {
    pub fn input_bar_meta(self) -> Option<(&'static str, &'static str)> {
        match self {
            InputMode::SearchInput => Some(("Search: ", " / Search Professionals ")),
            InputMode::Normal => None,
        }
    }
}

/// Actions that BrowseView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// No action needed
    None,
    /// Search, filter, or page changed; App re-queries the directory
    QueryChanged,
    /// Open the profile view for the given profile id
    OpenProfile(String),
    /// Start the swap request dialog chain for the given profile id
    StartSwap(String),
    /// Open the signed-in member's own profile
    OpenMyProfile,
    /// Open the skill catalog
    OpenCatalog,
    /// Open the platform report (App checks for admin)
    OpenReport,
    /// Open the availability filter dialog
    StartAvailabilityFilter,
}

/// Browse View state
#[derive(Debug, Default)]
pub struct BrowseView {
    /// Profiles on the current page, in listing order
    pub profiles: Vec<Profile>,
    /// Currently selected index in `profiles`
    pub selected_index: usize,
    /// Zero-based page number
    pub page: usize,
    /// Total pages for the current filters (at least 1 once loaded)
    pub total_pages: usize,
    /// Total profiles matching the current filters
    pub total_matches: usize,
    /// Current input mode
    pub input_mode: InputMode,
    /// Input buffer for search
    pub input_buffer: String,
    /// Active search query (None = no search)
    pub search_query: Option<String>,
    /// Active availability filter (None = any availability)
    pub availability_filter: Option<String>,
}

impl BrowseView {
    /// Create a new BrowseView
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed page with fresh query results
    ///
    /// Keeps the selection in bounds when the new page is shorter.
    pub fn set_page(&mut self, page: BrowsePage) {
        self.page = page.page;
        self.total_pages = page.total_pages;
        self.total_matches = page.total_matches;
        self.profiles = page.profiles;
        if self.selected_index >= self.profiles.len() {
            self.selected_index = self.profiles.len().saturating_sub(1);
        }
    }

    /// Get the currently selected profile
    pub fn selected_profile(&self) -> Option<&Profile> {
        self.profiles.get(self.selected_index)
    }

    /// Move selection up within the current page
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down within the current page
    pub fn move_down(&mut self) {
        if self.selected_index < self.profiles.len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Move to the first profile on the page
    pub fn move_to_top(&mut self) {
        self.selected_index = 0;
    }

    /// Move to the last profile on the page
    pub fn move_to_bottom(&mut self) {
        self.selected_index = self.profiles.len().saturating_sub(1);
    }

    /// Advance to the next page; returns false when already on the last
    pub fn page_next(&mut self) -> bool {
        if self.page + 1 < self.total_pages {
            self.page += 1;
            self.selected_index = 0;
            true
        } else {
            false
        }
    }

    /// Go back one page; returns false when already on the first
    pub fn page_prev(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            self.selected_index = 0;
            true
        } else {
            false
        }
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

    /// Apply an availability filter picked from the dialog
    pub fn set_availability_filter(&mut self, availability: Option<String>) {
        self.availability_filter = availability;
        self.page = 0;
        self.selected_index = 0;
    }

    /// Whether a search or availability filter is active
    pub fn has_filters(&self) -> bool {
        self.search_query.is_some() || self.availability_filter.is_some()
    }

    /// Drop both filters; returns false when none were active
    pub fn clear_filters(&mut self) -> bool {
        if !self.has_filters() {
            return false;
        }
        self.search_query = None;
        self.availability_filter = None;
        self.page = 0;
        self.selected_index = 0;
        true
    }
}
