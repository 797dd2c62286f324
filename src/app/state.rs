//! Application state and view management

use crate::directory::Directory;
use crate::model::Notification;
use crate::ui::components::Dialog;
use crate::ui::views::{
    BrowseView, CatalogView, LoginView, ProfileView, ReportView, RequestsView,
};

/// A send-request flow in progress
///
/// Spans the three chained dialogs; cleared when the flow completes or
/// any step is cancelled.
#[derive(Debug, Clone)]
pub(crate) struct PendingSwap {
    /// Profile receiving the request
    pub recipient_id: String,
    /// Cached for dialog prompts and the success notification
    pub recipient_name: String,
    /// Skill chosen in step 1 (one of the sender's offered skills)
    pub offered: Option<String>,
    /// Skill chosen in step 2 (one of the recipient's offered skills)
    pub requested: Option<String>,
}

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Browse,
    Profile,
    Requests,
    Catalog,
    Report,
    Help,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Previous view (for back navigation)
    pub(crate) previous_view: Option<View>,
    /// Login view state
    pub login_view: LoginView,
    /// Browse view state
    pub browse_view: BrowseView,
    /// Profile view state
    pub profile_view: ProfileView,
    /// Requests view state
    pub requests_view: RequestsView,
    /// Catalog view state
    pub catalog_view: CatalogView,
    /// Report view state (admin only)
    pub report_view: ReportView,
    /// In-memory directory (profiles, requests, session)
    pub directory: Directory,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// Active dialog (blocks other input when Some)
    pub active_dialog: Option<Dialog>,
    /// Send-request flow in progress
    pub(crate) pending_swap: Option<PendingSwap>,
    /// Help view scroll offset
    pub(crate) help_scroll: u16,
    /// Active help search query
    pub(crate) help_search_query: Option<String>,
    /// Help search input mode active
    pub(crate) help_search_input: bool,
    /// Help search input buffer
    pub(crate) help_input_buffer: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Construct a new instance of [`App`] on the sign-in screen.
    pub fn new() -> Self {
        Self {
            running: true,
            current_view: View::Login,
            previous_view: None,
            login_view: LoginView::new(),
            browse_view: BrowseView::new(),
            profile_view: ProfileView::new(),
            requests_view: RequestsView::new(),
            catalog_view: CatalogView::new(),
            report_view: ReportView::new(),
            directory: Directory::new(),
            error_message: None,
            notification: None,
            active_dialog: None,
            pending_swap: None,
            help_scroll: 0,
            help_search_query: None,
            help_search_input: false,
            help_input_buffer: String::new(),
        }
    }

    /// Switch between the two main views (Tab key)
    pub(crate) fn next_view(&mut self) {
        let next = match self.current_view {
            View::Browse => View::Requests,
            View::Requests => View::Browse,
            View::Login
            | View::Profile
            | View::Catalog
            | View::Report
            | View::Help => View::Browse,
        };
        self.go_to_view(next);
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            self.previous_view = Some(self.current_view);
            self.current_view = view;

            // Refresh data when entering certain views
            match view {
                View::Browse => self.refresh_browse(),
                View::Requests => self.refresh_requests(),
                View::Help => self.reset_help(),
                _ => {}
            }
        }
    }

    /// Go back to previous view
    pub(crate) fn go_back(&mut self) {
        if let Some(prev) = self.previous_view.take() {
            self.current_view = prev;
        } else if self.directory.is_signed_in() {
            self.current_view = View::Browse;
        } else {
            self.current_view = View::Login;
        }
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }

    /// Reset help search and scroll (on entering the view)
    pub(crate) fn reset_help(&mut self) {
        self.help_scroll = 0;
        self.help_search_query = None;
        self.help_search_input = false;
        self.help_input_buffer.clear();
    }
}
