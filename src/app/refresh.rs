//! Data refresh operations (reload view state from the directory)

use crate::directory::{BrowseQuery, Directory};
use crate::model::SwapRequest;
use crate::ui::views::RequestCard;

use super::state::{App, View};

/// Resolve a request's counterpart into display fields for the card
fn card_for(directory: &Directory, request: SwapRequest, viewer_id: &str) -> RequestCard {
    let counterpart_id = request.counterpart(viewer_id).to_string();
    let (name, location, email) = match directory.profile(&counterpart_id) {
        Some(profile) => (
            profile.name.clone(),
            profile.location.clone(),
            profile.email.clone(),
        ),
        // Counterpart record gone; fall back to the raw id
        None => (counterpart_id, String::new(), String::new()),
    };
    RequestCard {
        request,
        counterpart_name: name,
        counterpart_location: location,
        counterpart_email: email,
    }
}

impl App {
    /// Re-run the browse query and replace the displayed page
    pub fn refresh_browse(&mut self) {
        let query = BrowseQuery {
            search: self.browse_view.search_query.clone().unwrap_or_default(),
            availability: self.browse_view.availability_filter.clone(),
            page: self.browse_view.page,
        };
        let page = self.directory.browse(&query);
        self.browse_view.set_page(page);
    }

    /// Reload the request feed, resolving counterpart display details
    pub fn refresh_requests(&mut self) {
        let viewer_id = match self.directory.current() {
            Some(profile) => profile.id.clone(),
            None => return,
        };
        match self.directory.requests_for_current() {
            Ok(feed) => {
                let incoming = feed
                    .incoming
                    .into_iter()
                    .map(|r| card_for(&self.directory, r, &viewer_id))
                    .collect();
                let outgoing = feed
                    .outgoing
                    .into_iter()
                    .map(|r| card_for(&self.directory, r, &viewer_id))
                    .collect();
                self.requests_view.set_feed(incoming, outgoing);
            }
            Err(e) => {
                self.set_error(e.to_string());
            }
        }
    }

    /// Show a profile in the Profile View
    pub fn open_profile(&mut self, profile_id: &str) {
        let is_own = self
            .directory
            .current()
            .is_some_and(|viewer| viewer.id == profile_id);
        match self.directory.profile(profile_id) {
            Some(profile) => {
                let profile = profile.clone();
                self.profile_view.set_profile(profile, is_own);
                self.go_to_view(View::Profile);
            }
            None => {
                self.set_error(format!("Unknown profile: {}", profile_id));
            }
        }
    }

    /// Show the signed-in member's own profile
    pub fn open_my_profile(&mut self) {
        match self.directory.current() {
            Some(profile) => {
                let profile = profile.clone();
                self.profile_view.set_profile(profile, true);
                self.go_to_view(View::Profile);
            }
            None => {
                self.set_error("Sign in first");
            }
        }
    }

    /// Run the platform report and show it (admin accounts only)
    pub fn open_report(&mut self) {
        match self.directory.report() {
            Ok(report) => {
                self.report_view.set_report(report);
                self.go_to_view(View::Report);
            }
            Err(e) => {
                self.set_error(e.to_string());
            }
        }
    }

    /// Execute refresh for current view (Ctrl+L)
    ///
    /// Re-reads the current view's data from the directory:
    /// - Browse: re-runs the search/filter query
    /// - Requests: reloads both feeds
    /// - Profile: re-fetches the displayed profile (skipped in edit mode,
    ///   which would drop the draft)
    /// - Report: recomputes the statistics
    /// - Catalog and Help: static content, no-op
    pub(crate) fn execute_refresh(&mut self) {
        match self.current_view {
            View::Browse => {
                self.refresh_browse();
                self.notify_info("Refreshed");
            }
            View::Requests => {
                self.refresh_requests();
                self.notify_info("Refreshed");
            }
            View::Profile => {
                if self.profile_view.is_editing() {
                    return;
                }
                let shown = self.profile_view.profile.as_ref().map(|p| p.id.clone());
                if let Some(id) = shown {
                    let is_own = self.profile_view.is_own;
                    if let Some(profile) = self.directory.profile(&id) {
                        let profile = profile.clone();
                        self.profile_view.set_profile(profile, is_own);
                        self.notify_info("Refreshed");
                    }
                }
            }
            View::Report => {
                if let Ok(report) = self.directory.report() {
                    self.report_view.set_report(report);
                    self.notify_info("Refreshed");
                }
            }
            View::Login | View::Catalog | View::Help => {
                // Nothing to reload
            }
        }
    }
}
