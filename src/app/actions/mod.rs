//! Directory operations (actions that modify session or records)

mod dialog;
mod profile;
mod swap;

use crate::directory::AVAILABILITY_OPTIONS;
use crate::model::Notification;
use crate::ui::components::{Dialog, DialogCallback, SelectItem};

use super::state::{App, View};

impl App {
    // ── Notification / error helpers ──────────────────────────────────

    /// Set a success notification (green)
    pub(crate) fn notify_success(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::success(msg));
    }

    /// Set an info notification (cyan)
    pub(crate) fn notify_info(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::info(msg));
    }

    /// Set a warning notification (yellow)
    pub(crate) fn notify_warning(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::warning(msg));
    }

    /// Set an error message (displayed in error banner)
    pub(crate) fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    // ── Session ───────────────────────────────────────────────────────

    /// Try to sign in with the entered credentials
    ///
    /// Empty fields are refused before the directory is asked, so the
    /// specific credential errors only ever refer to filled-in forms.
    pub(crate) fn submit_login(&mut self, email: &str, password: &str) {
        if email.trim().is_empty() {
            self.set_error("Email is required");
            return;
        }
        if password.is_empty() {
            self.set_error("Password is required");
            return;
        }
        match self.directory.login(email, password) {
            Ok(profile) => {
                self.login_view.reset();
                self.go_to_view(View::Browse);
                self.notify_success(format!("Welcome back, {}!", profile.name));
            }
            Err(e) => {
                self.set_error(e.to_string());
                self.login_view.clear_password();
            }
        }
    }

    /// Open the sign-out confirmation dialog
    pub(crate) fn start_logout(&mut self) {
        if !self.directory.is_signed_in() {
            return;
        }
        self.active_dialog = Some(Dialog::confirm(
            "Sign Out",
            "Sign out of Swapwise?",
            None,
            DialogCallback::Logout,
        ));
    }

    /// Clear the session and return to the sign-in screen
    pub(crate) fn execute_logout(&mut self) {
        self.directory.logout();
        self.browse_view = Default::default();
        self.profile_view = Default::default();
        self.requests_view = Default::default();
        self.catalog_view = Default::default();
        self.report_view = Default::default();
        self.login_view.reset();
        self.pending_swap = None;
        self.previous_view = None;
        self.current_view = View::Login;
        self.notify_info("Signed out");
    }

    // ── Browse filters ────────────────────────────────────────────────

    /// Open the availability filter picker
    pub(crate) fn start_availability_filter(&mut self) {
        let mut items = vec![SelectItem::plain("Any")];
        items.extend(AVAILABILITY_OPTIONS.iter().map(|o| SelectItem::plain(*o)));

        let mut dialog = Dialog::select_single(
            "Filter by Availability",
            "Show professionals available on",
            items,
            None,
            DialogCallback::AvailabilityFilter,
        );
        // Pre-position the cursor on the active filter
        if let Some(active) = self.browse_view.availability_filter.as_deref()
            && let Some(idx) = AVAILABILITY_OPTIONS.iter().position(|o| *o == active)
        {
            dialog.cursor = idx + 1;
        }
        self.active_dialog = Some(dialog);
    }

    /// Apply the picked availability filter ("Any" clears it)
    pub(crate) fn apply_availability_filter(&mut self, choice: &str) {
        let filter = if choice == "Any" {
            None
        } else {
            Some(choice.to_string())
        };
        self.browse_view.set_availability_filter(filter);
        self.refresh_browse();
    }

    // ── Request responses ─────────────────────────────────────────────

    /// Confirm accepting the selected pending request
    pub(crate) fn start_accept(&mut self, request_id: &str) {
        let Some(card) = self
            .requests_view
            .incoming
            .iter()
            .find(|c| c.request.id == request_id)
        else {
            return;
        };
        let name = card.counterpart_name.clone();
        let learn = card.request.offered_skill.clone();
        let teach = card.request.requested_skill.clone();
        self.active_dialog = Some(Dialog::confirm(
            "Accept Request",
            format!("Accept {}'s swap request?", name),
            Some(format!("You'll learn {} and teach {}.", learn, teach)),
            DialogCallback::AcceptRequest {
                id: request_id.to_string(),
            },
        ));
    }

    /// Confirm rejecting the selected pending request
    pub(crate) fn start_reject(&mut self, request_id: &str) {
        let Some(card) = self
            .requests_view
            .incoming
            .iter()
            .find(|c| c.request.id == request_id)
        else {
            return;
        };
        let name = card.counterpart_name.clone();
        self.active_dialog = Some(Dialog::confirm(
            "Reject Request",
            format!("Reject {}'s swap request?", name),
            None,
            DialogCallback::RejectRequest {
                id: request_id.to_string(),
            },
        ));
    }

    /// Accept or reject a pending incoming request
    pub(crate) fn execute_respond(&mut self, request_id: &str, accept: bool) {
        match self.directory.respond(request_id, accept) {
            Ok(request) => {
                let name = self
                    .directory
                    .profile(&request.requester_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| request.requester_id.clone());
                if accept {
                    self.notify_success(format!("Accepted {}'s request", name));
                } else {
                    self.notify_info(format!("Rejected {}'s request", name));
                }
                self.refresh_requests();
            }
            Err(e) => {
                self.set_error(e.to_string());
            }
        }
    }
}
