//! Dialog result handling (dispatch confirmed/cancelled dialog results)

use crate::ui::components::{DialogCallback, DialogResult};

use crate::app::state::App;

impl App {
    /// Handle dialog result
    ///
    /// Called when a dialog is closed.
    ///
    /// Implementation order (important):
    /// 1. Clone callback_id from active_dialog
    /// 2. Set active_dialog to None
    /// 3. Match on callback and result
    pub(crate) fn handle_dialog_result(&mut self, result: DialogResult) {
        let callback = self.active_dialog.as_ref().map(|d| d.callback_id.clone());
        self.active_dialog = None;

        let Some(callback) = callback else { return };

        match result {
            DialogResult::Cancelled => self.handle_dialog_cancel(callback),
            DialogResult::Confirmed(values) => match callback {
                DialogCallback::AvailabilityFilter => {
                    if let Some(choice) = values.first() {
                        let choice = choice.clone();
                        self.apply_availability_filter(&choice);
                    }
                }
                DialogCallback::SwapOffered => {
                    if let Some(skill) = values.first() {
                        let skill = skill.clone();
                        self.swap_offered_chosen(&skill);
                    }
                }
                DialogCallback::SwapRequested => {
                    if let Some(skill) = values.first() {
                        let skill = skill.clone();
                        self.swap_requested_chosen(&skill);
                    }
                }
                DialogCallback::SwapMessage => {
                    let message = values.first().map(String::as_str).unwrap_or("");
                    let message = message.to_string();
                    self.submit_swap_message(&message);
                }
                DialogCallback::AcceptRequest { id } => self.execute_respond(&id, true),
                DialogCallback::RejectRequest { id } => self.execute_respond(&id, false),
                DialogCallback::FeedbackRating { profile_id } => {
                    if let Some(value) = values.first() {
                        let value = value.clone();
                        self.feedback_rating_chosen(profile_id, &value);
                    }
                }
                DialogCallback::FeedbackComment { profile_id, rating } => {
                    let comment = values.first().map(String::as_str).unwrap_or("");
                    let comment = comment.to_string();
                    self.submit_feedback(&profile_id, rating, &comment);
                }
                cb @ (DialogCallback::EditName
                | DialogCallback::EditLocation
                | DialogCallback::EditAvailability
                | DialogCallback::AddOfferedSkill
                | DialogCallback::AddWantedSkill) => {
                    let value = values.into_iter().next().unwrap_or_default();
                    self.apply_profile_field(cb, value);
                }
                DialogCallback::Logout => self.execute_logout(),
            },
        }
    }

    /// Handle dialog cancellation, cleaning up any pending state
    fn handle_dialog_cancel(&mut self, callback: DialogCallback) {
        match callback {
            // Cancelling any swap step drops the whole flow
            DialogCallback::SwapOffered
            | DialogCallback::SwapRequested
            | DialogCallback::SwapMessage => {
                self.pending_swap = None;
            }
            // All others: no cleanup needed on cancel
            DialogCallback::AvailabilityFilter
            | DialogCallback::AcceptRequest { .. }
            | DialogCallback::RejectRequest { .. }
            | DialogCallback::FeedbackRating { .. }
            | DialogCallback::FeedbackComment { .. }
            | DialogCallback::EditName
            | DialogCallback::EditLocation
            | DialogCallback::EditAvailability
            | DialogCallback::AddOfferedSkill
            | DialogCallback::AddWantedSkill
            | DialogCallback::Logout => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::state::{App, View};
    use crate::directory::{DEMO_EMAIL, DEMO_PASSWORD};
    use crate::model::RequestStatus;
    use crate::ui::components::{Dialog, DialogCallback, DialogKind, DialogResult};
    use crate::ui::views::EditFocus;

    /// App signed in as the demo member (u1, Sakshi)
    fn signed_in_app() -> App {
        let mut app = App::new();
        app.submit_login(DEMO_EMAIL, DEMO_PASSWORD);
        assert!(app.directory.is_signed_in());
        app
    }

    #[test]
    fn test_logout_dialog_confirmed_signs_out() {
        let mut app = signed_in_app();
        app.start_logout();
        assert!(app.active_dialog.is_some());

        app.handle_dialog_result(DialogResult::Confirmed(vec![]));
        assert!(!app.directory.is_signed_in());
        assert_eq!(app.current_view, View::Login);
        assert!(app.active_dialog.is_none());
    }

    #[test]
    fn test_logout_dialog_cancelled_keeps_session() {
        let mut app = signed_in_app();
        app.start_logout();

        app.handle_dialog_result(DialogResult::Cancelled);
        assert!(app.directory.is_signed_in());
        assert_eq!(app.current_view, View::Browse);
    }

    #[test]
    fn test_availability_filter_confirmed_applies() {
        let mut app = signed_in_app();
        app.start_availability_filter();

        app.handle_dialog_result(DialogResult::Confirmed(vec!["Weekends".to_string()]));
        assert_eq!(
            app.browse_view.availability_filter.as_deref(),
            Some("Weekends")
        );
        assert_eq!(app.browse_view.page, 0);
        // The page was re-queried with the filter applied
        assert!(
            app.browse_view
                .profiles
                .iter()
                .all(|p| p.matches_availability("weekends"))
        );
    }

    #[test]
    fn test_availability_filter_any_clears() {
        let mut app = signed_in_app();
        app.browse_view
            .set_availability_filter(Some("Weekends".to_string()));
        app.refresh_browse();

        app.start_availability_filter();
        app.handle_dialog_result(DialogResult::Confirmed(vec!["Any".to_string()]));
        assert!(app.browse_view.availability_filter.is_none());
    }

    #[test]
    fn test_accept_request_dialog_updates_status() {
        let mut app = signed_in_app();
        app.go_to_view(View::Requests);

        // Newest incoming request is r4 from Yashpal
        let first = app.requests_view.incoming[0].clone();
        assert_eq!(first.request.id, "r4");
        assert!(first.request.is_pending());

        app.start_accept("r4");
        assert!(app.active_dialog.is_some());
        app.handle_dialog_result(DialogResult::Confirmed(vec![]));

        assert_eq!(
            app.requests_view.incoming[0].request.status,
            RequestStatus::Accepted
        );
        let notification = app.notification.as_ref().unwrap();
        assert!(notification.message.contains("Yashpal"));
    }

    #[test]
    fn test_reject_request_dialog_updates_status() {
        let mut app = signed_in_app();
        app.go_to_view(View::Requests);

        app.start_reject("r4");
        app.handle_dialog_result(DialogResult::Confirmed(vec![]));

        assert_eq!(
            app.requests_view.incoming[0].request.status,
            RequestStatus::Rejected
        );
    }

    #[test]
    fn test_swap_cancel_at_any_step_clears_pending() {
        let mut app = signed_in_app();
        app.start_swap("u2");
        assert!(app.pending_swap.is_some());

        app.handle_dialog_result(DialogResult::Cancelled);
        assert!(app.pending_swap.is_none());
        assert!(app.active_dialog.is_none());
    }

    #[test]
    fn test_swap_chain_creates_request() {
        let mut app = signed_in_app();
        app.start_swap("u2");

        // Step 1: skill to teach
        app.handle_dialog_result(DialogResult::Confirmed(vec!["Python".to_string()]));
        assert_eq!(
            app.active_dialog.as_ref().unwrap().callback_id,
            DialogCallback::SwapRequested
        );

        // Step 2: skill to learn
        app.handle_dialog_result(DialogResult::Confirmed(vec!["JavaScript".to_string()]));
        assert_eq!(
            app.active_dialog.as_ref().unwrap().callback_id,
            DialogCallback::SwapMessage
        );

        // Step 3: message
        app.handle_dialog_result(DialogResult::Confirmed(vec![
            "Trade Python for JS?".to_string(),
        ]));
        assert!(app.active_dialog.is_none());
        assert!(app.pending_swap.is_none());

        // The new request shows at the top of Outgoing as pending
        let first = &app.requests_view.outgoing[0];
        assert_eq!(first.request.recipient_id, "u2");
        assert_eq!(first.request.message, "Trade Python for JS?");
        assert!(first.request.is_pending());
        let notification = app.notification.as_ref().unwrap();
        assert!(notification.message.contains("Yashpal"));
    }

    #[test]
    fn test_swap_empty_message_reopens_input() {
        let mut app = signed_in_app();
        app.start_swap("u2");
        app.handle_dialog_result(DialogResult::Confirmed(vec!["Python".to_string()]));
        app.handle_dialog_result(DialogResult::Confirmed(vec!["JavaScript".to_string()]));

        app.handle_dialog_result(DialogResult::Confirmed(vec![]));
        assert_eq!(app.error_message.as_deref(), Some("Message is required"));
        // Flow is still alive: the message input is back
        assert!(app.pending_swap.is_some());
        let dialog = app.active_dialog.as_ref().unwrap();
        assert_eq!(dialog.callback_id, DialogCallback::SwapMessage);
        assert!(matches!(dialog.kind, DialogKind::Input { .. }));
    }

    #[test]
    fn test_edit_name_dialog_updates_draft() {
        let mut app = signed_in_app();
        app.open_my_profile();
        app.profile_view.start_editing();
        app.start_field_edit(EditFocus::Name);

        app.handle_dialog_result(DialogResult::Confirmed(vec!["Sakshi D".to_string()]));
        assert_eq!(app.profile_view.draft.as_ref().unwrap().name, "Sakshi D");
    }

    #[test]
    fn test_add_skill_dialog_appends_to_draft() {
        let mut app = signed_in_app();
        app.open_my_profile();
        app.profile_view.start_editing();
        app.profile_view.focus = EditFocus::Wanted;
        app.start_field_edit(EditFocus::Wanted);

        app.handle_dialog_result(DialogResult::Confirmed(vec!["Figma".to_string()]));
        let draft = app.profile_view.draft.as_ref().unwrap();
        assert!(draft.skills_wanted.iter().any(|s| s == "Figma"));
    }

    #[test]
    fn test_feedback_chain_records_entry() {
        let mut app = signed_in_app();
        app.start_feedback("u2");
        assert!(matches!(
            app.active_dialog.as_ref().unwrap().callback_id,
            DialogCallback::FeedbackRating { .. }
        ));

        app.handle_dialog_result(DialogResult::Confirmed(vec!["5".to_string()]));
        assert!(matches!(
            app.active_dialog.as_ref().unwrap().callback_id,
            DialogCallback::FeedbackComment { .. }
        ));

        app.handle_dialog_result(DialogResult::Confirmed(vec![
            "Great React session".to_string(),
        ]));
        let target = app.directory.profile("u2").unwrap();
        let last = target.feedback.last().unwrap();
        assert_eq!(last.rating, 5);
        assert_eq!(last.comment, "Great React session");
        assert_eq!(last.from_name, "Sakshi");
    }

    #[test]
    fn test_result_without_dialog_is_ignored() {
        let mut app = signed_in_app();
        app.handle_dialog_result(DialogResult::Confirmed(vec!["anything".to_string()]));
        assert!(app.error_message.is_none());
        assert_eq!(app.current_view, View::Browse);
        assert!(app.active_dialog.is_none());
    }

    #[test]
    fn test_cancel_profile_field_keeps_draft() {
        let mut app = signed_in_app();
        app.open_my_profile();
        app.profile_view.start_editing();
        app.start_field_edit(EditFocus::Name);

        app.handle_dialog_result(DialogResult::Cancelled);
        assert!(app.profile_view.is_editing());
        assert!(app.active_dialog.is_none());
    }

    #[test]
    fn test_logout_resets_views() {
        let mut app = signed_in_app();
        app.browse_view.search_query = Some("python".to_string());
        app.go_to_view(View::Requests);

        app.active_dialog = Some(Dialog::confirm(
            "Sign Out",
            "Sign out of Swapwise?",
            None,
            DialogCallback::Logout,
        ));
        app.handle_dialog_result(DialogResult::Confirmed(vec![]));

        assert_eq!(app.current_view, View::Login);
        assert!(app.browse_view.search_query.is_none());
        assert!(app.requests_view.incoming.is_empty());
    }
}
