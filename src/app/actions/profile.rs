//! Profile editing and feedback dialog chains

use crate::directory::ProfileEdits;
use crate::ui::components::{Dialog, DialogCallback, SelectItem};
use crate::ui::symbols;
use crate::ui::views::EditFocus;

use crate::app::state::App;

impl App {
    /// Open the right dialog for the focused edit row
    ///
    /// Text fields pre-fill with the draft value; skill rows get a blank
    /// input that appends on confirm.
    pub(crate) fn start_field_edit(&mut self, focus: EditFocus) {
        let Some(draft) = self.profile_view.draft.as_ref() else {
            return;
        };
        let dialog = match focus {
            EditFocus::Name => Dialog::input(
                "Edit Profile",
                "Name",
                draft.name.clone(),
                DialogCallback::EditName,
            ),
            EditFocus::Location => Dialog::input(
                "Edit Profile",
                "Location",
                draft.location.clone(),
                DialogCallback::EditLocation,
            ),
            EditFocus::Availability => Dialog::input(
                "Edit Profile",
                "Availability (e.g. Weekends, Evenings)",
                draft.availability.clone(),
                DialogCallback::EditAvailability,
            ),
            EditFocus::Offered => Dialog::input(
                "Add Skill",
                "Skill you can teach",
                "",
                DialogCallback::AddOfferedSkill,
            ),
            EditFocus::Wanted => Dialog::input(
                "Add Skill",
                "Skill you want to learn",
                "",
                DialogCallback::AddWantedSkill,
            ),
        };
        self.active_dialog = Some(dialog);
    }

    /// Apply a confirmed edit-field dialog value to the draft
    pub(crate) fn apply_profile_field(&mut self, callback: DialogCallback, value: String) {
        match callback {
            DialogCallback::EditName => self.profile_view.set_name(value),
            DialogCallback::EditLocation => self.profile_view.set_location(value),
            DialogCallback::EditAvailability => self.profile_view.set_availability(value),
            DialogCallback::AddOfferedSkill => {
                let skill = value.trim().to_string();
                if skill.is_empty() {
                    return;
                }
                if !self.profile_view.add_offered_skill(skill) {
                    self.notify_info("Already in your offered skills");
                }
            }
            DialogCallback::AddWantedSkill => {
                let skill = value.trim().to_string();
                if skill.is_empty() {
                    return;
                }
                if !self.profile_view.add_wanted_skill(skill) {
                    self.notify_info("Already in your wanted skills");
                }
            }
            _ => {}
        }
    }

    /// Save the draft through the directory
    ///
    /// The draft stays active on failure.
    pub(crate) fn execute_profile_save(&mut self, edits: ProfileEdits) {
        match self.directory.update_profile(&edits) {
            Ok(()) => {
                if let Some(profile) = self.directory.current() {
                    let profile = profile.clone();
                    self.profile_view.set_profile(profile, true);
                }
                self.notify_success("Profile saved");
                // The browse listing shows the edited name and skills
                self.refresh_browse();
            }
            Err(e) => {
                self.set_error(e.to_string());
            }
        }
    }

    // ── Feedback ──────────────────────────────────────────────────────

    /// Open the star-rating picker for another member
    pub(crate) fn start_feedback(&mut self, profile_id: &str) {
        let Some(target) = self.directory.profile(profile_id) else {
            self.set_error(format!("Unknown profile: {}", profile_id));
            return;
        };
        let name = target.name.clone();
        let items = (1..=5u8)
            .rev()
            .map(|rating| SelectItem {
                label: format!("{}  {}", symbols::star_strip(rating as f32), rating),
                value: rating.to_string(),
                selected: false,
            })
            .collect();
        self.active_dialog = Some(Dialog::select_single(
            "Leave Feedback",
            format!("Rate your swap with {}", name),
            items,
            None,
            DialogCallback::FeedbackRating {
                profile_id: profile_id.to_string(),
            },
        ));
    }

    /// Rating picked: ask for the comment
    pub(crate) fn feedback_rating_chosen(&mut self, profile_id: String, value: &str) {
        let Ok(rating) = value.parse::<u8>() else {
            return;
        };
        self.active_dialog = Some(Dialog::input(
            "Leave Feedback",
            "Add a short comment",
            "",
            DialogCallback::FeedbackComment { profile_id, rating },
        ));
    }

    /// Comment submitted: record the feedback
    pub(crate) fn submit_feedback(&mut self, profile_id: &str, rating: u8, comment: &str) {
        match self.directory.leave_feedback(profile_id, rating, comment) {
            Ok(()) => {
                self.notify_success("Feedback shared");
                // Re-fetch so the new entry and rating show immediately
                let shown = self
                    .profile_view
                    .profile
                    .as_ref()
                    .is_some_and(|p| p.id == profile_id);
                if shown && let Some(profile) = self.directory.profile(profile_id) {
                    let profile = profile.clone();
                    self.profile_view.set_profile(profile, false);
                }
            }
            Err(e) => {
                self.set_error(e.to_string());
            }
        }
    }
}
