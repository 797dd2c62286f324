//! Send-request dialog chain
//!
//! Three steps, each a dialog: the skill the sender will teach, the
//! skill they want to learn, then the introduction message. Cancelling
//! any step drops the whole flow.

use crate::ui::components::{Dialog, DialogCallback, SelectItem};

use crate::app::state::{App, PendingSwap};

fn message_input() -> Dialog {
    Dialog::input(
        "Send Swap Request",
        "Introduce yourself and propose the swap",
        "",
        DialogCallback::SwapMessage,
    )
}

impl App {
    /// Validate both sides and open the offered-skill picker
    ///
    /// The flow refuses to start when the sender has nothing to teach or
    /// the recipient has nothing to offer.
    pub(crate) fn start_swap(&mut self, recipient_id: &str) {
        let (sender_id, sender_skills) = match self.directory.current() {
            Some(profile) => (profile.id.clone(), profile.skills_offered.clone()),
            None => {
                self.set_error("Sign in first");
                return;
            }
        };
        if sender_id == recipient_id {
            self.notify_warning("You can't send a swap request to yourself");
            return;
        }
        if sender_skills.is_empty() {
            self.notify_warning("Add an offered skill to your profile before sending requests");
            return;
        }
        let Some(recipient) = self.directory.profile(recipient_id) else {
            self.set_error(format!("Unknown profile: {}", recipient_id));
            return;
        };
        let recipient_name = recipient.name.clone();
        if recipient.skills_offered.is_empty() {
            self.notify_warning(format!("{} hasn't listed any skills yet", recipient_name));
            return;
        }

        self.pending_swap = Some(PendingSwap {
            recipient_id: recipient_id.to_string(),
            recipient_name: recipient_name.clone(),
            offered: None,
            requested: None,
        });
        let items = sender_skills.into_iter().map(SelectItem::plain).collect();
        self.active_dialog = Some(Dialog::select_single(
            "Send Swap Request",
            format!("Which skill will you teach {}?", recipient_name),
            items,
            None,
            DialogCallback::SwapOffered,
        ));
    }

    /// Step 1 confirmed: remember the offered skill, ask what to learn
    pub(crate) fn swap_offered_chosen(&mut self, skill: &str) {
        let Some(pending) = self.pending_swap.as_mut() else {
            return;
        };
        pending.offered = Some(skill.to_string());
        let recipient_id = pending.recipient_id.clone();
        let recipient_name = pending.recipient_name.clone();

        let Some(recipient) = self.directory.profile(&recipient_id) else {
            self.pending_swap = None;
            self.set_error(format!("Unknown profile: {}", recipient_id));
            return;
        };
        let items = recipient
            .skills_offered
            .iter()
            .map(SelectItem::plain)
            .collect();
        self.active_dialog = Some(Dialog::select_single(
            "Send Swap Request",
            format!("Which skill do you want to learn from {}?", recipient_name),
            items,
            None,
            DialogCallback::SwapRequested,
        ));
    }

    /// Step 2 confirmed: remember the requested skill, ask for the message
    pub(crate) fn swap_requested_chosen(&mut self, skill: &str) {
        let Some(pending) = self.pending_swap.as_mut() else {
            return;
        };
        pending.requested = Some(skill.to_string());
        self.active_dialog = Some(message_input());
    }

    /// Step 3 confirmed: validate the message and create the request
    ///
    /// An empty message re-opens the input with an error; the flow is
    /// only dropped on success or cancel.
    pub(crate) fn submit_swap_message(&mut self, message: &str) {
        if message.trim().is_empty() {
            self.set_error("Message is required");
            self.active_dialog = Some(message_input());
            return;
        }
        let Some(pending) = self.pending_swap.take() else {
            return;
        };
        let PendingSwap {
            recipient_id,
            recipient_name,
            offered,
            requested,
        } = pending;
        let (Some(offered), Some(requested)) = (offered, requested) else {
            return;
        };
        match self
            .directory
            .send_request(&recipient_id, &offered, &requested, message)
        {
            Ok(_) => {
                self.notify_success(format!("Request sent to {}!", recipient_name));
                self.refresh_requests();
            }
            Err(e) => {
                self.set_error(e.to_string());
            }
        }
    }
}
