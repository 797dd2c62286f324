//! Swap request model
//!
//! A skill-swap request travels from a requester to a recipient and is
//! resolved at most once (accepted or rejected by the recipient).

/// Lifecycle state of a swap request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    /// Waiting for the recipient to respond
    Pending,
    /// Recipient agreed to the swap
    Accepted,
    /// Recipient declined the swap
    Rejected,
}

impl RequestStatus {
    /// Display label ("Pending", "Accepted", "Rejected")
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Accepted => "Accepted",
            RequestStatus::Rejected => "Rejected",
        }
    }
}

/// A proposed skill exchange between two members
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    /// Unique id within the directory (e.g. "r2")
    pub id: String,
    /// Profile id of the member who sent the request
    pub requester_id: String,
    /// Profile id of the member being asked
    pub recipient_id: String,
    /// Skill the requester will teach
    pub offered_skill: String,
    /// Skill the requester wants to learn (from the recipient's offered list)
    pub requested_skill: String,
    /// Free-form message attached to the request
    pub message: String,
    /// Lifecycle state
    pub status: RequestStatus,
    /// Relative display time ("2 hours ago"; "just now" for in-session requests)
    pub created_at: String,
}

impl SwapRequest {
    /// Whether the recipient can still respond
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Whether the given member is the requester or the recipient
    pub fn involves(&self, profile_id: &str) -> bool {
        self.requester_id == profile_id || self.recipient_id == profile_id
    }

    /// The other party from the viewer's perspective
    ///
    /// Falls back to the requester when the viewer is not involved.
    pub fn counterpart(&self, viewer_id: &str) -> &str {
        if self.requester_id == viewer_id {
            &self.recipient_id
        } else {
            &self.requester_id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> SwapRequest {
        SwapRequest {
            id: "r1".to_string(),
            requester_id: "u2".to_string(),
            recipient_id: "u1".to_string(),
            offered_skill: "JavaScript".to_string(),
            requested_skill: "Python".to_string(),
            message: "Happy to trade sessions!".to_string(),
            status: RequestStatus::Pending,
            created_at: "2 hours ago".to_string(),
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(RequestStatus::Pending.label(), "Pending");
        assert_eq!(RequestStatus::Accepted.label(), "Accepted");
        assert_eq!(RequestStatus::Rejected.label(), "Rejected");
    }

    #[test]
    fn test_is_pending() {
        let mut req = sample_request();
        assert!(req.is_pending());
        req.status = RequestStatus::Accepted;
        assert!(!req.is_pending());
    }

    #[test]
    fn test_involves_both_parties() {
        let req = sample_request();
        assert!(req.involves("u1"));
        assert!(req.involves("u2"));
        assert!(!req.involves("u3"));
    }

    #[test]
    fn test_counterpart_per_viewer() {
        let req = sample_request();
        assert_eq!(req.counterpart("u2"), "u1");
        assert_eq!(req.counterpart("u1"), "u2");
    }
}
