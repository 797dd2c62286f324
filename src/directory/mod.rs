//! In-memory skill-exchange directory
//!
//! This module stands in for a backend: profiles, swap requests, and the
//! signed-in session live in process memory, seeded with sample records
//! at startup. Operations validate and mutate local state only.

pub mod catalog;
/// Seed module (public for integration testing)
pub mod seed;

use std::collections::HashMap;

use thiserror::Error;

use crate::model::{Feedback, Profile, RequestStatus, SwapRequest};

pub use seed::{DEMO_EMAIL, DEMO_PASSWORD};

/// Profiles shown per browse page
pub const PAGE_SIZE: usize = 4;

/// Availability choices offered by the browse filter
pub const AVAILABILITY_OPTIONS: &[&str] =
    &["Weekends", "Weekdays", "Mornings", "Afternoons", "Evenings"];

/// How many skills the report ranks per list
const REPORT_TOP_N: usize = 5;

/// Errors returned by directory operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("No account found for {0}")]
    UnknownAccount(String),

    #[error("Invalid password")]
    WrongPassword,

    #[error("This account has been banned")]
    AccountBanned,

    #[error("An account with email {0} already exists")]
    DuplicateEmail(String),

    #[error("Sign in first")]
    SignedOut,

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error("Unknown request: {0}")]
    UnknownRequest(String),

    #[error("{0} is not one of your offered skills")]
    SkillNotOffered(String),

    #[error("{0} is not offered by the recipient")]
    SkillNotAvailable(String),

    #[error("You can't send a swap request to yourself")]
    SelfRequest,

    #[error("You can't leave feedback on your own profile")]
    SelfFeedback,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,

    #[error("Only the recipient can respond to a request")]
    NotTheRecipient,

    #[error("This request was already resolved")]
    AlreadyResolved,

    #[error("Admin access required")]
    AdminOnly,
}

/// Filters applied to the public listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseQuery {
    /// Case-insensitive substring matched against name, location, and skills
    pub search: String,
    /// Availability word filter (None = any)
    pub availability: Option<String>,
    /// Zero-based page number (clamped to the last page)
    pub page: usize,
}

/// One page of browse results
#[derive(Debug, Clone)]
pub struct BrowsePage {
    /// The profiles on this page, in listing order
    pub profiles: Vec<Profile>,
    /// The page actually returned (after clamping)
    pub page: usize,
    /// Total pages for the current filters, at least 1
    pub total_pages: usize,
    /// Total profiles matching the current filters
    pub total_matches: usize,
}

/// Incoming and outgoing requests for the signed-in member, newest first
#[derive(Debug, Clone, Default)]
pub struct RequestFeed {
    pub incoming: Vec<SwapRequest>,
    pub outgoing: Vec<SwapRequest>,
}

/// Replacement values for the signed-in member's editable fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEdits {
    pub name: String,
    pub location: String,
    pub availability: String,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
}

/// Platform statistics for the admin report
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformReport {
    /// Member accounts (admins excluded)
    pub total_members: usize,
    pub public_members: usize,
    pub banned_members: usize,
    pub total_requests: usize,
    pub pending_requests: usize,
    pub accepted_requests: usize,
    pub rejected_requests: usize,
    /// Most-offered skills with occurrence counts, highest first
    pub top_offered: Vec<(String, usize)>,
    /// Most-wanted skills with occurrence counts, highest first
    pub top_wanted: Vec<(String, usize)>,
}

/// The in-memory directory standing in for a backend
#[derive(Debug, Clone)]
pub struct Directory {
    profiles: Vec<Profile>,
    requests: Vec<SwapRequest>,
    /// Profile id of the signed-in member
    session: Option<String>,
    next_profile_id: usize,
    next_request_id: usize,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    /// Create a directory loaded with the sample records
    pub fn new() -> Self {
        Self::with_records(seed::sample_profiles(), seed::sample_requests())
    }

    /// Create a directory from explicit records (used by tests)
    pub fn with_records(profiles: Vec<Profile>, requests: Vec<SwapRequest>) -> Self {
        let next_profile_id = next_numeric_id(profiles.iter().map(|p| p.id.as_str()), 'u');
        let next_request_id = next_numeric_id(requests.iter().map(|r| r.id.as_str()), 'r');
        Self {
            profiles,
            requests,
            session: None,
            next_profile_id,
            next_request_id,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────────────

    /// Sign in with email and password
    ///
    /// Returns the signed-in profile on success. Banned accounts are
    /// rejected before the password is checked.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Profile, DirectoryError> {
        let email = email.trim();
        let profile = self
            .profiles
            .iter()
            .find(|p| p.email.eq_ignore_ascii_case(email))
            .ok_or_else(|| DirectoryError::UnknownAccount(email.to_string()))?;

        if profile.is_banned {
            return Err(DirectoryError::AccountBanned);
        }
        if profile.password != password {
            return Err(DirectoryError::WrongPassword);
        }

        self.session = Some(profile.id.clone());
        Ok(profile.clone())
    }

    /// Clear the session
    pub fn logout(&mut self) {
        self.session = None;
    }

    /// The signed-in profile, if any
    pub fn current(&self) -> Option<&Profile> {
        let id = self.session.as_deref()?;
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Register a new public member account
    ///
    /// The new account starts with empty skill lists and is not signed in.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Profile, DirectoryError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(DirectoryError::MissingField("Name"));
        }
        if email.is_empty() {
            return Err(DirectoryError::MissingField("Email"));
        }
        if password.is_empty() {
            return Err(DirectoryError::MissingField("Password"));
        }
        if self
            .profiles
            .iter()
            .any(|p| p.email.eq_ignore_ascii_case(email))
        {
            return Err(DirectoryError::DuplicateEmail(email.to_string()));
        }

        let profile = Profile {
            id: format!("u{}", self.next_profile_id),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            location: String::new(),
            availability: String::new(),
            skills_offered: Vec::new(),
            skills_wanted: Vec::new(),
            is_public: true,
            is_banned: false,
            is_admin: false,
            feedback: Vec::new(),
        };
        self.next_profile_id += 1;
        self.profiles.push(profile.clone());
        Ok(profile)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Browsing
    // ─────────────────────────────────────────────────────────────────────

    /// One page of the public listing under the given filters
    ///
    /// Private, banned, and admin profiles never appear. The requested
    /// page is clamped to the last page so shrinking filters can't leave
    /// the cursor past the end.
    pub fn browse(&self, query: &BrowseQuery) -> BrowsePage {
        let needle = query.search.trim().to_lowercase();
        let availability = query.availability.as_deref().map(str::to_lowercase);

        let matches: Vec<&Profile> = self
            .profiles
            .iter()
            .filter(|p| p.is_public && !p.is_banned && !p.is_admin)
            .filter(|p| p.matches_search(&needle))
            .filter(|p| match availability.as_deref() {
                Some(word) => p.matches_availability(word),
                None => true,
            })
            .collect();

        let total_matches = matches.len();
        let total_pages = total_matches.div_ceil(PAGE_SIZE).max(1);
        let page = query.page.min(total_pages - 1);
        let start = page * PAGE_SIZE;
        let profiles = matches
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .cloned()
            .collect();

        BrowsePage {
            profiles,
            page,
            total_pages,
            total_matches,
        }
    }

    /// Look up any profile by id
    pub fn profile(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Replace the signed-in member's editable fields
    pub fn update_profile(&mut self, edits: &ProfileEdits) -> Result<(), DirectoryError> {
        let id = self
            .session
            .clone()
            .ok_or(DirectoryError::SignedOut)?;
        if edits.name.trim().is_empty() {
            return Err(DirectoryError::MissingField("Name"));
        }
        let profile = self
            .profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DirectoryError::UnknownProfile(id))?;

        profile.name = edits.name.trim().to_string();
        profile.location = edits.location.trim().to_string();
        profile.availability = edits.availability.trim().to_string();
        profile.skills_offered = edits.skills_offered.clone();
        profile.skills_wanted = edits.skills_wanted.clone();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Swap requests
    // ─────────────────────────────────────────────────────────────────────

    /// Create a pending swap request from the signed-in member
    pub fn send_request(
        &mut self,
        recipient_id: &str,
        offered_skill: &str,
        requested_skill: &str,
        message: &str,
    ) -> Result<SwapRequest, DirectoryError> {
        let sender = self.current().ok_or(DirectoryError::SignedOut)?;
        let sender_id = sender.id.clone();
        let sender_offers = sender.offers(offered_skill);

        let recipient = self
            .profile(recipient_id)
            .ok_or_else(|| DirectoryError::UnknownProfile(recipient_id.to_string()))?;
        if recipient.is_banned {
            return Err(DirectoryError::AccountBanned);
        }
        if recipient.id == sender_id {
            return Err(DirectoryError::SelfRequest);
        }
        if !sender_offers {
            return Err(DirectoryError::SkillNotOffered(offered_skill.to_string()));
        }
        if !recipient.offers(requested_skill) {
            return Err(DirectoryError::SkillNotAvailable(requested_skill.to_string()));
        }
        if message.trim().is_empty() {
            return Err(DirectoryError::MissingField("Message"));
        }

        let request = SwapRequest {
            id: format!("r{}", self.next_request_id),
            requester_id: sender_id,
            recipient_id: recipient_id.to_string(),
            offered_skill: offered_skill.to_string(),
            requested_skill: requested_skill.to_string(),
            message: message.trim().to_string(),
            status: RequestStatus::Pending,
            created_at: "just now".to_string(),
        };
        self.next_request_id += 1;
        self.requests.push(request.clone());
        Ok(request)
    }

    /// Incoming and outgoing requests for the signed-in member, newest first
    pub fn requests_for_current(&self) -> Result<RequestFeed, DirectoryError> {
        let id = self.session.as_deref().ok_or(DirectoryError::SignedOut)?;
        let mut feed = RequestFeed::default();
        for request in self.requests.iter().rev() {
            if request.recipient_id == id {
                feed.incoming.push(request.clone());
            } else if request.requester_id == id {
                feed.outgoing.push(request.clone());
            }
        }
        Ok(feed)
    }

    /// Accept or reject a pending request addressed to the signed-in member
    pub fn respond(&mut self, request_id: &str, accept: bool) -> Result<SwapRequest, DirectoryError> {
        let id = self
            .session
            .clone()
            .ok_or(DirectoryError::SignedOut)?;
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or_else(|| DirectoryError::UnknownRequest(request_id.to_string()))?;

        if request.recipient_id != id {
            return Err(DirectoryError::NotTheRecipient);
        }
        if !request.is_pending() {
            return Err(DirectoryError::AlreadyResolved);
        }

        request.status = if accept {
            RequestStatus::Accepted
        } else {
            RequestStatus::Rejected
        };
        Ok(request.clone())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Feedback and reporting
    // ─────────────────────────────────────────────────────────────────────

    /// Append a rating to another member's profile
    pub fn leave_feedback(
        &mut self,
        target_id: &str,
        rating: u8,
        comment: &str,
    ) -> Result<(), DirectoryError> {
        let author = self.current().ok_or(DirectoryError::SignedOut)?;
        let author_id = author.id.clone();
        let author_name = author.name.clone();

        if !(1..=5).contains(&rating) {
            return Err(DirectoryError::RatingOutOfRange);
        }
        let target = self
            .profiles
            .iter_mut()
            .find(|p| p.id == target_id)
            .ok_or_else(|| DirectoryError::UnknownProfile(target_id.to_string()))?;
        if target.id == author_id {
            return Err(DirectoryError::SelfFeedback);
        }

        target
            .feedback
            .push(Feedback::new(author_name, rating, comment.trim()));
        Ok(())
    }

    /// Platform statistics, available to admin accounts only
    pub fn report(&self) -> Result<PlatformReport, DirectoryError> {
        let viewer = self.current().ok_or(DirectoryError::SignedOut)?;
        if !viewer.is_admin {
            return Err(DirectoryError::AdminOnly);
        }

        let members: Vec<&Profile> = self.profiles.iter().filter(|p| !p.is_admin).collect();
        let offered = members.iter().flat_map(|p| p.skills_offered.iter());
        let wanted = members.iter().flat_map(|p| p.skills_wanted.iter());

        Ok(PlatformReport {
            total_members: members.len(),
            public_members: members.iter().filter(|p| p.is_public).count(),
            banned_members: members.iter().filter(|p| p.is_banned).count(),
            total_requests: self.requests.len(),
            pending_requests: self.count_status(RequestStatus::Pending),
            accepted_requests: self.count_status(RequestStatus::Accepted),
            rejected_requests: self.count_status(RequestStatus::Rejected),
            top_offered: top_skills(offered),
            top_wanted: top_skills(wanted),
        })
    }

    fn count_status(&self, status: RequestStatus) -> usize {
        self.requests.iter().filter(|r| r.status == status).count()
    }
}

/// Next free numeric id for a given prefix ("u" or "r")
fn next_numeric_id<'a>(ids: impl Iterator<Item = &'a str>, prefix: char) -> usize {
    ids.filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|n| n.parse::<usize>().ok())
        .max()
        .map_or(1, |max| max + 1)
}

/// Rank skills by occurrence, highest count first, ties by name
fn top_skills<'a>(skills: impl Iterator<Item = &'a String>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for skill in skills {
        *counts.entry(skill.as_str()).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(skill, count)| (skill.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(REPORT_TOP_N);
    ranked
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> Directory {
        let mut dir = Directory::new();
        dir.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
        dir
    }

    fn banned_profile(id: &str, email: &str) -> Profile {
        Profile {
            id: id.to_string(),
            name: "Banned".to_string(),
            email: email.to_string(),
            password: "pw".to_string(),
            location: String::new(),
            availability: String::new(),
            skills_offered: vec!["Python".to_string()],
            skills_wanted: Vec::new(),
            is_public: true,
            is_banned: true,
            is_admin: false,
            feedback: Vec::new(),
        }
    }

    // =========================================================================
    // Session
    // =========================================================================

    #[test]
    fn test_login_success_sets_session() {
        let mut dir = Directory::new();
        let profile = dir.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
        assert_eq!(profile.name, "Sakshi");
        assert!(dir.is_signed_in());
        assert_eq!(dir.current().unwrap().id, "u1");
    }

    #[test]
    fn test_login_email_case_insensitive() {
        let mut dir = Directory::new();
        assert!(dir.login("SAKSHI@swapwise.in", DEMO_PASSWORD).is_ok());
    }

    #[test]
    fn test_login_unknown_account() {
        let mut dir = Directory::new();
        let err = dir.login("nobody@swapwise.in", "pw").unwrap_err();
        assert_eq!(
            err,
            DirectoryError::UnknownAccount("nobody@swapwise.in".to_string())
        );
        assert!(!dir.is_signed_in());
    }

    #[test]
    fn test_login_wrong_password() {
        let mut dir = Directory::new();
        let err = dir.login(DEMO_EMAIL, "wrong").unwrap_err();
        assert_eq!(err, DirectoryError::WrongPassword);
    }

    #[test]
    fn test_login_banned_account_rejected_before_password() {
        let mut dir =
            Directory::with_records(vec![banned_profile("u1", "x@swapwise.in")], Vec::new());
        let err = dir.login("x@swapwise.in", "whatever").unwrap_err();
        assert_eq!(err, DirectoryError::AccountBanned);
    }

    #[test]
    fn test_logout_clears_session() {
        let mut dir = signed_in();
        dir.logout();
        assert!(!dir.is_signed_in());
        assert!(dir.current().is_none());
    }

    #[test]
    fn test_register_then_login() {
        let mut dir = Directory::new();
        let profile = dir.register("Meera", "meera@swapwise.in", "pw123").unwrap();
        assert!(profile.is_public);
        assert!(profile.skills_offered.is_empty());
        assert!(dir.login("meera@swapwise.in", "pw123").is_ok());
    }

    #[test]
    fn test_register_duplicate_email() {
        let mut dir = Directory::new();
        let err = dir.register("Imposter", DEMO_EMAIL, "pw").unwrap_err();
        assert_eq!(err, DirectoryError::DuplicateEmail(DEMO_EMAIL.to_string()));
    }

    #[test]
    fn test_register_requires_fields() {
        let mut dir = Directory::new();
        assert_eq!(
            dir.register("", "a@b.c", "pw").unwrap_err(),
            DirectoryError::MissingField("Name")
        );
        assert_eq!(
            dir.register("A", "  ", "pw").unwrap_err(),
            DirectoryError::MissingField("Email")
        );
        assert_eq!(
            dir.register("A", "a@b.c", "").unwrap_err(),
            DirectoryError::MissingField("Password")
        );
    }

    #[test]
    fn test_registered_ids_keep_counting() {
        let mut dir = Directory::new();
        let first = dir.register("A", "a@swapwise.in", "pw").unwrap();
        let second = dir.register("B", "b@swapwise.in", "pw").unwrap();
        assert_eq!(first.id, "u9");
        assert_eq!(second.id, "u10");
    }

    // =========================================================================
    // Browsing
    // =========================================================================

    #[test]
    fn test_browse_lists_only_public_members() {
        let dir = Directory::new();
        let page = dir.browse(&BrowseQuery::default());
        assert_eq!(page.total_matches, 6);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.profiles.len(), PAGE_SIZE);
        // Private and admin accounts never show up
        assert!(page.profiles.iter().all(|p| p.is_public && !p.is_admin));
    }

    #[test]
    fn test_browse_second_page() {
        let dir = Directory::new();
        let page = dir.browse(&BrowseQuery {
            page: 1,
            ..Default::default()
        });
        assert_eq!(page.page, 1);
        assert_eq!(page.profiles.len(), 2);
    }

    #[test]
    fn test_browse_page_clamps_to_last() {
        let dir = Directory::new();
        let page = dir.browse(&BrowseQuery {
            page: 99,
            ..Default::default()
        });
        assert_eq!(page.page, 1);
        assert_eq!(page.profiles.len(), 2);
    }

    #[test]
    fn test_browse_search_matches_offered_skill() {
        let dir = Directory::new();
        let page = dir.browse(&BrowseQuery {
            search: "cybersecurity".to_string(),
            ..Default::default()
        });
        // Tina offers it, Sakshi wants nothing matching; wanted lists count too
        assert!(page.profiles.iter().any(|p| p.name == "Tina"));
        assert!(page.total_matches >= 1);
    }

    #[test]
    fn test_browse_search_matches_wanted_skill() {
        let dir = Directory::new();
        let page = dir.browse(&BrowseQuery {
            search: "mlops".to_string(),
            ..Default::default()
        });
        assert_eq!(page.total_matches, 1);
        assert_eq!(page.profiles[0].name, "Lakshya");
    }

    #[test]
    fn test_browse_search_matches_name_and_location() {
        let dir = Directory::new();
        let by_name = dir.browse(&BrowseQuery {
            search: "shobhita".to_string(),
            ..Default::default()
        });
        assert_eq!(by_name.total_matches, 1);

        let by_location = dir.browse(&BrowseQuery {
            search: "bangalore".to_string(),
            ..Default::default()
        });
        assert_eq!(by_location.total_matches, 1);
        assert_eq!(by_location.profiles[0].name, "Yashpal");
    }

    #[test]
    fn test_browse_availability_filter() {
        let dir = Directory::new();
        let page = dir.browse(&BrowseQuery {
            availability: Some("Weekdays".to_string()),
            ..Default::default()
        });
        assert_eq!(page.total_matches, 2);
        assert!(page.profiles.iter().all(|p| p.availability.contains("Weekdays")));
    }

    #[test]
    fn test_browse_search_and_filter_combine() {
        let dir = Directory::new();
        let page = dir.browse(&BrowseQuery {
            search: "python".to_string(),
            availability: Some("weekends".to_string()),
            page: 0,
        });
        // Sakshi offers Python on weekends; Lakshya is weekdays-only
        assert_eq!(page.total_matches, 1);
        assert_eq!(page.profiles[0].name, "Sakshi");
    }

    #[test]
    fn test_browse_no_matches_still_one_page() {
        let dir = Directory::new();
        let page = dir.browse(&BrowseQuery {
            search: "no-such-skill".to_string(),
            ..Default::default()
        });
        assert_eq!(page.total_matches, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 0);
        assert!(page.profiles.is_empty());
    }

    #[test]
    fn test_browse_excludes_banned() {
        let mut profiles = seed::sample_profiles();
        profiles[1].is_banned = true; // Yashpal
        let dir = Directory::with_records(profiles, Vec::new());
        let page = dir.browse(&BrowseQuery::default());
        assert_eq!(page.total_matches, 5);
        assert!(page.profiles.iter().all(|p| p.name != "Yashpal"));
    }

    // =========================================================================
    // Swap requests
    // =========================================================================

    #[test]
    fn test_send_request_creates_pending() {
        let mut dir = signed_in();
        let request = dir
            .send_request("u2", "Python", "JavaScript", "Let's trade sessions!")
            .unwrap();
        assert_eq!(request.id, "r5");
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.created_at, "just now");

        let feed = dir.requests_for_current().unwrap();
        assert!(feed.outgoing.iter().any(|r| r.id == "r5"));
        // Newest first
        assert_eq!(feed.outgoing[0].id, "r5");
    }

    #[test]
    fn test_send_request_requires_session() {
        let mut dir = Directory::new();
        let err = dir.send_request("u2", "Python", "JavaScript", "hi").unwrap_err();
        assert_eq!(err, DirectoryError::SignedOut);
    }

    #[test]
    fn test_send_request_unknown_recipient() {
        let mut dir = signed_in();
        let err = dir.send_request("u99", "Python", "JavaScript", "hi").unwrap_err();
        assert_eq!(err, DirectoryError::UnknownProfile("u99".to_string()));
    }

    #[test]
    fn test_send_request_banned_recipient() {
        let mut profiles = seed::sample_profiles();
        profiles[1].is_banned = true; // Yashpal
        let mut dir = Directory::with_records(profiles, Vec::new());
        dir.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
        let err = dir.send_request("u2", "Python", "JavaScript", "hi").unwrap_err();
        assert_eq!(err, DirectoryError::AccountBanned);
    }

    #[test]
    fn test_send_request_to_self_rejected() {
        let mut dir = signed_in();
        let err = dir.send_request("u1", "Python", "Python", "hi").unwrap_err();
        assert_eq!(err, DirectoryError::SelfRequest);
    }

    #[test]
    fn test_send_request_skill_must_be_offered_by_sender() {
        let mut dir = signed_in();
        let err = dir
            .send_request("u2", "Knitting", "JavaScript", "hi")
            .unwrap_err();
        assert_eq!(err, DirectoryError::SkillNotOffered("Knitting".to_string()));
    }

    #[test]
    fn test_send_request_skill_must_be_offered_by_recipient() {
        let mut dir = signed_in();
        let err = dir.send_request("u2", "Python", "Cooking", "hi").unwrap_err();
        assert_eq!(err, DirectoryError::SkillNotAvailable("Cooking".to_string()));
    }

    #[test]
    fn test_send_request_requires_message() {
        let mut dir = signed_in();
        let err = dir
            .send_request("u2", "Python", "JavaScript", "   ")
            .unwrap_err();
        assert_eq!(err, DirectoryError::MissingField("Message"));
    }

    #[test]
    fn test_request_feed_splits_directions() {
        let dir = signed_in();
        let feed = dir.requests_for_current().unwrap();
        // Seeded: Yashpal and Ayan ask Sakshi; Sakshi asked Tina and Lakshya
        assert_eq!(feed.incoming.len(), 2);
        assert_eq!(feed.outgoing.len(), 2);
        assert_eq!(feed.incoming[0].id, "r4"); // 2 hours ago
        assert_eq!(feed.incoming[1].id, "r3"); // 1 day ago
        assert_eq!(feed.outgoing[0].id, "r2"); // 3 days ago, accepted
        assert_eq!(feed.outgoing[1].id, "r1"); // 5 days ago
    }

    #[test]
    fn test_respond_accept() {
        let mut dir = signed_in();
        let request = dir.respond("r4", true).unwrap();
        assert_eq!(request.status, RequestStatus::Accepted);
        let feed = dir.requests_for_current().unwrap();
        assert_eq!(feed.incoming[0].status, RequestStatus::Accepted);
    }

    #[test]
    fn test_respond_reject() {
        let mut dir = signed_in();
        let request = dir.respond("r3", false).unwrap();
        assert_eq!(request.status, RequestStatus::Rejected);
    }

    #[test]
    fn test_respond_only_recipient_may_respond() {
        // Sakshi sent r1, so she can't resolve it herself
        let mut dir = signed_in();
        let err = dir.respond("r1", true).unwrap_err();
        assert_eq!(err, DirectoryError::NotTheRecipient);
    }

    #[test]
    fn test_respond_already_resolved() {
        let mut dir = signed_in();
        dir.respond("r4", true).unwrap();
        let err = dir.respond("r4", false).unwrap_err();
        assert_eq!(err, DirectoryError::AlreadyResolved);
    }

    #[test]
    fn test_respond_unknown_request() {
        let mut dir = signed_in();
        let err = dir.respond("r99", true).unwrap_err();
        assert_eq!(err, DirectoryError::UnknownRequest("r99".to_string()));
    }

    // =========================================================================
    // Feedback
    // =========================================================================

    #[test]
    fn test_leave_feedback_appends_and_updates_rating() {
        let mut dir = signed_in();
        let before = dir.profile("u5").unwrap().review_count();
        dir.leave_feedback("u5", 5, "Great Unity session!").unwrap();
        let after = dir.profile("u5").unwrap();
        assert_eq!(after.review_count(), before + 1);
        let latest = after.feedback.last().unwrap();
        assert_eq!(latest.from_name, "Sakshi");
        assert_eq!(latest.when, "just now");
    }

    #[test]
    fn test_leave_feedback_rating_bounds() {
        let mut dir = signed_in();
        assert_eq!(
            dir.leave_feedback("u5", 0, "x").unwrap_err(),
            DirectoryError::RatingOutOfRange
        );
        assert_eq!(
            dir.leave_feedback("u5", 6, "x").unwrap_err(),
            DirectoryError::RatingOutOfRange
        );
    }

    #[test]
    fn test_leave_feedback_not_on_self() {
        let mut dir = signed_in();
        let err = dir.leave_feedback("u1", 5, "so modest").unwrap_err();
        assert_eq!(err, DirectoryError::SelfFeedback);
    }

    #[test]
    fn test_leave_feedback_requires_session() {
        let mut dir = Directory::new();
        let err = dir.leave_feedback("u5", 5, "x").unwrap_err();
        assert_eq!(err, DirectoryError::SignedOut);
    }

    // =========================================================================
    // Report
    // =========================================================================

    #[test]
    fn test_report_requires_admin() {
        let dir = signed_in();
        assert_eq!(dir.report().unwrap_err(), DirectoryError::AdminOnly);

        let mut dir = Directory::new();
        assert_eq!(dir.report().unwrap_err(), DirectoryError::SignedOut);
        dir.login("admin@swapwise.in", "admin123").unwrap();
        assert!(dir.report().is_ok());
    }

    #[test]
    fn test_report_counts_seeded_records() {
        let mut dir = Directory::new();
        dir.login("admin@swapwise.in", "admin123").unwrap();
        let report = dir.report().unwrap();
        assert_eq!(report.total_members, 7);
        assert_eq!(report.public_members, 6);
        assert_eq!(report.banned_members, 0);
        assert_eq!(report.total_requests, 4);
        assert_eq!(report.pending_requests, 3);
        assert_eq!(report.accepted_requests, 1);
        assert_eq!(report.rejected_requests, 0);
    }

    #[test]
    fn test_report_top_skills_ranked() {
        let mut dir = Directory::new();
        dir.login("admin@swapwise.in", "admin123").unwrap();
        let report = dir.report().unwrap();
        // Python is offered by Sakshi and Lakshya; Kubernetes wanted by three
        assert_eq!(report.top_offered[0], ("Python".to_string(), 2));
        assert_eq!(report.top_wanted[0], ("Kubernetes".to_string(), 3));
        assert!(report.top_offered.len() <= 5);
        assert!(report.top_wanted.len() <= 5);
    }

    // =========================================================================
    // Profile editing
    // =========================================================================

    #[test]
    fn test_update_profile_replaces_fields() {
        let mut dir = signed_in();
        dir.update_profile(&ProfileEdits {
            name: "Sakshi S.".to_string(),
            location: "Navi Mumbai".to_string(),
            availability: "Evenings".to_string(),
            skills_offered: vec!["Python".to_string()],
            skills_wanted: vec!["Go".to_string(), "Rust".to_string()],
        })
        .unwrap();

        let me = dir.current().unwrap();
        assert_eq!(me.name, "Sakshi S.");
        assert_eq!(me.location, "Navi Mumbai");
        assert_eq!(me.skills_offered, vec!["Python".to_string()]);
        assert_eq!(me.skills_wanted.len(), 2);
    }

    #[test]
    fn test_update_profile_rejects_blank_name() {
        let mut dir = signed_in();
        let err = dir
            .update_profile(&ProfileEdits {
                name: "   ".to_string(),
                location: String::new(),
                availability: String::new(),
                skills_offered: Vec::new(),
                skills_wanted: Vec::new(),
            })
            .unwrap_err();
        assert_eq!(err, DirectoryError::MissingField("Name"));
    }

    #[test]
    fn test_update_profile_requires_session() {
        let mut dir = Directory::new();
        let err = dir
            .update_profile(&ProfileEdits {
                name: "X".to_string(),
                location: String::new(),
                availability: String::new(),
                skills_offered: Vec::new(),
                skills_wanted: Vec::new(),
            })
            .unwrap_err();
        assert_eq!(err, DirectoryError::SignedOut);
    }
}
