//! Profile model
//!
//! Represents a member of the skill-exchange directory.

use super::Feedback;

/// A member profile as shown in the directory
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Unique id within the directory (e.g. "u3")
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email, doubles as the sign-in identifier
    pub email: String,
    /// Mock credential checked at sign-in
    pub password: String,
    /// Free-form location ("Mumbai, Maharashtra")
    pub location: String,
    /// Availability description ("Weekends, Evenings")
    pub availability: String,
    /// Skills this member can teach
    pub skills_offered: Vec<String>,
    /// Skills this member wants to learn
    pub skills_wanted: Vec<String>,
    /// Whether the profile appears in the public listing
    pub is_public: bool,
    /// Banned members cannot sign in or receive requests
    pub is_banned: bool,
    /// Admin accounts are hidden from the listing and unlock the report
    pub is_admin: bool,
    /// Feedback left by other members, oldest first
    pub feedback: Vec<Feedback>,
}

impl Profile {
    /// Mean of all feedback ratings, `0.0` when there is none
    pub fn average_rating(&self) -> f64 {
        if self.feedback.is_empty() {
            return 0.0;
        }
        let total: u32 = self.feedback.iter().map(|f| u32::from(f.rating)).sum();
        f64::from(total) / self.feedback.len() as f64
    }

    /// Number of feedback entries
    pub fn review_count(&self) -> usize {
        self.feedback.len()
    }

    /// Rating text for card display: `"4.8 (12 reviews)"` or `"No reviews yet"`
    pub fn rating_summary(&self) -> String {
        match self.review_count() {
            0 => "No reviews yet".to_string(),
            1 => format!("{:.1} (1 review)", self.average_rating()),
            n => format!("{:.1} ({} reviews)", self.average_rating(), n),
        }
    }

    /// Whether this member lists `skill` among their offered skills (exact match)
    pub fn offers(&self, skill: &str) -> bool {
        self.skills_offered.iter().any(|s| s == skill)
    }

    /// Case-insensitive substring match against name, location, and both skill lists
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(needle_lower)
            || self.location.to_lowercase().contains(needle_lower)
            || self
                .skills_offered
                .iter()
                .any(|s| s.to_lowercase().contains(needle_lower))
            || self
                .skills_wanted
                .iter()
                .any(|s| s.to_lowercase().contains(needle_lower))
    }

    /// Case-insensitive substring match against the availability text
    pub fn matches_availability(&self, word_lower: &str) -> bool {
        self.availability.to_lowercase().contains(word_lower)
    }
}
