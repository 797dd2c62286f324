//! Feedback model

/// A rating left on a profile after a swap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Display name of the member who left the rating
    pub from_name: String,
    /// Star rating, 1 to 5 (validated by the directory)
    pub rating: u8,
    /// Short free-form comment
    pub comment: String,
    /// Relative display time ("2 weeks ago"; "just now" for in-session entries)
    pub when: String,
}

impl Feedback {
    /// Create a feedback entry stamped "just now"
    pub fn new(from_name: impl Into<String>, rating: u8, comment: impl Into<String>) -> Self {
        Self {
            from_name: from_name.into(),
            rating,
            comment: comment.into(),
            when: "just now".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stamps_just_now() {
        let fb = Feedback::new("Sakshi", 5, "Great session");
        assert_eq!(fb.from_name, "Sakshi");
        assert_eq!(fb.rating, 5);
        assert_eq!(fb.when, "just now");
    }
}
