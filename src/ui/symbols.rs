//! UI symbols (markers, stars, etc.)
//!
//! ## Character Set Policy
//! - **Unicode adopted**: For consistency with the rest of the UI
//! - ASCII fallback (theme feature) to be considered in future
//!
//! ASCII alternatives (for reference):
//! - STAR_FILLED: '*'
//! - STAR_EMPTY: '-'
//! - PENDING/ACCEPTED/REJECTED: 'o' / '+' / 'x'

/// Request status markers in Requests View
pub mod markers {
    /// Pending request marker (●)
    pub const PENDING: char = '●';
    /// Accepted request marker (✓)
    pub const ACCEPTED: char = '✓';
    /// Rejected request marker (✗)
    pub const REJECTED: char = '✗';
    /// Selected row cursor (▶)
    pub const CURSOR: char = '▶';
}

/// Star rating characters
pub mod stars {
    /// Filled star (★)
    pub const FILLED: char = '★';
    /// Empty star (☆)
    pub const EMPTY: char = '☆';
}

/// Empty state labels
pub mod empty {
    /// Label for profiles with no offered skills
    pub const NO_SKILLS: &str = "(no skills listed)";
    /// Label for profiles with no location
    pub const NO_LOCATION: &str = "(location not set)";
}

/// Five-star strip for a rating, filled to the whole-star floor
///
/// A 4.8 rating renders as ★★★★☆, matching the card display.
pub fn star_strip(rating: f32) -> String {
    let filled = (rating.floor() as usize).min(5);
    let mut strip = String::with_capacity(5 * stars::FILLED.len_utf8());
    for i in 0..5 {
        strip.push(if i < filled {
            stars::FILLED
        } else {
            stars::EMPTY
        });
    }
    strip
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_are_single_char() {
        assert!(markers::PENDING.len_utf8() <= 3); // Unicode char
        assert!(markers::ACCEPTED.len_utf8() <= 3);
        assert!(markers::REJECTED.len_utf8() <= 3);
    }

    #[test]
    fn test_empty_labels_not_empty() {
        assert!(!empty::NO_SKILLS.is_empty());
        assert!(!empty::NO_LOCATION.is_empty());
    }

    #[test]
    fn test_star_strip_floors_partial_stars() {
        assert_eq!(star_strip(4.8), "★★★★☆");
        assert_eq!(star_strip(5.0), "★★★★★");
        assert_eq!(star_strip(0.0), "☆☆☆☆☆");
    }

    #[test]
    fn test_star_strip_clamps_above_five() {
        assert_eq!(star_strip(9.9), "★★★★★");
    }
}
