//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for Browse View
pub mod browse_view {
    use super::*;

    /// Professional name color
    pub const NAME: Color = Color::Cyan;
    /// Location color
    pub const LOCATION: Color = Color::DarkGray;
    /// Offered skill chip color
    pub const OFFERED: Color = Color::Green;
    /// Wanted skill chip color
    pub const WANTED: Color = Color::Yellow;
    /// Star rating color
    pub const RATING: Color = Color::Yellow;
    /// Availability label color
    pub const AVAILABILITY: Color = Color::Magenta;
    /// Page indicator color
    pub const PAGE_INFO: Color = Color::DarkGray;
    /// Selected card background
    pub const SELECTED_BG: Color = Color::DarkGray;
}

/// Colors for Profile View
pub mod profile_view {
    use super::*;

    /// Section heading color
    pub const SECTION: Color = Color::Cyan;
    /// Focused field marker color (edit mode)
    pub const FOCUS: Color = Color::Yellow;
    /// Selected skill chip background (edit mode)
    pub const CHIP_SELECTED_BG: Color = Color::DarkGray;
    /// Private profile label color
    pub const PRIVATE_LABEL: Color = Color::Red;
    /// Feedback author color
    pub const FEEDBACK_AUTHOR: Color = Color::Cyan;
    /// Feedback timestamp color
    pub const TIMESTAMP: Color = Color::DarkGray;
}

/// Colors for Requests View
pub mod request_view {
    use super::*;

    /// Pending status color
    pub const PENDING: Color = Color::Yellow;
    /// Accepted status color
    pub const ACCEPTED: Color = Color::Green;
    /// Rejected status color
    pub const REJECTED: Color = Color::Red;
    /// Active tab color
    pub const TAB_ACTIVE: Color = Color::Cyan;
    /// Request message color
    pub const MESSAGE: Color = Color::DarkGray;
    /// Timestamp color
    pub const TIMESTAMP: Color = Color::DarkGray;
    /// Selected row background
    pub const SELECTED_BG: Color = Color::DarkGray;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_view_colors_defined() {
        // Ensure all colors are valid Color variants
        let _ = browse_view::NAME;
        let _ = browse_view::OFFERED;
        let _ = browse_view::RATING;
    }

    #[test]
    fn test_profile_view_colors_defined() {
        let _ = profile_view::SECTION;
        let _ = profile_view::FOCUS;
    }

    #[test]
    fn test_request_view_colors_defined() {
        let _ = request_view::PENDING;
        let _ = request_view::REJECTED;
    }
}
