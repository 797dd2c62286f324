//! Reusable UI widgets

mod error_banner;
mod help_panel;
mod status_bar;

pub use error_banner::render_error_banner;
pub use help_panel::{build_help_lines, matching_line_indices, render_help_panel};
pub use status_bar::{render_status_hints, status_hints_height};
