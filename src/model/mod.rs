//! Data models for Swapwise
//!
//! This module contains UI-independent data structures representing
//! directory concepts: profiles, feedback, and swap requests.

mod feedback;
mod notification;
mod profile;
mod request;

pub use feedback::Feedback;
pub use notification::{Notification, NotificationKind};
pub use profile::Profile;
pub use request::{RequestStatus, SwapRequest};
