//! View components
//!
//! Each view represents a screen in the application.

mod browse;
mod catalog;
mod login;
mod profile;
mod report;
mod requests;

pub use browse::{BrowseAction, BrowseView, InputMode};
pub use catalog::CatalogView;
pub use login::{LoginAction, LoginField, LoginView};
pub use profile::{EditFocus, ProfileAction, ProfileView};
pub use report::ReportView;
pub use requests::{RequestAction, RequestCard, RequestTab, RequestsView};
