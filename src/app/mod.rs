//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and view management
//! - `input`: Key event handling
//! - `render`: UI rendering
//! - `actions`: Directory operations and dialog flows
//! - `refresh`: Re-querying the directory for the current view

mod actions;
mod input;
mod refresh;
mod render;
mod state;

pub use state::{App, View};
