//! Swapwise - terminal client for a peer-to-peer skill-exchange directory
//!
//! Browse professionals, propose skill swaps, and manage your own
//! profile, all against an in-memory demo directory.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`directory`]: The in-memory member directory
//! - [`keys`]: Key binding definitions
//! - [`model`]: Domain models
//! - [`ui`]: User interface components

pub mod app;
pub mod directory;
pub mod keys;
pub mod model;
pub mod ui;
