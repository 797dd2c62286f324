//! Common test utilities for integration and scenario tests.
//!
//! Helpers for driving the full `App` through `on_key_event`, the same
//! entry point the terminal event loop uses.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent};

use swapwise::app::App;
use swapwise::directory::{DEMO_EMAIL, DEMO_PASSWORD};

/// Press a single key with no modifiers
pub fn press(app: &mut App, code: KeyCode) {
    app.on_key_event(KeyEvent::from(code));
}

/// Type a string one character at a time
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Fill in the sign-in form and submit it
pub fn sign_in_as(app: &mut App, email: &str, password: &str) {
    type_text(app, email);
    press(app, KeyCode::Tab);
    type_text(app, password);
    press(app, KeyCode::Enter);
}

/// A fresh app signed in with the demo account (Sakshi, u1)
pub fn signed_in_app() -> App {
    let mut app = App::new();
    sign_in_as(&mut app, DEMO_EMAIL, DEMO_PASSWORD);
    app
}

/// The visible notification text, or empty when none is shown
pub fn notification_text(app: &App) -> String {
    app.notification
        .as_ref()
        .map(|n| n.message.clone())
        .unwrap_or_default()
}
