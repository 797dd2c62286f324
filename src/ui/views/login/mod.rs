//! Login View - the sign-in screen
//!
//! Email and password fields backed by `tui_textarea`; credentials are
//! checked against the in-memory directory when submitted.

mod input;
mod render;

use ratatui::style::Style;
use tui_textarea::TextArea;

/// Which login field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// Actions that LoginView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    /// No action needed
    None,
    /// Try to sign in with the entered credentials
    Submit { email: String, password: String },
    /// Quit the application
    Quit,
}

/// Login View state
#[derive(Debug)]
pub struct LoginView {
    /// Email input field
    pub(crate) email: TextArea<'static>,
    /// Password input field (masked)
    pub(crate) password: TextArea<'static>,
    /// Focused field
    pub focus: LoginField,
}

impl Default for LoginView {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginView {
    /// Create a new LoginView with empty fields
    pub fn new() -> Self {
        Self {
            email: email_field(),
            password: password_field(),
            focus: LoginField::Email,
        }
    }

    /// The entered email (fields are single-line)
    pub fn email_value(&self) -> String {
        self.email.lines().join("")
    }

    /// The entered password
    pub fn password_value(&self) -> String {
        self.password.lines().join("")
    }

    /// Move focus to the other field
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    /// Clear the password after a failed attempt
    pub fn clear_password(&mut self) {
        self.password = password_field();
    }

    /// Reset both fields (after sign-out)
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

fn email_field() -> TextArea<'static> {
    let mut field = TextArea::default();
    field.set_cursor_line_style(Style::default());
    field.set_placeholder_text("you@example.com");
    field
}

fn password_field() -> TextArea<'static> {
    let mut field = TextArea::default();
    field.set_cursor_line_style(Style::default());
    field.set_mask_char('•');
    field
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent};

    use crate::keys;

    use super::{LoginAction, LoginField, LoginView};

    fn press_key(view: &mut LoginView, key: KeyCode) -> LoginAction {
        view.handle_key(KeyEvent::from(key))
    }

    fn type_text(view: &mut LoginView, text: &str) {
        for c in text.chars() {
            press_key(view, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_login_view_new() {
        let view = LoginView::new();
        assert_eq!(view.focus, LoginField::Email);
        assert!(view.email_value().is_empty());
        assert!(view.password_value().is_empty());
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut view = LoginView::new();

        type_text(&mut view, "sakshi@swapwise.in");
        assert_eq!(view.email_value(), "sakshi@swapwise.in");
        assert!(view.password_value().is_empty());

        press_key(&mut view, keys::TAB);
        assert_eq!(view.focus, LoginField::Password);

        type_text(&mut view, "password123");
        assert_eq!(view.password_value(), "password123");
        assert_eq!(view.email_value(), "sakshi@swapwise.in");
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut view = LoginView::new();
        press_key(&mut view, keys::TAB);
        assert_eq!(view.focus, LoginField::Password);
        press_key(&mut view, keys::TAB);
        assert_eq!(view.focus, LoginField::Email);
    }

    #[test]
    fn test_arrows_switch_focus() {
        let mut view = LoginView::new();
        press_key(&mut view, KeyCode::Down);
        assert_eq!(view.focus, LoginField::Password);
        press_key(&mut view, KeyCode::Up);
        assert_eq!(view.focus, LoginField::Email);
    }

    #[test]
    fn test_submit_returns_credentials() {
        let mut view = LoginView::new();
        type_text(&mut view, "sakshi@swapwise.in");
        press_key(&mut view, keys::TAB);
        type_text(&mut view, "password123");

        let action = press_key(&mut view, keys::SUBMIT);
        assert_eq!(
            action,
            LoginAction::Submit {
                email: "sakshi@swapwise.in".to_string(),
                password: "password123".to_string(),
            }
        );
    }

    #[test]
    fn test_submit_trims_email_only() {
        let mut view = LoginView::new();
        type_text(&mut view, "  sakshi@swapwise.in  ");
        press_key(&mut view, keys::TAB);
        type_text(&mut view, " secret ");

        let action = press_key(&mut view, keys::SUBMIT);
        // Email is trimmed; passwords keep their spaces
        assert_eq!(
            action,
            LoginAction::Submit {
                email: "sakshi@swapwise.in".to_string(),
                password: " secret ".to_string(),
            }
        );
    }

    #[test]
    fn test_esc_quits() {
        let mut view = LoginView::new();
        assert_eq!(press_key(&mut view, keys::ESC), LoginAction::Quit);
    }

    #[test]
    fn test_q_is_text_not_quit() {
        let mut view = LoginView::new();
        let action = press_key(&mut view, KeyCode::Char('q'));
        assert_eq!(action, LoginAction::None);
        assert_eq!(view.email_value(), "q");
    }

    #[test]
    fn test_clear_password_keeps_email() {
        let mut view = LoginView::new();
        type_text(&mut view, "sakshi@swapwise.in");
        press_key(&mut view, keys::TAB);
        type_text(&mut view, "wrong");

        view.clear_password();
        assert!(view.password_value().is_empty());
        assert_eq!(view.email_value(), "sakshi@swapwise.in");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut view = LoginView::new();
        type_text(&mut view, "someone@swapwise.in");
        press_key(&mut view, keys::TAB);

        view.reset();
        assert!(view.email_value().is_empty());
        assert_eq!(view.focus, LoginField::Email);
    }
}
