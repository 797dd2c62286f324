//! Input handling for LoginView

use crossterm::event::{KeyCode, KeyEvent};

use crate::keys;

use super::{LoginAction, LoginField, LoginView};

impl LoginView {
    /// Handle key event and return action
    ///
    /// Printable keys go to the focused field, so globals like `q` do
    /// not apply here; Esc is the only way out besides Ctrl+C.
    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        match key.code {
            k if k == keys::ESC => LoginAction::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus_next();
                LoginAction::None
            }
            KeyCode::Down => {
                self.focus = LoginField::Password;
                LoginAction::None
            }
            KeyCode::Up => {
                self.focus = LoginField::Email;
                LoginAction::None
            }
            k if k == keys::SUBMIT => LoginAction::Submit {
                email: self.email_value().trim().to_string(),
                password: self.password_value(),
            },
            _ => {
                match self.focus {
                    LoginField::Email => {
                        self.email.input(key);
                    }
                    LoginField::Password => {
                        self.password.input(key);
                    }
                }
                LoginAction::None
            }
        }
    }
}
