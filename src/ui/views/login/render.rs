//! Rendering for LoginView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::directory::{DEMO_EMAIL, DEMO_PASSWORD};
use crate::model::Notification;
use crate::ui::components;

use super::{LoginField, LoginView};

/// Sign-in panel dimensions (outer, including borders)
const PANEL_WIDTH: u16 = 58;
const PANEL_HEIGHT: u16 = 12;

impl LoginView {
    /// Render the view with optional notification in title bar
    pub fn render(&mut self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let panel = centered_area(PANEL_WIDTH, PANEL_HEIGHT, area);

        let title = Line::from(" Swapwise - Sign In ").bold().cyan().centered();
        let title_width = title.width();
        let available_for_notif = panel.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let chunks = Layout::vertical([
            Constraint::Length(1), // tagline
            Constraint::Length(1),
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(1),
            Constraint::Length(1), // demo hint
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(
                Line::from("Trade a skill, learn a skill.")
                    .dark_gray()
                    .centered(),
            ),
            chunks[0],
        );

        self.style_field(LoginField::Email);
        self.style_field(LoginField::Password);
        frame.render_widget(&self.email, chunks[2]);
        frame.render_widget(&self.password, chunks[3]);

        frame.render_widget(
            Paragraph::new(
                Line::from(format!("Demo account: {} / {}", DEMO_EMAIL, DEMO_PASSWORD))
                    .dark_gray()
                    .centered(),
            ),
            chunks[5],
        );
    }

    /// Apply focus-dependent border and cursor styling to a field
    fn style_field(&mut self, field: LoginField) {
        let focused = self.focus == field;
        let (textarea, title) = match field {
            LoginField::Email => (&mut self.email, " Email "),
            LoginField::Password => (&mut self.password, " Password "),
        };

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        );
        textarea.set_cursor_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });
    }
}

fn centered_area(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .split(area);
    let horizontal = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .split(vertical[1]);
    horizontal[1]
}
