//! Rendering for ProfileView

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::directory::ProfileEdits;
use crate::model::{Notification, Profile};
use crate::ui::{components, symbols, theme};

use super::{EditFocus, ProfileView};

/// Label column width in edit mode ("Availability" plus padding)
const FIELD_LABEL_WIDTH: usize = 14;

impl ProfileView {
    /// Render the view with optional notification in title bar
    pub fn render(&mut self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = self.build_title();

        // Build notification line for title bar (with truncation if needed)
        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);

        let Some(profile) = &self.profile else {
            frame.render_widget(
                components::empty_state("No profile selected.", None).block(block),
                area,
            );
            return;
        };

        let lines = match &self.draft {
            Some(draft) => self.build_edit_lines(draft),
            None => self.build_view_lines(profile),
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn build_title(&self) -> Line<'static> {
        if self.is_editing() {
            return Line::from(" Swapwise - Edit Profile ")
                .bold()
                .yellow()
                .centered();
        }
        let title = if self.is_own {
            " Swapwise - My Profile "
        } else {
            " Swapwise - Profile "
        };
        Line::from(title).bold().cyan().centered()
    }

    /// Read-only profile record: header, skills, feedback
    fn build_view_lines(&self, profile: &Profile) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from("")];

        let mut name_spans = vec![
            Span::raw("  "),
            Span::styled(
                profile.name.clone(),
                Style::default().fg(theme::browse_view::NAME).bold(),
            ),
        ];
        if !profile.is_public {
            name_spans.push(Span::raw("  "));
            name_spans.push(Span::styled(
                "(Private)",
                Style::default().fg(theme::profile_view::PRIVATE_LABEL),
            ));
        }
        lines.push(Line::from(name_spans));

        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                profile.email.clone(),
                Style::default().fg(theme::browse_view::LOCATION),
            ),
        ]));

        let location = if profile.location.is_empty() {
            symbols::empty::NO_LOCATION.to_string()
        } else {
            profile.location.clone()
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(location, Style::default().fg(theme::browse_view::LOCATION)),
            Span::raw("  "),
            Span::styled(
                profile.availability.clone(),
                Style::default().fg(theme::browse_view::AVAILABILITY),
            ),
        ]));

        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                symbols::star_strip(profile.average_rating() as f32),
                Style::default().fg(theme::browse_view::RATING),
            ),
            Span::raw(format!(" {}", profile.rating_summary())),
        ]));

        lines.push(Line::from(""));
        lines.push(skill_list_line("Offers: ", &profile.skills_offered, theme::browse_view::OFFERED));
        lines.push(skill_list_line("Wants: ", &profile.skills_wanted, theme::browse_view::WANTED));
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(
            format!("  Feedback ({}):", profile.feedback.len()),
            Style::default().fg(theme::profile_view::SECTION).bold(),
        )));

        if profile.feedback.is_empty() {
            lines.push(Line::from(Span::styled(
                "    No feedback yet.",
                Style::default().fg(theme::profile_view::TIMESTAMP),
            )));
            return lines;
        }

        // Newest first; j/k scrolls entries off the top
        for entry in profile.feedback.iter().rev().skip(self.feedback_scroll) {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    symbols::star_strip(f32::from(entry.rating)),
                    Style::default().fg(theme::browse_view::RATING),
                ),
                Span::raw(" "),
                Span::styled(
                    entry.from_name.clone(),
                    Style::default().fg(theme::profile_view::FEEDBACK_AUTHOR),
                ),
                Span::raw("  "),
                Span::styled(
                    entry.when.clone(),
                    Style::default().fg(theme::profile_view::TIMESTAMP),
                ),
            ]));
            lines.push(Line::from(format!("     {}", entry.comment)));
        }

        lines
    }

    /// Edit-mode field list with the focus cursor and skill chips
    fn build_edit_lines(&self, draft: &ProfileEdits) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from("")];

        lines.push(self.text_field_line(EditFocus::Name, "Name", &draft.name));
        lines.push(self.text_field_line(EditFocus::Location, "Location", &draft.location));
        lines.push(self.text_field_line(
            EditFocus::Availability,
            "Availability",
            &draft.availability,
        ));
        lines.push(self.chip_field_line(EditFocus::Offered, "Offers", &draft.skills_offered));
        lines.push(self.chip_field_line(EditFocus::Wanted, "Wants", &draft.skills_wanted));

        lines
    }

    fn field_marker(&self, field: EditFocus) -> Span<'static> {
        if self.focus == field {
            Span::styled(
                format!("{} ", symbols::markers::CURSOR),
                Style::default().fg(theme::profile_view::FOCUS),
            )
        } else {
            Span::raw("  ")
        }
    }

    fn field_label(&self, field: EditFocus, label: &str) -> Span<'static> {
        let text = format!("{:<width$}", label, width = FIELD_LABEL_WIDTH);
        if self.focus == field {
            Span::styled(text, Style::default().fg(theme::profile_view::FOCUS).bold())
        } else {
            Span::raw(text)
        }
    }

    fn text_field_line(&self, field: EditFocus, label: &str, value: &str) -> Line<'static> {
        Line::from(vec![
            Span::raw("  "),
            self.field_marker(field),
            self.field_label(field, label),
            Span::raw(value.to_string()),
        ])
    }

    fn chip_field_line(&self, field: EditFocus, label: &str, skills: &[String]) -> Line<'static> {
        let mut spans = vec![
            Span::raw("  "),
            self.field_marker(field),
            self.field_label(field, label),
        ];

        if skills.is_empty() {
            spans.push(Span::styled(
                symbols::empty::NO_SKILLS.to_string(),
                Style::default().fg(theme::profile_view::TIMESTAMP),
            ));
            return Line::from(spans);
        }

        let chip_color = match field {
            EditFocus::Wanted => theme::browse_view::WANTED,
            _ => theme::browse_view::OFFERED,
        };
        for (idx, skill) in skills.iter().enumerate() {
            let mut style = Style::default().fg(chip_color);
            if self.focus == field && idx == self.chip_cursor {
                style = style.bg(theme::profile_view::CHIP_SELECTED_BG).bold();
            }
            spans.push(Span::styled(format!("[{}]", skill), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

fn skill_list_line(
    label: &str,
    skills: &[String],
    color: ratatui::style::Color,
) -> Line<'static> {
    let listed = if skills.is_empty() {
        symbols::empty::NO_SKILLS.to_string()
    } else {
        skills.join(", ")
    };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            label.to_string(),
            Style::default().fg(theme::profile_view::SECTION),
        ),
        Span::styled(listed, Style::default().fg(color)),
    ])
}
