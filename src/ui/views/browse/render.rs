//! Rendering for BrowseView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{Notification, Profile};
use crate::ui::{components, symbols, theme};

use super::{BrowseView, InputMode};

/// Lines per profile card, including the blank separator
const CARD_LINES: usize = 5;

impl BrowseView {
    /// Render the view with optional notification in title bar
    pub fn render(&mut self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        // Split area for input bar if searching
        let (list_area, input_area) = match self.input_mode {
            InputMode::Normal => (area, None),
            InputMode::SearchInput => {
                let chunks =
                    Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(area);
                (chunks[0], Some(chunks[1]))
            }
        };

        self.render_profile_list(frame, list_area, notification);

        if let Some(input_area) = input_area {
            self.render_input_bar(frame, input_area);
        }
    }

    fn render_profile_list(
        &self,
        frame: &mut Frame,
        area: Rect,
        notification: Option<&Notification>,
    ) {
        let title = self.build_title();

        // Build notification line for title bar (with truncation if needed)
        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line)
            .title_bottom(self.build_page_info().right_aligned());

        if self.profiles.is_empty() {
            frame.render_widget(components::no_professionals_state().block(block), area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize; // borders
        if inner_height == 0 {
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        for (idx, profile) in self.profiles.iter().enumerate() {
            let is_selected = idx == self.selected_index;
            lines.extend(self.build_card_lines(profile, is_selected));
        }
        // Drop the trailing separator
        if lines.last().is_some_and(|l| l.spans.is_empty()) {
            lines.pop();
        }

        let scroll_offset = self.calculate_scroll_offset(inner_height);
        let visible: Vec<Line> = lines
            .into_iter()
            .skip(scroll_offset)
            .take(inner_height)
            .collect();

        frame.render_widget(Paragraph::new(visible).block(block), area);
    }

    fn build_title(&self) -> Line<'static> {
        let title_text = match (&self.search_query, &self.availability_filter) {
            (Some(query), Some(avail)) => {
                format!(" Swapwise - Browse [Search: {}] [{}] ", query, avail)
            }
            (Some(query), None) => format!(" Swapwise - Browse [Search: {}] ", query),
            (None, Some(avail)) => format!(" Swapwise - Browse [{}] ", avail),
            (None, None) => " Swapwise - Browse ".to_string(),
        };
        Line::from(title_text).bold().cyan().centered()
    }

    fn build_page_info(&self) -> Line<'static> {
        let noun = if self.total_matches == 1 {
            "professional"
        } else {
            "professionals"
        };
        Line::from(Span::styled(
            format!(
                " Showing {} of {} {} | Page {}/{} ",
                self.profiles.len(),
                self.total_matches,
                noun,
                self.page + 1,
                self.total_pages.max(1),
            ),
            Style::default().fg(theme::browse_view::PAGE_INFO),
        ))
    }

    /// Keep the selected card fully visible
    fn calculate_scroll_offset(&self, inner_height: usize) -> usize {
        if inner_height == 0 {
            return 0;
        }
        // Last content line of the selected card (separator excluded)
        let end = self.selected_index * CARD_LINES + (CARD_LINES - 2);
        if end >= inner_height {
            end + 1 - inner_height
        } else {
            0
        }
    }

    fn build_card_lines(&self, profile: &Profile, is_selected: bool) -> Vec<Line<'static>> {
        let marker = if is_selected {
            format!("{} ", symbols::markers::CURSOR)
        } else {
            "  ".to_string()
        };

        let name_line = Line::from(vec![
            Span::raw(marker),
            Span::styled(
                profile.name.clone(),
                Style::default().fg(theme::browse_view::NAME).bold(),
            ),
            Span::raw("  "),
            Span::styled(
                symbols::star_strip(profile.average_rating() as f32),
                Style::default().fg(theme::browse_view::RATING),
            ),
            Span::raw(format!(" {}", profile.rating_summary())),
        ]);

        let location = if profile.location.is_empty() {
            symbols::empty::NO_LOCATION.to_string()
        } else {
            profile.location.clone()
        };
        let where_line = Line::from(vec![
            Span::raw("    "),
            Span::styled(location, Style::default().fg(theme::browse_view::LOCATION)),
            Span::raw("  "),
            Span::styled(
                profile.availability.clone(),
                Style::default().fg(theme::browse_view::AVAILABILITY),
            ),
        ]);

        let offers_line = Line::from(vec![
            Span::raw("    Offers: "),
            Span::styled(
                join_skills(&profile.skills_offered, 4),
                Style::default().fg(theme::browse_view::OFFERED),
            ),
        ]);

        let wants_line = Line::from(vec![
            Span::raw("    Wants: "),
            Span::styled(
                join_skills(&profile.skills_wanted, 3),
                Style::default().fg(theme::browse_view::WANTED),
            ),
        ]);

        let mut card = vec![name_line, where_line, offers_line, wants_line];
        if is_selected {
            let bg = Style::default().bg(theme::browse_view::SELECTED_BG);
            card = card.into_iter().map(|line| line.style(bg)).collect();
        }
        card.push(Line::from(""));
        card
    }

    fn render_input_bar(&self, frame: &mut Frame, area: Rect) {
        let Some((prompt, title)) = self.input_mode.input_bar_meta() else {
            return;
        };

        let input_text = format!("{}{}", prompt, self.input_buffer);

        let available_width = area.width.saturating_sub(2) as usize;
        if available_width == 0 {
            return;
        }

        // Truncate display text if too long (show end of input, UTF-8 safe)
        let char_count = input_text.chars().count();
        let display_text = if char_count > available_width {
            let skip = char_count.saturating_sub(available_width.saturating_sub(1));
            format!("…{}", input_text.chars().skip(skip).collect::<String>())
        } else {
            input_text.clone()
        };

        let paragraph =
            Paragraph::new(display_text).block(components::bordered_block(Line::from(title)));

        frame.render_widget(paragraph, area);

        // Show cursor (clamped to available width, character-based)
        let cursor_pos = char_count.min(available_width);
        frame.set_cursor_position((area.x + cursor_pos as u16 + 1, area.y + 1));
    }
}

/// Join up to `limit` skills, folding the rest into a "+N more" tail
fn join_skills(skills: &[String], limit: usize) -> String {
    if skills.is_empty() {
        return symbols::empty::NO_SKILLS.to_string();
    }
    let shown = skills[..skills.len().min(limit)].join(", ");
    if skills.len() > limit {
        format!("{} +{} more", shown, skills.len() - limit)
    } else {
        shown
    }
}
