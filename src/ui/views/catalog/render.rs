//! Rendering for CatalogView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::directory::catalog;
use crate::model::Notification;
use crate::ui::{components, symbols, theme};

use super::{CatalogView, InputMode};

/// Width of the category panel
const CATEGORY_PANEL_WIDTH: u16 = 28;

impl CatalogView {
    /// Render the view with optional notification in title bar
    pub fn render(&mut self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let (main_area, input_area) = match self.input_mode {
            InputMode::Normal => (area, None),
            InputMode::SearchInput => {
                let chunks =
                    Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(area);
                (chunks[0], Some(chunks[1]))
            }
        };

        self.render_catalog(frame, main_area, notification);

        if let Some(input_area) = input_area {
            self.render_input_bar(frame, input_area);
        }
    }

    fn render_catalog(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = self.build_title();

        // Build notification line for title bar (with truncation if needed)
        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let footer = Line::from(Span::styled(
            format!(
                " {} skills in {} categories ",
                catalog::skill_count(),
                catalog::CATEGORIES.len()
            ),
            Style::default().fg(theme::browse_view::PAGE_INFO),
        ));
        let block = components::bordered_block_with_notification(title, notif_line)
            .title_bottom(footer.right_aligned());

        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let panels = Layout::horizontal([
            Constraint::Length(CATEGORY_PANEL_WIDTH),
            Constraint::Min(1),
        ])
        .split(inner);

        self.render_category_list(frame, panels[0]);
        self.render_skills_panel(frame, panels[1]);
    }

    fn build_title(&self) -> Line<'static> {
        let title_text = match &self.search_query {
            Some(query) => format!(" Swapwise - Skill Catalog [Search: {}] ", query),
            None => " Swapwise - Skill Catalog ".to_string(),
        };
        Line::from(title_text).bold().cyan().centered()
    }

    fn render_category_list(&self, frame: &mut Frame, area: Rect) {
        let height = area.height as usize;
        if height == 0 {
            return;
        }
        // Keep the selected category visible
        let offset = self.selected_index.saturating_sub(height.saturating_sub(1));

        let lines: Vec<Line> = catalog::CATEGORIES
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(idx, category)| {
                if idx == self.selected_index {
                    Line::from(vec![
                        Span::styled(
                            format!("{} ", symbols::markers::CURSOR),
                            Style::default().fg(theme::profile_view::FOCUS),
                        ),
                        Span::styled(
                            category.name,
                            Style::default().fg(theme::browse_view::NAME).bold(),
                        ),
                    ])
                } else {
                    Line::from(format!("  {}", category.name))
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_skills_panel(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::LEFT);

        let (heading, skills) = match &self.search_query {
            Some(query) => {
                let matches = self.search_results();
                let heading = Line::from(Span::styled(
                    format!(" Matches for \"{}\" ({}) ", query, matches.len()),
                    Style::default().fg(theme::profile_view::SECTION).bold(),
                ));
                (heading, matches)
            }
            None => {
                let category = self.selected_category();
                let heading = Line::from(Span::styled(
                    format!(" {} ({} skills) ", category.name, category.skills.len()),
                    Style::default().fg(theme::profile_view::SECTION).bold(),
                ));
                (heading, category.skills.to_vec())
            }
        };

        let mut lines = vec![heading, Line::from("")];
        if skills.is_empty() {
            lines.push(Line::from(Span::styled(
                " No skills match.",
                Style::default().fg(theme::browse_view::PAGE_INFO),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!(" {}", skills.join(", ")),
                Style::default().fg(theme::browse_view::OFFERED),
            )));
        }

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
            area,
        );
    }

    fn render_input_bar(&self, frame: &mut Frame, area: Rect) {
        let input_text = format!("Search: {}", self.input_buffer);

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

        let paragraph = Paragraph::new(display_text)
            .block(components::bordered_block(Line::from(" / Search Skills ")));

        frame.render_widget(paragraph, area);

        let cursor_pos = char_count.min(available_width);
        frame.set_cursor_position((area.x + cursor_pos as u16 + 1, area.y + 1));
    }
}
