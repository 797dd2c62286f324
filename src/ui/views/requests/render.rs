//! Rendering for RequestsView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::{Notification, RequestStatus};
use crate::ui::{components, symbols, theme};

use super::{RequestCard, RequestTab, RequestsView};

/// Lines per request card, including the blank separator
const CARD_LINES: usize = 5;

impl RequestsView {
    /// Render the view with optional notification in title bar
    pub fn render(&mut self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = Line::from(" Swapwise - Requests ").bold().cyan().centered();

        // Build notification line for title bar (with truncation if needed)
        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        // Stacked sections: tab header on top, card list below
        let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).split(area);

        let mut header = components::header_block(title);
        if let Some(line) = notif_line {
            header = header.title_top(line.left_aligned());
        }
        frame.render_widget(Paragraph::new(self.build_tab_line()).block(header), chunks[0]);

        let list_block = Block::default().borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM);
        let incoming = self.tab == RequestTab::Incoming;
        if self.active_cards().is_empty() {
            frame.render_widget(
                components::no_requests_state(incoming).block(list_block),
                chunks[1],
            );
            return;
        }

        let inner_height = chunks[1].height.saturating_sub(1) as usize; // bottom border
        if inner_height == 0 {
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        for (idx, card) in self.active_cards().iter().enumerate() {
            let is_selected = idx == self.selected_index;
            lines.extend(self.build_card_lines(card, is_selected));
        }
        if lines.last().is_some_and(|l| l.spans.is_empty()) {
            lines.pop();
        }

        let scroll_offset = self.calculate_scroll_offset(inner_height);
        let visible: Vec<Line> = lines
            .into_iter()
            .skip(scroll_offset)
            .take(inner_height)
            .collect();

        frame.render_widget(Paragraph::new(visible).block(list_block), chunks[1]);
    }

    fn build_tab_line(&self) -> Line<'static> {
        let active = Style::default()
            .fg(theme::request_view::TAB_ACTIVE)
            .bold()
            .underlined();
        let inactive = Style::default().fg(theme::request_view::TIMESTAMP);

        let (incoming_style, outgoing_style) = match self.tab {
            RequestTab::Incoming => (active, inactive),
            RequestTab::Outgoing => (inactive, active),
        };

        Line::from(vec![
            Span::raw(" "),
            Span::styled(format!(" Incoming ({}) ", self.incoming.len()), incoming_style),
            Span::raw(" │ "),
            Span::styled(format!(" Outgoing ({}) ", self.outgoing.len()), outgoing_style),
        ])
    }

    /// Keep the selected card fully visible
    fn calculate_scroll_offset(&self, inner_height: usize) -> usize {
        if inner_height == 0 {
            return 0;
        }
        let end = self.selected_index * CARD_LINES + (CARD_LINES - 2);
        if end >= inner_height {
            end + 1 - inner_height
        } else {
            0
        }
    }

    fn build_card_lines(&self, card: &RequestCard, is_selected: bool) -> Vec<Line<'static>> {
        let request = &card.request;

        let marker = if is_selected {
            format!("{} ", symbols::markers::CURSOR)
        } else {
            "  ".to_string()
        };
        let (status_char, status_color) = match request.status {
            RequestStatus::Pending => (symbols::markers::PENDING, theme::request_view::PENDING),
            RequestStatus::Accepted => (symbols::markers::ACCEPTED, theme::request_view::ACCEPTED),
            RequestStatus::Rejected => (symbols::markers::REJECTED, theme::request_view::REJECTED),
        };

        let mut head_spans = vec![
            Span::raw(marker),
            Span::styled(format!("{} ", status_char), Style::default().fg(status_color)),
            Span::styled(
                card.counterpart_name.clone(),
                Style::default().fg(theme::browse_view::NAME).bold(),
            ),
        ];
        if !card.counterpart_location.is_empty() {
            head_spans.push(Span::styled(
                format!("  {}", card.counterpart_location),
                Style::default().fg(theme::browse_view::LOCATION),
            ));
        }
        head_spans.push(Span::raw("  "));
        head_spans.push(Span::styled(
            request.created_at.clone(),
            Style::default().fg(theme::request_view::TIMESTAMP),
        ));
        let head_line = Line::from(head_spans);

        // The offered/requested skills read differently per direction
        let (offer_intro, want_intro) = match self.tab {
            RequestTab::Incoming => ("    They offer ", ", they want "),
            RequestTab::Outgoing => ("    You offer ", ", you want "),
        };
        let trade_line = Line::from(vec![
            Span::raw(offer_intro),
            Span::styled(
                request.offered_skill.clone(),
                Style::default().fg(theme::browse_view::OFFERED),
            ),
            Span::raw(want_intro),
            Span::styled(
                request.requested_skill.clone(),
                Style::default().fg(theme::browse_view::WANTED),
            ),
        ]);

        let message_line = Line::from(Span::styled(
            format!("    \"{}\"", request.message),
            Style::default().fg(theme::request_view::MESSAGE),
        ));

        let detail_line = match request.status {
            RequestStatus::Accepted => Line::from(vec![
                Span::styled(
                    "    Accepted",
                    Style::default().fg(theme::request_view::ACCEPTED),
                ),
                Span::raw("  Contact: "),
                Span::styled(
                    card.counterpart_email.clone(),
                    Style::default().fg(theme::request_view::ACCEPTED),
                ),
            ]),
            status => Line::from(Span::styled(
                format!("    {}", status.label()),
                Style::default().fg(status_color),
            )),
        };

        let mut card_lines = vec![head_line, trade_line, message_line, detail_line];
        if is_selected {
            let bg = Style::default().bg(theme::request_view::SELECTED_BG);
            card_lines = card_lines.into_iter().map(|line| line.style(bg)).collect();
        }
        card_lines.push(Line::from(""));
        card_lines
    }
}
