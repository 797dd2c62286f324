//! Rendering for ReportView

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::directory::PlatformReport;
use crate::model::Notification;
use crate::ui::{components, theme};

/// Left column width when the two top-skill lists sit side by side
const LIST_COLUMN_WIDTH: usize = 34;

impl super::ReportView {
    /// Render the view with optional notification in title bar
    pub fn render(&mut self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = Line::from(" Swapwise - Platform Report ")
            .bold()
            .cyan()
            .centered();

        // Build notification line for title bar (with truncation if needed)
        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);

        let Some(report) = &self.report else {
            frame.render_widget(
                components::empty_state("Report not loaded.", None).block(block),
                area,
            );
            return;
        };

        frame.render_widget(Paragraph::new(build_lines(report)).block(block), area);
    }
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default().fg(theme::profile_view::SECTION).bold(),
    ))
}

fn stat(label: &str, value: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("    {:<10}", label),
            Style::default().fg(theme::browse_view::LOCATION),
        ),
        Span::styled(value.to_string(), Style::default().bold()),
    ])
}

fn build_lines(report: &PlatformReport) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        section("Members"),
        stat("Total", report.total_members),
        stat("Public", report.public_members),
        stat("Banned", report.banned_members),
        Line::from(""),
        section("Swap Requests"),
        stat("Total", report.total_requests),
        stat("Pending", report.pending_requests),
        stat("Accepted", report.accepted_requests),
        stat("Rejected", report.rejected_requests),
        Line::from(""),
    ];

    lines.push(Line::from(vec![
        Span::styled(
            format!("  {:<width$}", "Top Offered Skills", width = LIST_COLUMN_WIDTH),
            Style::default().fg(theme::profile_view::SECTION).bold(),
        ),
        Span::styled(
            "Top Wanted Skills",
            Style::default().fg(theme::profile_view::SECTION).bold(),
        ),
    ]));

    let rows = report.top_offered.len().max(report.top_wanted.len());
    for i in 0..rows {
        let left = match report.top_offered.get(i) {
            Some((skill, count)) => format!("    {}. {} ({})", i + 1, skill, count),
            None => String::new(),
        };
        let right = match report.top_wanted.get(i) {
            Some((skill, count)) => format!("{}. {} ({})", i + 1, skill, count),
            None => String::new(),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<width$}", left, width = LIST_COLUMN_WIDTH),
                Style::default().fg(theme::browse_view::OFFERED),
            ),
            Span::styled(right, Style::default().fg(theme::browse_view::WANTED)),
        ]));
    }
    if rows == 0 {
        lines.push(Line::from(Span::styled(
            "    No skills listed yet.",
            Style::default().fg(theme::browse_view::PAGE_INFO),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> PlatformReport {
        PlatformReport {
            total_members: 7,
            public_members: 6,
            banned_members: 0,
            total_requests: 4,
            pending_requests: 2,
            accepted_requests: 1,
            rejected_requests: 1,
            top_offered: vec![("Python".to_string(), 2), ("Excel".to_string(), 1)],
            top_wanted: vec![("Rust".to_string(), 3)],
        }
    }

    fn rendered_text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_build_lines_covers_all_stats() {
        let text = rendered_text(&build_lines(&sample_report()));
        assert!(text.contains("Members"));
        assert!(text.contains("Swap Requests"));
        assert!(text.contains("Pending"));
        assert!(text.contains("1. Python (2)"));
        assert!(text.contains("2. Excel (1)"));
        assert!(text.contains("1. Rust (3)"));
    }

    #[test]
    fn test_build_lines_pads_uneven_lists() {
        let report = sample_report();
        let lines = build_lines(&report);
        // Two rows of top skills: offered has two entries, wanted one
        let text = rendered_text(&lines);
        assert!(text.contains("Excel"));
        assert!(!text.contains("2. Rust"));
    }

    #[test]
    fn test_build_lines_empty_lists() {
        let mut report = sample_report();
        report.top_offered.clear();
        report.top_wanted.clear();
        let text = rendered_text(&build_lines(&report));
        assert!(text.contains("No skills listed yet."));
    }
}
