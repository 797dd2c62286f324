//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::{App, View};
use crate::keys::{self, DialogHintKind, HintContext};
use crate::model::Notification;
use crate::ui::components::DialogKind;
use crate::ui::views::InputMode;
use crate::ui::widgets::{
    render_error_banner, render_help_panel, render_status_hints, status_hints_height,
};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Clone notification to avoid borrow conflict with &mut self in views
        let notification = self
            .notification
            .as_ref()
            .filter(|n| !n.is_expired())
            .cloned();

        // Render main view (notification is passed to views for title bar display)
        match self.current_view {
            View::Login => self.render_login_view(frame, notification.as_ref()),
            View::Browse => self.render_browse_view(frame, notification.as_ref()),
            View::Profile => self.render_profile_view(frame, notification.as_ref()),
            View::Requests => self.render_requests_view(frame, notification.as_ref()),
            View::Catalog => self.render_catalog_view(frame, notification.as_ref()),
            View::Report => self.render_report_view(frame, notification.as_ref()),
            View::Help => self.render_help_view(frame),
        }

        // Render error banner above status bar (errors are always shown prominently)
        if let Some(ref error) = self.error_message {
            let status_bar_height = self.get_current_status_bar_height(frame.area().width);
            render_error_banner(frame, error, status_bar_height);
        }

        // Render dialog on top of everything
        if let Some(ref dialog) = self.active_dialog {
            dialog.render(frame, frame.area());
        }
    }

    /// Get the status bar height for the current view
    fn get_current_status_bar_height(&self, width: u16) -> u16 {
        match self.current_view {
            View::Help => 0,
            view => {
                let ctx = self.build_hint_context();
                let hints = keys::current_hints(view, self.current_input_mode(), &ctx);
                status_hints_height(&hints, width)
            }
        }
    }

    /// The input mode hints should reflect for the current view
    fn current_input_mode(&self) -> InputMode {
        match self.current_view {
            View::Browse => self.browse_view.input_mode,
            View::Catalog => self.catalog_view.input_mode,
            _ => InputMode::Normal,
        }
    }

    /// Build HintContext from current App state
    fn build_hint_context(&self) -> HintContext {
        HintContext {
            is_admin: self.directory.current().is_some_and(|p| p.is_admin),
            filters_active: self.browse_view.has_filters(),
            own_profile: self.profile_view.is_own,
            editing: self.profile_view.is_editing(),
            pending_incoming_selected: self.requests_view.pending_incoming_selected(),
            dialog: self.dialog_hint_kind(),
        }
    }

    /// Convert active dialog to DialogHintKind
    fn dialog_hint_kind(&self) -> Option<DialogHintKind> {
        self.active_dialog.as_ref().map(|d| match &d.kind {
            DialogKind::Confirm { .. } => DialogHintKind::Confirm,
            DialogKind::Select { .. } => DialogHintKind::Select,
            DialogKind::Input { .. } => DialogHintKind::Input,
        })
    }

    fn render_login_view(&mut self, frame: &mut Frame, notification: Option<&Notification>) {
        let area = frame.area();
        let ctx = self.build_hint_context();
        let hints = keys::current_hints(View::Login, InputMode::Normal, &ctx);
        let sb_height = status_hints_height(&hints, area.width);

        // Reserve space for status bar at bottom
        let main_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.saturating_sub(sb_height),
        };

        self.login_view.render(frame, main_area, notification);
        render_status_hints(frame, &hints);
    }

    fn render_browse_view(&mut self, frame: &mut Frame, notification: Option<&Notification>) {
        let area = frame.area();
        let ctx = self.build_hint_context();
        let hints = keys::current_hints(View::Browse, self.browse_view.input_mode, &ctx);
        let sb_height = status_hints_height(&hints, area.width);

        // Reserve space for status bar at bottom
        let main_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.saturating_sub(sb_height),
        };

        self.browse_view.render(frame, main_area, notification);
        render_status_hints(frame, &hints);
    }

    fn render_profile_view(&mut self, frame: &mut Frame, notification: Option<&Notification>) {
        let area = frame.area();
        let ctx = self.build_hint_context();
        let hints = keys::current_hints(View::Profile, InputMode::Normal, &ctx);
        let sb_height = status_hints_height(&hints, area.width);

        // Reserve space for status bar at bottom
        let main_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.saturating_sub(sb_height),
        };

        self.profile_view.render(frame, main_area, notification);
        render_status_hints(frame, &hints);
    }

    fn render_requests_view(&mut self, frame: &mut Frame, notification: Option<&Notification>) {
        let area = frame.area();
        let ctx = self.build_hint_context();
        let hints = keys::current_hints(View::Requests, InputMode::Normal, &ctx);
        let sb_height = status_hints_height(&hints, area.width);

        // Reserve space for status bar at bottom
        let main_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.saturating_sub(sb_height),
        };

        self.requests_view.render(frame, main_area, notification);
        render_status_hints(frame, &hints);
    }

    fn render_catalog_view(&mut self, frame: &mut Frame, notification: Option<&Notification>) {
        let area = frame.area();
        let ctx = self.build_hint_context();
        let hints = keys::current_hints(View::Catalog, self.catalog_view.input_mode, &ctx);
        let sb_height = status_hints_height(&hints, area.width);

        // Reserve space for status bar at bottom
        let main_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.saturating_sub(sb_height),
        };

        self.catalog_view.render(frame, main_area, notification);
        render_status_hints(frame, &hints);
    }

    fn render_report_view(&mut self, frame: &mut Frame, notification: Option<&Notification>) {
        let area = frame.area();
        let ctx = self.build_hint_context();
        let hints = keys::current_hints(View::Report, InputMode::Normal, &ctx);
        let sb_height = status_hints_height(&hints, area.width);

        // Reserve space for status bar at bottom
        let main_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.saturating_sub(sb_height),
        };

        self.report_view.render(frame, main_area, notification);
        render_status_hints(frame, &hints);
    }

    fn render_help_view(&self, frame: &mut Frame) {
        let search_query = self.help_search_query.as_deref();
        let search_input = if self.help_search_input {
            Some(self.help_input_buffer.as_str())
        } else {
            None
        };
        render_help_panel(
            frame,
            frame.area(),
            self.help_scroll,
            search_query,
            search_input,
        );
    }
}
