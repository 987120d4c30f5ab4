//! # StatusBar Component
//!
//! Single line at the top of every screen: app name and the latest status
//! message on the left, key hints on the right.
//!
//! Stateless. Its style comes from the active `Palette`, so a dark theme
//! gets light text and a light theme gets dark text.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub struct StatusBar<'a> {
    pub status_message: &'a str,
    pub hints: &'a str,
    pub style: Style,
}

impl<'a> StatusBar<'a> {
    pub fn new(status_message: &'a str, hints: &'a str, style: Style) -> Self {
        Self {
            status_message,
            hints,
            style,
        }
    }

    fn title(&self) -> String {
        if self.status_message.is_empty() {
            " Voyage".to_string()
        } else {
            format!(" Voyage | {}", self.status_message)
        }
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hints_width = (self.hints.width() as u16 + 1).min(area.width);
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);

        frame.render_widget(Paragraph::new(self.title()).style(self.style), left);
        frame.render_widget(
            Paragraph::new(Line::from(self.hints).right_aligned()).style(self.style),
            right,
        );
    }
}
