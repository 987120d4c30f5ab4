//! # Alert Dialog
//!
//! Modal confirmation drawn over whatever screen is active. Shows a
//! `Confirmation` from the core and a single button that dismisses it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `AlertState` lives in `TuiState` while the dialog is open
//! - `AlertDialog` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::action::Confirmation;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::{AMBER, WHITE};

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub confirmation: Confirmation,
}

/// Events emitted by the alert dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertEvent {
    Dismiss,
}

impl AlertState {
    pub fn new(confirmation: Confirmation) -> Self {
        Self { confirmation }
    }

    /// Dialog box centred in `area`, shrunk to fit small terminals.
    pub fn dialog_area(area: Rect) -> Rect {
        let [vertical] = Layout::vertical([Constraint::Length(DIALOG_HEIGHT.min(area.height))])
            .flex(Flex::Center)
            .areas(area);
        let [dialog] = Layout::horizontal([Constraint::Length(DIALOG_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(vertical);
        dialog
    }

    /// The dismiss button inside the dialog.
    pub fn button_area(area: Rect) -> Rect {
        let dialog = Self::dialog_area(area);
        let width = 8u16.min(dialog.width);
        Rect {
            x: dialog.x + (dialog.width - width) / 2,
            y: (dialog.y + dialog.height).saturating_sub(2),
            width,
            height: 1u16.min(dialog.height),
        }
    }
}

impl EventHandler for AlertState {
    type Event = AlertEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AlertEvent> {
        match event {
            TuiEvent::Activate | TuiEvent::Escape => Some(AlertEvent::Dismiss),
            _ => None,
        }
    }
}

pub struct AlertDialog<'a> {
    state: &'a AlertState,
}

impl<'a> AlertDialog<'a> {
    pub fn new(state: &'a AlertState) -> Self {
        Self { state }
    }
}

impl Component for AlertDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dialog = AlertState::dialog_area(area);
        frame.render_widget(Clear, dialog);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(AMBER))
            .title(Line::from(format!(" {} ", self.state.confirmation.title)).centered())
            .style(Style::default().bg(Color::Rgb(34, 34, 58)).fg(WHITE))
            .padding(Padding::horizontal(1));
        let inner = block.inner(dialog);
        frame.render_widget(block, dialog);

        frame.render_widget(
            Paragraph::new(self.state.confirmation.message)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            Rect {
                y: inner.y + 1,
                height: inner.height.saturating_sub(3),
                ..inner
            },
        );

        frame.render_widget(
            Paragraph::new(self.state.confirmation.button)
                .style(
                    Style::default()
                        .fg(WHITE)
                        .bg(AMBER)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center),
            AlertState::button_area(area),
        );
    }
}
